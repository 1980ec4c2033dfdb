//! Rules shared by the Symmetry010 and Symmetry454 calendars.
//!
//! Both calendars have 364-day years of four identical 91-day quarters, and
//! both start every year on a Monday close to the Gregorian January 1st. 52
//! of every 293 years are leap years that append a seven-day leap week to
//! December. The calendars differ only in the month lengths of a quarter.

use crate::consts::{
    DAYS_0001_TO_1970, DAYS_IN_WEEK, DECEMBER, SYMMETRY_CYCLE_OFFSET, SYMMETRY_CYCLE_YEARS,
    SYMMETRY_DAYS_IN_LEAP_YEAR, SYMMETRY_DAYS_IN_YEAR, SYMMETRY_DAYS_PER_CYCLE,
    SYMMETRY_LEAP_YEARS_PER_CYCLE,
};

/// Days in one quarter
const DAYS_IN_QUARTER: u16 = SYMMETRY_DAYS_IN_YEAR / 4;
/// Months in one quarter
const MONTHS_IN_QUARTER: u8 = 3;
/// Aligned weeks in every year, the leap week excluded
pub(crate) const WEEKS_IN_YEAR: u16 = SYMMETRY_DAYS_IN_YEAR / DAYS_IN_WEEK as u16;

/// Returns true if the Symmetry year holds a leap week.
pub(crate) const fn is_symmetry_leap_year(year: i64) -> bool {
    (SYMMETRY_LEAP_YEARS_PER_CYCLE * year + SYMMETRY_CYCLE_OFFSET).rem_euclid(SYMMETRY_CYCLE_YEARS)
        < SYMMETRY_LEAP_YEARS_PER_CYCLE
}

/// Number of leap years from year 1 up to, not including, `year`.
const fn leap_years_before(year: i64) -> i64 {
    (SYMMETRY_LEAP_YEARS_PER_CYCLE * (year - 1) + SYMMETRY_CYCLE_OFFSET)
        .div_euclid(SYMMETRY_CYCLE_YEARS)
}

/// Epoch day of the first day of a Symmetry year.
///
/// Year 1 starts on 0001-01-01 ISO, a Monday.
pub(crate) const fn symmetry_year_start(year: i64) -> i64 {
    (year - 1) * SYMMETRY_DAYS_IN_YEAR as i64 + leap_years_before(year) * DAYS_IN_WEEK as i64
        - DAYS_0001_TO_1970
}

/// Symmetry (year, day-of-year) of an epoch day.
pub(crate) const fn symmetry_year_day_from_epoch_day(epoch_day: i64) -> (i64, u16) {
    let days_since_year_one = epoch_day + DAYS_0001_TO_1970;
    // The mean year estimate is at most one year off in either direction.
    let mut year =
        (days_since_year_one * SYMMETRY_CYCLE_YEARS).div_euclid(SYMMETRY_DAYS_PER_CYCLE) + 1;
    while symmetry_year_start(year) > epoch_day {
        year -= 1;
    }
    while symmetry_year_start(year + 1) <= epoch_day {
        year += 1;
    }
    (year, (epoch_day - symmetry_year_start(year) + 1) as u16)
}

/// Days in a Symmetry year.
pub(crate) const fn symmetry_year_length(leap: bool) -> u16 {
    if leap {
        SYMMETRY_DAYS_IN_LEAP_YEAR
    } else {
        SYMMETRY_DAYS_IN_YEAR
    }
}

/// The month lengths of one quarter, repeated four times a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuarterPattern {
    lengths: [u8; MONTHS_IN_QUARTER as usize],
}

impl QuarterPattern {
    pub(crate) const fn new(lengths: [u8; MONTHS_IN_QUARTER as usize]) -> Self {
        debug_assert!(lengths[0] as u16 + lengths[1] as u16 + lengths[2] as u16 == DAYS_IN_QUARTER);
        Self { lengths }
    }

    /// Length of `month` without the leap week.
    pub(crate) const fn regular_length(&self, month: u8) -> u8 {
        self.lengths[((month - 1) % MONTHS_IN_QUARTER) as usize]
    }

    /// Length of `month`, December gaining the leap week in leap years.
    pub(crate) const fn month_length(&self, month: u8, leap: bool) -> u8 {
        if leap && month == DECEMBER {
            self.regular_length(month) + DAYS_IN_WEEK
        } else {
            self.regular_length(month)
        }
    }

    /// Longest month of the calendar, December of a leap year included.
    pub(crate) const fn max_month_length(&self) -> u8 {
        let longest = if self.lengths[1] > self.lengths[2] {
            self.lengths[1]
        } else {
            self.lengths[2]
        };
        let december = self.month_length(DECEMBER, true);
        if longest > december { longest } else { december }
    }

    /// Day-of-year of the first day of `month`, minus one.
    pub(crate) const fn days_before_month(&self, month: u8) -> u16 {
        let quarter = (month - 1) / MONTHS_IN_QUARTER;
        let mut days = quarter as u16 * DAYS_IN_QUARTER;
        let mut position = 0;
        while position < (month - 1) % MONTHS_IN_QUARTER {
            days += self.lengths[position as usize] as u16;
            position += 1;
        }
        days
    }

    /// Splits a day of year into month and day of month.
    ///
    /// Days past the 364th belong to the leap week at the end of December.
    pub(crate) const fn month_day(&self, day_of_year: u16) -> (u8, u8) {
        let zero_based = day_of_year - 1;
        let mut quarter = zero_based / DAYS_IN_QUARTER;
        if quarter > 3 {
            quarter = 3;
        }
        let mut remaining = zero_based - quarter * DAYS_IN_QUARTER;
        let mut position = 0;
        while position < MONTHS_IN_QUARTER - 1 && remaining >= self.lengths[position as usize] as u16 {
            remaining -= self.lengths[position as usize] as u16;
            position += 1;
        }
        (
            quarter as u8 * MONTHS_IN_QUARTER + position + 1,
            (remaining + 1) as u8,
        )
    }

    /// Returns true for the days of the leap week.
    pub(crate) const fn is_leap_week(&self, month: u8, day: u8) -> bool {
        month == DECEMBER && day > self.regular_length(month)
    }

    /// Aligned weeks in `month`, the leap week excluded.
    pub(crate) const fn weeks_in_month(&self, month: u8) -> u8 {
        self.regular_length(month).div_ceil(DAYS_IN_WEEK)
    }
}
