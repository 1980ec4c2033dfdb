//! Epoch-day equations for the Gregorian and Julian leap cycles.
//!
//! Every calendar in the crate converts through these: the Gregorian pair
//! anchors ISO, International Fixed and the post-cutover British calendar,
//! and the Julian pair anchors the Julian calendar and the British calendar
//! before 1752-09-14. Epoch day 0 is 1970-01-01 (proleptic Gregorian).
//!
//! All divisions floor so the equations hold for negative years.

use crate::consts::{
    DAYS_0000_TO_1970, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_JULIAN_CYCLE, FEBRUARY,
    JULIAN_0001_TO_ISO_1970,
};

/// Days from March 1st to the end of February of a computational year.
const MARCH_TO_JANUARY: i64 = 306;

/// Gregorian leap rule (every fourth year, except centuries not divisible by 400)
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Julian leap rule (every fourth year, without exception)
pub const fn is_julian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0
}

/// Days in a Julian or Gregorian month, given whether the year is a leap year.
pub const fn month_length(month: u8, leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && leap {
        DAYS_IN_MONTH[FEBRUARY as usize] + 1
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Day-of-year of the first day of `month`, minus one.
pub const fn days_before_month(month: u8, leap: bool) -> u16 {
    let mut days = 0;
    let mut m = 1;
    while m < month {
        days += month_length(m, leap) as u16;
        m += 1;
    }
    days
}

/// Splits a day-of-year into month and day-of-month.
pub const fn month_day_from_day_of_year(day_of_year: u16, leap: bool) -> (u8, u8) {
    debug_assert!(day_of_year >= 1);

    let mut month = 1;
    let mut remaining = day_of_year;
    while month < 12 && remaining > month_length(month, leap) as u16 {
        remaining -= month_length(month, leap) as u16;
        month += 1;
    }
    (month, remaining as u8)
}

/// Epoch day of a proleptic Gregorian date.
pub const fn gregorian_to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let mut total = 365 * year;
    total += (year + 3).div_euclid(4) - (year + 99).div_euclid(100) + (year + 399).div_euclid(400);
    total += (367 * m - 362) / 12;
    total += day as i64 - 1;
    if m > 2 {
        total -= 1;
        if !is_gregorian_leap_year(year) {
            total -= 1;
        }
    }
    total - DAYS_0000_TO_1970
}

/// Proleptic Gregorian (year, month, day) of an epoch day.
pub const fn gregorian_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    // Shift to a computational year starting on March 1st so the leap day
    // falls at the end of the year.
    let zero_day = epoch_day + DAYS_0000_TO_1970 - 60;
    let cycles = zero_day.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_cycle = zero_day.rem_euclid(DAYS_PER_GREGORIAN_CYCLE);

    let mut year_of_cycle = (400 * day_of_cycle + 591) / DAYS_PER_GREGORIAN_CYCLE;
    let mut day_of_year = day_of_cycle - days_before_computational_year(year_of_cycle);
    if day_of_year < 0 {
        year_of_cycle -= 1;
        day_of_year = day_of_cycle - days_before_computational_year(year_of_cycle);
    }

    let march_month = (day_of_year * 5 + 2) / 153;
    let month = (march_month + 2) % 12 + 1;
    let day = day_of_year - (march_month * MARCH_TO_JANUARY + 5) / 10 + 1;
    let year = cycles * 400 + year_of_cycle + march_month / 10;
    (year, month as u8, day as u8)
}

const fn days_before_computational_year(year: i64) -> i64 {
    365 * year + year / 4 - year / 100 + year / 400
}

/// Epoch day of January 1st of a proleptic Gregorian year.
pub const fn gregorian_year_start(year: i64) -> i64 {
    gregorian_to_epoch_day(year, 1, 1)
}

/// Epoch day of a proleptic Julian date.
pub const fn julian_to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let day_of_year = days_before_month(month, is_julian_leap_year(year)) as i64 + day as i64;
    julian_year_start(year) + day_of_year - 1
}

/// Epoch day of January 1st of a proleptic Julian year.
pub const fn julian_year_start(year: i64) -> i64 {
    (year - 1) * 365 + (year - 1).div_euclid(4) - JULIAN_0001_TO_ISO_1970
}

/// Proleptic Julian (year, day-of-year) of an epoch day.
pub const fn julian_year_day_from_epoch_day(epoch_day: i64) -> (i64, u16) {
    // Counting from Julian 0001-01-01 puts the leap year at the end of each cycle.
    let julian_day = epoch_day + JULIAN_0001_TO_ISO_1970;
    let cycle = julian_day.div_euclid(DAYS_PER_JULIAN_CYCLE);
    let day_of_cycle = julian_day.rem_euclid(DAYS_PER_JULIAN_CYCLE);
    if day_of_cycle == DAYS_PER_JULIAN_CYCLE - 1 {
        return (cycle * 4 + 4, 366);
    }
    (
        cycle * 4 + day_of_cycle / 365 + 1,
        (day_of_cycle % 365 + 1) as u16,
    )
}

/// Proleptic Julian (year, month, day) of an epoch day.
pub const fn julian_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let (year, day_of_year) = julian_year_day_from_epoch_day(epoch_day);
    let (month, day) = month_day_from_day_of_year(day_of_year, is_julian_leap_year(year));
    (year, month, day)
}

/// Day of week, Monday = 1 to Sunday = 7, of an epoch day.
pub const fn iso_day_of_week(epoch_day: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    ((epoch_day + 3).rem_euclid(7) + 1) as u8
}
