//! The British calendar: Julian until 1752-09-02, Gregorian from 1752-09-14.
//!
//! The eleven days 1752-09-03 to 1752-09-13 were never used. They are still
//! accepted as input, read with the Julian rule and land on the Gregorian
//! days 1752-09-14 to 1752-09-24. Dates are always stored by the day they
//! land on, so September 1752 has 19 days and 1752 has 355.

use std::fmt;
use std::str::FromStr;

use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{
    CUTOVER_DAY, CUTOVER_DAYS, CUTOVER_MONTH, CUTOVER_YEAR, DATE_SEPARATOR, JULIAN_MAX_YEAR,
    JULIAN_MIN_YEAR,
};
use crate::date::{parse_date, write_date};
use crate::equations::{
    gregorian_from_epoch_day, gregorian_to_epoch_day, gregorian_year_start, is_gregorian_leap_year,
    is_julian_leap_year, julian_from_epoch_day, julian_to_epoch_day, julian_year_start,
    month_length,
};
use crate::era::JulianEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// Epoch day of the first Gregorian day, 1752-09-14
pub const CUTOVER_EPOCH_DAY: i64 =
    gregorian_to_epoch_day(CUTOVER_YEAR as i64, CUTOVER_MONTH, CUTOVER_DAY);

/// Days of the cutover month that exist: 1, 2 and 14 to 30.
const CUTOVER_MONTH_LENGTH: u8 = 30 - CUTOVER_DAYS;

/// Largest day-of-month value of the cutover month.
const CUTOVER_MONTH_LAST_DAY: u8 = 30;

/// The British cutover calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BritishCutoverChronology;

impl BritishCutoverChronology {
    /// Singleton instance of the British cutover chronology
    pub const INSTANCE: Self = Self;

    /// Returns the epoch day of the first Gregorian day.
    pub const fn cutover(&self) -> i64 {
        CUTOVER_EPOCH_DAY
    }
}

impl Chronology for BritishCutoverChronology {
    type Date = BritishCutoverDate;
    type Era = JulianEra;

    const ID: &'static str = "BritishCutover";
    const MONTHS_IN_YEAR: u8 = 12;
    const MIN_YEAR: i32 = JULIAN_MIN_YEAR;
    const MAX_YEAR: i32 = JULIAN_MAX_YEAR;
    const MIN_EPOCH_DAY: i64 = julian_year_start(JULIAN_MIN_YEAR as i64);
    const MAX_EPOCH_DAY: i64 = gregorian_to_epoch_day(JULIAN_MAX_YEAR as i64, 12, 31);

    /// Julian leap years before 1752, Gregorian leap years from 1752 on.
    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        if proleptic_year < i64::from(CUTOVER_YEAR) {
            is_julian_leap_year(proleptic_year)
        } else {
            is_gregorian_leap_year(proleptic_year)
        }
    }

    fn range(&self, field: Field) -> CalendarResult<ValueRange> {
        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                Ok(ValueRange::of(1, 7))
            }
            Field::DayOfMonth => Ok(ValueRange::of(1, 31)),
            Field::DayOfYear => Ok(ValueRange::of(1, 366)),
            Field::AlignedWeekOfMonth => Ok(ValueRange::of(1, 5)),
            Field::AlignedWeekOfYear => Ok(ValueRange::of(1, 53)),
            _ => year_based_range(self, field),
        }
    }

    fn eras(&self) -> &'static [JulianEra] {
        &[JulianEra::BC, JulianEra::AD]
    }
}

/// A date in the British cutover calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BritishCutoverDate {
    year: i32,
    month: u8,
    day: u8,
}

const fn is_cutover_month(year: i32, month: u8) -> bool {
    year == CUTOVER_YEAR && month == CUTOVER_MONTH
}

/// True if the fields name a day read with the Julian rule.
const fn is_julian_reading(year: i32, month: u8, day: u8) -> bool {
    year < CUTOVER_YEAR
        || (year == CUTOVER_YEAR
            && (month < CUTOVER_MONTH || (month == CUTOVER_MONTH && day < CUTOVER_DAY)))
}

const fn fields_to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
    if is_julian_reading(year, month, day) {
        julian_to_epoch_day(year as i64, month, day)
    } else {
        gregorian_to_epoch_day(year as i64, month, day)
    }
}

/// Epoch day of January 1st, which is Julian up to and including 1752.
const fn year_start(year: i64) -> i64 {
    if year <= CUTOVER_YEAR as i64 {
        julian_year_start(year)
    } else {
        gregorian_year_start(year)
    }
}

fn leap(year: i32) -> bool {
    BritishCutoverChronology.is_leap_year(i64::from(year))
}

fn length_of(year: i32, month: u8) -> u8 {
    if is_cutover_month(year, month) {
        CUTOVER_MONTH_LENGTH
    } else {
        month_length(month, leap(year))
    }
}

impl BritishCutoverDate {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// Days of the cutover gap (1752-09-03 to 1752-09-13) are read as Julian
    /// days and land eleven days later.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<BritishCutoverChronology>(i64::from(year))?;
        let month = check_month::<BritishCutoverChronology>(month)?;
        BritishCutoverChronology
            .range(Field::DayOfMonth)?
            .check_valid_value(i64::from(day), Field::DayOfMonth)?;
        let last_day = if is_cutover_month(year, month) {
            CUTOVER_MONTH_LAST_DAY
        } else {
            month_length(month, leap(year))
        };
        if day > last_day {
            return Err(CalendarError::invalid_date(format!(
                "day {day} of month {month} in British year {year}"
            )));
        }

        let epoch_day = fields_to_epoch_day(year, month, day);
        let date = Self::from_epoch_day(epoch_day)?;
        #[cfg(feature = "log")]
        if date.day != day {
            log::debug!(
                "British cutover gap day {year}-{month:02}-{day:02} read as {}",
                date
            );
        }
        Ok(date)
    }

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    pub fn from_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        let epoch_day = check_epoch_day::<BritishCutoverChronology>(epoch_day)?;
        let (year, month, day) = if epoch_day < CUTOVER_EPOCH_DAY {
            julian_from_epoch_day(epoch_day)
        } else {
            gregorian_from_epoch_day(epoch_day)
        };
        Ok(Self {
            year: check_year::<BritishCutoverChronology>(year)?,
            month,
            day,
        })
    }

    /// Converts a date of any calendar to the British calendar.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    pub fn from_temporal(temporal: &impl EpochDay) -> CalendarResult<Self> {
        Self::from_epoch_day(temporal.to_epoch_day())
    }
}

impl EpochDay for BritishCutoverDate {
    fn to_epoch_day(&self) -> i64 {
        fields_to_epoch_day(self.year, self.month, self.day)
    }
}

impl CalendarDate for BritishCutoverDate {
    type Chrono = BritishCutoverChronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = i64::from(check_year::<BritishCutoverChronology>(i64::from(proleptic_year))?);
        let start = year_start(year);
        let length = year_start(year + 1) - start;
        ValueRange::of(1, length).check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        Self::from_epoch_day(start + i64::from(day_of_year) - 1)
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<BritishCutoverChronology>(i64::from(proleptic_year))?;
        let month = check_month::<BritishCutoverChronology>(month)?;
        let last_day = if is_cutover_month(year, month) {
            CUTOVER_MONTH_LAST_DAY
        } else {
            month_length(month, leap(year))
        };
        #[cfg(feature = "log")]
        if day > last_day {
            log::debug!("British {year}-{month:02}-{day:02} moved back to day {last_day}");
        }
        Self::of(year, month, day.min(last_day))
    }

    fn proleptic_year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Days since January 1st plus one; counts only days that exist.
    fn day_of_year(&self) -> u16 {
        let ordinal = self.to_epoch_day() - year_start(i64::from(self.year)) + 1;
        u16::try_from(ordinal).unwrap_or(u16::MAX)
    }

    fn length_of_month(&self) -> u8 {
        length_of(self.year, self.month)
    }

    fn length_of_year(&self) -> u16 {
        let year = i64::from(self.year);
        u16::try_from(year_start(year + 1) - year_start(year)).unwrap_or(u16::MAX)
    }

    /// Days since the 1st of the month plus one; counts only days that exist.
    fn month_ordinal(&self) -> u16 {
        let first = fields_to_epoch_day(self.year, self.month, 1);
        u16::try_from(self.to_epoch_day() - first + 1).unwrap_or(u16::MAX)
    }

    fn day_of_month_range(&self) -> ValueRange {
        if is_cutover_month(self.year, self.month) {
            ValueRange::of(1, i64::from(CUTOVER_MONTH_LAST_DAY))
        } else {
            ValueRange::of(1, i64::from(self.length_of_month()))
        }
    }
}

impl DateAdjuster for BritishCutoverDate {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for BritishCutoverDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, BritishCutoverChronology::ID, DATE_SEPARATOR, self)
    }
}

impl FromStr for BritishCutoverDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date::<BritishCutoverChronology>(s, BritishCutoverChronology::ID, DATE_SEPARATOR)
    }
}

impl serde::Serialize for BritishCutoverDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BritishCutoverDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
