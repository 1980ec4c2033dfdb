use std::fmt;
use std::str::FromStr;

use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{DATE_SEPARATOR, JULIAN_MAX_YEAR, JULIAN_MIN_YEAR};
use crate::date::{parse_date, write_date};
use crate::equations::{
    days_before_month, is_julian_leap_year, julian_from_epoch_day, julian_to_epoch_day,
    julian_year_start, month_length,
};
use crate::era::JulianEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// The proleptic Julian calendar system.
///
/// Every fourth year is a leap year, centuries included. Years before 1 AD
/// are numbered proleptically: 1 BC is year 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JulianChronology;

impl JulianChronology {
    /// Singleton instance of the Julian chronology
    pub const INSTANCE: Self = Self;
}

impl Chronology for JulianChronology {
    type Date = JulianDate;
    type Era = JulianEra;

    const ID: &'static str = "Julian";
    const MONTHS_IN_YEAR: u8 = 12;
    const MIN_YEAR: i32 = JULIAN_MIN_YEAR;
    const MAX_YEAR: i32 = JULIAN_MAX_YEAR;
    const MIN_EPOCH_DAY: i64 = julian_year_start(JULIAN_MIN_YEAR as i64);
    const MAX_EPOCH_DAY: i64 = julian_year_start(JULIAN_MAX_YEAR as i64 + 1) - 1;

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_julian_leap_year(proleptic_year)
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

/// A date in the proleptic Julian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JulianDate {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<JulianChronology>(i64::from(year))?;
        let month = check_month::<JulianChronology>(month)?;
        JulianChronology
            .range(Field::DayOfMonth)?
            .check_valid_value(i64::from(day), Field::DayOfMonth)?;
        if day > month_length(month, is_julian_leap_year(i64::from(year))) {
            return Err(CalendarError::invalid_date(format!(
                "day {day} of month {month} in Julian year {year}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    pub fn from_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        let epoch_day = check_epoch_day::<JulianChronology>(epoch_day)?;
        let (year, month, day) = julian_from_epoch_day(epoch_day);
        Ok(Self {
            year: check_year::<JulianChronology>(year)?,
            month,
            day,
        })
    }

    /// Converts a date of any calendar to Julian.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    pub fn from_temporal(temporal: &impl EpochDay) -> CalendarResult<Self> {
        Self::from_epoch_day(temporal.to_epoch_day())
    }
}

impl EpochDay for JulianDate {
    fn to_epoch_day(&self) -> i64 {
        julian_to_epoch_day(i64::from(self.year), self.month, self.day)
    }
}

impl CalendarDate for JulianDate {
    type Chrono = JulianChronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = i64::from(check_year::<JulianChronology>(i64::from(proleptic_year))?);
        let length = if is_julian_leap_year(year) { 366 } else { 365 };
        ValueRange::of(1, length).check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        Self::from_epoch_day(julian_year_start(year) + i64::from(day_of_year) - 1)
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<JulianChronology>(i64::from(proleptic_year))?;
        let month = check_month::<JulianChronology>(month)?;
        let length = month_length(month, is_julian_leap_year(i64::from(year)));
        #[cfg(feature = "log")]
        if day > length {
            log::debug!("Julian {year}-{month:02}-{day:02} moved back to day {length}");
        }
        Self::of(year, month, day.min(length))
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

    fn day_of_year(&self) -> u16 {
        days_before_month(self.month, self.is_leap_year()) + u16::from(self.day)
    }

    fn length_of_month(&self) -> u8 {
        month_length(self.month, self.is_leap_year())
    }

    fn length_of_year(&self) -> u16 {
        if self.is_leap_year() { 366 } else { 365 }
    }
}

impl DateAdjuster for JulianDate {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, JulianChronology::ID, DATE_SEPARATOR, self)
    }
}

impl FromStr for JulianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date::<JulianChronology>(s, JulianChronology::ID, DATE_SEPARATOR)
    }
}

impl serde::Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
