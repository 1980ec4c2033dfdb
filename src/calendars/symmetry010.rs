//! The Symmetry010 calendar.
//!
//! Every quarter runs 30, 31 and 30 days, so every month starts on a Monday,
//! Wednesday or Friday the same way each year. Leap years end December with
//! a seven-day leap week, days 31 to 37, which sits outside the week fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::symmetry::{
    QuarterPattern, WEEKS_IN_YEAR, is_symmetry_leap_year, symmetry_year_day_from_epoch_day,
    symmetry_year_length, symmetry_year_start,
};
use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_WEEK, FIXED_DATE_SEPARATOR, MONTHS_IN_YEAR, SYMMETRY_DAYS_IN_LEAP_YEAR,
    SYMMETRY_MAX_YEAR, SYMMETRY_MIN_YEAR,
};
use crate::date::{parse_date, write_date};
use crate::era::IsoEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

const PATTERN: QuarterPattern = QuarterPattern::new([30, 31, 30]);

/// Chronology id used by the long rendering
const LONG_ID: &str = "Symmetry010";

/// The Symmetry010 calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Symmetry010Chronology;

impl Symmetry010Chronology {
    /// Singleton instance of the Symmetry010 chronology
    pub const INSTANCE: Self = Self;
}

impl Chronology for Symmetry010Chronology {
    type Date = Symmetry010Date;
    type Era = IsoEra;

    const ID: &'static str = "Sym010";
    const MONTHS_IN_YEAR: u8 = MONTHS_IN_YEAR;
    const MIN_YEAR: i32 = SYMMETRY_MIN_YEAR;
    const MAX_YEAR: i32 = SYMMETRY_MAX_YEAR;
    const MIN_EPOCH_DAY: i64 = symmetry_year_start(SYMMETRY_MIN_YEAR as i64);
    const MAX_EPOCH_DAY: i64 = symmetry_year_start(SYMMETRY_MAX_YEAR as i64 + 1) - 1;

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_symmetry_leap_year(proleptic_year)
    }

    fn range(&self, field: Field) -> CalendarResult<ValueRange> {
        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                Ok(ValueRange::of(0, i64::from(DAYS_IN_WEEK)))
            }
            Field::DayOfMonth => Ok(ValueRange::of(1, i64::from(PATTERN.max_month_length()))),
            Field::DayOfYear => Ok(ValueRange::of(1, i64::from(SYMMETRY_DAYS_IN_LEAP_YEAR))),
            Field::AlignedWeekOfMonth => Ok(ValueRange::of(0, 5)),
            Field::AlignedWeekOfYear => Ok(ValueRange::of(0, i64::from(WEEKS_IN_YEAR))),
            _ => year_based_range(self, field),
        }
    }

    fn eras(&self) -> &'static [IsoEra] {
        &[IsoEra::BCE, IsoEra::CE]
    }
}

/// Rendering styles of a [`Symmetry010Date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry010Style {
    /// `Sym010 CE 2009/12/37`, the `Display` format
    #[default]
    Short,
    /// `Symmetry010 CE 2009-12-37`, the year padded to four digits
    Long,
}

/// A date in the Symmetry010 calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symmetry010Date {
    year: i32,
    month: u8,
    day: u8,
}

fn leap(year: i32) -> bool {
    is_symmetry_leap_year(i64::from(year))
}

impl Symmetry010Date {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// Days 31 to 37 of December exist only in leap years.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<Symmetry010Chronology>(i64::from(year))?;
        let month = check_month::<Symmetry010Chronology>(month)?;
        Symmetry010Chronology
            .range(Field::DayOfMonth)?
            .check_valid_value(i64::from(day), Field::DayOfMonth)?;
        if day > PATTERN.month_length(month, leap(year)) {
            let message = if PATTERN.is_leap_week(month, day) {
                format!("Leap Week as '{year}' is not a leap year")
            } else {
                format!("day {day} does not exist in month {month}")
            };
            return Err(CalendarError::invalid_date(message));
        }
        Ok(Self { year, month, day })
    }

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    pub fn from_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        let epoch_day = check_epoch_day::<Symmetry010Chronology>(epoch_day)?;
        let (year, day_of_year) = symmetry_year_day_from_epoch_day(epoch_day);
        let (month, day) = PATTERN.month_day(day_of_year);
        Ok(Self {
            year: check_year::<Symmetry010Chronology>(year)?,
            month,
            day,
        })
    }

    /// Converts a date of any calendar to Symmetry010.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    pub fn from_temporal(temporal: &impl EpochDay) -> CalendarResult<Self> {
        Self::from_epoch_day(temporal.to_epoch_day())
    }

    /// Returns true for the seven days appended to December in leap years.
    pub const fn is_leap_week(&self) -> bool {
        PATTERN.is_leap_week(self.month, self.day)
    }

    /// Renders the date in the given style.
    ///
    /// ```
    /// use alt_calendars::{Symmetry010Date, Symmetry010Style};
    ///
    /// let date = Symmetry010Date::of(2009, 12, 37).unwrap();
    /// assert_eq!(date.display_with(Symmetry010Style::Long).to_string(), "Symmetry010 CE 2009-12-37");
    /// ```
    pub const fn display_with(&self, style: Symmetry010Style) -> Symmetry010Display {
        Symmetry010Display { date: *self, style }
    }
}

/// A [`Symmetry010Date`] paired with its rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetry010Display {
    date: Symmetry010Date,
    style: Symmetry010Style,
}

impl fmt::Display for Symmetry010Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = &self.date;
        match self.style {
            Symmetry010Style::Short => {
                write_date(f, Symmetry010Chronology::ID, FIXED_DATE_SEPARATOR, date)
            }
            Symmetry010Style::Long => write!(
                f,
                "{LONG_ID} {} {:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
                date.era(),
                date.year_of_era(),
                date.month,
                date.day
            ),
        }
    }
}

impl EpochDay for Symmetry010Date {
    fn to_epoch_day(&self) -> i64 {
        symmetry_year_start(i64::from(self.year)) + i64::from(self.day_of_year()) - 1
    }
}

impl CalendarDate for Symmetry010Date {
    type Chrono = Symmetry010Chronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = check_year::<Symmetry010Chronology>(i64::from(proleptic_year))?;
        ValueRange::of(1, i64::from(symmetry_year_length(leap(year))))
            .check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        let (month, day) = PATTERN.month_day(day_of_year);
        Ok(Self { year, month, day })
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<Symmetry010Chronology>(i64::from(proleptic_year))?;
        let month = check_month::<Symmetry010Chronology>(month)?;
        let length = PATTERN.month_length(month, leap(year));
        #[cfg(feature = "log")]
        if day > length {
            log::debug!("Sym010 {year}/{month:02}/{day:02} moved back to day {length}");
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
        PATTERN.days_before_month(self.month) + u16::from(self.day)
    }

    fn length_of_month(&self) -> u8 {
        PATTERN.month_length(self.month, self.is_leap_year())
    }

    fn length_of_year(&self) -> u16 {
        symmetry_year_length(self.is_leap_year())
    }

    fn is_special_day(&self) -> bool {
        self.is_leap_week()
    }

    fn weeks_in_month(&self) -> u8 {
        PATTERN.weeks_in_month(self.month)
    }

    fn weeks_in_year(&self) -> u16 {
        WEEKS_IN_YEAR
    }
}

impl DateAdjuster for Symmetry010Date {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for Symmetry010Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(Symmetry010Style::Short).fmt(f)
    }
}

impl FromStr for Symmetry010Date {
    type Err = CalendarError;

    /// Parses either rendering style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(LONG_ID) {
            parse_date::<Symmetry010Chronology>(s, LONG_ID, DATE_SEPARATOR)
        } else {
            parse_date::<Symmetry010Chronology>(s, Symmetry010Chronology::ID, FIXED_DATE_SEPARATOR)
        }
    }
}

impl serde::Serialize for Symmetry010Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Symmetry010Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
