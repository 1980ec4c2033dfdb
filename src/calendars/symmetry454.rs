//! The Symmetry454 calendar.
//!
//! Every quarter runs four, five and four whole weeks, so every month starts
//! on a Monday. Leap years end December with a seven-day leap week, days 29
//! to 35.

use std::fmt;
use std::str::FromStr;

use super::symmetry::{
    QuarterPattern, WEEKS_IN_YEAR, is_symmetry_leap_year, symmetry_year_day_from_epoch_day,
    symmetry_year_length, symmetry_year_start,
};
use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{
    DAYS_IN_WEEK, FIXED_DATE_SEPARATOR, MONTHS_IN_YEAR, SYMMETRY_DAYS_IN_LEAP_YEAR,
    SYMMETRY_MAX_YEAR, SYMMETRY_MIN_YEAR,
};
use crate::date::{parse_date, write_date};
use crate::era::IsoEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

const PATTERN: QuarterPattern = QuarterPattern::new([28, 35, 28]);

/// The Symmetry454 calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Symmetry454Chronology;

impl Symmetry454Chronology {
    /// Singleton instance of the Symmetry454 chronology
    pub const INSTANCE: Self = Self;
}

impl Chronology for Symmetry454Chronology {
    type Date = Symmetry454Date;
    type Era = IsoEra;

    const ID: &'static str = "Sym454";
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

/// A date in the Symmetry454 calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symmetry454Date {
    year: i32,
    month: u8,
    day: u8,
}

fn leap(year: i32) -> bool {
    is_symmetry_leap_year(i64::from(year))
}

impl Symmetry454Date {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<Symmetry454Chronology>(i64::from(year))?;
        let month = check_month::<Symmetry454Chronology>(month)?;
        Symmetry454Chronology
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
        let epoch_day = check_epoch_day::<Symmetry454Chronology>(epoch_day)?;
        let (year, day_of_year) = symmetry_year_day_from_epoch_day(epoch_day);
        let (month, day) = PATTERN.month_day(day_of_year);
        Ok(Self {
            year: check_year::<Symmetry454Chronology>(year)?,
            month,
            day,
        })
    }

    /// Converts a date of any calendar to Symmetry454.
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
}

impl EpochDay for Symmetry454Date {
    fn to_epoch_day(&self) -> i64 {
        symmetry_year_start(i64::from(self.year)) + i64::from(self.day_of_year()) - 1
    }
}

impl CalendarDate for Symmetry454Date {
    type Chrono = Symmetry454Chronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = check_year::<Symmetry454Chronology>(i64::from(proleptic_year))?;
        ValueRange::of(1, i64::from(symmetry_year_length(leap(year))))
            .check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        let (month, day) = PATTERN.month_day(day_of_year);
        Ok(Self { year, month, day })
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<Symmetry454Chronology>(i64::from(proleptic_year))?;
        let month = check_month::<Symmetry454Chronology>(month)?;
        let length = PATTERN.month_length(month, leap(year));
        #[cfg(feature = "log")]
        if day > length {
            log::debug!("Sym454 {year}/{month:02}/{day:02} moved back to day {length}");
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

impl DateAdjuster for Symmetry454Date {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for Symmetry454Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, Symmetry454Chronology::ID, FIXED_DATE_SEPARATOR, self)
    }
}

impl FromStr for Symmetry454Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date::<Symmetry454Chronology>(s, Symmetry454Chronology::ID, FIXED_DATE_SEPARATOR)
    }
}

impl serde::Serialize for Symmetry454Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Symmetry454Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::IsoDate;
    use crate::types::Unit;

    fn date(year: i32, month: u8, day: u8) -> Symmetry454Date {
        Symmetry454Date::of(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_week() {
        let leap_week = date(1970, 12, 35);
        assert!(leap_week.is_leap_week());
        assert_eq!(leap_week.length_of_month(), 35);
        assert_eq!(
            IsoDate::from_temporal(&leap_week).unwrap(),
            IsoDate::of(1971, 1, 3).unwrap()
        );
        assert!(!date(2014, 2, 35).is_leap_week());
        assert!(matches!(
            Symmetry454Date::of(2014, 12, 29),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(matches!(
            Symmetry454Date::of(2014, 1, 29),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(Symmetry454Date::of(2014, 2, 36).is_err());
    }

    #[test]
    fn test_iso_equivalents() {
        struct TestCase {
            sym:         (i32, u8, u8),
            iso:         (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                sym:         (1970, 1, 4),
                iso:         (1970, 1, 1),
                description: "epoch",
            },
            TestCase {
                sym:         (2012, 6, 20),
                iso:         (2012, 6, 23),
                description: "mid year",
            },
            TestCase {
                sym:         (1970, 12, 35),
                iso:         (1971, 1, 3),
                description: "end of a leap week",
            },
            TestCase {
                sym:         (2016, 1, 1),
                iso:         (2016, 1, 4),
                description: "first day after a leap year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.sym;
            let sym = date(y, m, d);
            let (y, m, d) = case.iso;
            let iso = IsoDate::of(y, m, d).unwrap();
            assert_eq!(IsoDate::from_temporal(&sym).unwrap(), iso, "{}", case.description);
            assert_eq!(Symmetry454Date::from_temporal(&iso).unwrap(), sym, "{}", case.description);
        }
    }

    #[test]
    fn test_every_month_starts_on_monday() {
        for year in [2014, 2015] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                assert_eq!(first.get_long(Field::DayOfWeek), Ok(1), "{first}");
            }
        }
        let lengths: Vec<u8> = (1..=12).map(|month| date(2014, month, 1).length_of_month()).collect();
        assert_eq!(lengths, [28, 35, 28, 28, 35, 28, 28, 35, 28, 28, 35, 28]);
    }

    #[test]
    fn test_week_fields() {
        let long_month_end = date(2014, 2, 35);
        assert_eq!(long_month_end.get_long(Field::DayOfWeek), Ok(7));
        assert_eq!(long_month_end.get_long(Field::AlignedWeekOfMonth), Ok(5));
        assert_eq!(long_month_end.get_long(Field::AlignedWeekOfYear), Ok(9));
        assert_eq!(long_month_end.range(Field::AlignedWeekOfMonth), Ok(ValueRange::of(1, 5)));
        assert_eq!(date(2014, 1, 1).range(Field::AlignedWeekOfMonth), Ok(ValueRange::of(1, 4)));
        assert_eq!(date(2015, 12, 28).get_long(Field::AlignedWeekOfYear), Ok(52));

        let leap_week = date(2015, 12, 29);
        assert_eq!(leap_week.get_long(Field::DayOfWeek), Ok(0));
        assert_eq!(leap_week.range(Field::AlignedWeekOfYear), Ok(ValueRange::EMPTY_WEEK));
        assert!(leap_week.with(Field::DayOfWeek, 3).is_err());
        assert_eq!(leap_week.get_long(Field::DayOfYear), Ok(365));
        assert_eq!(leap_week.range(Field::DayOfYear), Ok(ValueRange::of(1, 371)));
    }

    #[test]
    fn test_with_and_plus() {
        let long_month_end = date(2014, 2, 35);
        assert_eq!(long_month_end.with(Field::MonthOfYear, 3), Ok(date(2014, 3, 28)));
        assert_eq!(long_month_end.plus_months(3), Ok(date(2014, 5, 35)));
        assert_eq!(long_month_end.plus_months(1), Ok(date(2014, 3, 28)));
        assert_eq!(long_month_end.with(Field::DayOfWeek, 1), Ok(date(2014, 2, 29)));
        assert_eq!(long_month_end.with(Field::AlignedWeekOfMonth, 1), Ok(date(2014, 2, 7)));
        assert_eq!(date(2015, 12, 35).plus(1, Unit::Years), Ok(date(2016, 12, 28)));
        assert_eq!(date(2015, 12, 35).plus_days(1), Ok(date(2016, 1, 1)));
        assert!(date(2014, 3, 1).with(Field::AlignedWeekOfMonth, 5).is_err());
    }

    #[test]
    fn test_until() {
        let start = date(2014, 5, 26);
        let end = date(2014, 6, 4);
        assert_eq!(start.until(&end, Unit::Days), Ok(13));
        assert_eq!(start.until(&end, Unit::Months), Ok(0));
        assert_eq!(end.until(&start, Unit::Days), Ok(-13));
        let period = start.until_period(&end).unwrap();
        assert_eq!(period, Symmetry454Chronology::INSTANCE.period(0, 0, 13));
        assert_eq!(end.minus_period(&period), Ok(start));
    }

    #[test]
    fn test_display_and_parse() {
        let leap_week = date(1970, 12, 35);
        assert_eq!(leap_week.to_string(), "Sym454 CE 1970/12/35");
        assert_eq!("Sym454 CE 1970/12/35".parse::<Symmetry454Date>(), Ok(leap_week));
        assert_eq!(date(0, 3, 4).to_string(), "Sym454 BCE 1/03/04");
        assert_eq!("Sym454 BCE 1/03/04".parse::<Symmetry454Date>(), Ok(date(0, 3, 4)));
        assert!("Sym454 CE 1971/12/35".parse::<Symmetry454Date>().is_err());
        assert!("Sym010 CE 1970/12/35".parse::<Symmetry454Date>().is_err());
        let json = serde_json::to_string(&leap_week).unwrap();
        assert_eq!(serde_json::from_str::<Symmetry454Date>(&json).unwrap(), leap_week);
    }
}
