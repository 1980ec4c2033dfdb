//! The proleptic Gregorian reference calendar.
//!
//! Every other calendar in the crate converts to and from this one through
//! the shared epoch day.

use std::fmt;
use std::str::FromStr;

use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{DATE_SEPARATOR, ISO_MAX_YEAR, ISO_MIN_YEAR};
use crate::date::parse_digits;
use crate::equations::{
    days_before_month, gregorian_from_epoch_day, gregorian_to_epoch_day, gregorian_year_start,
    is_gregorian_leap_year, month_length,
};
use crate::era::IsoEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// The ISO calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoChronology;

impl IsoChronology {
    /// Singleton instance of the ISO chronology
    pub const INSTANCE: Self = Self;
}

impl Chronology for IsoChronology {
    type Date = IsoDate;
    type Era = IsoEra;

    const ID: &'static str = "ISO";
    const MONTHS_IN_YEAR: u8 = 12;
    const MIN_YEAR: i32 = ISO_MIN_YEAR;
    const MAX_YEAR: i32 = ISO_MAX_YEAR;
    const MIN_EPOCH_DAY: i64 = gregorian_to_epoch_day(ISO_MIN_YEAR as i64, 1, 1);
    const MAX_EPOCH_DAY: i64 = gregorian_to_epoch_day(ISO_MAX_YEAR as i64, 12, 31);

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_gregorian_leap_year(proleptic_year)
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

    fn eras(&self) -> &'static [IsoEra] {
        &[IsoEra::BCE, IsoEra::CE]
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<IsoChronology>(i64::from(year))?;
        let month = check_month::<IsoChronology>(month)?;
        IsoChronology
            .range(Field::DayOfMonth)?
            .check_valid_value(i64::from(day), Field::DayOfMonth)?;
        let leap = is_gregorian_leap_year(i64::from(year));
        if day > month_length(month, leap) {
            return Err(CalendarError::invalid_date(format!(
                "day {day} of month {month} in ISO year {year}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    pub fn from_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        let epoch_day = check_epoch_day::<IsoChronology>(epoch_day)?;
        let (year, month, day) = gregorian_from_epoch_day(epoch_day);
        Ok(Self {
            year: check_year::<IsoChronology>(year)?,
            month,
            day,
        })
    }

    /// Converts a date of any calendar to ISO.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    pub fn from_temporal(temporal: &impl EpochDay) -> CalendarResult<Self> {
        Self::from_epoch_day(temporal.to_epoch_day())
    }
}

impl EpochDay for IsoDate {
    fn to_epoch_day(&self) -> i64 {
        gregorian_to_epoch_day(i64::from(self.year), self.month, self.day)
    }
}

impl CalendarDate for IsoDate {
    type Chrono = IsoChronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = check_year::<IsoChronology>(i64::from(proleptic_year))?;
        let length = if is_gregorian_leap_year(i64::from(year)) { 366 } else { 365 };
        ValueRange::of(1, length).check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        Self::from_epoch_day(gregorian_year_start(i64::from(year)) + i64::from(day_of_year) - 1)
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<IsoChronology>(i64::from(proleptic_year))?;
        let month = check_month::<IsoChronology>(month)?;
        let length = month_length(month, is_gregorian_leap_year(i64::from(year)));
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

impl DateAdjuster for IsoDate {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for IsoDate {
    /// Formats as `yyyy-MM-dd`, with a sign for years outside `0000..=9999`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year;
        if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else if year > 9999 {
            write!(f, "+{year}")?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(
            f,
            "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.month, self.day
        )
    }
}

impl FromStr for IsoDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat(s.to_owned());

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let mut parts = unsigned.split(DATE_SEPARATOR);
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if year.len() < 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = parse_digits(year).ok_or_else(invalid)?;
        let month = parse_digits(month).ok_or_else(invalid)?;
        let day = parse_digits(day).ok_or_else(invalid)?;
        Self::of(if negative { -year } else { year }, month, day)
    }
}

impl serde::Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoDate {
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
    use crate::types::Unit;

    #[test]
    fn test_of_validation() {
        assert!(IsoDate::of(2012, 2, 29).is_ok());
        assert!(matches!(
            IsoDate::of(2013, 2, 29),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(matches!(
            IsoDate::of(2013, 13, 1),
            Err(CalendarError::InvalidFieldValue {
                field: Field::MonthOfYear,
                ..
            })
        ));
        assert!(IsoDate::of(2013, 1, 0).is_err());
        assert!(IsoDate::of(ISO_MAX_YEAR, 12, 31).is_ok());
    }

    #[test]
    fn test_epoch_day() {
        assert_eq!(IsoDate::of(1970, 1, 1).unwrap().to_epoch_day(), 0);
        assert_eq!(IsoDate::from_epoch_day(-1).unwrap(), IsoDate::of(1969, 12, 31).unwrap());
        assert!(IsoDate::from_epoch_day(IsoChronology::MAX_EPOCH_DAY + 1).is_err());
        assert!(IsoDate::from_epoch_day(IsoChronology::MIN_EPOCH_DAY).is_ok());
    }

    #[test]
    fn test_year_day() {
        let date = IsoChronology::INSTANCE.date_year_day(2012, 60).unwrap();
        assert_eq!(date, IsoDate::of(2012, 2, 29).unwrap());
        assert_eq!(date.day_of_year(), 60);
        assert!(IsoChronology::INSTANCE.date_year_day(2013, 366).is_err());
    }

    #[test]
    fn test_display_cases() {
        struct TestCase {
            date:        (i32, u8, u8),
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2012, 6, 23),
                expected:    "2012-06-23",
                description: "four digit year",
            },
            TestCase {
                date:        (5, 1, 2),
                expected:    "0005-01-02",
                description: "padded year",
            },
            TestCase {
                date:        (-1, 12, 31),
                expected:    "-0001-12-31",
                description: "negative year",
            },
            TestCase {
                date:        (12_345, 3, 4),
                expected:    "+12345-03-04",
                description: "five digit year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let date = IsoDate::of(y, m, d).unwrap();
            assert_eq!(date.to_string(), case.expected, "{}", case.description);
            assert_eq!(
                case.expected.parse::<IsoDate>().unwrap(),
                date,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("2012-6-23".parse::<IsoDate>().is_err());
        assert!("2012/06/23".parse::<IsoDate>().is_err());
        assert!("12-06-23".parse::<IsoDate>().is_err());
        assert!("2013-02-29".parse::<IsoDate>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let date = IsoDate::of(2012, 1, 31).unwrap();
        assert_eq!(date.plus(1, Unit::Months).unwrap(), IsoDate::of(2012, 2, 29).unwrap());
        assert_eq!(date.plus(1, Unit::Centuries).unwrap(), IsoDate::of(2112, 1, 31).unwrap());
        assert_eq!(date.plus(1, Unit::Eras), Err(CalendarError::InvalidFieldValue {
            field: Field::Era,
            value: 2,
            range: ValueRange::of(0, 1),
        }));
        assert_eq!(date.minus(1, Unit::Eras).unwrap(), IsoDate::of(-2011, 1, 31).unwrap());
    }

    #[test]
    fn test_serde() {
        let date = IsoDate::of(1970, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1970-01-01""#);
        let parsed: IsoDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
