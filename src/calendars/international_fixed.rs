//! The International Fixed calendar.
//!
//! Thirteen months of four weeks each. The 29th of month 13 ("Year Day")
//! ends every year, and in Gregorian leap years the 29th of month 6 ("Leap
//! Day") follows the sixth month. Neither belongs to a week, so the week
//! fields read 0 on them. Every other day of every year falls on the same
//! day of the week.

use std::fmt;
use std::str::FromStr;

use crate::adjust::DateAdjuster;
use crate::chronology::{check_epoch_day, check_month, check_year, year_based_range};
use crate::consts::{
    DAYS_IN_WEEK, FIXED_DATE_SEPARATOR, IFC_DAYS_IN_MONTH, IFC_LEAP_DAY_OF_YEAR, IFC_MAX_YEAR,
    IFC_MIN_YEAR, IFC_MONTHS_IN_YEAR,
};
use crate::date::{narrow, parse_date, write_date};
use crate::equations::{
    gregorian_from_epoch_day, gregorian_to_epoch_day, gregorian_year_start, is_gregorian_leap_year,
};
use crate::era::InternationalFixedEra;
use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// Month holding the leap day
const LEAP_DAY_MONTH: u8 = 6;
/// Day of month of both the leap day and the year day
const SPECIAL_DAY: u8 = IFC_DAYS_IN_MONTH + 1;
/// Aligned weeks in every year
const WEEKS_IN_YEAR: u16 = IFC_MONTHS_IN_YEAR as u16 * WEEKS_IN_MONTH as u16;
/// Aligned weeks in every month
const WEEKS_IN_MONTH: u8 = IFC_DAYS_IN_MONTH / DAYS_IN_WEEK;
/// Day of year of the year day in a common year
const YEAR_DAY_OF_YEAR: u16 = WEEKS_IN_YEAR * DAYS_IN_WEEK as u16 + 1;

/// The International Fixed calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InternationalFixedChronology;

impl InternationalFixedChronology {
    /// Singleton instance of the International Fixed chronology
    pub const INSTANCE: Self = Self;
}

impl Chronology for InternationalFixedChronology {
    type Date = InternationalFixedDate;
    type Era = InternationalFixedEra;

    const ID: &'static str = "Ifc";
    const MONTHS_IN_YEAR: u8 = IFC_MONTHS_IN_YEAR;
    const MIN_YEAR: i32 = IFC_MIN_YEAR;
    const MAX_YEAR: i32 = IFC_MAX_YEAR;
    const MIN_EPOCH_DAY: i64 = gregorian_year_start(IFC_MIN_YEAR as i64);
    const MAX_EPOCH_DAY: i64 = gregorian_to_epoch_day(IFC_MAX_YEAR as i64, 12, 31);

    /// Same leap years as the Gregorian calendar
    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_gregorian_leap_year(proleptic_year)
    }

    fn range(&self, field: Field) -> CalendarResult<ValueRange> {
        match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                Ok(ValueRange::of(0, i64::from(DAYS_IN_WEEK)))
            }
            Field::DayOfMonth => Ok(ValueRange::of(1, i64::from(SPECIAL_DAY))),
            Field::DayOfYear => Ok(ValueRange::of(1, 366)),
            Field::AlignedWeekOfMonth => Ok(ValueRange::of(0, i64::from(WEEKS_IN_MONTH))),
            Field::AlignedWeekOfYear => Ok(ValueRange::of(0, i64::from(WEEKS_IN_YEAR))),
            _ => year_based_range(self, field),
        }
    }

    fn eras(&self) -> &'static [InternationalFixedEra] {
        &[InternationalFixedEra::CE]
    }
}

/// A date in the International Fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternationalFixedDate {
    year: i32,
    month: u8,
    day: u8,
}

fn leap(year: i32) -> bool {
    is_gregorian_leap_year(i64::from(year))
}

const fn month_length(month: u8, leap: bool) -> u8 {
    if month == IFC_MONTHS_IN_YEAR || (month == LEAP_DAY_MONTH && leap) {
        SPECIAL_DAY
    } else {
        IFC_DAYS_IN_MONTH
    }
}

/// Splits a day of year into month and day of month.
const fn month_day(day_of_year: u16, leap: bool) -> (u8, u8) {
    if leap && day_of_year == IFC_LEAP_DAY_OF_YEAR {
        return (LEAP_DAY_MONTH, SPECIAL_DAY);
    }
    let ordinal = if leap && day_of_year > IFC_LEAP_DAY_OF_YEAR {
        day_of_year - 1
    } else {
        day_of_year
    };
    if ordinal == YEAR_DAY_OF_YEAR {
        return (IFC_MONTHS_IN_YEAR, SPECIAL_DAY);
    }
    let days = IFC_DAYS_IN_MONTH as u16;
    (((ordinal - 1) / days + 1) as u8, ((ordinal - 1) % days + 1) as u8)
}

impl InternationalFixedDate {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// Day 29 exists in month 13 of every year and in month 6 of leap years.
    ///
    /// # Errors
    /// Returns an error if any field is out of range or the day does not
    /// exist in the month.
    pub fn of(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<InternationalFixedChronology>(i64::from(year))?;
        let month = check_month::<InternationalFixedChronology>(month)?;
        InternationalFixedChronology
            .range(Field::DayOfMonth)?
            .check_valid_value(i64::from(day), Field::DayOfMonth)?;
        if day > month_length(month, leap(year)) {
            let message = if month == LEAP_DAY_MONTH {
                format!("Leap Day as '{year}' is not a leap year")
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
        let epoch_day = check_epoch_day::<InternationalFixedChronology>(epoch_day)?;
        let (year, _, _) = gregorian_from_epoch_day(epoch_day);
        let day_of_year = u16::try_from(epoch_day - gregorian_year_start(year) + 1)
            .map_err(|_| CalendarError::ArithmeticOverflow("day of year"))?;
        let year = check_year::<InternationalFixedChronology>(year)?;
        let (month, day) = month_day(day_of_year, leap(year));
        Ok(Self { year, month, day })
    }

    /// Converts a date of any calendar to International Fixed.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    pub fn from_temporal(temporal: &impl EpochDay) -> CalendarResult<Self> {
        Self::from_epoch_day(temporal.to_epoch_day())
    }

    /// Returns true for the 29th of month 6 in a leap year.
    pub const fn is_leap_day(&self) -> bool {
        self.month == LEAP_DAY_MONTH && self.day == SPECIAL_DAY
    }

    /// Returns true for the 29th of month 13.
    pub const fn is_year_day(&self) -> bool {
        self.month == IFC_MONTHS_IN_YEAR && self.day == SPECIAL_DAY
    }
}

impl EpochDay for InternationalFixedDate {
    fn to_epoch_day(&self) -> i64 {
        gregorian_year_start(i64::from(self.year)) + i64::from(self.day_of_year()) - 1
    }
}

impl CalendarDate for InternationalFixedDate {
    type Chrono = InternationalFixedChronology;

    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::of(proleptic_year, month, day)
    }

    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self> {
        let year = check_year::<InternationalFixedChronology>(i64::from(proleptic_year))?;
        let length = if leap(year) { 366 } else { 365 };
        ValueRange::of(1, length).check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        let (month, day) = month_day(day_of_year, leap(year));
        Ok(Self { year, month, day })
    }

    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self> {
        Self::from_epoch_day(epoch_day)
    }

    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let year = check_year::<InternationalFixedChronology>(i64::from(proleptic_year))?;
        let month = check_month::<InternationalFixedChronology>(month)?;
        let length = month_length(month, leap(year));
        #[cfg(feature = "log")]
        if day > length {
            log::debug!("Ifc {year}/{month:02}/{day:02} moved back to day {length}");
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
        let after_leap_day = self.month > LEAP_DAY_MONTH && self.is_leap_year();
        u16::from(self.month - 1) * u16::from(IFC_DAYS_IN_MONTH)
            + u16::from(self.day)
            + u16::from(after_leap_day)
    }

    fn length_of_month(&self) -> u8 {
        month_length(self.month, self.is_leap_year())
    }

    fn length_of_year(&self) -> u16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    fn is_special_day(&self) -> bool {
        self.day == SPECIAL_DAY
    }

    /// Every month starts on the first day of the week.
    fn day_of_week(&self) -> u8 {
        (self.day - 1) % DAYS_IN_WEEK + 1
    }

    /// Day of year, not counting the leap day.
    fn year_ordinal(&self) -> u16 {
        let after_leap_day = self.month > LEAP_DAY_MONTH && self.is_leap_year();
        self.day_of_year() - u16::from(after_leap_day)
    }

    /// Weeks never span the leap day, so the week is set on month and day.
    fn with_aligned_week(&self, field: Field, week: i64) -> CalendarResult<Self> {
        let range = self.range(field)?;
        range.check_valid_value(week, field)?;
        if range.min() < 1 {
            return Ok(*self);
        }
        let week: u8 = narrow(week, field, range)?;
        let weekday = (self.day - 1) % DAYS_IN_WEEK;
        let (month, week_of_month) = if field == Field::AlignedWeekOfYear {
            ((week - 1) / WEEKS_IN_MONTH + 1, (week - 1) % WEEKS_IN_MONTH)
        } else {
            (self.month, week - 1)
        };
        Self::resolve_previous_valid(self.year, month, week_of_month * DAYS_IN_WEEK + weekday + 1)
    }

    fn weeks_in_month(&self) -> u8 {
        WEEKS_IN_MONTH
    }

    fn weeks_in_year(&self) -> u16 {
        WEEKS_IN_YEAR
    }
}

impl DateAdjuster for InternationalFixedDate {
    fn adjust_into<D: CalendarDate>(&self, _date: &D) -> CalendarResult<D> {
        D::of_epoch_day(self.to_epoch_day())
    }
}

impl fmt::Display for InternationalFixedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, InternationalFixedChronology::ID, FIXED_DATE_SEPARATOR, self)
    }
}

impl FromStr for InternationalFixedDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date::<InternationalFixedChronology>(
            s,
            InternationalFixedChronology::ID,
            FIXED_DATE_SEPARATOR,
        )
    }
}

impl serde::Serialize for InternationalFixedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for InternationalFixedDate {
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
    use crate::era::JulianEra;
    use crate::types::Unit;

    fn date(year: i32, month: u8, day: u8) -> InternationalFixedDate {
        InternationalFixedDate::of(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_day_rule() {
        assert!(matches!(
            InternationalFixedDate::of(1900, 6, 29),
            Err(CalendarError::InvalidDate(_))
        ));
        let leap_day = date(1904, 6, 29);
        assert_eq!(leap_day.length_of_month(), 29);
        assert!(leap_day.is_leap_day());
        assert_eq!(date(1900, 6, 1).length_of_month(), 28);
        assert!(InternationalFixedDate::of(2012, 5, 29).is_err());
        assert!(InternationalFixedDate::of(2012, 14, 1).is_err());
        assert!(InternationalFixedDate::of(0, 1, 1).is_err());
    }

    #[test]
    fn test_year_day_in_every_year() {
        for year in [1900, 1904, 2000, 2013] {
            let year_day = date(year, 13, 29);
            assert!(year_day.is_year_day());
            assert_eq!(year_day.range(Field::DayOfMonth), Ok(ValueRange::of(1, 29)));
            assert_eq!(year_day.day_of_year(), year_day.length_of_year());
            assert_eq!(year_day.plus_days(1).unwrap(), date(year + 1, 1, 1));
        }
    }

    #[test]
    fn test_iso_equivalents() {
        struct TestCase {
            ifc:         (i32, u8, u8),
            iso:         (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                ifc:         (1970, 1, 1),
                iso:         (1970, 1, 1),
                description: "epoch",
            },
            TestCase {
                ifc:         (2012, 6, 23),
                iso:         (2012, 6, 11),
                description: "before the leap day",
            },
            TestCase {
                ifc:         (2012, 6, 29),
                iso:         (2012, 6, 17),
                description: "leap day",
            },
            TestCase {
                ifc:         (2012, 7, 1),
                iso:         (2012, 6, 18),
                description: "after the leap day",
            },
            TestCase {
                ifc:         (2012, 7, 6),
                iso:         (2012, 6, 23),
                description: "shifted by the leap day",
            },
            TestCase {
                ifc:         (2012, 13, 29),
                iso:         (2012, 12, 31),
                description: "year day",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ifc;
            let ifc = date(y, m, d);
            let (y, m, d) = case.iso;
            let iso = IsoDate::of(y, m, d).unwrap();
            assert_eq!(IsoDate::from_temporal(&ifc).unwrap(), iso, "{}", case.description);
            assert_eq!(
                InternationalFixedDate::from_temporal(&iso).unwrap(),
                ifc,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_special_days_are_outside_the_week() {
        for special in [date(2012, 6, 29), date(2012, 13, 29)] {
            for field in [
                Field::DayOfWeek,
                Field::AlignedDayOfWeekInMonth,
                Field::AlignedDayOfWeekInYear,
                Field::AlignedWeekOfMonth,
                Field::AlignedWeekOfYear,
            ] {
                assert_eq!(special.get_long(field), Ok(0), "{special} {field}");
                assert_eq!(special.range(field), Ok(ValueRange::EMPTY_WEEK), "{special} {field}");
                assert_eq!(special.with(field, 0), Ok(special));
                assert!(special.with(field, 1).is_err());
            }
        }
    }

    #[test]
    fn test_week_fields_on_regular_days() {
        let date = date(2012, 7, 1);
        assert_eq!(date.get_long(Field::DayOfWeek), Ok(1));
        assert_eq!(date.get_long(Field::AlignedWeekOfYear), Ok(25));
        assert_eq!(date.get_long(Field::AlignedDayOfWeekInYear), Ok(1));
        assert_eq!(date.range(Field::AlignedWeekOfMonth), Ok(ValueRange::of(1, 4)));
        assert_eq!(date.range(Field::AlignedWeekOfYear), Ok(ValueRange::of(1, 52)));
        assert!(date.with(Field::DayOfWeek, 0).is_err());
        assert_eq!(date.with(Field::DayOfWeek, 7), Ok(self::date(2012, 7, 7)));
        assert_eq!(self::date(2012, 13, 28).get_long(Field::AlignedWeekOfYear), Ok(52));
    }

    #[test]
    fn test_week_fields_across_leap_day() {
        struct TestCase {
            start:       (i32, u8, u8),
            field:       Field,
            value:       i64,
            expected:    (i32, u8, u8),
            description: &'static str,
        }

        let test_cases = [
            TestCase {
                start:       (2012, 7, 7),
                field:       Field::AlignedWeekOfYear,
                value:       24,
                expected:    (2012, 6, 28),
                description: "back over the leap day",
            },
            TestCase {
                start:       (2012, 6, 28),
                field:       Field::AlignedWeekOfYear,
                value:       25,
                expected:    (2012, 7, 7),
                description: "forward over the leap day",
            },
            TestCase {
                start:       (2012, 6, 3),
                field:       Field::AlignedWeekOfYear,
                value:       52,
                expected:    (2012, 13, 24),
                description: "to the last week before year day",
            },
            TestCase {
                start:       (2012, 13, 1),
                field:       Field::AlignedWeekOfYear,
                value:       1,
                expected:    (2012, 1, 1),
                description: "to the first week",
            },
            TestCase {
                start:       (2012, 7, 7),
                field:       Field::AlignedWeekOfMonth,
                value:       3,
                expected:    (2012, 7, 21),
                description: "within a month after the leap day",
            },
            TestCase {
                start:       (2012, 6, 26),
                field:       Field::AlignedWeekOfMonth,
                value:       1,
                expected:    (2012, 6, 5),
                description: "within the leap day month",
            },
        ];

        for case in test_cases {
            let start = date(case.start.0, case.start.1, case.start.2);
            let result = start.with(case.field, case.value).unwrap();
            assert_eq!(
                result,
                date(case.expected.0, case.expected.1, case.expected.2),
                "{}",
                case.description
            );
            assert_eq!(result.get_long(case.field), Ok(case.value), "{}", case.description);
            assert_eq!(result.day_of_week(), start.day_of_week(), "{}", case.description);
        }

        for year in [2012, 2013] {
            let start = date(year, 7, 7);
            for week in 1..=52 {
                let moved = start.with(Field::AlignedWeekOfYear, week).unwrap();
                assert!(!moved.is_special_day(), "{moved}");
                assert_eq!(moved.get_long(Field::AlignedWeekOfYear), Ok(week), "{moved}");
                assert_eq!(moved.get_long(Field::DayOfWeek), Ok(7), "{moved}");
            }
        }
    }

    #[test]
    fn test_with_clamps_to_month_end() {
        let leap_day = date(2012, 6, 29);
        assert_eq!(leap_day.with(Field::Year, 2013), Ok(date(2013, 6, 28)));
        assert_eq!(leap_day.with(Field::MonthOfYear, 13), Ok(date(2012, 13, 29)));
        assert_eq!(leap_day.with(Field::MonthOfYear, 5), Ok(date(2012, 5, 28)));
        assert_eq!(date(2012, 5, 2).with(Field::DayOfMonth, 29), Ok(date(2012, 5, 28)));
        assert!(date(2012, 5, 2).with(Field::DayOfMonth, 30).is_err());
        assert!(date(2012, 5, 2).with(Field::MonthOfYear, 14).is_err());
        assert!(date(2012, 5, 2).with(Field::Era, 0).is_err());
    }

    #[test]
    fn test_plus_months_in_thirteen_month_years() {
        let start = date(2012, 13, 15);
        assert_eq!(start.plus(1, Unit::Months), Ok(date(2013, 1, 15)));
        assert_eq!(date(2012, 1, 1).plus(13, Unit::Months), Ok(date(2013, 1, 1)));
        assert_eq!(date(2012, 13, 29).plus(1, Unit::Months), Ok(date(2013, 1, 28)));
        assert_eq!(date(2012, 1, 1).until(&date(2013, 1, 1), Unit::Months), Ok(13));
        assert_eq!(date(2012, 1, 1).until(&date(2013, 1, 1), Unit::Years), Ok(1));
    }

    #[test]
    fn test_period_across_leap_day() {
        let start = date(2012, 6, 29);
        let end = date(2012, 7, 28);
        let period = start.until_period(&end).unwrap();
        assert_eq!(start.plus_period(&period).unwrap(), end);
        assert_eq!(period, InternationalFixedChronology::INSTANCE.period(0, 1, 0));

        let start = date(2011, 13, 29);
        let end = date(2012, 6, 29);
        let period = start.until_period(&end).unwrap();
        assert_eq!(period, InternationalFixedChronology::INSTANCE.period(0, 6, 0));

        let start = date(2012, 5, 10);
        let end = date(2012, 7, 3);
        let period = start.until_period(&end).unwrap();
        assert_eq!(period, InternationalFixedChronology::INSTANCE.period(0, 1, 22));
        assert_eq!(start.plus_period(&period).unwrap(), end);
        assert_eq!(start.plus_period(&period).unwrap(), end);
    }

    #[test]
    fn test_era_handling() {
        let chronology = InternationalFixedChronology::INSTANCE;
        assert_eq!(chronology.eras(), &[InternationalFixedEra::CE]);
        assert!(chronology.era_of(0).is_err());
        assert!(matches!(
            chronology.proleptic_year(JulianEra::AD, 2012),
            Err(CalendarError::EraMismatch { .. })
        ));
        assert_eq!(chronology.proleptic_year(InternationalFixedEra::CE, 2012), Ok(2012));
        assert!(chronology.proleptic_year(InternationalFixedEra::CE, 0).is_err());
        assert_eq!(chronology.range(Field::Era), Ok(ValueRange::of(1, 1)));
    }

    #[test]
    fn test_year_day_lookup() {
        let chronology = InternationalFixedChronology::INSTANCE;
        assert_eq!(chronology.date_year_day(2012, 169), Ok(date(2012, 6, 29)));
        assert_eq!(chronology.date_year_day(2012, 170), Ok(date(2012, 7, 1)));
        assert_eq!(chronology.date_year_day(2012, 366), Ok(date(2012, 13, 29)));
        assert_eq!(chronology.date_year_day(2013, 365), Ok(date(2013, 13, 29)));
        assert_eq!(chronology.date_year_day(2013, 169), Ok(date(2013, 7, 1)));
        assert!(chronology.date_year_day(2013, 366).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let leap_day = date(2012, 6, 29);
        assert_eq!(leap_day.to_string(), "Ifc CE 2012/06/29");
        assert_eq!("Ifc CE 2012/06/23".parse::<InternationalFixedDate>(), Ok(date(2012, 6, 23)));
        assert!("Ifc CE 2012-06-23".parse::<InternationalFixedDate>().is_err());
        assert!("Ifc CE 2013/06/29".parse::<InternationalFixedDate>().is_err());
        let json = serde_json::to_string(&leap_day).unwrap();
        assert_eq!(json, r#""Ifc CE 2012/06/29""#);
        assert_eq!(serde_json::from_str::<InternationalFixedDate>(&json).unwrap(), leap_day);
    }
}
