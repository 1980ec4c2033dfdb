use crate::date::CalendarDate;
use crate::error::CalendarResult;
use crate::prelude::*;
use crate::range::ValueRange;

/// The queryable fields of a date.
///
/// The time-of-day fields exist so that callers can ask for them and get a
/// clean `UnsupportedField` error back; no calendar in this crate defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl Field {
    /// Every date-based field, in ascending order of duration.
    pub const DATE_FIELDS: [Self; 13] = [
        Self::DayOfWeek,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedDayOfWeekInYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::AlignedWeekOfYear,
        Self::MonthOfYear,
        Self::ProlepticMonth,
        Self::YearOfEra,
        Self::Year,
        Self::Era,
    ];

    /// Returns true for the fields a date-only calendar can answer.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    /// Returns true for the fields that carry a week position and therefore
    /// read zero on days outside the week cycle.
    pub(crate) const fn is_week_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
        )
    }
}

/// The arithmetic units of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl Unit {
    /// Every unit a date supports for `plus`/`minus`/`until`.
    pub const DATE_UNITS: [Self; 8] = [
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
        Self::Decades,
        Self::Centuries,
        Self::Millennia,
        Self::Eras,
    ];

    /// Returns true for the units a date-only calendar can add.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Number of years in one of this unit, for the year-multiple units.
    pub(crate) const fn years(self) -> Option<i64> {
        match self {
            Self::Years => Some(1),
            Self::Decades => Some(10),
            Self::Centuries => Some(100),
            Self::Millennia => Some(1_000),
            _ => None,
        }
    }
}

/// A field defined outside this crate.
///
/// Dates call into the field rather than knowing about it: the field decides
/// whether it can read a date and computes its own value, usually from the
/// built-in fields of the date.
pub trait CustomField {
    /// Human readable name, used in error messages.
    fn name(&self) -> &str;

    /// Returns true if the field can be read from `date`.
    fn is_supported_by<D: CalendarDate>(&self, date: &D) -> bool;

    /// Returns the valid values of the field for `date`.
    fn range_refined_by<D: CalendarDate>(&self, date: &D) -> CalendarResult<ValueRange>;

    /// Reads the field value from `date`.
    fn get_from<D: CalendarDate>(&self, date: &D) -> CalendarResult<i64>;

    /// Returns a copy of `date` with the field set to `value`.
    fn adjust_into<D: CalendarDate>(&self, date: &D, value: i64) -> CalendarResult<D>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_fields_are_date_based() {
        for field in Field::DATE_FIELDS {
            assert!(field.is_date_based(), "{field} should be date based");
        }
    }

    #[test]
    fn test_time_fields_are_not_date_based() {
        for field in [
            Field::NanoOfDay,
            Field::MinuteOfDay,
            Field::HourOfDay,
            Field::AmPmOfDay,
            Field::InstantSeconds,
            Field::OffsetSeconds,
        ] {
            assert!(!field.is_date_based(), "{field} should not be date based");
        }
    }

    #[test]
    fn test_week_fields() {
        assert!(Field::DayOfWeek.is_week_based());
        assert!(Field::AlignedWeekOfYear.is_week_based());
        assert!(!Field::DayOfMonth.is_week_based());
        assert!(!Field::Era.is_week_based());
    }

    #[test]
    fn test_units() {
        for unit in Unit::DATE_UNITS {
            assert!(unit.is_date_based(), "{unit} should be date based");
        }
        assert!(!Unit::HalfDays.is_date_based());
        assert!(!Unit::Forever.is_date_based());
        assert_eq!(Unit::Centuries.years(), Some(100));
        assert_eq!(Unit::Weeks.years(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Field::AlignedWeekOfMonth.to_string(), "AlignedWeekOfMonth");
        assert_eq!(Unit::Millennia.to_string(), "Millennia");
    }
}
