use crate::error::CalendarResult;
use crate::prelude::*;
use crate::types::Field;

/// A strategy for moving a date to another date of the same calendar.
///
/// The month and year adjusters work from the ranges of the date, so a month
/// with a gap (such as September 1752 in the British calendar) still ends on
/// its last named day.
pub trait DateAdjuster {
    /// Returns the adjusted copy of `date`.
    ///
    /// # Errors
    /// Returns an error if the adjusted date is outside the supported years.
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D>;
}

/// Moves a date to the first day of its month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDayOfMonth;

/// Moves a date to the last day of its month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastDayOfMonth;

/// Moves a date to the first day of its year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDayOfYear;

/// Moves a date to the last day of its year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastDayOfYear;

/// Moves a date to the first day of the following month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDayOfNextMonth;

/// Moves a date to the first day of the following year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDayOfNextYear;

impl DateAdjuster for FirstDayOfMonth {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        date.with(Field::DayOfMonth, date.range(Field::DayOfMonth)?.min())
    }
}

impl DateAdjuster for LastDayOfMonth {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        date.with(Field::DayOfMonth, date.range(Field::DayOfMonth)?.max())
    }
}

impl DateAdjuster for FirstDayOfYear {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        date.with(Field::DayOfYear, 1)
    }
}

impl DateAdjuster for LastDayOfYear {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        date.with(Field::DayOfYear, date.range(Field::DayOfYear)?.max())
    }
}

impl DateAdjuster for FirstDayOfNextMonth {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        LastDayOfMonth.adjust_into(date)?.plus_days(1)
    }
}

impl DateAdjuster for FirstDayOfNextYear {
    fn adjust_into<D: CalendarDate>(&self, date: &D) -> CalendarResult<D> {
        LastDayOfYear.adjust_into(date)?.plus_days(1)
    }
}
