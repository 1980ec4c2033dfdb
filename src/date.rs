//! The date contract shared by every calendar.
//!
//! A calendar date type supplies its fields, its constructors and a handful
//! of hooks; everything else (field access, field adjustment, arithmetic
//! and the distance between dates) is provided here on top of those.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::adjust::DateAdjuster;
use crate::consts::DAYS_IN_WEEK;
use crate::equations::iso_day_of_week;
use crate::error::{CalendarError, CalendarResult};
use crate::period::ChronoPeriod;
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::{CustomField, Field, Unit};

/// Packs a month into the high bits so month and day compare together.
const PACKED_MONTH_SHIFT: i64 = 256;

/// A point on the shared time line of days.
///
/// Epoch day 0 is 1970-01-01 in the proleptic Gregorian calendar. Dates of
/// different calendars compare through their epoch day.
pub trait EpochDay {
    /// Returns the epoch day.
    fn to_epoch_day(&self) -> i64;

    /// Returns true if `self` falls before `other` on the time line.
    fn is_before(&self, other: &impl EpochDay) -> bool {
        self.to_epoch_day() < other.to_epoch_day()
    }

    /// Returns true if `self` falls after `other` on the time line.
    fn is_after(&self, other: &impl EpochDay) -> bool {
        self.to_epoch_day() > other.to_epoch_day()
    }

    /// Returns true if `self` and `other` are the same day.
    fn is_equal(&self, other: &impl EpochDay) -> bool {
        self.to_epoch_day() == other.to_epoch_day()
    }
}

/// A date in a specific calendar.
///
/// Dates are immutable values; every adjustment returns a new validated
/// date. Implementors provide the stored fields, the lengths of their
/// month and year and the constructors. The week hooks have defaults for
/// calendars whose every day is part of the 7-day week cycle.
pub trait CalendarDate:
    EpochDay + Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = CalendarError>
{
    /// The calendar of the date
    type Chrono: Chronology<Date = Self>;

    /// Creates a date, rejecting any field out of range for the calendar.
    ///
    /// # Errors
    /// Returns an error if the year, month or day is not valid.
    fn create(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self>;

    /// Creates a date from a proleptic year and day of year.
    ///
    /// # Errors
    /// Returns an error if the year or day of year is not valid.
    fn create_year_day(proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self>;

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    fn of_epoch_day(epoch_day: i64) -> CalendarResult<Self>;

    /// Creates a date, moving a day past the end of the month back to the
    /// last valid day.
    ///
    /// # Errors
    /// Returns an error if the year or month is not valid.
    fn resolve_previous_valid(proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self>;

    /// Returns the proleptic year.
    fn proleptic_year(&self) -> i32;

    /// Returns the month of year, starting at 1.
    fn month(&self) -> u8;

    /// Returns the day of month, starting at 1.
    fn day_of_month(&self) -> u8;

    /// Returns the day of year, starting at 1.
    fn day_of_year(&self) -> u16;

    /// Returns the number of days in the month.
    fn length_of_month(&self) -> u8;

    /// Returns the number of days in the year.
    fn length_of_year(&self) -> u16;

    /// Returns the chronology of the date.
    fn chronology(&self) -> Self::Chrono {
        Self::Chrono::default()
    }

    /// Returns true if the year of the date is a leap year.
    fn is_leap_year(&self) -> bool {
        self.chronology()
            .is_leap_year(i64::from(self.proleptic_year()))
    }

    /// Returns the era of the date.
    fn era(&self) -> <Self::Chrono as Chronology>::Era {
        CalendarEra::for_proleptic_year(self.proleptic_year())
    }

    /// Returns the year counted within the era.
    fn year_of_era(&self) -> i32 {
        let year = self.proleptic_year();
        if year >= 1 { year } else { 1 - year }
    }

    /// Returns the count of months since year 0, month 1.
    fn proleptic_month(&self) -> i64 {
        i64::from(self.proleptic_year()) * i64::from(self.chronology().months_in_year())
            + i64::from(self.month())
            - 1
    }

    /// Returns true for days that are not part of any week.
    ///
    /// Week fields read 0 on such days and have the range `0 - 0`.
    fn is_special_day(&self) -> bool {
        false
    }

    /// Returns the day of week, Monday = 1 to Sunday = 7.
    fn day_of_week(&self) -> u8 {
        iso_day_of_week(self.to_epoch_day())
    }

    /// Position of the day within its month for the aligned month fields.
    fn month_ordinal(&self) -> u16 {
        u16::from(self.day_of_month())
    }

    /// Position of the day within its year for the aligned year fields.
    fn year_ordinal(&self) -> u16 {
        self.day_of_year()
    }

    /// Range of the day of month in the month of the date.
    fn day_of_month_range(&self) -> ValueRange {
        ValueRange::of(1, i64::from(self.length_of_month()))
    }

    /// Number of aligned weeks in the month of the date.
    fn weeks_in_month(&self) -> u8 {
        self.length_of_month().div_ceil(DAYS_IN_WEEK)
    }

    /// Number of aligned weeks in the year of the date.
    fn weeks_in_year(&self) -> u16 {
        self.length_of_year().div_ceil(u16::from(DAYS_IN_WEEK))
    }

    /// Moves the date to aligned week `week` of its month or year, keeping
    /// the aligned day of week.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn with_aligned_week(&self, field: Field, week: i64) -> CalendarResult<Self> {
        let current = self.get_long(field)?;
        self.plus_days((week - current) * i64::from(DAYS_IN_WEEK))
    }

    /// Returns true if `field` can be read from the date.
    fn is_supported(&self, field: Field) -> bool {
        field.is_date_based()
    }

    /// Returns true if the date can be moved by `unit`.
    fn is_supported_unit(&self, unit: Unit) -> bool {
        unit.is_date_based()
    }

    /// Returns the valid values of `field` for the year and month of the date.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for the time-of-day fields.
    fn range(&self, field: Field) -> CalendarResult<ValueRange> {
        if !self.is_supported(field) {
            return Err(CalendarError::unsupported_field(field));
        }
        if field.is_week_based() && self.is_special_day() {
            return Ok(ValueRange::EMPTY_WEEK);
        }
        let range = match field {
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear => {
                ValueRange::of(1, i64::from(DAYS_IN_WEEK))
            }
            Field::DayOfMonth => self.day_of_month_range(),
            Field::DayOfYear => ValueRange::of(1, i64::from(self.length_of_year())),
            Field::AlignedWeekOfMonth => ValueRange::of(1, i64::from(self.weeks_in_month())),
            Field::AlignedWeekOfYear => ValueRange::of(1, i64::from(self.weeks_in_year())),
            Field::YearOfEra => {
                let years = self.chronology().range(Field::Year)?;
                if self.proleptic_year() >= 1 {
                    ValueRange::of(1, years.max())
                } else {
                    ValueRange::of(1, 1 - years.min())
                }
            }
            _ => self.chronology().range(field)?,
        };
        Ok(range)
    }

    /// Reads `field` as an `i32`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for the time-of-day fields and
    /// for fields whose range does not fit an `i32`.
    fn get(&self, field: Field) -> CalendarResult<i32> {
        let range = self.range(field)?;
        if !range.is_int_value() {
            return Err(CalendarError::UnsupportedField(format!(
                "{field} is too large for get, use get_long"
            )));
        }
        range.check_valid_int_value(self.get_long(field)?, field)
    }

    /// Reads `field`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for the time-of-day fields.
    fn get_long(&self, field: Field) -> CalendarResult<i64> {
        if !self.is_supported(field) {
            return Err(CalendarError::unsupported_field(field));
        }
        if field.is_week_based() && self.is_special_day() {
            return Ok(0);
        }
        let value = match field {
            Field::DayOfWeek => i64::from(self.day_of_week()),
            Field::AlignedDayOfWeekInMonth => aligned_day(self.month_ordinal()),
            Field::AlignedDayOfWeekInYear => aligned_day(self.year_ordinal()),
            Field::DayOfMonth => i64::from(self.day_of_month()),
            Field::DayOfYear => i64::from(self.day_of_year()),
            Field::EpochDay => self.to_epoch_day(),
            Field::AlignedWeekOfMonth => aligned_week(self.month_ordinal()),
            Field::AlignedWeekOfYear => aligned_week(self.year_ordinal()),
            Field::MonthOfYear => i64::from(self.month()),
            Field::ProlepticMonth => self.proleptic_month(),
            Field::YearOfEra => i64::from(self.year_of_era()),
            Field::Year => i64::from(self.proleptic_year()),
            Field::Era => i64::from(self.era().value()),
            _ => return Err(CalendarError::unsupported_field(field)),
        };
        Ok(value)
    }

    /// Returns a copy of the date with `field` set to `value`.
    ///
    /// Values outside the outer range of the field are rejected. Values in
    /// range that the current year and month cannot hold move the date to
    /// the nearest valid day instead, usually the end of the month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is out of range
    /// and `CalendarError::UnsupportedField` for the time-of-day fields.
    fn with(&self, field: Field, value: i64) -> CalendarResult<Self> {
        if !self.is_supported(field) {
            return Err(CalendarError::unsupported_field(field));
        }
        let outer = self.chronology().range(field)?;
        outer.check_valid_value(value, field)?;
        if field.is_week_based() || field == Field::DayOfYear {
            self.range(field)?.check_valid_value(value, field)?;
        }
        if field.is_week_based() && self.is_special_day() {
            return Ok(*self);
        }
        let current = self.get_long(field)?;
        if value == current {
            return Ok(*self);
        }

        let year = self.proleptic_year();
        match field {
            Field::DayOfWeek
            | Field::AlignedDayOfWeekInMonth
            | Field::AlignedDayOfWeekInYear
            | Field::DayOfYear => self.plus_days(value - current),
            Field::AlignedWeekOfMonth | Field::AlignedWeekOfYear => {
                self.with_aligned_week(field, value)
            }
            Field::EpochDay => Self::of_epoch_day(value),
            Field::DayOfMonth => {
                Self::resolve_previous_valid(year, self.month(), narrow(value, field, outer)?)
            }
            Field::MonthOfYear => {
                Self::resolve_previous_valid(year, narrow(value, field, outer)?, self.day_of_month())
            }
            Field::ProlepticMonth => self.plus_months(value - current),
            Field::YearOfEra => {
                let year_of_era: i32 = narrow(value, field, outer)?;
                let target = if year >= 1 { year_of_era } else { 1 - year_of_era };
                Self::resolve_previous_valid(target, self.month(), self.day_of_month())
            }
            Field::Year => {
                Self::resolve_previous_valid(narrow(value, field, outer)?, self.month(), self.day_of_month())
            }
            Field::Era => Self::resolve_previous_valid(1 - year, self.month(), self.day_of_month()),
            _ => Err(CalendarError::unsupported_field(field)),
        }
    }

    /// Returns the date produced by `adjuster`.
    ///
    /// # Errors
    /// Returns whatever error the adjuster reports.
    fn with_adjuster(&self, adjuster: &impl DateAdjuster) -> CalendarResult<Self> {
        adjuster.adjust_into(self)
    }

    /// Returns a copy of the date moved by `amount` of `unit`.
    ///
    /// Day and week arithmetic is exact. Month and year arithmetic keeps the
    /// day of month, moving it back to the end of the target month when the
    /// target month is shorter.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for time units, or an error if
    /// the result leaves the supported years.
    fn plus(&self, amount: i64, unit: Unit) -> CalendarResult<Self> {
        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Eras => {
                let era = self
                    .get_long(Field::Era)?
                    .checked_add(amount)
                    .ok_or(CalendarError::ArithmeticOverflow("era"))?;
                self.with(Field::Era, era)
            }
            _ => match unit.years() {
                Some(factor) => self.plus_years(
                    amount
                        .checked_mul(factor)
                        .ok_or(CalendarError::ArithmeticOverflow("years"))?,
                ),
                None => Err(CalendarError::UnsupportedUnit(unit)),
            },
        }
    }

    /// Returns a copy of the date moved back by `amount` of `unit`.
    ///
    /// # Errors
    /// Same as [`CalendarDate::plus`].
    fn minus(&self, amount: i64, unit: Unit) -> CalendarResult<Self> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// Returns a copy of the date moved by `days`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn plus_days(&self, days: i64) -> CalendarResult<Self> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(CalendarError::ArithmeticOverflow("epoch day"))?;
        Self::of_epoch_day(epoch_day)
    }

    /// Returns a copy of the date moved by `weeks`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn plus_weeks(&self, weeks: i64) -> CalendarResult<Self> {
        let days = weeks
            .checked_mul(i64::from(DAYS_IN_WEEK))
            .ok_or(CalendarError::ArithmeticOverflow("weeks"))?;
        self.plus_days(days)
    }

    /// Returns a copy of the date moved by `months`, keeping the day of month
    /// where the target month allows it.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn plus_months(&self, months: i64) -> CalendarResult<Self> {
        if months == 0 {
            return Ok(*self);
        }
        let chronology = self.chronology();
        let months_in_year = i64::from(chronology.months_in_year());
        let target = self
            .proleptic_month()
            .checked_add(months)
            .ok_or(CalendarError::ArithmeticOverflow("months"))?;
        let year = chronology
            .range(Field::Year)?
            .check_valid_int_value(target.div_euclid(months_in_year), Field::Year)?;
        let month = narrow(
            target.rem_euclid(months_in_year) + 1,
            Field::MonthOfYear,
            chronology.range(Field::MonthOfYear)?,
        )?;
        Self::resolve_previous_valid(year, month, self.day_of_month())
    }

    /// Returns a copy of the date moved by `years`, keeping the month and day
    /// where the target year allows it.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn plus_years(&self, years: i64) -> CalendarResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        let target = i64::from(self.proleptic_year())
            .checked_add(years)
            .ok_or(CalendarError::ArithmeticOverflow("years"))?;
        let year = self
            .chronology()
            .range(Field::Year)?
            .check_valid_int_value(target, Field::Year)?;
        Self::resolve_previous_valid(year, self.month(), self.day_of_month())
    }

    /// Returns a copy of the date moved back by `days`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn minus_days(&self, days: i64) -> CalendarResult<Self> {
        self.minus(days, Unit::Days)
    }

    /// Returns a copy of the date moved back by `weeks`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn minus_weeks(&self, weeks: i64) -> CalendarResult<Self> {
        self.minus(weeks, Unit::Weeks)
    }

    /// Returns a copy of the date moved back by `months`.
    ///
    /// This is not always the inverse of [`CalendarDate::plus_months`]: a day
    /// moved back to the end of a shorter month stays there.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn minus_months(&self, months: i64) -> CalendarResult<Self> {
        self.minus(months, Unit::Months)
    }

    /// Returns a copy of the date moved back by `years`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn minus_years(&self, years: i64) -> CalendarResult<Self> {
        self.minus(years, Unit::Years)
    }

    /// Returns a copy of the date moved by `period`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn plus_period(&self, period: &ChronoPeriod<Self::Chrono>) -> CalendarResult<Self> {
        period.add_to(self)
    }

    /// Returns a copy of the date moved back by `period`.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    fn minus_period(&self, period: &ChronoPeriod<Self::Chrono>) -> CalendarResult<Self> {
        period.subtract_from(self)
    }

    /// Returns the number of whole `unit`s from the date to `end`, negative
    /// when `end` is earlier.
    ///
    /// `end` may be a date of any calendar; it is converted into this one.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for time units, or an error if
    /// `end` is outside the supported years.
    fn until(&self, end: &impl EpochDay, unit: Unit) -> CalendarResult<i64> {
        let end = Self::of_epoch_day(end.to_epoch_day())?;
        let days = end.to_epoch_day() - self.to_epoch_day();
        match unit {
            Unit::Days => Ok(days),
            Unit::Weeks => Ok(days / i64::from(DAYS_IN_WEEK)),
            Unit::Months => Ok(months_until(self, &end)),
            Unit::Eras => Ok(end.get_long(Field::Era)? - self.get_long(Field::Era)?),
            _ => match unit.years() {
                Some(factor) => {
                    let months_in_year = i64::from(self.chronology().months_in_year());
                    Ok(months_until(self, &end) / (months_in_year * factor))
                }
                None => Err(CalendarError::UnsupportedUnit(unit)),
            },
        }
    }

    /// Returns the period from the date to `end`, such that adding it to the
    /// date gives `end` back.
    ///
    /// The period holds whole years, then whole months, then the remaining
    /// days, all with the same sign.
    ///
    /// # Errors
    /// Returns an error if `end` is outside the supported years.
    fn until_period(&self, end: &impl EpochDay) -> CalendarResult<ChronoPeriod<Self::Chrono>> {
        let end = Self::of_epoch_day(end.to_epoch_day())?;
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let (candidate, days) = loop {
            let candidate = self.plus_months(total_months)?;
            let days = end.to_epoch_day() - candidate.to_epoch_day();
            if total_months > 0 && days < 0 {
                total_months -= 1;
            } else if total_months < 0 && days > 0 {
                total_months += 1;
            } else {
                break (candidate, days);
            }
        };
        debug_assert_eq!(candidate.plus_days(days), Ok(end));

        let months_in_year = i64::from(self.chronology().months_in_year());
        let overflow = || CalendarError::ArithmeticOverflow("period");
        Ok(ChronoPeriod::new(
            i32::try_from(total_months / months_in_year).map_err(|_| overflow())?,
            i32::try_from(total_months % months_in_year).map_err(|_| overflow())?,
            i32::try_from(days).map_err(|_| overflow())?,
        ))
    }

    /// Reads a field defined outside the crate.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` if the field cannot read the date.
    fn get_custom(&self, field: &impl CustomField) -> CalendarResult<i64> {
        if !field.is_supported_by(self) {
            return Err(CalendarError::UnsupportedField(field.name().to_owned()));
        }
        field.get_from(self)
    }

    /// Returns the valid values of a field defined outside the crate.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` if the field cannot read the date.
    fn range_custom(&self, field: &impl CustomField) -> CalendarResult<ValueRange> {
        if !field.is_supported_by(self) {
            return Err(CalendarError::UnsupportedField(field.name().to_owned()));
        }
        field.range_refined_by(self)
    }

    /// Returns a copy of the date with a field defined outside the crate set.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` if the field cannot read the
    /// date, or whatever error the field reports.
    fn with_custom(&self, field: &impl CustomField, value: i64) -> CalendarResult<Self> {
        if !field.is_supported_by(self) {
            return Err(CalendarError::UnsupportedField(field.name().to_owned()));
        }
        field.adjust_into(self, value)
    }
}

fn aligned_day(ordinal: u16) -> i64 {
    i64::from((ordinal - 1) % u16::from(DAYS_IN_WEEK)) + 1
}

fn aligned_week(ordinal: u16) -> i64 {
    i64::from((ordinal - 1) / u16::from(DAYS_IN_WEEK)) + 1
}

/// Whole months between two dates, truncated toward zero.
fn months_until<D: CalendarDate>(start: &D, end: &D) -> i64 {
    let packed = |date: &D| {
        date.proleptic_month() * PACKED_MONTH_SHIFT + i64::from(date.day_of_month())
    };
    (packed(end) - packed(start)) / PACKED_MONTH_SHIFT
}

/// Narrows a value that already passed a range check.
pub(crate) fn narrow<T: TryFrom<i64>>(value: i64, field: Field, range: ValueRange) -> CalendarResult<T> {
    T::try_from(value).map_err(|_| CalendarError::InvalidFieldValue {
        field,
        value,
        range,
    })
}

/// Writes `"<id> <era> <year-of-era><sep><MM><sep><dd>"`.
pub(crate) fn write_date<D: CalendarDate>(
    f: &mut fmt::Formatter<'_>,
    id: &str,
    separator: char,
    date: &D,
) -> fmt::Result {
    write!(
        f,
        "{id} {} {}{separator}{:02}{separator}{:02}",
        date.era(),
        date.year_of_era(),
        date.month(),
        date.day_of_month()
    )
}

/// Parses the rendering written by [`write_date`] for the chronology `C`.
pub(crate) fn parse_date<C: Chronology>(
    text: &str,
    id: &str,
    separator: char,
) -> CalendarResult<C::Date> {
    let invalid = || CalendarError::InvalidFormat(text.to_owned());

    let rest = text
        .strip_prefix(id)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(invalid)?;
    let (era_text, fields) = rest.split_once(' ').ok_or_else(invalid)?;
    let chronology = C::default();
    let era = chronology
        .eras()
        .iter()
        .find(|era| era.to_string() == era_text)
        .copied()
        .ok_or_else(invalid)?;

    let mut parts = fields.split(separator);
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if month.len() < 2 || day.len() < 2 {
        return Err(invalid());
    }
    let year_of_era = parse_digits(year).ok_or_else(invalid)?;
    let month = parse_digits(month).ok_or_else(invalid)?;
    let day = parse_digits(day).ok_or_else(invalid)?;

    chronology.date_era(era, year_of_era, month, day)
}

/// Parses an unsigned run of ASCII digits.
pub(crate) fn parse_digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
