use std::fmt;
use std::hash::Hash;

use crate::era::AnyEra;
use crate::error::{CalendarError, CalendarResult};
use crate::period::ChronoPeriod;
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// A calendar system.
///
/// Chronologies are stateless unit structs, each exposed as a `pub const
/// INSTANCE`. They are the factories of their date type and own the
/// calendar-wide rules: leap years, the outer range of every field and the
/// eras.
pub trait Chronology: Copy + Default + fmt::Debug + Eq + Hash {
    /// The date type of the calendar
    type Date: CalendarDate<Chrono = Self>;
    /// The era type of the calendar
    type Era: CalendarEra + 'static;

    /// Identifier of the calendar, also the prefix of its date renderings
    const ID: &'static str;
    /// Months in every year of the calendar
    const MONTHS_IN_YEAR: u8;
    /// Smallest supported proleptic year
    const MIN_YEAR: i32;
    /// Largest supported proleptic year
    const MAX_YEAR: i32;
    /// Epoch day of the first day of `MIN_YEAR`
    const MIN_EPOCH_DAY: i64;
    /// Epoch day of the last day of `MAX_YEAR`
    const MAX_EPOCH_DAY: i64;

    /// Returns the identifier of the calendar.
    fn id(&self) -> &'static str {
        Self::ID
    }

    /// Returns the number of months in every year.
    fn months_in_year(&self) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    /// Returns true if `proleptic_year` is a leap year of the calendar.
    fn is_leap_year(&self, proleptic_year: i64) -> bool;

    /// Returns the outer range of `field`: every value it can take on any
    /// date of the calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for the time-of-day fields.
    fn range(&self, field: Field) -> CalendarResult<ValueRange>;

    /// Returns the eras of the calendar, in ascending order.
    fn eras(&self) -> &'static [Self::Era];

    /// Looks up an era by numeric value.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the calendar has no such era.
    fn era_of(&self, value: i32) -> CalendarResult<Self::Era> {
        Self::Era::of(value)
    }

    /// Converts a year of `era` to a proleptic year.
    ///
    /// # Errors
    /// Returns `CalendarError::EraMismatch` if `era` belongs to another calendar,
    /// or `CalendarError::InvalidFieldValue` if the year of era is out of range.
    fn proleptic_year(&self, era: impl Into<AnyEra>, year_of_era: i32) -> CalendarResult<i32> {
        let era = era.into();
        let own = Self::Era::from_any(era).ok_or_else(|| CalendarError::EraMismatch {
            era: era.to_string(),
            chronology: Self::ID,
        })?;
        self.range(Field::YearOfEra)?
            .check_valid_value(i64::from(year_of_era), Field::YearOfEra)?;
        Ok(own.proleptic_year(year_of_era))
    }

    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns an error if the date is not valid in the calendar.
    fn date(&self, proleptic_year: i32, month: u8, day: u8) -> CalendarResult<Self::Date> {
        Self::Date::create(proleptic_year, month, day)
    }

    /// Creates a date from an era, year of era, month and day.
    ///
    /// # Errors
    /// Returns an error if the era is foreign or the date is not valid.
    fn date_era(
        &self,
        era: impl Into<AnyEra>,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> CalendarResult<Self::Date> {
        self.date(self.proleptic_year(era, year_of_era)?, month, day)
    }

    /// Creates a date from a proleptic year and day of year.
    ///
    /// # Errors
    /// Returns an error if the day of year is not valid for the year.
    fn date_year_day(&self, proleptic_year: i32, day_of_year: u16) -> CalendarResult<Self::Date> {
        Self::Date::create_year_day(proleptic_year, day_of_year)
    }

    /// Creates a date from an era, year of era and day of year.
    ///
    /// # Errors
    /// Returns an error if the era is foreign or the day of year is not valid.
    fn date_year_day_era(
        &self,
        era: impl Into<AnyEra>,
        year_of_era: i32,
        day_of_year: u16,
    ) -> CalendarResult<Self::Date> {
        self.date_year_day(self.proleptic_year(era, year_of_era)?, day_of_year)
    }

    /// Creates the date falling on `epoch_day`.
    ///
    /// # Errors
    /// Returns an error if the epoch day is outside the supported years.
    fn date_epoch_day(&self, epoch_day: i64) -> CalendarResult<Self::Date> {
        Self::Date::of_epoch_day(epoch_day)
    }

    /// Converts a date of any calendar into this one.
    ///
    /// # Errors
    /// Returns an error if the date is outside the supported years.
    fn date_from(&self, temporal: &impl EpochDay) -> CalendarResult<Self::Date> {
        self.date_epoch_day(temporal.to_epoch_day())
    }

    /// Creates a period of this calendar.
    fn period(&self, years: i32, months: i32, days: i32) -> ChronoPeriod<Self> {
        ChronoPeriod::new(years, months, days)
    }
}

/// Outer range of the year-based fields every chronology shares.
pub(crate) fn year_based_range<C: Chronology>(
    chronology: &C,
    field: Field,
) -> CalendarResult<ValueRange> {
    let months = i64::from(C::MONTHS_IN_YEAR);
    let min_year = i64::from(C::MIN_YEAR);
    let max_year = i64::from(C::MAX_YEAR);
    let range = match field {
        Field::EpochDay => ValueRange::of(C::MIN_EPOCH_DAY, C::MAX_EPOCH_DAY),
        Field::MonthOfYear => ValueRange::of(1, months),
        Field::ProlepticMonth => ValueRange::of(min_year * months, max_year * months + months - 1),
        Field::YearOfEra => ValueRange::of(1, max_year.max(1 - min_year)),
        Field::Year => ValueRange::of(min_year, max_year),
        Field::Era => {
            let eras = chronology.eras();
            match (eras.first(), eras.last()) {
                (Some(first), Some(last)) => {
                    ValueRange::of(i64::from(first.value()), i64::from(last.value()))
                }
                _ => return Err(CalendarError::unsupported_field(field)),
            }
        }
        _ => return Err(CalendarError::unsupported_field(field)),
    };
    Ok(range)
}

/// Rejects epoch days outside the supported years of `C`.
pub(crate) fn check_epoch_day<C: Chronology>(epoch_day: i64) -> CalendarResult<i64> {
    let range = ValueRange::of(C::MIN_EPOCH_DAY, C::MAX_EPOCH_DAY);
    let checked = range.check_valid_value(epoch_day, Field::EpochDay);
    #[cfg(feature = "log")]
    if checked.is_err() {
        log::trace!("{} rejected epoch day {epoch_day}, valid values {range}", C::ID);
    }
    checked
}

/// Rejects years outside the supported years of `C`.
pub(crate) fn check_year<C: Chronology>(year: i64) -> CalendarResult<i32> {
    ValueRange::of(i64::from(C::MIN_YEAR), i64::from(C::MAX_YEAR))
        .check_valid_int_value(year, Field::Year)
}

/// Rejects month numbers the calendar does not have.
pub(crate) fn check_month<C: Chronology>(month: u8) -> CalendarResult<u8> {
    ValueRange::of(1, i64::from(C::MONTHS_IN_YEAR))
        .check_valid_value(i64::from(month), Field::MonthOfYear)?;
    Ok(month)
}
