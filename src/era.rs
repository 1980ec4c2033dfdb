use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;
use crate::range::ValueRange;
use crate::types::Field;

/// An era of a calendar system.
///
/// Every calendar in the crate counts years of era forwards from the era
/// boundary at proleptic year 1, and backwards (`1 - year`) before it.
pub trait CalendarEra:
    Copy + Eq + fmt::Debug + fmt::Display + Into<AnyEra> + Serialize + DeserializeOwned
{
    /// Returns the numeric value of the era.
    fn value(self) -> i32;

    /// Looks up an era by numeric value.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the calendar defines no such era.
    fn of(value: i32) -> CalendarResult<Self>;

    /// Narrows an era of any calendar to this family, if it belongs to it.
    fn from_any(era: AnyEra) -> Option<Self>;

    /// Returns the era holding `proleptic_year`.
    fn for_proleptic_year(proleptic_year: i32) -> Self;

    /// Converts a year of this era to a proleptic year.
    fn proleptic_year(self, year_of_era: i32) -> i32 {
        if self.value() == 1 {
            year_of_era
        } else {
            1 - year_of_era
        }
    }
}

fn invalid_era(value: i32, range: ValueRange) -> CalendarError {
    CalendarError::InvalidFieldValue {
        field: Field::Era,
        value: i64::from(value),
        range,
    }
}

/// Eras of the Julian and British cutover calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum JulianEra {
    /// Before Christ, value 0
    #[display(fmt = "BC")]
    BC,
    /// Anno Domini, value 1
    #[display(fmt = "AD")]
    AD,
}

impl CalendarEra for JulianEra {
    fn value(self) -> i32 {
        match self {
            Self::BC => 0,
            Self::AD => 1,
        }
    }

    fn of(value: i32) -> CalendarResult<Self> {
        match value {
            0 => Ok(Self::BC),
            1 => Ok(Self::AD),
            _ => Err(invalid_era(value, ValueRange::of(0, 1))),
        }
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::Julian(era) => Some(era),
            _ => None,
        }
    }

    fn for_proleptic_year(proleptic_year: i32) -> Self {
        if proleptic_year >= 1 { Self::AD } else { Self::BC }
    }
}

/// Eras of the ISO and Symmetry calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum IsoEra {
    /// Before Current Era, value 0
    #[display(fmt = "BCE")]
    BCE,
    /// Current Era, value 1
    #[display(fmt = "CE")]
    CE,
}

impl CalendarEra for IsoEra {
    fn value(self) -> i32 {
        match self {
            Self::BCE => 0,
            Self::CE => 1,
        }
    }

    fn of(value: i32) -> CalendarResult<Self> {
        match value {
            0 => Ok(Self::BCE),
            1 => Ok(Self::CE),
            _ => Err(invalid_era(value, ValueRange::of(0, 1))),
        }
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::Iso(era) => Some(era),
            _ => None,
        }
    }

    fn for_proleptic_year(proleptic_year: i32) -> Self {
        if proleptic_year >= 1 { Self::CE } else { Self::BCE }
    }
}

/// The single era of the International Fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum InternationalFixedEra {
    /// Current Era, value 1
    #[display(fmt = "CE")]
    CE,
}

impl CalendarEra for InternationalFixedEra {
    fn value(self) -> i32 {
        1
    }

    fn of(value: i32) -> CalendarResult<Self> {
        if value == 1 {
            Ok(Self::CE)
        } else {
            Err(invalid_era(value, ValueRange::of(1, 1)))
        }
    }

    fn from_any(era: AnyEra) -> Option<Self> {
        match era {
            AnyEra::InternationalFixed(era) => Some(era),
            _ => None,
        }
    }

    fn for_proleptic_year(_proleptic_year: i32) -> Self {
        Self::CE
    }

    fn proleptic_year(self, year_of_era: i32) -> i32 {
        year_of_era
    }
}

/// An era of any calendar in the crate.
///
/// Chronologies accept `AnyEra` so that an era of a foreign calendar can be
/// handed to them and rejected, rather than silently reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum AnyEra {
    Julian(JulianEra),
    Iso(IsoEra),
    InternationalFixed(InternationalFixedEra),
}
