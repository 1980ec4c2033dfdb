use crate::range::ValueRange;
use crate::types::{Field, Unit};

/// The `alt_calendars` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for every fallible calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year, month, day, day-of-year or epoch day outside the calendar's domain.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A field value outside the range valid for the date it is applied to.
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    InvalidFieldValue {
        field: Field,
        value: i64,
        range: ValueRange,
    },

    /// An era that does not belong to the chronology it was handed to.
    #[error("Era {era} is not valid for chronology {chronology}")]
    EraMismatch {
        era: String,
        chronology: &'static str,
    },

    /// A field the calendar does not define.
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// A unit the calendar does not define.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(Unit),

    /// Arithmetic left the representable range.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Text that is not the rendering of a date in this calendar.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

/// The two error families every [`CalendarError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The date-time exception analogue: invalid values, eras, formats, overflow.
    InvalidDate,
    /// The field or unit is not defined for the calendar.
    Unsupported,
}

impl CalendarError {
    /// Returns which of the two error families this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedField(_) | Self::UnsupportedUnit(_) => ErrorKind::Unsupported,
            Self::InvalidDate(_)
            | Self::InvalidFieldValue { .. }
            | Self::EraMismatch { .. }
            | Self::ArithmeticOverflow(_)
            | Self::InvalidFormat(_) => ErrorKind::InvalidDate,
        }
    }

    pub(crate) fn unsupported_field(field: Field) -> Self {
        Self::UnsupportedField(field.to_string())
    }

    pub(crate) fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }
}
