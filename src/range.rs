use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::types::Field;

/// The inclusive range of values a field can take.
///
/// Ranges are either chronology-wide (every value the field can ever take in
/// the calendar) or refined by a date (the values valid for that year and
/// month). A `0 - 0` range marks a week field on a day outside the week cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a new range.
    pub const fn of(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// The range of week fields on a day outside the week cycle
    pub const EMPTY_WEEK: Self = Self::of(0, 0);

    /// Returns the minimum valid value
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the maximum valid value
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns true if the range holds a single value
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Returns true if both bounds fit an `i32`
    pub const fn is_int_value(&self) -> bool {
        self.min >= i32::MIN as i64 && self.max <= i32::MAX as i64
    }

    /// Checks if the value is within the range
    pub const fn is_valid_value(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks `value` against the range, reporting `field` on failure.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is outside the range.
    pub fn check_valid_value(&self, value: i64, field: Field) -> CalendarResult<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(CalendarError::InvalidFieldValue {
                field,
                value,
                range: *self,
            })
        }
    }

    /// Checks `value` against the range and narrows it to an `i32`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is outside the range
    /// or does not fit an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: Field) -> CalendarResult<i32> {
        let value = self.check_valid_value(value, field)?;
        i32::try_from(value).map_err(|_| CalendarError::InvalidFieldValue {
            field,
            value,
            range: *self,
        })
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_value_cases() {
        struct TestCase {
            value:       i64,
            valid:       bool,
            description: &'static str,
        }

        let range = ValueRange::of(1, 29);
        let cases = [
            TestCase {
                value:       1,
                valid:       true,
                description: "lower bound",
            },
            TestCase {
                value:       29,
                valid:       true,
                description: "upper bound",
            },
            TestCase {
                value:       0,
                valid:       false,
                description: "below lower bound",
            },
            TestCase {
                value:       30,
                valid:       false,
                description: "above upper bound",
            },
        ];

        for case in &cases {
            let result = range.check_valid_value(case.value, Field::DayOfMonth);
            assert_eq!(result.is_ok(), case.valid, "{}", case.description);
        }
    }

    #[test]
    fn test_check_reports_field_and_range() {
        let range = ValueRange::of(1, 13);
        let err = range
            .check_valid_value(0, Field::MonthOfYear)
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidFieldValue {
                field: Field::MonthOfYear,
                value: 0,
                range,
            }
        );
    }

    #[test]
    fn test_int_value() {
        let wide = ValueRange::of(i64::from(i32::MIN) - 1, 0);
        assert!(!wide.is_int_value());
        assert!(wide.check_valid_int_value(i64::from(i32::MIN) - 1, Field::EpochDay).is_err());
        assert_eq!(ValueRange::of(1, 7).check_valid_int_value(3, Field::DayOfWeek), Ok(3));
    }

    #[test]
    fn test_empty_week_range() {
        assert!(ValueRange::EMPTY_WEEK.is_fixed());
        assert!(ValueRange::EMPTY_WEEK.is_valid_value(0));
        assert!(!ValueRange::EMPTY_WEEK.is_valid_value(1));
    }

    #[test]
    fn test_display_and_serde() {
        let range = ValueRange::of(1, 35);
        assert_eq!(range.to_string(), "1 - 35");
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"min":1,"max":35}"#);
        let parsed: ValueRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}
