use std::fmt;
use std::marker::PhantomData;

use crate::error::{CalendarError, CalendarResult};
use crate::prelude::*;

/// An amount of years, months and days in a specific calendar.
///
/// Periods are not normalized on creation; `P14M` and `P1Y2M` are distinct
/// values that add to a date the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChronoPeriod<C: Chronology> {
    years: i32,
    months: i32,
    days: i32,
    chronology: PhantomData<C>,
}

impl<C: Chronology> ChronoPeriod<C> {
    /// Creates a new period.
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
            chronology: PhantomData,
        }
    }

    /// The zero period of the calendar
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Returns the number of years
    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Returns the number of months
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Returns the number of days
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Returns the calendar of the period.
    pub fn chronology(&self) -> C {
        C::default()
    }

    /// Returns true if every amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true if any amount is negative.
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns the period with every amount negated.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if an amount is `i32::MIN`.
    pub fn negated(&self) -> CalendarResult<Self> {
        self.multiplied_by(-1)
    }

    /// Adds two periods amount by amount.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if an amount overflows.
    pub fn plus(&self, other: &Self) -> CalendarResult<Self> {
        Ok(Self::new(
            checked(self.years.checked_add(other.years))?,
            checked(self.months.checked_add(other.months))?,
            checked(self.days.checked_add(other.days))?,
        ))
    }

    /// Subtracts two periods amount by amount.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if an amount overflows.
    pub fn minus(&self, other: &Self) -> CalendarResult<Self> {
        Ok(Self::new(
            checked(self.years.checked_sub(other.years))?,
            checked(self.months.checked_sub(other.months))?,
            checked(self.days.checked_sub(other.days))?,
        ))
    }

    /// Multiplies every amount by `scalar`.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if an amount overflows.
    pub fn multiplied_by(&self, scalar: i32) -> CalendarResult<Self> {
        if scalar == 1 || self.is_zero() {
            return Ok(*self);
        }
        Ok(Self::new(
            checked(self.years.checked_mul(scalar))?,
            checked(self.months.checked_mul(scalar))?,
            checked(self.days.checked_mul(scalar))?,
        ))
    }

    /// Returns the total number of months held by the years and months.
    pub fn to_total_months(&self) -> i64 {
        i64::from(self.years) * i64::from(C::MONTHS_IN_YEAR) + i64::from(self.months)
    }

    /// Folds whole years out of the months, leaving years and months with the
    /// same sign. Days are left untouched.
    ///
    /// # Errors
    /// Returns `CalendarError::ArithmeticOverflow` if the years overflow.
    pub fn normalized(&self) -> CalendarResult<Self> {
        let total = self.to_total_months();
        let months_in_year = i64::from(C::MONTHS_IN_YEAR);
        let years = i32::try_from(total / months_in_year)
            .map_err(|_| CalendarError::ArithmeticOverflow("period years"))?;
        let months = i32::try_from(total % months_in_year)
            .map_err(|_| CalendarError::ArithmeticOverflow("period months"))?;
        Ok(Self::new(years, months, self.days))
    }

    /// Adds the period to `date`: the total months first, then the days.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    pub fn add_to<D: CalendarDate<Chrono = C>>(&self, date: &D) -> CalendarResult<D> {
        date.plus_months(self.to_total_months())?
            .plus_days(i64::from(self.days))
    }

    /// Subtracts the period from `date`: the total months first, then the days.
    ///
    /// # Errors
    /// Returns an error if the result leaves the supported years.
    pub fn subtract_from<D: CalendarDate<Chrono = C>>(&self, date: &D) -> CalendarResult<D> {
        date.minus_months(self.to_total_months())?
            .minus_days(i64::from(self.days))
    }
}

impl<C: Chronology> Default for ChronoPeriod<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: Chronology> fmt::Display for ChronoPeriod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", C::ID)?;
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

fn checked(value: Option<i32>) -> CalendarResult<i32> {
    value.ok_or(CalendarError::ArithmeticOverflow("period"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{InternationalFixedChronology, JulianChronology, JulianDate};

    #[test]
    fn test_display() {
        let period = JulianChronology::INSTANCE.period(1, 2, 3);
        assert_eq!(period.to_string(), "Julian P1Y2M3D");
        assert_eq!(ChronoPeriod::<JulianChronology>::ZERO.to_string(), "Julian P0D");
        assert_eq!(
            InternationalFixedChronology::INSTANCE.period(0, -1, 0).to_string(),
            "Ifc P-1M"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = JulianChronology::INSTANCE.period(1, 2, 3);
        let b = JulianChronology::INSTANCE.period(0, 11, 30);
        assert_eq!(a.plus(&b).unwrap(), JulianChronology::INSTANCE.period(1, 13, 33));
        assert_eq!(a.minus(&b).unwrap(), JulianChronology::INSTANCE.period(1, -9, -27));
        assert_eq!(a.multiplied_by(3).unwrap(), JulianChronology::INSTANCE.period(3, 6, 9));
        assert_eq!(a.negated().unwrap(), JulianChronology::INSTANCE.period(-1, -2, -3));
        assert!(a.negated().unwrap().is_negative());
        assert!(!a.is_negative());
    }

    #[test]
    fn test_overflow() {
        let max = JulianChronology::INSTANCE.period(i32::MAX, 0, 0);
        assert_eq!(
            max.plus(&JulianChronology::INSTANCE.period(1, 0, 0)),
            Err(CalendarError::ArithmeticOverflow("period"))
        );
        assert!(
            JulianChronology::INSTANCE
                .period(i32::MIN, 0, 0)
                .negated()
                .is_err()
        );
    }

    #[test]
    fn test_normalized() {
        struct TestCase {
            period:      (i32, i32, i32),
            expected:    (i32, i32, i32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                period:      (1, 14, 3),
                expected:    (2, 2, 3),
                description: "months carry into years",
            },
            TestCase {
                period:      (1, -14, 0),
                expected:    (0, -2, 0),
                description: "years and months take the same sign",
            },
            TestCase {
                period:      (-1, 25, 40),
                expected:    (1, 1, 40),
                description: "days are untouched",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.period;
            let normalized = JulianChronology::INSTANCE.period(y, m, d).normalized().unwrap();
            let (ey, em, ed) = case.expected;
            assert_eq!(
                normalized,
                JulianChronology::INSTANCE.period(ey, em, ed),
                "{}",
                case.description
            );
        }

        let ifc = InternationalFixedChronology::INSTANCE.period(0, 13, 0);
        assert_eq!(
            ifc.normalized().unwrap(),
            InternationalFixedChronology::INSTANCE.period(1, 0, 0)
        );
    }

    #[test]
    fn test_add_to_and_subtract_from() {
        let start = JulianDate::of(2012, 1, 31).unwrap();
        let period = JulianChronology::INSTANCE.period(0, 1, 1);
        let end = period.add_to(&start).unwrap();
        assert_eq!(end, JulianDate::of(2012, 3, 1).unwrap());
        assert_eq!(start.plus_period(&period).unwrap(), end);
        assert_eq!(
            period.subtract_from(&end).unwrap(),
            JulianDate::of(2012, 1, 31).unwrap()
        );
    }
}
