//! Alternative calendar systems over a shared count of days.
//!
//! Every calendar converts its dates to and from the epoch day (days since
//! 1970-01-01 in the proleptic Gregorian calendar), which is how dates of
//! different calendars are compared and converted. All calendars share one
//! date contract, [`CalendarDate`], for field access, field adjustment,
//! arithmetic and the distance between dates.
//!
//! ```
//! use alt_calendars::{CalendarDate, EpochDay, Field, InternationalFixedDate, IsoDate};
//!
//! let leap_day = InternationalFixedDate::of(2012, 6, 29).unwrap();
//! assert_eq!(leap_day.to_string(), "Ifc CE 2012/06/29");
//! assert_eq!(leap_day.get_long(Field::DayOfWeek).unwrap(), 0);
//! assert!(leap_day.is_equal(&IsoDate::of(2012, 6, 17).unwrap()));
//! ```

mod adjust;
mod calendars;
mod chronology;
mod consts;
mod date;
mod equations;
mod era;
mod error;
mod period;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use adjust::{
    DateAdjuster, FirstDayOfMonth, FirstDayOfNextMonth, FirstDayOfNextYear, FirstDayOfYear,
    LastDayOfMonth, LastDayOfYear,
};
pub use calendars::*;
pub use chronology::Chronology;
pub use consts::*;
pub use date::{CalendarDate, EpochDay};
pub use era::{AnyEra, CalendarEra, InternationalFixedEra, IsoEra, JulianEra};
pub use error::{CalendarError, CalendarResult, ErrorKind};
pub use period::ChronoPeriod;
pub use range::ValueRange;
pub use types::{CustomField, Field, Unit};
