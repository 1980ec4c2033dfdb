//! Prelude module for the alt_calendars crate.
//!
//! Re-exports the derive macros and the shared date traits used across the
//! calendar modules.

#[allow(unused_imports)]
pub use derive_more::{Display, From};

#[allow(unused_imports)]
pub use crate::chronology::Chronology;
#[allow(unused_imports)]
pub use crate::date::{CalendarDate, EpochDay};
#[allow(unused_imports)]
pub use crate::era::CalendarEra;
#[allow(unused_imports)]
pub use serde::Deserialize;
