//! Calendar systems, one module each, plus the ISO reference calendar.

mod british_cutover;
mod international_fixed;
mod iso;
mod julian;
mod symmetry;
mod symmetry010;
mod symmetry454;

pub use british_cutover::{BritishCutoverChronology, BritishCutoverDate, CUTOVER_EPOCH_DAY};
pub use international_fixed::{InternationalFixedChronology, InternationalFixedDate};
pub use iso::{IsoChronology, IsoDate};
pub use julian::{JulianChronology, JulianDate};
pub use symmetry010::{Symmetry010Chronology, Symmetry010Date, Symmetry010Display, Symmetry010Style};
pub use symmetry454::{Symmetry454Chronology, Symmetry454Date};
