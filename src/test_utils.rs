//! Constructors and sample data shared by the test modules.

use crate::calendars::{
    BritishCutoverDate, InternationalFixedDate, IsoDate, JulianDate, Symmetry010Date,
    Symmetry454Date,
};

pub(crate) type Ymd = (i32, u8, u8);

/// One day written in every calendar of the crate.
///
/// `ifc` is `None` before the first International Fixed year.
pub(crate) struct SameDay {
    pub iso:         Ymd,
    pub british:     Ymd,
    pub ifc:         Option<Ymd>,
    pub julian:      Ymd,
    pub sym010:      Ymd,
    pub sym454:      Ymd,
    pub description: &'static str,
}

pub(crate) const SAME_DAYS: [SameDay; 9] = [
    SameDay {
        iso:         (1970, 1, 1),
        british:     (1970, 1, 1),
        ifc:         Some((1970, 1, 1)),
        julian:      (1969, 12, 19),
        sym010:      (1970, 1, 4),
        sym454:      (1970, 1, 4),
        description: "epoch",
    },
    SameDay {
        iso:         (2012, 6, 23),
        british:     (2012, 6, 23),
        ifc:         Some((2012, 7, 6)),
        julian:      (2012, 6, 10),
        sym010:      (2012, 6, 22),
        sym454:      (2012, 6, 20),
        description: "mid 2012",
    },
    SameDay {
        iso:         (1752, 9, 14),
        british:     (1752, 9, 14),
        ifc:         Some((1752, 10, 5)),
        julian:      (1752, 9, 3),
        sym010:      (1752, 9, 13),
        sym454:      (1752, 9, 11),
        description: "first Gregorian day of the British calendar",
    },
    SameDay {
        iso:         (1752, 9, 13),
        british:     (1752, 9, 2),
        ifc:         Some((1752, 10, 4)),
        julian:      (1752, 9, 2),
        sym010:      (1752, 9, 12),
        sym454:      (1752, 9, 10),
        description: "last Julian day of the British calendar",
    },
    SameDay {
        iso:         (1900, 3, 1),
        british:     (1900, 3, 1),
        ifc:         Some((1900, 3, 4)),
        julian:      (1900, 2, 17),
        sym010:      (1900, 2, 30),
        sym454:      (1900, 2, 32),
        description: "after a Gregorian century non-leap year",
    },
    SameDay {
        iso:         (2000, 2, 29),
        british:     (2000, 2, 29),
        ifc:         Some((2000, 3, 4)),
        julian:      (2000, 2, 16),
        sym010:      (2000, 2, 28),
        sym454:      (2000, 2, 30),
        description: "Gregorian leap day",
    },
    SameDay {
        iso:         (2016, 1, 3),
        british:     (2016, 1, 3),
        ifc:         Some((2016, 1, 3)),
        julian:      (2015, 12, 21),
        sym010:      (2015, 12, 37),
        sym454:      (2015, 12, 35),
        description: "last day of a Symmetry leap week",
    },
    SameDay {
        iso:         (1, 1, 1),
        british:     (1, 1, 3),
        ifc:         Some((1, 1, 1)),
        julian:      (1, 1, 3),
        sym010:      (1, 1, 1),
        sym454:      (1, 1, 1),
        description: "first day of the common era",
    },
    SameDay {
        iso:         (0, 12, 30),
        british:     (1, 1, 1),
        ifc:         None,
        julian:      (1, 1, 1),
        sym010:      (0, 12, 29),
        sym454:      (0, 12, 27),
        description: "first Julian day of the common era",
    },
];

pub(crate) fn iso((year, month, day): Ymd) -> IsoDate {
    IsoDate::of(year, month, day).unwrap()
}

pub(crate) fn british((year, month, day): Ymd) -> BritishCutoverDate {
    BritishCutoverDate::of(year, month, day).unwrap()
}

pub(crate) fn ifc((year, month, day): Ymd) -> InternationalFixedDate {
    InternationalFixedDate::of(year, month, day).unwrap()
}

pub(crate) fn julian((year, month, day): Ymd) -> JulianDate {
    JulianDate::of(year, month, day).unwrap()
}

pub(crate) fn sym010((year, month, day): Ymd) -> Symmetry010Date {
    Symmetry010Date::of(year, month, day).unwrap()
}

pub(crate) fn sym454((year, month, day): Ymd) -> Symmetry454Date {
    Symmetry454Date::of(year, month, day).unwrap()
}

/// Epoch days spread over several centuries, the British cutover and the
/// Symmetry leap weeks included.
pub(crate) fn sample_epoch_days() -> impl Iterator<Item = i64> {
    let cutover = crate::calendars::CUTOVER_EPOCH_DAY;
    (-3_000..3_000)
        .step_by(37)
        .chain(cutover - 40..cutover + 40)
        .chain((-700_000..30_000).step_by(997))
        .chain(16_790..16_810)
}
