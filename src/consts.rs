/// Days in a week, shared by every calendar in the crate
pub const DAYS_IN_WEEK: u8 = 7;

/// Months in the Gregorian-shaped calendars (ISO, Julian, British cutover, Symmetry)
pub const MONTHS_IN_YEAR: u8 = 12;

/// Months in the International Fixed calendar
pub const IFC_MONTHS_IN_YEAR: u8 = 13;

/// Days in every regular International Fixed month
pub const IFC_DAYS_IN_MONTH: u8 = 28;

/// Day-of-year of the International Fixed leap day (month 6, day 29)
pub(crate) const IFC_LEAP_DAY_OF_YEAR: u16 = 6 * IFC_DAYS_IN_MONTH as u16 + 1;

/// Days in a standard Symmetry year (52 whole weeks)
pub const SYMMETRY_DAYS_IN_YEAR: u16 = 364;

/// Days in a Symmetry leap year (53 whole weeks)
pub const SYMMETRY_DAYS_IN_LEAP_YEAR: u16 = 371;

/// Leap years in one Symmetry leap cycle
pub(crate) const SYMMETRY_LEAP_YEARS_PER_CYCLE: i64 = 52;
/// Years in one Symmetry leap cycle
pub(crate) const SYMMETRY_CYCLE_YEARS: i64 = 293;
/// Offset of the Symmetry leap rule within the cycle
pub(crate) const SYMMETRY_CYCLE_OFFSET: i64 = 146;
/// Days in one 293-year Symmetry cycle
pub(crate) const SYMMETRY_DAYS_PER_CYCLE: i64 =
    SYMMETRY_CYCLE_YEARS * SYMMETRY_DAYS_IN_YEAR as i64 + SYMMETRY_LEAP_YEARS_PER_CYCLE * 7;

/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a 4-year Julian cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1_461;

/// Days from proleptic Gregorian 0000-01-01 to 1970-01-01
pub(crate) const DAYS_0000_TO_1970: i64 = DAYS_PER_GREGORIAN_CYCLE * 5 - (30 * 365 + 7);
/// Days from proleptic Gregorian 0001-01-01 to 1970-01-01
pub(crate) const DAYS_0001_TO_1970: i64 = DAYS_0000_TO_1970 - 366;
/// Days from Julian 0001-01-01 to ISO 1970-01-01
pub(crate) const JULIAN_0001_TO_ISO_1970: i64 = 678_577 + 40_587;

/// Year of the British switch from the Julian to the Gregorian calendar
pub const CUTOVER_YEAR: i32 = 1752;
/// Month of the British cutover
pub const CUTOVER_MONTH: u8 = 9;
/// First Gregorian day of the British calendar (1752-09-14)
pub const CUTOVER_DAY: u8 = 14;
/// Days removed from the British calendar at the cutover
pub const CUTOVER_DAYS: u8 = 11;
/// Last Julian day-of-month before the cutover (1752-09-02)
pub const CUTOVER_LAST_JULIAN_DAY: u8 = CUTOVER_DAY - CUTOVER_DAYS - 1;

/// Year limits of the ISO reference calendar (inclusive)
pub const ISO_MIN_YEAR: i32 = -999_999_999;
/// Year limits of the ISO reference calendar (inclusive)
pub const ISO_MAX_YEAR: i32 = 999_999_999;

/// Year limits of the Julian and British cutover calendars (inclusive)
pub const JULIAN_MIN_YEAR: i32 = -999_998;
/// Year limits of the Julian and British cutover calendars (inclusive)
pub const JULIAN_MAX_YEAR: i32 = 999_999;

/// Year limits of the International Fixed calendar (inclusive)
pub const IFC_MIN_YEAR: i32 = 1;
/// Year limits of the International Fixed calendar (inclusive)
pub const IFC_MAX_YEAR: i32 = 1_000_000;

/// Year limits of the Symmetry calendars (inclusive)
pub const SYMMETRY_MIN_YEAR: i32 = -1_000_000;
/// Year limits of the Symmetry calendars (inclusive)
pub const SYMMETRY_MAX_YEAR: i32 = 1_000_000;

/// Maximum days in each Julian/Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the leap rule of the calendar)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Date component separator of the ISO-style renderings
pub const DATE_SEPARATOR: char = '-';
/// Date component separator of the fixed-week calendar renderings
pub const FIXED_DATE_SEPARATOR: char = '/';
