/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Day number of 0000-03-01 counted back from 1970-01-01
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Regex a start date must match on the command line (years 2000-2999)
pub const START_DATE_PATTERN: &str = r"^2\d\d\d-\d\d-\d\d$";

/// Prefix of every pay period label
pub const LABEL_PREFIX: &str = "e";
/// Separator between the label prefix and its month-day pairs
pub const LABEL_SEPARATOR: char = '_';

/// Column header used when rendering labels
pub const PAY_PERIOD_HEADER: &str = "pay_period";
/// Spacing between columns of a plain table
pub const COLUMN_GAP: &str = "  ";

pub const DEFAULT_DAYS_PER_PAY_PERIOD: i64 = 14;
pub const DEFAULT_NUMBER_OF_PAY_PERIODS: i64 = 26;
