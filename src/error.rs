use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::date::CalendarDate;
use crate::prelude::*;

/// Error building or parsing a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Date out of range (must fall within years {}-{})", MIN_YEAR, MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for DateError {}

/// The two failure kinds a caller has to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Bad input value; surfaced to the caller as-is.
    #[display(fmt = "invalid argument")]
    InvalidArgument,
    /// No subcommand was given to the driver.
    #[display(fmt = "usage error")]
    Usage,
}

/// Error type for pay period generation and the command line driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Periods must span at least one day.
    #[error("Invalid days per pay period: {0} (must be at least 1)")]
    InvalidDaysPerPeriod(i64),

    /// Negative period counts are rejected rather than clamped.
    #[error("Invalid number of pay periods: {0} (must not be negative)")]
    InvalidPeriodCount(i64),

    /// Start date failed the accepted pattern or is not a real date.
    #[error("Invalid start date: {0}")]
    InvalidStartDate(#[from] DateError),

    /// The last requested period ends beyond the supported calendar.
    #[error(
        "{period_count} pay periods of {days_per_period} days starting {start} run past the end of the calendar"
    )]
    CalendarOverflow {
        start:           CalendarDate,
        days_per_period: i64,
        period_count:    i64,
    },

    /// No subcommand given.
    #[error("No command given")]
    Usage,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDaysPerPeriod(_)
            | Self::InvalidPeriodCount(_)
            | Self::InvalidStartDate(_)
            | Self::CalendarOverflow { .. } => ErrorKind::InvalidArgument,
            Self::Usage => ErrorKind::Usage,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
