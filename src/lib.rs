//! Pay period listing.
//!
//! Computes contiguous pay periods from a start date, a period length in days
//! and a period count, and renders each one as a year-less `e_MMDD_MMDD` label.
//!
//! ```
//! use pay_periods::{CalendarDate, generate};
//!
//! let start: CalendarDate = "2026-01-01".parse().unwrap();
//! let labels = generate(14, 3, start).unwrap();
//! let labels: Vec<&str> = labels.iter().map(|label| label.as_str()).collect();
//! assert_eq!(labels, ["e_0101_0114", "e_0115_0128", "e_0129_0211"]);
//! ```

mod consts;
mod prelude;

pub mod cli;
pub mod date;
pub mod error;
pub mod logging;
pub mod period;
pub mod table;

pub use cli::Cli;
pub use consts::*;
pub use date::{CalendarDate, parse_start_date};
pub use error::{DateError, Error, ErrorKind, Result};
pub use logging::LogLevel;
pub use period::{PayPeriod, PeriodLabel, PeriodSpec, Periods, generate};
pub use table::{render_labels, render_plain};
