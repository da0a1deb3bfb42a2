//! Command line surface.
//!
//! # Commands
//!
//! - `pay_periods list -s <YYYY-MM-DD>` - print the pay period labels as a table
//!
//! Running without a command prints the help text and exits with status 1.

use clap::{Args, Parser, Subcommand};

use crate::consts::{DEFAULT_DAYS_PER_PAY_PERIOD, DEFAULT_NUMBER_OF_PAY_PERIODS};
use crate::date::{CalendarDate, parse_start_date};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::period::generate;
use crate::table::render_labels;

/// List pay periods as e_MMDD_MMDD labels for cutting and pasting
#[derive(Debug, Parser)]
#[command(name = "pay_periods")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(short = 'L', long = "log_level", value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List pay periods
    List(ListArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ListArgs {
    /// Number of days in each pay period
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DAYS_PER_PAY_PERIOD,
        allow_negative_numbers = true
    )]
    pub days_per_pay_period: i64,

    /// Number of pay periods
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_NUMBER_OF_PAY_PERIODS,
        allow_negative_numbers = true
    )]
    pub number_of_pay_periods: i64,

    /// Start date in format YYYY-mm-dd
    #[arg(short, long, value_parser = parse_start_date)]
    pub start_datetime: CalendarDate,
}

impl Cli {
    /// Runs the selected command and returns the text for stdout.
    ///
    /// # Errors
    /// `Error::Usage` when no command was given, otherwise whatever the
    /// command fails with.
    pub fn run(&self) -> Result<String> {
        match &self.command {
            Some(Command::List(args)) => args.run(),
            None => Err(Error::Usage),
        }
    }
}

impl ListArgs {
    /// # Errors
    /// Returns the generator's error for invalid inputs.
    pub fn run(&self) -> Result<String> {
        let labels = generate(
            self.days_per_pay_period,
            self.number_of_pay_periods,
            self.start_datetime,
        )?;
        Ok(render_labels(&labels))
    }
}
