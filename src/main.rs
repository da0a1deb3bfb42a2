//! `pay_periods` binary.
//!
//! ```bash
//! pay_periods list -s 2026-01-01
//! pay_periods -L INFO list -d 7 -n 52 -s 2026-01-05
//! ```

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use pay_periods::logging::with_logging;
use pay_periods::{Cli, ErrorKind};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    with_logging(cli.log_level, || match cli.run() {
        Ok(table) => {
            println!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) if err.kind() == ErrorKind::Usage => {
            if let Err(io_err) = Cli::command().print_help() {
                error!("Failed to print help: {io_err}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    })
}
