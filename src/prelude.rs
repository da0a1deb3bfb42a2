//! Prelude module for pay_periods crate.
//!
//! Re-exports the derive_more derives used across the crate.

pub use derive_more::Display;
