//! Per-team statistics: match selection, result aggregation and league tables.
//!
//! All functions are pure: they take the caller's snapshot of match records
//! and return new values.

mod aggregate;
mod filter;
mod standings;

pub use aggregate::aggregate;
pub use filter::filter;
pub use standings::{standings, StandingRow};

pub(crate) use filter::is_countable;
