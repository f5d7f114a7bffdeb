//! Shared value types and the engine error taxonomy.
//!
//! Everything here is an immutable value object: the engine receives teams and
//! match records from the caller and hands back freshly computed summaries.

mod types;

pub use types::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The query did not resolve to any team above the similarity threshold.
    #[error("No team matches '{query}'")]
    NotFound { query: String },

    /// Head-to-head was requested between a team and itself.
    #[error("Both queries resolve to the same team (id {team_id})")]
    SameTeam { team_id: TeamId },

    /// A date range was built with `start` after `end`.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
