//! Team resolution: map a user-typed, possibly misspelled name to a canonical team.
//!
//! Matching runs in three passes and stops at the first that yields a candidate:
//!
//! 1. **Exact**: case-insensitive equality with the name, short name,
//!    abbreviation or an alias.
//! 2. **Substring**: the query is contained in one of the team's names, or
//!    one of the names is contained in the query ("madrid" -> "Real Madrid CF").
//! 3. **Similarity**: best edit-distance / bigram score against the team's
//!    names, accepted only at or above [`SIMILARITY_THRESHOLD`].
//!
//! Within a pass the highest score wins, then the shortest `name`, then the
//! lowest numeric id (so id 9 beats id 10).
//!
//! # Example
//!
//! ```ignore
//! use footstats_core::resolver::resolve;
//!
//! let team = resolve("madrid", &teams)?;
//! assert_eq!(team.name, "Real Madrid CF");
//! ```

mod scoring;

use serde::{Deserialize, Serialize};

use crate::model::{EngineError, Team};

use scoring::normalize;

/// Minimum similarity score for the fuzzy pass.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Minimum length of the contained string in the substring pass.
pub const MIN_SUBSTRING_LEN: usize = 3;

/// Which pass produced a resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Substring,
    Similarity,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
            MatchKind::Similarity => "similarity",
        }
    }
}

/// A resolved team together with how it was found.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resolution {
    pub team: Team,
    pub kind: MatchKind,
    /// 1.0 for exact and substring matches.
    pub score: f64,
}

/// Resolve a query to a single canonical team.
pub fn resolve(query: &str, candidates: &[Team]) -> Result<Team, EngineError> {
    resolve_match(query, candidates).map(|r| r.team)
}

/// Resolve a query and report which pass matched.
pub fn resolve_match(query: &str, candidates: &[Team]) -> Result<Resolution, EngineError> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Err(not_found(query));
    }

    let exact = candidates
        .iter()
        .filter(|t| scoring::is_exact(&normalized, t))
        .map(|t| (t, 1.0));
    if let Some((team, score)) = pick_best(exact) {
        return Ok(Resolution {
            team: team.clone(),
            kind: MatchKind::Exact,
            score,
        });
    }

    let contained = candidates
        .iter()
        .filter(|t| scoring::is_substring(&normalized, t, MIN_SUBSTRING_LEN))
        .map(|t| (t, 1.0));
    if let Some((team, score)) = pick_best(contained) {
        return Ok(Resolution {
            team: team.clone(),
            kind: MatchKind::Substring,
            score,
        });
    }

    let similar = candidates
        .iter()
        .map(|t| (t, scoring::similarity(&normalized, t)))
        .filter(|(_, score)| *score >= SIMILARITY_THRESHOLD);
    match pick_best(similar) {
        Some((team, score)) => Ok(Resolution {
            team: team.clone(),
            kind: MatchKind::Similarity,
            score,
        }),
        None => Err(not_found(query)),
    }
}

fn not_found(query: &str) -> EngineError {
    EngineError::NotFound {
        query: query.to_string(),
    }
}

/// Highest score, then shortest name (in characters), then the lowest
/// numeric id.
fn pick_best<'a>(scored: impl Iterator<Item = (&'a Team, f64)>) -> Option<(&'a Team, f64)> {
    scored.min_by(|(a, score_a), (b, score_b)| {
        score_b
            .total_cmp(score_a)
            .then_with(|| a.name.chars().count().cmp(&b.name.chars().count()))
            .then_with(|| a.id.cmp(&b.id))
    })
}
