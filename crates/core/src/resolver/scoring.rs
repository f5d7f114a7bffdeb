//! Name normalisation and similarity scoring.

use strsim::{normalized_levenshtein, sorensen_dice};

use crate::model::Team;

/// Lowercase, replace punctuation with spaces, collapse whitespace.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display names that participate in substring and similarity matching.
fn display_names(team: &Team) -> impl Iterator<Item = String> + '_ {
    [team.name.as_str(), team.short_name.as_str()]
        .into_iter()
        .chain(team.aliases.iter().map(String::as_str))
        .map(normalize)
        .filter(|n| !n.is_empty())
}

/// Exact match on name, short name, abbreviation or alias.
pub(crate) fn is_exact(query: &str, team: &Team) -> bool {
    display_names(team).any(|n| n == query)
        || team.tla.as_deref().is_some_and(|tla| normalize(tla) == query)
}

/// Containment in either direction. The contained side must be at least
/// `min_len` characters.
pub(crate) fn is_substring(query: &str, team: &Team, min_len: usize) -> bool {
    let query_len = query.chars().count();
    display_names(team).any(|n| {
        (query_len >= min_len && n.contains(query))
            || (n.chars().count() >= min_len && query.contains(n.as_str()))
    })
}

/// Best similarity (0.0-1.0) between the query and any of the team's names.
pub(crate) fn similarity(query: &str, team: &Team) -> f64 {
    display_names(team)
        .map(|n| name_similarity(query, &n))
        .fold(0.0, f64::max)
}

/// Query tokens this long must each have a close counterpart in the name.
const DISTINCT_TOKEN_LEN: usize = 4;

/// Floor for a distinct query token's best edit-distance ratio.
const DISTINCT_TOKEN_FLOOR: f64 = 0.5;

fn name_similarity(query: &str, name: &str) -> f64 {
    let name_tokens = name_tokens(name);
    let query_tokens: Vec<&str> = query.split(' ').collect();
    let ratios: Vec<f64> = query_tokens
        .iter()
        .map(|qt| best_token_ratio(qt, &name_tokens))
        .collect();

    // "real valladolid" shares "real" with "real madrid" and nothing else.
    let unmatched = query_tokens.iter().zip(&ratios).any(|(qt, ratio)| {
        qt.chars().count() >= DISTINCT_TOKEN_LEN && *ratio < DISTINCT_TOKEN_FLOOR
    });
    if unmatched {
        return 0.0;
    }

    normalized_levenshtein(query, name)
        .max(sorensen_dice(query, name))
        .max(token_similarity(&ratios))
}

/// Name tokens of 3 or more characters ("fc", "de" are dropped).
fn name_tokens(name: &str) -> Vec<&str> {
    name.split(' ').filter(|t| t.chars().count() >= 3).collect()
}

fn best_token_ratio(query_token: &str, name_tokens: &[&str]) -> f64 {
    name_tokens
        .iter()
        .map(|nt| normalized_levenshtein(query_token, nt))
        .fold(0.0, f64::max)
}

/// Average of the per-token best ratios.
fn token_similarity(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}
