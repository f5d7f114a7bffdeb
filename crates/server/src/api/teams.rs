//! Team listing, name search, per-team statistics and the league table.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use footstats_core::{
    aggregate, chart_title, filter, render_results_pie, resolve_match, standings as league_table,
    DateRange, MatchKind, MatchRow, Resolution, ResultSummary, StandingRow, Team,
};

use super::error::{chart_error, engine_error, provider_error, ApiError};
use crate::metrics::RESOLUTIONS_TOTAL;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub team: Team,
    pub kind: MatchKind,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub team: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub team: Team,
    pub range: DateRange,
    pub summary: ResultSummary,
    pub goal_difference: i64,
    pub points: u32,
    /// Completed matches counted in the summary.
    pub matches: Vec<MatchRow>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// ============================================================================
// Shared helpers
// ============================================================================

pub(super) fn date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<DateRange, ApiError> {
    DateRange::new(from, to).map_err(engine_error)
}

/// Resolve a team name and count the outcome.
pub(super) fn resolve_team(query: &str, teams: &[Team]) -> Result<Resolution, ApiError> {
    match resolve_match(query, teams) {
        Ok(resolution) => {
            count_resolution(resolution.kind.as_str());
            Ok(resolution)
        }
        Err(e) => {
            count_resolution("not_found");
            Err(engine_error(e))
        }
    }
}

/// Bump the resolution counter for one outcome label.
pub(super) fn count_resolution(outcome: &str) {
    RESOLUTIONS_TOTAL.with_label_values(&[outcome]).inc();
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/teams
///
/// All teams of the configured competition.
pub async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.provider().fetch_teams().await.map_err(provider_error)?;
    Ok(Json(teams))
}

/// GET /api/v1/search?name=
///
/// Resolve a possibly misspelled team name.
pub async fn search_team(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let teams = state.provider().fetch_teams().await.map_err(provider_error)?;
    let resolution = resolve_team(&params.name, &teams)?;

    Ok(Json(SearchResponse {
        query: params.name,
        team: resolution.team,
        kind: resolution.kind,
        score: resolution.score,
    }))
}

/// GET /api/v1/stats?team=&from=&to=
///
/// Win/draw/loss and goal totals for one team.
pub async fn team_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> Result<Json<StatsResponse>, ApiError> {
    let range = date_range(params.from, params.to)?;
    let snapshot = state.snapshot(&range).await.map_err(provider_error)?;
    let team = resolve_team(&params.team, &snapshot.teams)?.team;

    let selected = filter(team.id, &snapshot.matches, &range);
    let summary = aggregate(team.id, &selected);

    Ok(Json(StatsResponse {
        goal_difference: summary.goal_difference(),
        points: summary.points(),
        matches: MatchRow::from_records(&selected, &snapshot.teams),
        team,
        range,
        summary,
    }))
}

/// GET /api/v1/stats/chart?team=&from=&to=
///
/// Wins, draws and losses as an SVG pie chart.
pub async fn team_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let range = date_range(params.from, params.to)?;
    let snapshot = state.snapshot(&range).await.map_err(provider_error)?;
    let team = resolve_team(&params.team, &snapshot.teams)?.team;

    let summary = aggregate(team.id, &filter(team.id, &snapshot.matches, &range));
    let svg = render_results_pie(&chart_title(&team.name), &summary).map_err(chart_error)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// GET /api/v1/standings?from=&to=
///
/// League table computed from completed matches.
pub async fn standings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<StandingRow>>, ApiError> {
    let range = date_range(params.from, params.to)?;
    let snapshot = state.snapshot(&range).await.map_err(provider_error)?;
    Ok(Json(league_table(&snapshot.teams, &snapshot.matches, &range)))
}
