//! CSV/JSON export endpoint.

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use footstats_core::{
    aggregate, export::sanitize_stem, filter, standings, ExportError, ExportPaths, Exporter,
    MatchRow, StandingRow, StatsRow, Team, TeamRow,
};

use super::error::{error_response, export_error, provider_error, ApiError};
use super::teams::{date_range, resolve_team};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub team: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub team: Team,
    pub results: ExportPaths,
    pub stats: ExportPaths,
    pub teams: ExportPaths,
    pub standings: ExportPaths,
}

/// POST /api/v1/export
///
/// Write the team's results and statistics, the team list and the league
/// table to the configured output directory.
pub async fn export_team(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiError> {
    let range = date_range(body.from, body.to)?;
    let snapshot = state.snapshot(&range).await.map_err(provider_error)?;
    let team = resolve_team(&body.team, &snapshot.teams)?.team;

    let selected = filter(team.id, &snapshot.matches, &range);
    let summary = aggregate(team.id, &selected);

    let results = MatchRow::from_records(&selected, &snapshot.teams);
    let stats = vec![StatsRow::new(&team, &summary)];
    let teams: Vec<TeamRow> = snapshot.teams.iter().map(TeamRow::from).collect();
    let table = standings(&snapshot.teams, &snapshot.matches, &range);

    let exporter = state.exporter().clone();
    let stem = sanitize_stem(&team.name);

    let written = tokio::task::spawn_blocking(move || {
        write_all(&exporter, &stem, &results, &stats, &teams, &table)
    })
    .await
    .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
    .map_err(export_error)?;

    info!(
        "Exported {} to {}",
        team.name,
        state.exporter().output_dir().display()
    );

    let (results, stats, teams, standings) = written;
    Ok(Json(ExportResponse {
        team,
        results,
        stats,
        teams,
        standings,
    }))
}

type Written = (ExportPaths, ExportPaths, ExportPaths, ExportPaths);

fn write_all(
    exporter: &Exporter,
    stem: &str,
    results: &[MatchRow],
    stats: &[StatsRow],
    teams: &[TeamRow],
    table: &[StandingRow],
) -> Result<Written, ExportError> {
    Ok((
        exporter.write(&format!("{}_results", stem), results)?,
        exporter.write(&format!("{}_stats", stem), stats)?,
        exporter.write("teams", teams)?,
        exporter.write("standings", table)?,
    ))
}
