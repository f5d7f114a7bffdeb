//! Head-to-head comparison endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use footstats_core::{head_to_head, EngineError, H2HReport};

use super::error::{engine_error, provider_error, ApiError};
use super::teams::{count_resolution, date_range};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub team1: String,
    pub team2: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// GET /api/v1/compare?team1=&team2=&from=&to=
///
/// Head-to-head record between two teams, with the meeting history.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<H2HReport>, ApiError> {
    let range = date_range(params.from, params.to)?;
    let snapshot = state.snapshot(&range).await.map_err(provider_error)?;

    let report = head_to_head(
        &params.team1,
        &params.team2,
        &snapshot.teams,
        &snapshot.matches,
        Some(&range),
    );

    match report {
        Ok(report) => {
            count_resolution(report.team_a_kind.as_str());
            count_resolution(report.team_b_kind.as_str());
            Ok(Json(report))
        }
        Err(e) => {
            if matches!(e, EngineError::NotFound { .. }) {
                count_resolution("not_found");
            }
            Err(engine_error(e))
        }
    }
}
