//! Mapping of domain errors to HTTP responses.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::{error, warn};

use footstats_core::{ChartError, EngineError, ExportError, ProviderError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn engine_error(err: EngineError) -> ApiError {
    let status = match err {
        EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
        EngineError::SameTeam { .. } | EngineError::InvalidDateRange { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    error_response(status, err.to_string())
}

pub fn provider_error(err: ProviderError) -> ApiError {
    warn!("Provider request failed: {}", err);
    error_response(StatusCode::BAD_GATEWAY, err.to_string())
}

pub fn export_error(err: ExportError) -> ApiError {
    error!("Export failed: {}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub fn chart_error(err: ChartError) -> ApiError {
    error!("Chart rendering failed: {}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
