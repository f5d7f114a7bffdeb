use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{compare, export, handlers, middleware::metrics_middleware, teams};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Teams and per-team statistics
        .route("/teams", get(teams::list_teams))
        .route("/search", get(teams::search_team))
        .route("/stats", get(teams::team_stats))
        .route("/stats/chart", get(teams::team_chart))
        .route("/standings", get(teams::standings))
        // Head-to-head
        .route("/compare", get(compare::compare))
        // CSV/JSON export
        .route("/export", post(export::export_team))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
