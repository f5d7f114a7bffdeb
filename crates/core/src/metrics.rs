//! Prometheus metrics for core components.
//!
//! Only the collaborators are instrumented (provider client, exporter); the
//! engine functions stay side-effect free.

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Provider Metrics
// =============================================================================

/// Provider requests by endpoint and result.
pub static PROVIDER_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("footstats_provider_requests_total", "Total provider API requests"),
        &["endpoint", "result"], // endpoint: "teams" | "matches", result: "ok" | "error"
    )
    .unwrap()
});

/// Provider request duration in seconds.
pub static PROVIDER_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "footstats_provider_request_duration_seconds",
            "Provider API request duration in seconds",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["endpoint"],
    )
    .unwrap()
});

// =============================================================================
// Export Metrics
// =============================================================================

/// Files written by the exporter, by format.
pub static EXPORT_FILES_WRITTEN: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("footstats_export_files_written_total", "Export files written"),
        &["format"], // "csv" | "json"
    )
    .unwrap()
});

/// All core metrics, for registration by the server.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PROVIDER_REQUESTS.clone()),
        Box::new(PROVIDER_REQUEST_DURATION.clone()),
        Box::new(EXPORT_FILES_WRITTEN.clone()),
    ]
}
