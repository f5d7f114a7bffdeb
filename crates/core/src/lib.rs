pub mod chart;
pub mod config;
pub mod export;
pub mod h2h;
pub mod metrics;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod stats;
pub mod testing;

pub use chart::{chart_title, render_results_pie, ChartError};
pub use config::{
    config_path, load_config, load_config_from_str, validate_config, Config, ConfigError,
    ExportConfig, ProviderConfig, SanitizedConfig, ServerConfig, CONFIG_PATH_ENV,
    DEFAULT_CONFIG_PATH,
};
pub use export::{ExportError, ExportPaths, Exporter, MatchRow, StatsRow, TeamRow};
pub use h2h::{compare_head_to_head, head_to_head, summarize, H2HReport, Meeting};
pub use model::{
    DateRange, EngineError, H2HSummary, MatchRecord, MatchStatus, ResultSummary, Team, TeamId,
};
pub use provider::{FootballDataClient, MatchProvider, ProviderError};
pub use resolver::{resolve, resolve_match, MatchKind, Resolution, SIMILARITY_THRESHOLD};
pub use stats::{aggregate, filter, standings, StandingRow};
