//! Common test utilities for in-process API testing with a mock provider.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use footstats_core::{load_config_from_str, testing::MockProvider, MatchProvider, MatchRecord};

/// Re-export fixtures for test convenience
pub use footstats_core::testing::fixtures;

/// Test fixture with an in-process router backed by a [`MockProvider`].
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::with_la_liga().await;
///     let response = fixture.get("/api/v1/search?name=madrid").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock provider - configure teams, matches and failures
    pub provider: Arc<MockProvider>,
    /// Temporary directory holding the export output
    pub temp_dir: TempDir,
    /// Export output directory
    pub output_dir: PathBuf,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a fixture with an empty provider.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().join("output");

        let mut config = load_config_from_str(
            r#"
[provider]
api_key = "test-key"

[server]
host = "127.0.0.1"
port = 8080
"#,
        )
        .expect("Failed to parse test config");
        config.export.output_dir = output_dir.clone();

        let provider = Arc::new(MockProvider::new());
        let state = Arc::new(footstats_server::state::AppState::new(
            config,
            Arc::clone(&provider) as Arc<dyn MatchProvider>,
        ));
        let router = footstats_server::api::create_router(state);

        Self {
            router,
            provider,
            temp_dir,
            output_dir,
        }
    }

    /// Create a fixture seeded with La Liga teams and [`season_matches`].
    pub async fn with_la_liga() -> Self {
        let fixture = Self::new().await;
        fixture.provider.set_teams(fixtures::la_liga_teams()).await;
        fixture.provider.set_matches(season_matches()).await;
        fixture
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// A small 2024/25 slice: three clasicos, Valencia and Getafe games, and an
/// unplayed fixture.
pub fn season_matches() -> Vec<MatchRecord> {
    vec![
        fixtures::finished_match(1, "2024-08-18", 86, 95, 2, 0),
        fixtures::finished_match(2, "2024-10-26", 86, 81, 0, 4),
        fixtures::finished_match(3, "2024-11-09", 82, 81, 1, 1),
        fixtures::finished_match(4, "2025-01-12", 81, 86, 5, 2),
        fixtures::finished_match(5, "2025-03-01", 86, 82, 2, 0),
        fixtures::finished_match(6, "2025-05-11", 81, 86, 4, 3),
        fixtures::scheduled_match(7, "2025-10-26", 86, 81),
    ]
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a response has the expected status code.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $expected:expr) => {
        assert_eq!(
            $response.status,
            $expected,
            "Expected status {}, got {}. Body: {}",
            $expected,
            $response.status,
            $response.text
        );
    };
}
