//! HTTP API handlers
//!
//! Only liveness endpoints are served; every page renders from local mock
//! data.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use spanel_model::{ApiResponse, HealthData};
use tokio::net::TcpStream;

use crate::config::Config;

const REDIS_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Routes mounted under `/app/api/v0`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/app/api/v0/health", get(health_handler))
        .route("/app/api/v0/ping", get(ping_handler))
        .with_state(state)
}

/// `host:port` of a `redis://` URL. The default port is 6379.
fn redis_address(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw).ok()?;
    if !matches!(url.scheme(), "redis" | "rediss") {
        return None;
    }
    let host = url.host_str()?;
    Some(format!("{}:{}", host, url.port().unwrap_or(6379)))
}

/// "disabled" without a URL, otherwise whether the server accepts a connection.
async fn redis_state(redis_url: Option<&str>) -> &'static str {
    let Some(raw) = redis_url else {
        return "disabled";
    };
    let Some(addr) = redis_address(raw) else {
        tracing::warn!(url = raw, "Unparseable redis_url");
        return "error";
    };
    match tokio::time::timeout(REDIS_PROBE_TIMEOUT, TcpStream::connect(&addr)).await {
        Ok(Ok(_)) => "ok",
        Ok(Err(e)) => {
            tracing::debug!(%addr, error = %e, "Redis probe failed");
            "error"
        }
        Err(_) => {
            tracing::debug!(%addr, "Redis probe timed out");
            "error"
        }
    }
}

/// GET /app/api/v0/health
pub async fn health_handler(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let redis = redis_state(state.config.redis_url.as_deref()).await;
    Json(ApiResponse::ok(
        "ok",
        HealthData {
            version: state.config.version.clone(),
            redis: redis.to_string(),
        },
    ))
}

/// GET /app/api/v0/ping
pub async fn ping_handler() -> Json<ApiResponse<()>> {
    Json(ApiResponse::empty("pong"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let Json(resp) = ping_handler().await;
        assert_eq!(resp.ret, 1);
        assert_eq!(resp.msg, "pong");
        assert!(resp.data.is_none());
    }

    #[tokio::test]
    async fn test_health_without_redis_reports_disabled() {
        let state = AppState::new(Config::default());
        let Json(resp) = health_handler(State(state)).await;
        assert!(resp.is_ok());
        let data = resp.data.unwrap();
        assert_eq!(data.redis, "disabled");
        assert_eq!(data.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_with_bad_redis_url_reports_error() {
        let state = AppState::new(Config {
            redis_url: Some("not a url".to_string()),
            ..Config::default()
        });
        let Json(resp) = health_handler(State(state)).await;
        assert_eq!(resp.data.unwrap().redis, "error");
    }

    #[test]
    fn test_redis_address() {
        assert_eq!(redis_address("redis://cache:6380/0").as_deref(), Some("cache:6380"));
        assert_eq!(redis_address("redis://localhost").as_deref(), Some("localhost:6379"));
        assert_eq!(redis_address("http://localhost"), None);
    }

    #[tokio::test]
    async fn test_router_serves_health_json() {
        use axum::body::{to_bytes, Body};
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let app = router(AppState::new(Config::default()));
        let req = Request::builder()
            .uri("/app/api/v0/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ret"], 1);
        assert_eq!(json["data"]["redis"], "disabled");

        let req = Request::builder()
            .uri("/app/api/v0/missing")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_redis_probe_against_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("redis://127.0.0.1:{port}");
        assert_eq!(redis_state(Some(&url)).await, "ok");
    }
}
