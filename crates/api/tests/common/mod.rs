use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use estatenexus_api::config::ServerConfig;
use estatenexus_api::router::build_app_router;
use estatenexus_api::state::AppState;
use estatenexus_insights::DisabledProvider;

/// Build a test `ServerConfig` with safe defaults and no credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        gemini_api_key: None,
        gemini_model: "gemini-3-flash-preview".to_string(),
    }
}

/// Build the full application router with no database pool and a disabled
/// narrative provider, exercising the same middleware stack production
/// uses. This is the degraded mode the server enters when `DATABASE_URL`
/// is unset.
pub fn build_degraded_app() -> Router {
    let config = test_config();
    let state = AppState {
        pool: None,
        config: Arc::new(config.clone()),
        insights: Arc::new(DisabledProvider),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
