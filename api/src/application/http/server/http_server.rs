use std::sync::Arc;
use std::time::Duration;

use crate::application::http::health::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::rate_limit::rate_limit_middleware;
use crate::args::Args;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{
    ACCEPT, CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{any, get};
use axum_prometheus::PrometheusMetricLayer;
use insightchef_core::{application::create_service, domain::common::InsightChefConfig};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = InsightChefConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .max_age(Duration::from_secs(86400));

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let api_router = Router::new()
        .merge(recipe_routes(state.clone()))
        .route(&format!("{}/api/{{*path}}", root_path), any(not_found))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    let mut router = axum::Router::new()
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url, ApiDoc::openapi()),
        )
        .merge(api_router)
        .merge(health_routes(&root_path));

    router = match &state.args.server.static_dir {
        Some(static_dir) => router.fallback_service(
            ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html"))),
        ),
        None => router.fallback(not_found),
    };

    if state.args.server.metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(DefaultBodyLimit::max(state.args.server.body_limit_bytes))
        .layer(trace_layer)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum_test::TestServer;
    use clap::Parser;
    use httpmock::prelude::*;
    use insightchef_core::domain::recipe::samples::sample_recipes;
    use serde_json::{Value, json};

    use super::*;

    fn server_with(extra: &[&str]) -> TestServer {
        let mut argv = vec!["insightchef-api", "--metrics", "false"];
        argv.extend_from_slice(extra);
        let args = Arc::new(Args::parse_from(argv));
        let app = router(state(args).unwrap()).unwrap();
        TestServer::new(app).unwrap()
    }

    fn live_server(upstream: &MockServer, sample_mode: &str, extra: &[&str]) -> TestServer {
        let base_url = upstream.base_url();
        let mut argv = vec![
            "--sample-mode",
            sample_mode,
            "--anthropic-api-key",
            "sk-test",
            "--anthropic-base-url",
            base_url.as_str(),
        ];
        argv.extend_from_slice(extra);
        server_with(&argv)
    }

    fn request_body() -> Value {
        json!({
            "ingredients": "chicken, rice",
            "cookingTime": 33,
            "dietary": ["Vegan", "Bogus"]
        })
    }

    #[tokio::test]
    async fn test_sample_mode_returns_fixed_recipes_without_upstream_call() {
        let upstream = MockServer::start_async().await;
        let mock = upstream
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200);
            })
            .await;
        let server = live_server(&upstream, "always", &[]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["source"], "sample");
        assert_eq!(body["recipes"], serde_json::to_value(sample_recipes()).unwrap());
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_missing_key_defaults_to_samples() {
        let server = server_with(&["--anthropic-api-key", ""]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["source"], "sample");
        assert!(!body["recipes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_ingredients_is_bad_request() {
        let upstream = MockServer::start_async().await;
        let mock = upstream
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200);
            })
            .await;
        let server = live_server(&upstream, "never", &[]);

        let response = server
            .post("/api/recipes")
            .json(&json!({"ingredients": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Please provide at least one ingredient.");
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let server = server_with(&["--sample-mode", "always"]);

        let response = server
            .post("/api/recipes")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_live_generation_is_normalized() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .body_contains("Max cooking time: 35 minutes")
                    .body_contains("Dietary requirements: Vegan.");
                then.status(200).json_body(json!({
                    "content": [{
                        "type": "text",
                        "text": "Here you go:\n[{\"name\": \"Rice Bowl\", \"difficulty\": \"Easy\", \"prepTime\": 10, \"cookTime\": 15, \"cuisine\": \"Asian\", \"ingredients\": [\"rice\"], \"instructions\": [\"Cook.\"]}, {\"name\": \"\\u0007\", \"prepTime\": -1}]"
                    }]
                }));
            })
            .await;
        let server = live_server(&upstream, "never", &[]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["source"], "generated");
        assert_eq!(body["recipes"][0]["name"], "Rice Bowl");
        assert_eq!(body["recipes"][0]["cookTime"], 15);
        assert_eq!(body["recipes"][1]["name"], "Untitled Recipe");
        assert_eq!(body["recipes"][1]["prepTime"], 10);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway_without_detail() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(401)
                    .json_body(json!({"error": {"message": "invalid x-api-key"}}));
            })
            .await;
        let server = live_server(&upstream, "never", &[]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let text = response.text();
        assert!(!text.contains("401"));
        assert!(!text.contains("x-api-key"));
        let body: Value = response.json();
        assert_eq!(
            body["error"],
            "The recipe service is temporarily unavailable. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_unparseable_model_text_is_bad_gateway() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200)
                    .json_body(json!({"content": [{"text": "Sorry, no recipes today."}]}));
            })
            .await;
        let server = live_server(&upstream, "never", &[]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_missing_key_without_samples_is_unavailable() {
        let server = server_with(&["--sample-mode", "never", "--anthropic-api-key", ""]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_slow_upstream_is_gateway_timeout() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200)
                    .delay(Duration::from_secs(3))
                    .json_body(json!({"content": [{"text": "[]"}]}));
            })
            .await;
        let server = live_server(&upstream, "never", &["--llm-timeout-secs", "1"]);

        let response = server.post("/api/recipes").json(&request_body()).await;

        response.assert_status(StatusCode::GATEWAY_TIMEOUT);
        let body: Value = response.json();
        assert_eq!(body["error"], "Request took too long. Please try again.");
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let server = server_with(&["--sample-mode", "always", "--rate-limit-max", "2"]);

        for _ in 0..2 {
            server
                .post("/api/recipes")
                .json(&request_body())
                .await
                .assert_status_ok();
        }

        let response = server.post("/api/recipes").json(&request_body()).await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);

        // health checks are not rate limited
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_health() {
        let server = server_with(&[]);

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_unknown_paths_are_json_not_found() {
        let server = server_with(&[]);

        let response = server.get("/api/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({"error": "Not found"}));

        server
            .get("/some/page")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let server = server_with(&[]);

        let response = server.get("/health").await;

        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("x-frame-options"), "DENY");
        assert_eq!(
            response.header("referrer-policy"),
            "strict-origin-when-cross-origin"
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let server = server_with(&["--sample-mode", "always", "--body-limit-bytes", "64"]);

        let response = server
            .post("/api/recipes")
            .json(&json!({"ingredients": "tomato, ".repeat(40)}))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response.assert_json(&json!({"error": "Request body is too large."}));
    }

    #[tokio::test]
    async fn test_static_dir_serves_files_with_index_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>InsightChef</h1>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('chef');").unwrap();
        let static_dir = dir.path().to_str().unwrap();
        let server = server_with(&["--static-dir", static_dir]);

        let asset = server.get("/app.js").await;
        asset.assert_status_ok();
        assert_eq!(asset.text(), "console.log('chef');");

        let page = server.get("/recipes/saved").await;
        page.assert_status_ok();
        assert_eq!(page.text(), "<h1>InsightChef</h1>");

        // api paths never fall through to the page
        let api = server.get("/api/unknown").await;
        api.assert_status(StatusCode::NOT_FOUND);
        api.assert_json(&json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_cors_allows_only_configured_origins() {
        let server = server_with(&["--allowed-origins", "http://localhost:5173"]);

        let allowed = server
            .get("/health")
            .add_header(ORIGIN, HeaderValue::from_static("http://localhost:5173"))
            .await;
        assert_eq!(
            allowed.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );

        let foreign = server
            .get("/health")
            .add_header(ORIGIN, HeaderValue::from_static("http://evil.example"))
            .await;
        assert!(foreign.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_openapi_document_lists_recipe_endpoint() {
        let server = server_with(&[]);

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"]["/api/recipes"]["post"].is_object());
    }
}
