//! HTTP routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use frontpage_core::{FrontPage, Story, parse_http_url, resolve_mode};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared, read-only request state.
pub struct AppState {
    pub front_page: FrontPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsQuery {
    sort_and_filter: Option<String>,
}

async fn news(
    State(state): State<Arc<AppState>>, Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<Story>>, AppError> {
    let mode = resolve_mode(query.sort_and_filter.as_deref());
    let stories = state.front_page.fetch_ranked(mode).await?;
    tracing::info!(%mode, stories = stories.len(), "served front page");
    Ok(Json(stories))
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin.trim()).with_context(|| format!("Invalid origin: {}", origin)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allow_origin))
}

/// Builds the application router from the server configuration.
pub fn app(config: &ServerConfig) -> anyhow::Result<Router> {
    parse_http_url(&config.upstream_url).context("Invalid upstream URL")?;

    let state = Arc::new(AppState { front_page: FrontPage::with_config(config.front_page()) });

    let mut router = Router::new()
        .route("/", get(news))
        .route("/news", get(news))
        .route("/health", get(health))
        .with_state(state);

    if let Some(dir) = &config.web_dir {
        router = router.nest_service("/app", ServeDir::new(dir));
    }

    Ok(router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ))
        .layer(cors_layer(&config.allowed_origins)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use clap::Parser;
    use tower::ServiceExt;

    const FRONT_PAGE: &str = include_str!("../../../tests/fixtures/front_page.html");

    fn config(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["frontpage-server"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    /// Serves the fixture page on an ephemeral local port.
    async fn upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let page = Router::new().route("/", get(|| async { axum::response::Html(FRONT_PAGE) }));
        tokio::spawn(async move { axum::serve(listener, page).await.unwrap() });
        format!("http://{}/", addr)
    }

    async fn get_response(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn numbers(response: axum::response::Response) -> Vec<u32> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let stories: Vec<Story> = serde_json::from_slice(&body).unwrap();
        stories.iter().map(|s| s.number).collect()
    }

    #[tokio::test]
    async fn test_health() {
        let router = app(&config(&[])).unwrap();
        let response = get_response(router, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_cors_any_origin() {
        let router = app(&config(&[])).unwrap();
        let request = Request::builder()
            .uri("/health")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_cors_origin_list() {
        let router = app(&config(&["--allowed-origins", "http://localhost:3000"])).unwrap();

        let allowed = Request::builder()
            .uri("/health")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(allowed).await.unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "http://localhost:3000");

        let denied = Request::builder()
            .uri("/health")
            .header("Origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(denied).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }

    #[test]
    fn test_invalid_upstream_rejected() {
        assert!(app(&config(&["--upstream-url", "not-a-url"])).is_err());
    }

    #[tokio::test]
    async fn test_news_points_mode() {
        let upstream = upstream().await;
        let router = app(&config(&["--upstream-url", &upstream])).unwrap();
        let response = get_response(router, "/news?sortAndFilter=points-desc-short-titles").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(numbers(response).await, vec![7, 2, 5]);
    }

    #[tokio::test]
    async fn test_root_accepts_client_tokens() {
        let upstream = upstream().await;
        let router = app(&config(&["--upstream-url", &upstream])).unwrap();
        let response = get_response(router, "/?sortAndFilter=number-comments-and-words-greather-than").await;

        assert_eq!(numbers(response).await, vec![1, 6, 3, 4]);
    }

    #[tokio::test]
    async fn test_unknown_or_missing_mode_returns_all() {
        let upstream = upstream().await;
        let router = app(&config(&["--upstream-url", &upstream])).unwrap();

        let response = get_response(router.clone(), "/news?sortAndFilter=garbage").await;
        assert_eq!(numbers(response).await, vec![1, 2, 3, 4, 5, 6, 7]);

        let response = get_response(router, "/news").await;
        assert_eq!(numbers(response).await, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let router = app(&config(&["--upstream-url", "http://127.0.0.1:1/", "--fetch-timeout", "5"])).unwrap();
        let response = get_response(router, "/news").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value["error"].as_str().unwrap().contains("HTTP request failed"));
    }

    #[tokio::test]
    async fn test_web_client_served() {
        let router = app(&config(&["--web-dir", "../../web"])).unwrap();
        let response = get_response(router, "/app/index.html").await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
