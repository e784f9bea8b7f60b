// Web server — Axum backend serving the dashboard and the JSON API.
//
// The static dashboard is embedded at compile time via include_dir!.
// All /api/* routes serve JSON; every other path falls back to the embedded
// assets. There is no server-side state: each request reloads the results
// CSV and filters/aggregates in memory.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::store::{self, ScoredPost};

pub mod handlers;

// Embedded dashboard assets (plain HTML/JS — no build step needed).
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web/dist");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Reload the results CSV. Called per request — the dataset is small
    /// and the file is the single source of truth.
    pub fn load_results(&self) -> Result<Vec<ScoredPost>> {
        let path = self.config.results_path();
        if !path.exists() {
            anyhow::bail!(
                "Results file not found: {}. Run `moodring analyze` first.",
                path.display()
            );
        }
        store::load_results(&path)
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let state = AppState {
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Moodring dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/data", get(handlers::data::get_data))
        .route("/api/stats", get(handlers::stats::get_stats))
        .route(
            "/api/sentiment-distribution",
            get(handlers::stats::get_distribution),
        )
        .route("/api/temporal-data", get(handlers::temporal::get_temporal))
        .route(
            "/api/top-negative",
            get(handlers::top_negative::get_top_negative),
        )
        .route("/api/top-words", get(handlers::words::get_top_words))
        .fallback(serve_assets)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve the embedded dashboard for all non-API paths.
/// Unknown paths fall back to index.html.
async fn serve_assets(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = ASSETS.get_file(path) {
        return asset_response(file.contents(), path);
    }

    match ASSETS.get_file("index.html") {
        Some(index) => asset_response(index.contents(), "index.html"),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from("Dashboard assets not found."),
        )
            .into_response(),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript",
        "css" => "text/css",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
