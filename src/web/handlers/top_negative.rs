// GET /api/top-negative — the N most negative posts.
//
// Optional ?n= parameter (default 5, max 100).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::sentiment::stats::top_negative;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct TopNegativeQuery {
    pub n: Option<usize>,
}

pub async fn get_top_negative(
    State(state): State<AppState>,
    Query(params): Query<TopNegativeQuery>,
) -> Response {
    let n = params.n.unwrap_or(5).min(100);

    let posts = match state.load_results() {
        Ok(posts) => posts,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };

    let negative: Vec<_> = posts
        .into_iter()
        .filter(|p| p.sentiment == "negative")
        .collect();

    Json(top_negative(&negative, n)).into_response()
}
