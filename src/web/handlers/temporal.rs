// GET /api/temporal-data — per-day record counts for the timeline.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{load_filtered, FilterQuery};
use crate::sentiment::stats::daily_counts;
use crate::web::AppState;

pub async fn get_temporal(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Response {
    let posts = match load_filtered(&state, &filter) {
        Ok(posts) => posts,
        Err(response) => return response,
    };

    let counts: Vec<serde_json::Value> = daily_counts(&posts)
        .into_iter()
        .map(|(date, count)| {
            serde_json::json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "count": count,
            })
        })
        .collect();

    Json(counts).into_response()
}
