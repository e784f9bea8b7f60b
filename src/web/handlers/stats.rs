// GET /api/stats and /api/sentiment-distribution — aggregate views.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{load_filtered, FilterQuery};
use crate::sentiment::SentimentStats;
use crate::web::AppState;

/// GET /api/stats — counts, percentages, and mean polarity for the
/// filtered subset. Percentages are zero on an empty subset.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Response {
    let posts = match load_filtered(&state, &filter) {
        Ok(posts) => posts,
        Err(response) => return response,
    };

    let stats = SentimentStats::from_posts(&posts);

    Json(serde_json::json!({
        "total": stats.total,
        "positive": { "count": stats.positive_count, "percentage": stats.positive_percent },
        "negative": { "count": stats.negative_count, "percentage": stats.negative_percent },
        "neutral": { "count": stats.neutral_count, "percentage": stats.neutral_percent },
        "mean_polarity": stats.mean_polarity,
    }))
    .into_response()
}

/// GET /api/sentiment-distribution — per-class counts for the pie view.
pub async fn get_distribution(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Response {
    let posts = match load_filtered(&state, &filter) {
        Ok(posts) => posts,
        Err(response) => return response,
    };

    let stats = SentimentStats::from_posts(&posts);

    Json(serde_json::json!({
        "positive": stats.positive_count,
        "negative": stats.negative_count,
        "neutral": stats.neutral_count,
    }))
    .into_response()
}
