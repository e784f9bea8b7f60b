// API handlers — read-only views over the results CSV.

pub mod data;
pub mod stats;
pub mod temporal;
pub mod top_negative;
pub mod words;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::store::ScoredPost;

use super::{api_error, AppState};

/// Common query filters: an optional sentiment class and an inclusive
/// date range (YYYY-MM-DD).
#[derive(Deserialize, Default)]
pub struct FilterQuery {
    pub sentiment: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Apply the query filters to a dataset. Fails on unparseable dates.
pub fn apply_filters(posts: Vec<ScoredPost>, filter: &FilterQuery) -> Result<Vec<ScoredPost>> {
    let start = parse_date(filter.start_date.as_deref())?;
    let end = parse_date(filter.end_date.as_deref())?;

    let sentiment = filter
        .sentiment
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all");

    Ok(posts
        .into_iter()
        .filter(|post| sentiment.map_or(true, |s| post.sentiment == s))
        .filter(|post| start.map_or(true, |d| post.date.date_naive() >= d))
        .filter(|post| end.map_or(true, |d| post.date.date_naive() <= d))
        .collect())
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {s}")),
    }
}

/// Load the results CSV and apply the common filters, mapping failures to
/// the right error responses (500 for load problems, 400 for bad filters).
pub fn load_filtered(state: &AppState, filter: &FilterQuery) -> Result<Vec<ScoredPost>, Response> {
    let posts = state
        .load_results()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    apply_filters(posts, filter).map_err(|e| api_error(StatusCode::BAD_REQUEST, &e.to_string()))
}
