// GET /api/data — filtered records from the results CSV.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{load_filtered, FilterQuery};
use crate::web::AppState;

pub async fn get_data(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Response {
    match load_filtered(&state, &filter) {
        Ok(posts) => Json(posts).into_response(),
        Err(response) => response,
    }
}
