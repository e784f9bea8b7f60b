// GET /api/top-words — ranked words from negative posts.
//
// The original dashboard rendered this as a word-cloud image; the data view
// is kept and the drawing is left to the client. Words are ranked with
// TF-IDF over the cleaned text of negative posts, so terms that show up in
// every complaint get downweighted in favor of distinctive ones.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use serde::Deserialize;
use stop_words::{get, LANGUAGE};

use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct TopWordsQuery {
    pub limit: Option<usize>,
}

pub async fn get_top_words(
    State(state): State<AppState>,
    Query(params): Query<TopWordsQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(25).min(200);

    let posts = match state.load_results() {
        Ok(posts) => posts,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };

    let texts: Vec<String> = posts
        .into_iter()
        .filter(|p| p.sentiment == "negative")
        .map(|p| p.text_cleaned)
        .filter(|t| !t.is_empty())
        .collect();

    if texts.is_empty() {
        return Json(serde_json::json!({ "words": [] })).into_response();
    }

    // Cleaned text already had stopwords removed, but the extractor wants
    // a list anyway — passing it again is harmless.
    let stop_words: Vec<String> = get(LANGUAGE::English);
    let params = TfIdfParams::UnprocessedDocuments(&texts, &stop_words, None);
    let tfidf = TfIdf::new(params);

    let words: Vec<serde_json::Value> = tfidf
        .get_ranked_word_scores(limit)
        .into_iter()
        .map(|(word, score)| serde_json::json!({ "word": word, "score": score }))
        .collect();

    Json(serde_json::json!({ "words": words })).into_response()
}
