//! API handlers

use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::api::AppState;
use crate::query::{sort_results, SearchQuery};
use crate::Result;

const OPTION_HEADER: HeaderName = HeaderName::from_static("option");

/// Search words upstream and return them sorted by syllable count.
///
/// Success and failure responses alike carry `option: *`.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let mut response = match run_search(&state, &pairs).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    };

    response
        .headers_mut()
        .insert(OPTION_HEADER, HeaderValue::from_static("*"));
    response
}

async fn run_search(state: &AppState, pairs: &[(String, String)]) -> Result<Response> {
    let query = SearchQuery::from_pairs(pairs)?;

    let mut words = state.source.lookup(&query).await?;
    sort_results(&mut words);

    let body = serde_json::to_vec(&words)?;
    tracing::info!(
        term = %query.term,
        mode = ?query.mode,
        count = words.len(),
        "Search completed"
    );

    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

/// Catch-all for unknown paths and methods
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
