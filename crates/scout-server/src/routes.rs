use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use scout_core::Fetcher;

use crate::dto::{ScrapeQuery, ScrapeResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Static documentation page served at `/`.
const DOCS_PAGE: &str = include_str!("../static/index.html");

/// Build the router. Rate limiting and the other tower layers are attached
/// by the binary so tests can exercise the handlers directly.
pub fn router<F: Fetcher + 'static>(state: Arc<AppState<F>>) -> Router {
    Router::new()
        .route("/", get(docs))
        .route("/api/scrape", get(scrape::<F>))
        .with_state(state)
}

/// `GET /api/scrape?keyword=<string>`
///
/// Validation failures come back as 400 with the message verbatim; any
/// other pipeline failure is a generic 503 (see [`ApiError`]).
pub async fn scrape<F: Fetcher + 'static>(
    State(state): State<Arc<AppState<F>>>,
    Query(query): Query<ScrapeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let keyword = query.keyword.unwrap_or_default();
    let results = state.pipeline.scrape(&keyword).await?;

    let response = ScrapeResponse {
        keyword: keyword.trim().to_string(),
        count: results.len(),
        results,
    };

    Ok(axum::Json(response))
}

async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
