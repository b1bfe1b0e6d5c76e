use super::highlight::HighlightMode;
use super::types::{SearchError, SearchParams, SearchResponse};
use crate::corpus::CorpusIndex;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const MISSING_QUERY: &str = "missing search query in URL params";

/// `GET /search` plus static assets from `static_dir` for every other path.
pub fn build_router(
    index: Arc<CorpusIndex>,
    mode: HighlightMode,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(Extension(index))
        .layer(Extension(mode))
        .layer(TraceLayer::new_for_http())
}

pub async fn handle_search(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(index): Extension<Arc<CorpusIndex>>,
    Extension(mode): Extension<HighlightMode>,
) -> Response {
    let query = match SearchParams::from_pairs(pairs).q {
        Some(q) if !q.is_empty() => q,
        _ => {
            tracing::debug!("Rejected search without query");
            return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
        }
    };

    // Scans are CPU-bound; keep them off the async workers.
    let outcome = tokio::task::spawn_blocking(move || run_search(&index, &query, mode)).await;

    match outcome {
        Ok(Ok(body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(SearchError::Worker(err.to_string())),
    }
}

fn run_search(index: &CorpusIndex, query: &str, mode: HighlightMode) -> Result<Vec<u8>, SearchError> {
    let results = index.search_with(query, mode)?;
    tracing::info!("Query '{}' returned {} snippets", query, results.len());

    let body = serde_json::to_vec(&SearchResponse { results })?;
    Ok(body)
}

fn error_response(err: SearchError) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!("Search failed: {}", err);
    } else {
        tracing::warn!("Search rejected: {}", err);
    }
    (status, err.to_string()).into_response()
}
