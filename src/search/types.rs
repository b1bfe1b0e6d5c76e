use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query string of `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Keeps the first `q` value when the parameter is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        Self { q }
    }
}

/// One retained match: the work it came from and the highlighted context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub work: String,
    #[serde(rename = "match")]
    pub snippet: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

/// Request-level failures. None of them affect the shared index or other requests.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query could not be compiled into a highlighting pattern.
    #[error("invalid search query '{query}': {source}")]
    QuerySyntax {
        query: String,
        #[source]
        source: regex::Error,
    },

    #[error("json marshal failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("search worker failed: {0}")]
    Worker(String),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::QuerySyntax { .. } => StatusCode::BAD_REQUEST,
            SearchError::Serialization(_) | SearchError::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
