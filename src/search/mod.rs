//! Search Service Module
//!
//! Executes phrase queries against the loaded `CorpusIndex` and exposes them over HTTP.
//!
//! ## Query Pipeline
//! 1. **Lookup**: The case-folded query is located in each document's suffix index.
//! 2. **Merge**: Match offsets are sorted and turned into 250-byte context windows; a match
//!    that falls inside the previous window is dropped.
//! 3. **Highlight**: Every occurrence of the query inside a window is wrapped in `<mark>` tags.
//!
//! Results come back grouped by document (in corpus order) and by position within each
//! document. There is no ranking and no result limit.
//!
//! ## Submodules
//! - **`engine`**: Lookup and window merging.
//! - **`highlight`**: Literal or pattern-based `<mark>` insertion.
//! - **`handlers`**: HTTP request handlers and router for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) and request-level errors.

pub mod engine;
pub mod handlers;
pub mod highlight;
pub mod types;

pub use highlight::HighlightMode;
pub use types::{SearchError, SearchHit, SearchResponse};
