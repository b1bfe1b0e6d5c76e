//! Corpus Module
//!
//! Turns one large concatenated text file into a sequence of searchable works.
//!
//! ## Pipeline
//! 1. **Boundary detection**: `TitleRegistry` recognises the raw title lines that open each work.
//! 2. **Segmentation**: `Segmenter` walks the corpus line by line and splits it into documents,
//!    discarding the preamble and everything after the end-of-content marker.
//! 3. **Indexing**: every document gets a `SuffixIndex` over its case-folded bytes, built once
//!    when the document is closed.
//!
//! The resulting `CorpusIndex` is immutable and is shared read-only by all search requests.
//!
//! ## Submodules
//! - **`titles`**: The fixed catalogue of known work titles.
//! - **`segmenter`**: The line-oriented state machine that produces documents.
//! - **`suffix`**: Suffix array used for substring lookups, plus case folding helpers.
//! - **`loader`**: Reads a corpus from disk (or any buffered reader) into a `CorpusIndex`.
//! - **`types`**: `Document`, `CorpusIndex` and the load error type.

pub mod loader;
pub mod segmenter;
pub mod suffix;
pub mod titles;
pub mod types;

pub use titles::TitleRegistry;
pub use types::{CorpusError, CorpusIndex, Document};

/// Line terminator used by the corpus edition (CRLF).
pub const LINE_TERMINATOR: &str = "\r\n";

/// The raw line that marks the end of indexable content. Anything after it
/// (licence text, metadata) is ignored.
pub const END_MARKER: &str = "  FINIS\r\n";
