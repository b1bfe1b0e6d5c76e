//! Corpus Data Types
//!
//! The read-only structures produced by loading a corpus.

use super::suffix::{SuffixIndex, fold_case};
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort loading. Both are fatal to startup.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read corpus stream: {0}")]
    Read(#[from] std::io::Error),

    /// The stream ended before the end-of-content marker, so the corpus is incomplete.
    #[error("corpus ended after {lines_read} lines without the end-of-content marker")]
    Truncated { lines_read: usize },
}

/// One work: its title, original-case body and a substring index over the folded body.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    text: String,
    index: SuffixIndex,
}

impl Document {
    /// Builds the document and its index. This is the only place a body is indexed.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let index = SuffixIndex::new(fold_case(&text).into_bytes());
        Self {
            title: title.into(),
            text,
            index,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text in its original case, title line excluded.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> &SuffixIndex {
        &self.index
    }
}

/// All documents of a corpus, in the order their titles appeared.
///
/// Built once by `CorpusIndex::load` and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    documents: Vec<Document>,
}

impl CorpusIndex {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(Document::title)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total size of all document bodies in bytes.
    pub fn indexed_bytes(&self) -> usize {
        self.documents.iter().map(|doc| doc.text.len()).sum()
    }
}
