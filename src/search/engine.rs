use super::highlight::{HighlightMode, Highlighter};
use super::types::{SearchError, SearchHit};
use crate::corpus::CorpusIndex;
use crate::corpus::suffix::fold_case;
use std::ops::Range;

/// Bytes of context kept on each side of a match.
pub const CONTEXT_RADIUS: usize = 250;

impl CorpusIndex {
    /// Case-insensitive substring search with literal highlighting.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.search_with(query, HighlightMode::Literal)
    }

    /// Searches every document in order and returns one hit per retained context window,
    /// grouped by document and ordered by position within each document.
    pub fn search_with(
        &self,
        query: &str,
        mode: HighlightMode,
    ) -> Result<Vec<SearchHit>, SearchError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let highlighter = Highlighter::new(query, mode)?;
        let needle = fold_case(query);

        let mut hits = Vec::new();
        for doc in self.documents() {
            let offsets = doc.index().lookup(needle.as_bytes());
            if offsets.is_empty() {
                continue;
            }

            for window in merge_windows(offsets, doc.text(), CONTEXT_RADIUS) {
                hits.push(SearchHit {
                    work: doc.title().to_string(),
                    snippet: highlighter.highlight(&doc.text()[window]),
                });
            }
        }

        Ok(hits)
    }
}

/// Turns match offsets into context windows over `text`.
///
/// This is coverage-based, not true overlap detection: a match is dropped whenever it
/// starts before the end of the last retained window, even if its own window would have
/// reached further. Matches can be under-reported as a result.
///
/// Window edges are moved outward to the nearest char boundary.
pub fn merge_windows(mut offsets: Vec<usize>, text: &str, radius: usize) -> Vec<Range<usize>> {
    offsets.sort_unstable();

    let mut windows = Vec::new();
    let mut last_covered_end = 0;

    for idx in offsets {
        if idx < last_covered_end {
            continue;
        }

        let start = floor_char_boundary(text, idx.saturating_sub(radius));
        let end = ceil_char_boundary(text, (idx + radius).min(text.len()));
        last_covered_end = end;
        windows.push(start..end);
    }

    windows
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
