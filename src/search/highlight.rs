//! Snippet Highlighting
//!
//! In the default `HighlightMode::Literal` the query is marked wherever its case-folded form
//! occurs in the case-folded window, using the same `fold_case` as the suffix index lookup.
//! Highlighting therefore marks exactly the text that lookup can find.
//!
//! `HighlightMode::Pattern` compiles the query into a case-insensitive regex instead. In that
//! mode a query with metacharacters (or a char with a wider lower-case form) may highlight text
//! other than the located substring, and an invalid pattern fails the request with
//! `SearchError::QuerySyntax`.

use super::types::SearchError;
use crate::corpus::suffix::fold_case;
use clap::ValueEnum;
use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HighlightMode {
    /// Mark exact (case-folded) occurrences of the query.
    #[default]
    Literal,
    /// Use the query as a case-insensitive regular expression.
    Pattern,
}

/// Compiled once per query and reused for every window of every document.
#[derive(Debug, Clone)]
pub enum Highlighter {
    Literal { needle: String },
    Pattern { regex: Regex },
}

impl Highlighter {
    pub fn new(query: &str, mode: HighlightMode) -> Result<Self, SearchError> {
        match mode {
            HighlightMode::Literal => Ok(Self::Literal {
                needle: fold_case(query),
            }),
            HighlightMode::Pattern => {
                let regex = RegexBuilder::new(&format!("({})", query))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| SearchError::QuerySyntax {
                        query: query.to_string(),
                        source,
                    })?;
                Ok(Self::Pattern { regex })
            }
        }
    }

    /// Wraps every match in `window` with `<mark>`/`</mark>`, keeping the original casing.
    pub fn highlight(&self, window: &str) -> String {
        match self {
            Self::Literal { needle } => mark_folded(window, needle),
            Self::Pattern { regex } => {
                let replacement = format!("{}${{0}}{}", MARK_OPEN, MARK_CLOSE);
                regex.replace_all(window, replacement.as_str()).into_owned()
            }
        }
    }
}

/// `fold_case` keeps byte offsets, so positions found in the folded window slice the original.
fn mark_folded(window: &str, needle: &str) -> String {
    if needle.is_empty() {
        return window.to_string();
    }

    let folded = fold_case(window);
    let mut marked = String::with_capacity(window.len());
    let mut cursor = 0;

    for (start, matched) in folded.match_indices(needle) {
        let end = start + matched.len();
        marked.push_str(&window[cursor..start]);
        marked.push_str(MARK_OPEN);
        marked.push_str(&window[start..end]);
        marked.push_str(MARK_CLOSE);
        cursor = end;
    }

    marked.push_str(&window[cursor..]);
    marked
}
