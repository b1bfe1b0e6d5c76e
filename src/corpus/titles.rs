//! Title Registry
//!
//! The catalogue of work titles used to detect document boundaries in the raw corpus.
//!
//! Several entries deliberately differ from the canonical titles (punctuation and
//! diacritics): they match how this particular corpus edition prints the title line,
//! so they must be kept verbatim.

use super::LINE_TERMINATOR;
use std::collections::HashSet;

/// Titles of the complete works, exactly as they appear as title lines in the corpus.
const COMPLETE_WORKS: [&str; 44] = [
    "THE SONNETS",
    "ALL’S WELL THAT ENDS WELL",
    "ANTONY AND CLEOPATRA",
    "AS YOU LIKE IT",
    "THE COMEDY OF ERRORS",
    "THE TRAGEDY OF CORIOLANUS",
    "CYMBELINE",
    "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK",
    "THE FIRST PART OF KING HENRY THE FOURTH",
    "THE SECOND PART OF KING HENRY THE FOURTH",
    "THE LIFE OF KING HENRY V",
    "THE FIRST PART OF HENRY THE SIXTH",
    "THE SECOND PART OF KING HENRY THE SIXTH",
    "THE THIRD PART OF KING HENRY THE SIXTH",
    "KING HENRY THE EIGHTH",
    "KING JOHN",
    "THE TRAGEDY OF JULIUS CAESAR",
    "THE TRAGEDY OF KING LEAR",
    "LOVE’S LABOUR’S LOST",
    "MACBETH",
    "MEASURE FOR MEASURE",
    "THE MERCHANT OF VENICE",
    "THE MERRY WIVES OF WINDSOR",
    "A MIDSUMMER NIGHT’S DREAM",
    "MUCH ADO ABOUT NOTHING",
    "OTHELLO, THE MOOR OF VENICE",
    "PERICLES, PRINCE OF TYRE",
    "KING RICHARD THE SECOND",
    "KING RICHARD THE THIRD",
    "THE TRAGEDY OF ROMEO AND JULIET",
    "THE TAMING OF THE SHREW",
    "THE TEMPEST",
    "THE LIFE OF TIMON OF ATHENS",
    "THE TRAGEDY OF TITUS ANDRONICUS",
    "THE HISTORY OF TROILUS AND CRESSIDA",
    "TWELFTH NIGHT: OR, WHAT YOU WILL",
    "THE TWO GENTLEMEN OF VERONA",
    "THE TWO NOBLE KINSMEN",
    "THE WINTER’S TALE",
    "A LOVER’S COMPLAINT",
    "THE PASSIONATE PILGRIM",
    "THE PHOENIX AND THE TURTLE",
    "THE RAPE OF LUCRECE",
    "VENUS AND ADONIS",
];

/// Immutable set of raw title lines (terminator included).
#[derive(Debug, Clone)]
pub struct TitleRegistry {
    lines: HashSet<String>,
}

impl TitleRegistry {
    /// Registry for the complete works edition.
    pub fn complete_works() -> Self {
        Self::with_titles(COMPLETE_WORKS)
    }

    /// Builds a registry from arbitrary titles. Each title is stored with the
    /// corpus line terminator appended.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = titles
            .into_iter()
            .map(|title| format!("{}{}", title.as_ref(), LINE_TERMINATOR))
            .collect();
        Self { lines }
    }

    /// True iff `raw_line`, terminator included, is exactly one of the known titles.
    pub fn is_title_line(&self, raw_line: &str) -> bool {
        self.lines.contains(raw_line)
    }

    /// Checks a bare title (no terminator).
    pub fn contains_title(&self, title: &str) -> bool {
        self.is_title_line(&format!("{}{}", title, LINE_TERMINATOR))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for TitleRegistry {
    fn default() -> Self {
        Self::complete_works()
    }
}
