//! Corpus Segmentation
//!
//! A small state machine that splits the raw line stream into documents. It performs no
//! I/O itself: the loader feeds it lines (terminators intact) and collects the result.
//!
//! ## States
//! - **`BeforeFirstTitle`**: Preamble. Lines are discarded until a title line shows up.
//! - **`InDocument`**: Lines accumulate into the current body. The next title or the end
//!   marker closes the document, which is when its index gets built.
//! - **`Done`**: The end marker was seen. Further input is ignored.

use super::titles::TitleRegistry;
use super::types::{CorpusError, Document};
use super::{END_MARKER, LINE_TERMINATOR};

#[derive(Debug)]
enum State {
    BeforeFirstTitle,
    InDocument { title: String, body: String },
    Done,
}

/// What the caller should do after pushing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    /// The end marker was reached; stop reading.
    Finished,
}

pub struct Segmenter<'a> {
    registry: &'a TitleRegistry,
    state: State,
    documents: Vec<Document>,
    lines_read: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(registry: &'a TitleRegistry) -> Self {
        Self {
            registry,
            state: State::BeforeFirstTitle,
            documents: Vec::new(),
            lines_read: 0,
        }
    }

    /// Feeds one raw line, terminator included.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        if self.is_done() {
            return LineOutcome::Finished;
        }
        self.lines_read += 1;

        if line == END_MARKER {
            // Before any title there is nothing to close. A loop that closes on
            // `started || end_marker` would emit an empty-titled, empty-bodied document
            // here instead; it could never match a query, so none is emitted.
            self.close_current();
            self.state = State::Done;
            return LineOutcome::Finished;
        }

        if self.registry.is_title_line(line) {
            self.close_current();
            let title = line.strip_suffix(LINE_TERMINATOR).unwrap_or(line);
            self.state = State::InDocument {
                title: title.to_string(),
                body: String::new(),
            };
            return LineOutcome::Continue;
        }

        if let State::InDocument { body, .. } = &mut self.state {
            body.push_str(line);
        }
        LineOutcome::Continue
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Number of lines consumed so far, the end marker included.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Returns the documents, or `Truncated` if the end marker never arrived.
    pub fn finish(self) -> Result<Vec<Document>, CorpusError> {
        match self.state {
            State::Done => Ok(self.documents),
            _ => Err(CorpusError::Truncated {
                lines_read: self.lines_read,
            }),
        }
    }

    /// Closes the open document, if any. Empty bodies still produce a document.
    fn close_current(&mut self) {
        let previous = std::mem::replace(&mut self.state, State::BeforeFirstTitle);
        if let State::InDocument { title, body } = previous {
            tracing::debug!("Indexed work '{}' ({} bytes)", title, body.len());
            self.documents.push(Document::new(title, body));
        }
    }
}
