//! Corpus Loader
//!
//! Streams a corpus file through the `Segmenter` and produces the final `CorpusIndex`.
//! Loading is synchronous and happens once, before the server starts accepting requests.

use super::segmenter::{LineOutcome, Segmenter};
use super::titles::TitleRegistry;
use super::types::{CorpusError, CorpusIndex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl CorpusIndex {
    /// Loads the complete works edition from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::load_with(path, &TitleRegistry::complete_works())
    }

    /// Loads a corpus whose title lines are described by `registry`.
    pub fn load_with(path: impl AsRef<Path>, registry: &TitleRegistry) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let io_error = |source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let index = match Self::from_reader(BufReader::new(file), registry) {
            Ok(index) => index,
            Err(CorpusError::Read(source)) => return Err(io_error(source)),
            Err(err) => return Err(err),
        };

        tracing::info!(
            "Loaded {} works ({} bytes indexed) from {}",
            index.len(),
            index.indexed_bytes(),
            path.display()
        );
        Ok(index)
    }

    /// Segments and indexes a corpus from any buffered reader.
    ///
    /// Lines are split on `\n` and keep their terminator. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn from_reader<R: BufRead>(mut reader: R, registry: &TitleRegistry) -> Result<Self, CorpusError> {
        let mut segmenter = Segmenter::new(registry);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if segmenter.push_line(&line) == LineOutcome::Finished {
                break;
            }
        }

        let documents = segmenter.finish()?;
        Ok(Self::from_documents(documents))
    }
}
