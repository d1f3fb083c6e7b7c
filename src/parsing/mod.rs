//! Reading descriptor files

use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Document deserialized from it by parse() below can be
/// reported against the same source text.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// A descriptor that is not valid TOML, or whose tables do not describe
/// statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    pub problem: String,
    pub offset: usize,
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

impl std::error::Error for ParsingError {}

/// Deserialize descriptor text into a Document.
pub fn parse(content: &str) -> Result<Document, ParsingError> {
    match toml::from_str::<Document>(content) {
        Ok(document) => {
            debug!(
                "Found {} statement{}",
                document
                    .statements
                    .len(),
                if document
                    .statements
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            let offset = error
                .span()
                .map(|span| span.start)
                .unwrap_or(0);
            Err(ParsingError {
                problem: error
                    .message()
                    .trim()
                    .to_string(),
                offset,
            })
        }
    }
}
