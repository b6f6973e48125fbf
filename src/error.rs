//! Error types for the compose codec
//!
//! Uses `thiserror` for every error surfaced by the library.

use std::fmt;

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// A mode literal that violates the file-mode grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// Literal was empty
    #[error("file mode cannot be empty")]
    Empty,

    /// An octal literal (or an octal-looking decimal) contains a digit above 7
    #[error("invalid octal digit {digit} in '{literal}', each digit must be 0-7")]
    InvalidOctalDigit { digit: char, literal: String },

    /// Literal is not an integer at all
    #[error("'{literal}' is not a valid file mode")]
    NotANumber { literal: String },

    /// Literal does not fit the mode integer
    #[error("file mode '{literal}' is out of range")]
    OutOfRange { literal: String },
}

/// A union-typed entry that is neither a scalar nor a mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed {kind} entry: {detail}")]
pub struct MalformedEntry {
    pub kind: &'static str,
    pub detail: String,
}

impl MalformedEntry {
    pub fn new(kind: &'static str, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// Main error type for codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Mode literal could not be parsed
    #[error("invalid file mode: {0}")]
    Mode(#[from] ModeError),

    /// Union-typed entry had an unusable shape
    #[error(transparent)]
    MalformedEntry(#[from] MalformedEntry),

    /// Document text could not be parsed
    #[error("{}", format_parse_error(.message, .line, .column))]
    Parse {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// Keys were skipped while unmatched keys are not tolerated
    #[error("unrecognized keys: {}", .paths.join(", "))]
    UnknownKeys { paths: Vec<String> },

    /// Emission reached a value with no converter (schema/codec mismatch)
    #[error("codec defect: {0}")]
    Defect(String),

    /// Codec options could not be loaded
    #[error("invalid codec options: {message}")]
    Config { message: String },
}

impl CodecError {
    pub(crate) fn from_yaml(err: &serde_yaml_ng::Error) -> Self {
        let location = err.location();
        CodecError::Parse {
            message: err.to_string(),
            line: location.as_ref().map(|loc| loc.line()),
            column: location.as_ref().map(|loc| loc.column()),
        }
    }
}

fn format_parse_error(message: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!("parse error at line {line}, column {column}: {message}"),
        (Some(line), None) => format!("parse error at line {line}: {message}"),
        _ => format!("parse error: {message}"),
    }
}

impl serde::ser::Error for CodecError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        CodecError::Defect(msg.to_string())
    }
}
