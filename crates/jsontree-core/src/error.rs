//! Error types for parsing, access, mutation, conversion, and file I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Grammar violations reported by the parser.
///
/// Only the kind of violation is reported; the parser does not track lines or columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("empty input")]
    EmptyInput,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("malformed number")]
    MalformedNumber,

    #[error("invalid literal")]
    InvalidLiteral,

    #[error("trailing comma")]
    TrailingComma,

    #[error("trailing characters after value")]
    TrailingCharacters,

    /// Nesting exceeded the configured maximum depth.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Errors that can occur while working with a JSON tree.
#[derive(Error, Debug)]
pub enum JsonError {
    /// Growing a container could not reserve memory.
    #[error("memory allocation failed")]
    AllocationFailure,

    /// The operation requires a different kind of value.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: Kind },

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// The input text was rejected by the parser.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// `convert_to` could not re-tag the value; the value was left unchanged.
    #[error("cannot convert {from} to {to}: {reason}")]
    ConversionFailed {
        from: Kind,
        to: Kind,
        reason: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonError {
    pub(crate) fn mismatch(expected: &'static str, found: Kind) -> Self {
        JsonError::TypeMismatch { expected, found }
    }

    /// The syntax error behind a rejected parse, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            JsonError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::collections::TryReserveError> for JsonError {
    fn from(_: std::collections::TryReserveError) -> Self {
        JsonError::AllocationFailure
    }
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, JsonError>;
