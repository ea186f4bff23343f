// src/errors.rs

//! Crate-wide error types.
//!
//! Loading can fail in exactly two ways: the file could not be read, or its
//! contents could not be decoded into a [`Config`](crate::config::Config).
//! Both are fatal to the load; nothing is partially applied.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read. The underlying error is passed
    /// through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ConfigError {
    /// Returns the decode failure, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            ConfigError::Decode(err) => Some(err),
            ConfigError::Io(_) => None,
        }
    }
}

/// A document that could not be turned into a configuration.
///
/// The rendered message always starts with `error decoding config at`,
/// followed by the quoted origin (usually the file path) and the detail.
#[derive(Error, Debug)]
#[error("error decoding config at \"{origin}\": {kind}")]
pub struct DecodeError {
    origin: String,
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(origin: impl Into<String>, kind: DecodeErrorKind) -> Self {
        Self {
            origin: origin.into(),
            kind,
        }
    }

    /// Where the document came from (file path or caller-supplied label).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeErrorKind {
    /// The parser rejected the document. `message` is the parser's own
    /// diagnostic, which names the line and column.
    #[error("syntax error: {message}")]
    Syntax {
        message: String,
        offset: Option<usize>,
    },

    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("duplicate key `{path}`")]
    DuplicateKey { path: String },

    #[error("unsupported {what} for key `{path}`")]
    Unsupported { path: String, what: &'static str },

    #[error("unknown key `{path}`")]
    UnknownKey { path: String },

    #[error("key `{path}` expects {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
