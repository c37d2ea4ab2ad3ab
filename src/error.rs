//! Error types for conversion.
//!
//! Failures are returned as data, never panicked across the API. Only two
//! things can actually fail:
//!
//! - the JSON direction, when the input is not syntactically valid JSON
//!   (the decoder's message, with its position information, is carried
//!   verbatim);
//! - strict-mode YAML parsing, which reports the offending line instead of
//!   silently degrading.
//!
//! Lenient YAML parsing (the default) and serialization never fail.

use std::fmt;
use thiserror::Error;

/// Represents all possible conversion errors.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input was not valid JSON. Carries the underlying decoder's
    /// message, including line and column information.
    #[error("invalid JSON: {0}")]
    Json(String),

    /// Strict-mode parse report, with a 1-based line number.
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a strict-mode parse error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlite::Error;
    ///
    /// let err = Error::parse(3, "tab character in indentation");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a generic error with a display message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
