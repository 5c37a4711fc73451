//! Error types for saving, loading, writing and parsing.
//!
//! ## Error Categories
//!
//! - **Type mismatches**: a stored value has a different kind than the field reading it
//! - **Syntax errors**: malformed literals, objects, numbers or stray characters, with
//!   line/column information
//! - **Field conversion errors**: a text-backed field (such as a timestamp) holds text
//!   that does not convert
//! - **I/O errors**: the destination of a save could not be written
//!
//! Every error is fatal for the call that produced it. A load that aborts part way
//! leaves the target object partially updated.
//!
//! Note that an unreadable file or an empty document is *not* an error for
//! [`load`](crate::load) and [`deserialize`](crate::deserialize): those report
//! "nothing loaded" through their `bool` result instead.
//!
//! ## Examples
//!
//! ```rust
//! use prefsync::{from_str, Error};
//!
//! let result = from_str("tru");
//! assert!(matches!(result, Err(Error::MalformedLiteral { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing a saved document
    #[error("IO error: {0}")]
    Io(String),

    /// A value was accessed as a kind it does not hold
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A `true`, `false` or `null` literal was misspelled or truncated
    #[error("Malformed literal at line {line}, column {col}: expected '{expected}'")]
    MalformedLiteral {
        line: usize,
        col: usize,
        expected: &'static str,
    },

    /// An object member was not shaped as `"key": value`
    #[error("Malformed object at line {line}, column {col}: {msg}")]
    MalformedObject { line: usize, col: usize, msg: String },

    /// A character that cannot start any value
    #[error("Unexpected character {found:?} at line {line}, column {col}")]
    UnexpectedCharacter { line: usize, col: usize, found: char },

    /// A number token that is not a valid double
    #[error("Malformed number {token:?} at line {line}, column {col}")]
    MalformedNumber {
        line: usize,
        col: usize,
        token: String,
    },

    /// Input ended in the middle of a token
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEnd {
        line: usize,
        col: usize,
        expected: &'static str,
    },

    /// A stored value could not be converted into the field's type
    #[error("Invalid value for field '{key}': {msg}")]
    InvalidField { key: String, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error from the kind names involved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefsync::Error;
    ///
    /// let err = Error::type_mismatch("string", "number");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a malformed literal error.
    pub fn malformed_literal(line: usize, col: usize, expected: &'static str) -> Self {
        Error::MalformedLiteral {
            line,
            col,
            expected,
        }
    }

    /// Creates a malformed object error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefsync::Error;
    ///
    /// let err = Error::malformed_object(3, 7, "expected ':' after key");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_object(line: usize, col: usize, msg: &str) -> Self {
        Error::MalformedObject {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    pub fn unexpected_character(line: usize, col: usize, found: char) -> Self {
        Error::UnexpectedCharacter { line, col, found }
    }

    pub fn malformed_number(line: usize, col: usize, token: &str) -> Self {
        Error::MalformedNumber {
            line,
            col,
            token: token.to_string(),
        }
    }

    pub fn unexpected_end(line: usize, col: usize, expected: &'static str) -> Self {
        Error::UnexpectedEnd {
            line,
            col,
            expected,
        }
    }

    /// Creates an error for a field whose stored text does not convert.
    pub fn invalid_field<T: fmt::Display>(key: &str, msg: T) -> Self {
        Error::InvalidField {
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while reading text.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::MalformedLiteral { .. }
                | Error::MalformedObject { .. }
                | Error::UnexpectedCharacter { .. }
                | Error::MalformedNumber { .. }
                | Error::UnexpectedEnd { .. }
        )
    }
}

/// Lets [`Value`](crate::Value) be read from serde's in-memory deserializers
/// with this crate's error type.
impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
