//! Error types for the dimensional-CSV codec.
//!
//! The codec is deliberately permissive: ragged rows, unterminated quotes,
//! and stray carriage returns are all accepted and degrade gracefully rather
//! than failing. The error surface therefore stays small:
//!
//! - **Validation errors**: raised by a [`RowValidator`](crate::RowValidator)
//!   and propagated unchanged out of [`parse_with_options`](crate::parse_with_options)
//! - **I/O errors**: reading from a reader or writing to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::Error;
//!
//! let err = Error::validation(2, "age must be numeric");
//! assert!(err.to_string().contains("row 2"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding or encoding.
///
/// Malformed input text is never an error by itself; see the crate-level
/// documentation for the degradation rules.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A configured row validator rejected a row
    #[error("Validation failed at row {row}: {msg}")]
    Validation { row: usize, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a validation error for the given data-row index (0-based).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Error;
    ///
    /// let err = Error::validation(0, "missing required column");
    /// assert!(err.to_string().contains("missing required column"));
    /// ```
    pub fn validation(row: usize, msg: impl Into<String>) -> Self {
        Error::Validation {
            row,
            msg: msg.into(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
