//! The cell model: scalar strings and ordered lists of strings.
//!
//! This module provides the [`Cell`] enum, the decoded form of one CSV
//! field. A raw field is split on the active dimension delimiter; exactly
//! one part makes a scalar, two or more make an ordered list. Empty parts
//! are preserved, so `"a||b"` splits into `["a", "", "b"]`.
//!
//! ## Core Operations
//!
//! - [`Cell::split`]: raw field text → cell
//! - [`Cell::join`]: cell → raw field text (the exact inverse of `split`
//!   for delimiter-free element text)
//! - [`Cell::scalarize`]: collapse to a single string (a list yields its
//!   first element)
//!
//! ## Wire Shape
//!
//! `Cell` serializes untagged: a scalar becomes a JSON string, a list a
//! JSON array of strings. This is the shape consumed by viewers built on
//! top of the codec and must round-trip losslessly through any JSON layer.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::Cell;
//!
//! let cell = Cell::split("js|ts|rust", '|');
//! assert!(cell.is_list());
//! assert_eq!(cell.join('|'), "js|ts|rust");
//!
//! let cell = Cell::split("solo", '|');
//! assert!(cell.is_scalar());
//! assert_eq!(cell.as_scalar(), Some("solo"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded CSV field: a scalar string or an ordered list of strings.
///
/// A cell is scalar if and only if splitting its raw text on the active
/// dimension delimiter yields exactly one part.
///
/// # Examples
///
/// ```rust
/// use dimcsv::Cell;
///
/// let scalar = Cell::from("Alice");
/// let list = Cell::from(vec!["js", "ts"]);
///
/// assert!(scalar.is_scalar());
/// assert!(list.is_list());
/// assert_eq!(list.join('|'), "js|ts");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Scalar(String),
    List(Vec<String>),
}

impl Cell {
    /// An empty scalar cell, the value a missing field reads as.
    #[must_use]
    pub fn empty() -> Self {
        Cell::Scalar(String::new())
    }

    /// Splits raw field text on every occurrence of `delimiter`.
    ///
    /// Exactly one part produces a scalar; two or more produce a list with
    /// empty parts preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Cell;
    ///
    /// assert_eq!(Cell::split("a|b", '|'), Cell::List(vec!["a".into(), "b".into()]));
    /// assert_eq!(Cell::split("a", '|'), Cell::Scalar("a".into()));
    /// assert_eq!(
    ///     Cell::split("a||b", '|'),
    ///     Cell::List(vec!["a".into(), "".into(), "b".into()])
    /// );
    /// ```
    #[must_use]
    pub fn split(raw: &str, delimiter: char) -> Self {
        let parts: Vec<&str> = raw.split(delimiter).collect();
        if parts.len() > 1 {
            Cell::List(parts.into_iter().map(String::from).collect())
        } else {
            Cell::Scalar(raw.to_string())
        }
    }

    /// Joins this cell back into raw field text.
    ///
    /// A scalar returns its text; a list joins its elements with
    /// `delimiter`. Exact inverse of [`Cell::split`] for delimiter-free
    /// element text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Cell;
    ///
    /// let cell = Cell::split("x|y", '|');
    /// assert_eq!(cell.join('|'), "x|y");
    /// ```
    #[must_use]
    pub fn join(&self, delimiter: char) -> String {
        match self {
            Cell::Scalar(s) => s.clone(),
            Cell::List(parts) => parts.join(&delimiter.to_string()),
        }
    }

    /// Collapses this cell to a single string: a scalar yields its text, a
    /// list its first element (empty string for an empty list).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Cell;
    ///
    /// assert_eq!(Cell::from(vec!["a", "b"]).scalarize(), "a");
    /// assert_eq!(Cell::from("solo").scalarize(), "solo");
    /// ```
    #[must_use]
    pub fn scalarize(&self) -> String {
        match self {
            Cell::Scalar(s) => s.clone(),
            Cell::List(parts) => parts.first().cloned().unwrap_or_default(),
        }
    }

    /// Returns `true` if this cell holds a single value.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Cell::Scalar(_))
    }

    /// Returns `true` if this cell holds an ordered list of values.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Cell::List(_))
    }

    /// Returns the scalar text, or `None` for a list cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::Cell;
    ///
    /// assert_eq!(Cell::from("x").as_scalar(), Some("x"));
    /// assert_eq!(Cell::from(vec!["x", "y"]).as_scalar(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Cell::Scalar(s) => Some(s),
            Cell::List(_) => None,
        }
    }

    /// Returns the list elements, or `None` for a scalar cell.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Cell::Scalar(_) => None,
            Cell::List(parts) => Some(parts),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Scalar(s) => f.write_str(s),
            Cell::List(_) => f.write_str(&self.join(crate::options::DEFAULT_DIMENSION_DELIMITER)),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Scalar(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Scalar(value)
    }
}

impl From<Vec<String>> for Cell {
    fn from(value: Vec<String>) -> Self {
        Cell::List(value)
    }
}

impl From<Vec<&str>> for Cell {
    fn from(value: Vec<&str>) -> Self {
        Cell::List(value.into_iter().map(String::from).collect())
    }
}
