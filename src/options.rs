//! Configuration options for parsing, stringifying, and flattening.
//!
//! This module provides the option structs consumed by the codec entry
//! points:
//!
//! - [`ParseOptions`]: controls decoding (delimiters, headers, row shape,
//!   validation)
//! - [`StringifyOptions`]: controls encoding (delimiters, header line,
//!   quoting)
//! - [`FlattenOptions`]: selects which columns a flatten pass expands
//!
//! All defaults are plain constants passed explicitly through these structs;
//! the codec keeps no process-wide mutable state.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::{parse_with_options, ParseOptions};
//!
//! // The field separator is always ','; the configurable part is the
//! // in-cell dimension delimiter.
//! let options = ParseOptions::new().with_dimension_delimiters(vec!['~']);
//! let doc = parse_with_options("name,tags\nAlice,a~b", options).unwrap();
//! assert_eq!(doc.headers(), ["name", "tags"]);
//! ```

use crate::validate::RowValidator;
use std::fmt;
use std::sync::Arc;

/// Default character used to split one cell into an ordered list of
/// sub-values.
pub const DEFAULT_DIMENSION_DELIMITER: char = '|';

/// Characters that force quoting in plain CSV output: row terminators, the
/// field separator, and the quote character itself.
pub const PLAIN_DANGEROUS_CHARS: [char; 4] = ['\n', '\r', ',', '"'];

/// Configuration options for decoding dimensional CSV text.
///
/// # Examples
///
/// ```rust
/// use dimcsv::ParseOptions;
///
/// // Defaults: '|' delimiter, first row is headers, object rows
/// let options = ParseOptions::new();
/// assert_eq!(options.active_delimiter(), '|');
/// assert!(options.header);
///
/// // Headerless input with explicit column names
/// let options = ParseOptions::new()
///     .with_header(false)
///     .with_columns(vec!["id".into(), "tags".into()]);
/// ```
#[derive(Clone)]
pub struct ParseOptions {
    /// Ordered list of dimension delimiters. Only the first entry is
    /// consulted; further entries are accepted for forward compatibility
    /// with nested splitting, which is not implemented.
    pub dimension_delimiters: Vec<char>,
    /// Whether the first tokenized row supplies header names (default true).
    pub header: bool,
    /// Explicit header names, used only when `header` is false.
    pub columns: Vec<String>,
    /// Row representation: map per row when true (default), positional cell
    /// row when false.
    pub as_objects: bool,
    /// Run the configured validator on each decoded row.
    pub validate: bool,
    /// Reserved for future numeric coercion; currently inert.
    pub cast_numbers: bool,
    /// Optional pluggable row validator, invoked only when `validate` is
    /// also true.
    pub validator: Option<Arc<dyn RowValidator + Send + Sync>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            dimension_delimiters: vec![DEFAULT_DIMENSION_DELIMITER],
            header: true,
            columns: Vec::new(),
            as_objects: true,
            validate: false,
            cast_numbers: false,
            validator: None,
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("dimension_delimiters", &self.dimension_delimiters)
            .field("header", &self.header)
            .field("columns", &self.columns)
            .field("as_objects", &self.as_objects)
            .field("validate", &self.validate)
            .field("cast_numbers", &self.cast_numbers)
            .field("validator", &self.validator.as_ref().map(|_| "<dyn RowValidator>"))
            .finish()
    }
}

impl ParseOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The delimiter the codec actually splits on: the first configured
    /// entry, or the default when the list is empty.
    #[must_use]
    pub fn active_delimiter(&self) -> char {
        self.dimension_delimiters
            .first()
            .copied()
            .unwrap_or(DEFAULT_DIMENSION_DELIMITER)
    }

    /// Sets the ordered dimension-delimiter list.
    ///
    /// Only the first entry is active in this version.
    #[must_use]
    pub fn with_dimension_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.dimension_delimiters = delimiters;
        self
    }

    /// Sets whether the first row supplies header names.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets explicit column names for headerless input.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the row representation (maps vs positional cell rows).
    #[must_use]
    pub fn with_as_objects(mut self, as_objects: bool) -> Self {
        self.as_objects = as_objects;
        self
    }

    /// Installs a row validator and enables validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::{Cell, Error, ParseOptions, Result, RowMap, RowValidator};
    /// use std::sync::Arc;
    ///
    /// struct RequireName;
    ///
    /// impl RowValidator for RequireName {
    ///     fn validate(&self, index: usize, row: RowMap) -> Result<RowMap> {
    ///         match row.get("name") {
    ///             Some(Cell::Scalar(s)) if !s.is_empty() => Ok(row),
    ///             _ => Err(Error::validation(index, "name is required")),
    ///         }
    ///     }
    /// }
    ///
    /// let options = ParseOptions::new().with_validator(Arc::new(RequireName));
    /// assert!(options.validate);
    /// ```
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn RowValidator + Send + Sync>) -> Self {
        self.validator = Some(validator);
        self.validate = true;
        self
    }

    /// Enables or disables running the configured validator.
    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Configuration options for encoding to dimensional CSV text.
///
/// # Examples
///
/// ```rust
/// use dimcsv::StringifyOptions;
///
/// let options = StringifyOptions::new().with_quoted(true);
/// assert!(options.quoted);
/// ```
#[derive(Clone, Debug)]
pub struct StringifyOptions {
    /// Ordered list of dimension delimiters; only the first entry is used
    /// to join list cells.
    pub dimension_delimiters: Vec<char>,
    /// Emit a header line (default true).
    pub header: bool,
    /// Quote every field instead of only fields that need it (default
    /// false).
    pub quoted: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            dimension_delimiters: vec![DEFAULT_DIMENSION_DELIMITER],
            header: true,
            quoted: false,
        }
    }
}

impl StringifyOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The delimiter list cells are joined with: the first configured entry,
    /// or the default when the list is empty.
    #[must_use]
    pub fn active_delimiter(&self) -> char {
        self.dimension_delimiters
            .first()
            .copied()
            .unwrap_or(DEFAULT_DIMENSION_DELIMITER)
    }

    /// Sets the ordered dimension-delimiter list.
    #[must_use]
    pub fn with_dimension_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.dimension_delimiters = delimiters;
        self
    }

    /// Sets whether a header line is emitted.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets whether every field is quoted.
    #[must_use]
    pub fn with_quoted(mut self, quoted: bool) -> Self {
        self.quoted = quoted;
        self
    }

    #[must_use]
    pub(crate) fn dangerous_chars(&self) -> Vec<char> {
        dialect_dangerous_chars(self.active_delimiter())
    }
}

/// Options for flattening a document's list cells into scalar rows.
///
/// # Examples
///
/// ```rust
/// use dimcsv::FlattenOptions;
///
/// // Auto-detect every column holding at least one list cell
/// let options = FlattenOptions::new();
/// assert!(options.columns.is_empty());
///
/// // Expand only the named columns, in the given order
/// let options = FlattenOptions::new().with_columns(vec!["tags".into()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlattenOptions {
    /// Columns to expand. Empty means: every column holding at least one
    /// list cell, in header order.
    pub columns: Vec<String>,
}

impl FlattenOptions {
    /// Creates default options (auto-detect target columns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit target columns, in expansion order.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }
}

/// Plain CSV dangerous characters plus the active dimension delimiter.
pub(crate) fn dialect_dangerous_chars(delimiter: char) -> Vec<char> {
    let mut chars = PLAIN_DANGEROUS_CHARS.to_vec();
    if !chars.contains(&delimiter) {
        chars.push(delimiter);
    }
    chars
}
