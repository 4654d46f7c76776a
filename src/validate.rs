//! The pluggable row-validation capability.
//!
//! The decode pipeline accepts any component exposing a single validation
//! operation, so the codec has no compile-time coupling to a particular
//! validation library. A validator sees each decoded row in order and either
//! returns the (possibly rewritten) row or fails; a failure aborts the whole
//! decode with no partial document.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::{parse_with_options, Cell, Error, ParseOptions, Result, RowMap, RowValidator};
//! use std::sync::Arc;
//!
//! struct NonEmptyName;
//!
//! impl RowValidator for NonEmptyName {
//!     fn validate(&self, index: usize, row: RowMap) -> Result<RowMap> {
//!         match row.get("name") {
//!             Some(Cell::Scalar(s)) if !s.is_empty() => Ok(row),
//!             _ => Err(Error::validation(index, "empty name")),
//!         }
//!     }
//! }
//!
//! let options = ParseOptions::new().with_validator(Arc::new(NonEmptyName));
//! assert!(parse_with_options("name\nAlice", options.clone()).is_ok());
//! assert!(parse_with_options("name\n\"\"", options).is_err());
//! ```

use crate::{Result, RowMap};

/// Validates (and may rewrite) one decoded row.
///
/// `index` is the 0-based position of the row among the data rows, provided
/// so error messages can point at the offending row.
pub trait RowValidator {
    fn validate(&self, index: usize, row: RowMap) -> Result<RowMap>;
}

impl<F> RowValidator for F
where
    F: Fn(usize, RowMap) -> Result<RowMap>,
{
    fn validate(&self, index: usize, row: RowMap) -> Result<RowMap> {
        self(index, row)
    }
}
