//! # dimcsv
//!
//! A codec for a CSV dialect that embeds a second dimension of structure
//! inside a single cell: a cell holds either one scalar string or an
//! ordered list of strings, separated by a configurable *dimension
//! delimiter* (default `|`) distinct from the field separator.
//!
//! ## What does that look like?
//!
//! ```text
//! name,age,tags
//! Alice,30,"js|ts|rust"
//! Bob,25,"hiking|photography"
//! ```
//!
//! `tags` decodes to a list cell per row; `name` and `age` stay scalar.
//! Flattening expands the list cells back into plain scalar rows (one row
//! per value, join-table style) or into a Cartesian product when several
//! columns expand at once.
//!
//! ## Key Features
//!
//! - **Quote-aware tokenizer**: doubled-quote escapes, embedded newlines,
//!   `\n` / `\r\n` / bare `\r` terminators, no error channel; malformed
//!   input degrades instead of failing
//! - **Lossless round trip**: a scalar cell that textually contains the
//!   delimiter is quoted on output, so `stringify(parse(csv)) == csv` for
//!   canonically quoted input
//! - **Flattening**: single-column expansion or multi-column Cartesian
//!   product with a precise ordering contract
//! - **Pluggable validation**: inject any [`RowValidator`] without coupling
//!   the codec to a validation library
//! - **JSON-ready**: documents serialize as `{headers, rows}` with each
//!   cell a JSON string or array of strings
//!
//! ## Quick Start
//!
//! ```rust
//! use dimcsv::{parse, stringify, Cell, FlattenOptions};
//!
//! let csv = "name,age,tags\nAlice,30,\"js|ts|rust\"\nBob,25,\"hiking|photography\"";
//!
//! let doc = parse(csv).unwrap();
//! assert_eq!(doc.headers(), ["name", "age", "tags"]);
//! assert_eq!(
//!     doc.to_objects()[0].get("tags"),
//!     Some(&Cell::from(vec!["js", "ts", "rust"]))
//! );
//!
//! // Lossless round trip
//! assert_eq!(stringify(&doc), csv);
//!
//! // Expand list cells into scalar rows: 3 for Alice + 2 for Bob
//! let flat = doc.flatten(&FlattenOptions::new());
//! assert_eq!(flat.len(), 5);
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and purely functional over immutable
//! inputs: decode and encode consume whole in-memory strings, flatten and
//! the document views allocate fresh results, and the codec keeps no
//! process-wide mutable state. Concurrent calls on independent inputs are
//! safe without locking.
//!
//! ## Format
//!
//! See the [`dialect`] module for the full wire-format description.

pub mod cell;
pub mod dialect;
pub mod document;
pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod stringify;
pub mod tokenizer;
pub mod validate;

pub use cell::Cell;
pub use document::{Document, Row};
pub use error::{Error, Result};
pub use flatten::flatten_rows;
pub use map::RowMap;
pub use options::{
    FlattenOptions, ParseOptions, StringifyOptions, DEFAULT_DIMENSION_DELIMITER,
    PLAIN_DANGEROUS_CHARS,
};
pub use stringify::stringify_rows;
pub use validate::RowValidator;

use std::io;

/// Decodes dimensional-CSV text into a [`Document`] with default options.
///
/// # Examples
///
/// ```rust
/// use dimcsv::parse;
///
/// let doc = parse("a,b\n1,2").unwrap();
/// assert_eq!(doc.headers(), ["a", "b"]);
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Decoding itself never fails; an error can only come from a configured
/// row validator (none with default options).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Document> {
    parse_with_options(input, ParseOptions::default())
}

/// Decodes dimensional-CSV text into a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use dimcsv::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_header(false)
///     .with_columns(vec!["x".into(), "y".into()]);
/// let doc = parse_with_options("1,2\n3,4", options).unwrap();
/// assert_eq!(doc.headers(), ["x", "y"]);
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error only when a configured [`RowValidator`] rejects a row;
/// the decode then fails atomically with no partial document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    parse::parse_document(input, &options)
}

/// Decodes dimensional CSV from an I/O reader.
///
/// # Examples
///
/// ```rust
/// use dimcsv::parse_reader;
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"a,b\n1,2")).unwrap();
/// assert_eq!(doc.headers(), ["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the bytes are not valid UTF-8, or a
/// configured validator rejects a row.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&input)
}

/// Decodes dimensional CSV from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or a configured
/// validator rejects a row.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(bytes: &[u8]) -> Result<Document> {
    let input = std::str::from_utf8(bytes).map_err(Error::custom)?;
    parse(input)
}

/// Encodes a [`Document`] to dimensional-CSV text with default options.
///
/// Encoding has no failure mode: list cells join with the dimension
/// delimiter, and any field needing protection is quoted.
///
/// # Examples
///
/// ```rust
/// use dimcsv::{parse, stringify};
///
/// let csv = "name,tags\nAlice,\"js|ts\"";
/// let doc = parse(csv).unwrap();
/// assert_eq!(stringify(&doc), csv);
/// ```
#[must_use]
pub fn stringify(document: &Document) -> String {
    stringify_with_options(document, StringifyOptions::default())
}

/// Encodes a [`Document`] to dimensional-CSV text with custom options.
///
/// # Examples
///
/// ```rust
/// use dimcsv::{parse, stringify_with_options, StringifyOptions};
///
/// let doc = parse("a\nx").unwrap();
/// let out = stringify_with_options(&doc, StringifyOptions::new().with_quoted(true));
/// assert_eq!(out, "\"a\"\n\"x\"");
/// ```
#[must_use]
pub fn stringify_with_options(document: &Document, options: StringifyOptions) -> String {
    stringify::stringify_document(document, &options)
}

/// Encodes a [`Document`] to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_writer<W: io::Write>(mut writer: W, document: &Document) -> Result<()> {
    let text = stringify(document);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Encodes a [`Document`] to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_writer_with_options<W: io::Write>(
    mut writer: W,
    document: &Document,
    options: StringifyOptions,
) -> Result<()> {
    let text = stringify_with_options(document, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
