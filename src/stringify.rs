//! The encode pipeline: [`Document`] (or bare headers and rows) to text.
//!
//! Each row is normalized to a header-keyed map, every cell is joined with
//! the active dimension delimiter, and each resulting field is escaped with
//! the dialect-aware dangerous-character set, so a scalar that textually
//! contains the delimiter comes out quoted and survives a re-parse. The
//! header line only needs the plain CSV set: header names are always
//! scalar.
//!
//! Encoding has no failure mode; only the writer entry point in the crate
//! root returns a `Result`.

use crate::document::Row;
use crate::options::PLAIN_DANGEROUS_CHARS;
use crate::tokenizer::write_row;
use crate::{Document, RowMap, StringifyOptions};

/// Encodes a [`Document`] using its headers and parse-time row
/// representation.
#[must_use]
pub fn stringify_document(document: &Document, options: &StringifyOptions) -> String {
    stringify_rows(document.headers(), document.rows(), options)
}

/// Encodes bare headers and rows.
///
/// When `headers` is empty and at least one row exists, headers are derived
/// from the first row: positional indices `"0"`, `"1"`, … for a positional
/// row, or the key set in its own order for a map row. Every row is then
/// normalized to a map keyed by the resolved headers (missing cells read as
/// empty strings) before encoding.
///
/// # Examples
///
/// ```rust
/// use dimcsv::{row, stringify_rows, Row, StringifyOptions};
///
/// let rows = vec![
///     Row::from(row! { "name" => "Alice", "skills" => ["js", "ts"] }),
///     Row::from(row! { "name" => "Bob", "skills" => "design" }),
/// ];
/// let out = stringify_rows(&[], &rows, &StringifyOptions::new());
/// assert_eq!(out, "name,skills\nAlice,\"js|ts\"\nBob,design");
/// ```
#[must_use]
pub fn stringify_rows(headers: &[String], rows: &[Row], options: &StringifyOptions) -> String {
    let headers: Vec<String> = if headers.is_empty() && !rows.is_empty() {
        match &rows[0] {
            Row::Array(cells) => (0..cells.len()).map(|i| i.to_string()).collect(),
            Row::Object(map) => map.keys().cloned().collect(),
        }
    } else {
        headers.to_vec()
    };

    let object_rows: Vec<RowMap> = rows.iter().map(|row| row.to_map(&headers)).collect();

    let delimiter = options.active_delimiter();
    let dangerous = options.dangerous_chars();
    let mut lines: Vec<String> = Vec::with_capacity(object_rows.len() + 1);
    if options.header && !headers.is_empty() {
        lines.push(write_row(&headers, options.quoted, &PLAIN_DANGEROUS_CHARS));
    }
    for row in &object_rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|h| row.get(h).map(|c| c.join(delimiter)).unwrap_or_default())
            .collect();
        lines.push(write_row(&fields, options.quoted, &dangerous));
    }
    lines.join("\n")
}
