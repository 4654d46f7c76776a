//! The decode pipeline: raw text to [`Document`].
//!
//! Composition, leaf to root: [`tokenize_rows`] splits the (whole-input
//! trimmed) text into rows of raw fields; [`Cell::split`] turns each raw
//! field into a scalar or list cell on the active dimension delimiter;
//! header resolution picks names from the first row, from the `columns`
//! option, or synthesizes positional indices; finally the optional validator
//! runs over each row in order.
//!
//! Most users call [`parse`](crate::parse()) or
//! [`parse_with_options`](crate::parse_with_options) from the crate root.

use crate::document::Row;
use crate::tokenizer::tokenize_rows;
use crate::{Cell, Document, ParseOptions, Result, RowMap};

/// Decodes dimensional-CSV text into a [`Document`].
///
/// Leading and trailing whitespace of the whole input is trimmed before
/// tokenization; input that trims to nothing produces an empty document.
/// Header names are trimmed individually; cell values are never trimmed.
///
/// The only failure mode is a configured validator rejecting a row, which
/// aborts the decode with no partial document.
pub fn parse_document(input: &str, options: &ParseOptions) -> Result<Document> {
    let raw_rows = tokenize_rows(input.trim());
    if raw_rows.is_empty() {
        return Ok(Document::empty());
    }

    let headers: Vec<String> = if options.header {
        raw_rows[0].iter().map(|h| h.trim().to_string()).collect()
    } else if !options.columns.is_empty() {
        options.columns.clone()
    } else {
        (0..raw_rows[0].len()).map(|i| i.to_string()).collect()
    };

    let data_start = usize::from(options.header);
    let delimiter = options.active_delimiter();
    let cell_rows: Vec<Vec<Cell>> = raw_rows[data_start..]
        .iter()
        .map(|row| row.iter().map(|raw| Cell::split(raw, delimiter)).collect())
        .collect();

    let mut rows: Vec<Row> = if options.as_objects {
        cell_rows
            .iter()
            .map(|cells| Row::Object(RowMap::from_cells(&headers, cells)))
            .collect()
    } else {
        cell_rows.iter().cloned().map(Row::Array).collect()
    };

    if options.validate {
        if let Some(validator) = &options.validator {
            rows = rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| {
                    validator
                        .validate(i, row.to_map(&headers))
                        .map(Row::Object)
                })
                .collect::<Result<Vec<_>>>()?;
        }
    }

    Ok(Document::from_parsed(headers, cell_rows, rows))
}
