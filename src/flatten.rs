//! Flattening: expand list cells into one scalar row per value.
//!
//! One row with `tags = ["a", "b", "c"]` becomes three rows, join-table
//! style. When several columns are expanded together the result is their
//! Cartesian product: one row per combination, with the first target column
//! varying slowest and the last varying fastest.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::{parse, FlattenOptions};
//!
//! let doc = parse("name,tags,skills\nAlice,\"a|b\",\"x|y\"").unwrap();
//! let flat = doc.flatten(&FlattenOptions::new());
//!
//! let tags: Vec<String> = flat
//!     .to_objects()
//!     .iter()
//!     .map(|r| r.get("tags").unwrap().scalarize())
//!     .collect();
//! assert_eq!(tags, ["a", "a", "b", "b"]);
//! ```

use crate::{Cell, FlattenOptions, RowMap};

/// Expands list cells in `rows` into multiple all-scalar rows.
///
/// Explicit non-empty `options.columns` select the targets in the order
/// given; otherwise the targets are exactly the headers holding at least one
/// list cell anywhere in `rows`, in header order. With zero targets the rows
/// pass through unchanged.
#[must_use]
pub fn flatten_rows(headers: &[String], rows: &[RowMap], options: &FlattenOptions) -> Vec<RowMap> {
    let columns = &options.columns;
    if columns.len() == 1 {
        return expand_by_column(rows, headers, &columns[0]);
    }
    if columns.len() > 1 {
        return expand_cartesian(rows, headers, columns);
    }
    let targets = list_columns(headers, rows);
    match targets.len() {
        0 => rows.to_vec(),
        1 => expand_by_column(rows, headers, &targets[0]),
        _ => expand_cartesian(rows, headers, &targets),
    }
}

/// Headers that hold at least one list cell across the row collection, in
/// header order.
fn list_columns(headers: &[String], rows: &[RowMap]) -> Vec<String> {
    headers
        .iter()
        .filter(|h| {
            rows.iter()
                .any(|row| row.get(h.as_str()).is_some_and(Cell::is_list))
        })
        .cloned()
        .collect()
}

/// Expands rows by a single column: a k-element list cell becomes k rows
/// with one value each; every other column is coerced to scalar.
fn expand_by_column(rows: &[RowMap], headers: &[String], column: &str) -> Vec<RowMap> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        match row.get(column).and_then(Cell::as_list) {
            Some(values) => {
                for value in values {
                    let mut flat = RowMap::with_capacity(headers.len());
                    for h in headers {
                        let cell = if h == column {
                            Cell::Scalar(value.clone())
                        } else {
                            scalar_of(row, h)
                        };
                        flat.insert(h.clone(), cell);
                    }
                    out.push(flat);
                }
            }
            None => {
                let mut flat = RowMap::with_capacity(headers.len());
                for h in headers {
                    flat.insert(h.clone(), scalar_of(row, h));
                }
                out.push(flat);
            }
        }
    }
    out
}

/// Expands rows by multiple columns at once: one output row per combination
/// of the target columns' values.
fn expand_cartesian(rows: &[RowMap], headers: &[String], columns: &[String]) -> Vec<RowMap> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        // A scalar cell contributes a singleton, so it never multiplies the
        // row count.
        let arrays: Vec<Vec<String>> = columns
            .iter()
            .map(|c| match row.get(c) {
                Some(Cell::List(parts)) => parts.clone(),
                Some(Cell::Scalar(s)) => vec![s.clone()],
                None => vec![String::new()],
            })
            .collect();
        for combo in cartesian(&arrays) {
            let mut flat = RowMap::with_capacity(headers.len());
            for h in headers {
                let cell = match columns.iter().position(|c| c == h) {
                    Some(idx) => Cell::Scalar(combo[idx].clone()),
                    None => scalar_of(row, h),
                };
                flat.insert(h.clone(), cell);
            }
            out.push(flat);
        }
    }
    out
}

/// Cartesian product of value lists, built incrementally column by column.
/// The first list varies slowest, the last fastest.
fn cartesian(arrays: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut product: Vec<Vec<String>> = vec![Vec::new()];
    for values in arrays {
        let mut next = Vec::with_capacity(product.len() * values.len());
        for partial in &product {
            for value in values {
                let mut combo = Vec::with_capacity(partial.len() + 1);
                combo.extend(partial.iter().cloned());
                combo.push(value.clone());
                next.push(combo);
            }
        }
        product = next;
    }
    product
}

fn scalar_of(row: &RowMap, header: &str) -> Cell {
    Cell::Scalar(row.get(header).map(Cell::scalarize).unwrap_or_default())
}
