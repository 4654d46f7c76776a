//! The Wire Dialect
//!
//! This module documents the CSV dialect implemented by this crate.
//!
//! # Overview
//!
//! The dialect is ordinary quoted CSV with one addition: a cell's raw text
//! may contain a *dimension delimiter* (default `|`) that splits it into an
//! ordered list of sub-values. Readers unaware of the dialect see a plain
//! string containing literal delimiter characters; readers using this crate
//! see a list cell.
//!
//! ```text
//! name,age,tags
//! Alice,30,"js|ts|rust"
//! Bob,25,"hiking|photography"
//! ```
//!
//! # Base CSV layer
//!
//! - Encoding: UTF-8 text
//! - Rows are separated by `\n`, `\r\n`, or bare `\r`
//! - Fields are separated by `,`
//! - A field may be wrapped in `"`; inside a quoted field a literal `"` is
//!   written as `""`, and raw newlines are data (one field can span several
//!   physical lines)
//!
//! ```rust
//! use dimcsv::tokenizer::tokenize_rows;
//!
//! let rows = tokenize_rows("note\n\"line one\nline two\"");
//! assert_eq!(rows[1][0], "line one\nline two");
//! ```
//!
//! # Dimension layer
//!
//! After tokenization each raw field is split on every occurrence of the
//! active dimension delimiter. Exactly one part makes a scalar cell; two or
//! more make a list cell, with empty parts preserved:
//!
//! | Raw field | Cell |
//! |-----------|------|
//! | `solo`    | scalar `solo` |
//! | `a\|b`    | list `["a", "b"]` |
//! | `a\|\|b`  | list `["a", "", "b"]` |
//! | `` (empty)| scalar `` |
//!
//! The option surface accepts an ordered *list* of delimiters for forward
//! compatibility with nested splitting; only the first entry is consulted
//! in this version.
//!
//! # Quoting on output
//!
//! A field is quoted when it contains a row terminator, the field
//! separator, a quote, or (for data fields) the active dimension
//! delimiter. Quoting a scalar that happens to contain the delimiter
//! character is what keeps `split` and `join` lossless across a re-parse:
//!
//! ```rust
//! use dimcsv::{row, stringify_rows, Row, StringifyOptions};
//!
//! let rows = vec![Row::from(row! { "tags" => ["a", "b"] })];
//! let out = stringify_rows(&[], &rows, &StringifyOptions::new());
//! assert_eq!(out, "tags\n\"a|b\"");
//! ```
//!
//! Header names are always scalar, so the header line is escaped with the
//! plain CSV set only.
//!
//! # Permissiveness
//!
//! Decoding never fails on malformed text:
//!
//! - an unterminated quote consumes to end of input
//! - a row with fewer fields than headers reads missing cells as empty
//!   scalars
//! - a row with more fields than headers keeps the extras in the
//!   positional view ([`Document::to_rows`](crate::Document::to_rows));
//!   the object view cannot reach them
//!
//! # JSON wire shape
//!
//! A decoded document serializes as `{ "headers": [...], "rows": [...] }`
//! where every cell is a JSON string or a JSON array of strings. Layers
//! built on top (HTTP endpoints, table viewers) must preserve both branches
//! losslessly.
//!
//! ```rust
//! use dimcsv::parse;
//!
//! let doc = parse("name,tags\nAlice,\"js|ts\"").unwrap();
//! let json = serde_json::to_value(&doc).unwrap();
//! assert_eq!(json["rows"][0]["tags"][1], "ts");
//! ```
