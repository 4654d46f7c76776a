//! The decoded document: headers plus rows, with array and object views.
//!
//! A [`Document`] is produced once, by the decode pipeline or by a flatten
//! pass, and never mutated afterward. Its two views are pure derivations:
//!
//! - [`Document::to_rows`]: every row as a positional `Vec<Cell>`
//! - [`Document::to_objects`]: every row as a [`RowMap`] keyed by header
//!
//! For any valid `i`, `j`, `to_rows()[i][j]` and
//! `to_objects()[i][headers[j]]` denote the same cell. The one asymmetry is
//! ragged input: a data row with more fields than headers keeps its extra
//! cells in the positional view, while the object view cannot reach them.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::{parse, Cell};
//!
//! let doc = parse("name,tags\nAlice,\"js|ts\"").unwrap();
//! assert_eq!(doc.headers(), ["name", "tags"]);
//! assert_eq!(doc.to_rows()[0][1], Cell::from(vec!["js", "ts"]));
//! assert_eq!(
//!     doc.to_objects()[0].get("tags"),
//!     Some(&Cell::from(vec!["js", "ts"]))
//! );
//! ```

use crate::flatten::flatten_rows;
use crate::{Cell, FlattenOptions, RowMap};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// One row in the representation chosen at parse time: positional cells or
/// a header-keyed map.
///
/// Serializes untagged, so a positional row becomes a JSON array and a map
/// row a JSON object whose values are strings or arrays of strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    Array(Vec<Cell>),
    Object(RowMap),
}

impl Row {
    /// Projects this row onto the given headers as a map.
    #[must_use]
    pub fn to_map(&self, headers: &[String]) -> RowMap {
        match self {
            Row::Array(cells) => RowMap::from_cells(headers, cells),
            Row::Object(map) => map.clone(),
        }
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row::Array(cells)
    }
}

impl From<RowMap> for Row {
    fn from(map: RowMap) -> Self {
        Row::Object(map)
    }
}

/// A decoded document: ordered headers plus rows.
///
/// Serializes as `{ "headers": [...], "rows": [...] }` with each cell a JSON
/// string or array of strings: the wire shape consumed by table viewers
/// built on top of the codec.
#[derive(Clone, Debug)]
pub struct Document {
    headers: Vec<String>,
    rows: Vec<Row>,
    // Positional rows captured by the parser, before any validator rewrote
    // the representation rows. Retains ragged extras.
    cells: Option<Vec<Vec<Cell>>>,
}

impl Document {
    /// Creates an empty document (no headers, no rows).
    #[must_use]
    pub fn empty() -> Self {
        Document {
            headers: Vec::new(),
            rows: Vec::new(),
            cells: None,
        }
    }

    /// Builds a document from header-keyed rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::{row, Document};
    ///
    /// let doc = Document::from_objects(
    ///     vec!["name".into(), "tags".into()],
    ///     vec![row! { "name" => "Alice", "tags" => ["js", "ts"] }],
    /// );
    /// assert_eq!(doc.len(), 1);
    /// ```
    #[must_use]
    pub fn from_objects(headers: Vec<String>, rows: Vec<RowMap>) -> Self {
        Document {
            headers,
            rows: rows.into_iter().map(Row::Object).collect(),
            cells: None,
        }
    }

    /// Builds a document from positional cell rows.
    #[must_use]
    pub fn from_cells(headers: Vec<String>, cells: Vec<Vec<Cell>>) -> Self {
        Document {
            headers,
            rows: cells.iter().cloned().map(Row::Array).collect(),
            cells: Some(cells),
        }
    }

    pub(crate) fn from_parsed(headers: Vec<String>, cells: Vec<Vec<Cell>>, rows: Vec<Row>) -> Self {
        Document {
            headers,
            rows,
            cells: Some(cells),
        }
    }

    /// The header list, in column order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The rows in the representation chosen at parse time.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the document has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row as a positional cell row.
    ///
    /// Returns the cell rows captured at parse time when available (these
    /// keep ragged extras); otherwise derives positionally from the header
    /// projection of each row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if let Some(cells) = &self.cells {
            return cells.clone();
        }
        self.rows
            .iter()
            .map(|row| match row {
                Row::Array(cells) => cells.clone(),
                Row::Object(map) => self
                    .headers
                    .iter()
                    .map(|h| map.get(h).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect()
    }

    /// Every row as a header-keyed map.
    ///
    /// Missing trailing cells read as empty scalars; cells beyond the
    /// header count are unreachable through this view.
    #[must_use]
    pub fn to_objects(&self) -> Vec<RowMap> {
        self.rows.iter().map(|row| row.to_map(&self.headers)).collect()
    }

    /// Expands list cells into additional scalar rows.
    ///
    /// With no explicit columns, every column holding at least one list
    /// cell is expanded; multiple targets produce a Cartesian product with
    /// the first target varying slowest. The result contains only scalar
    /// cells, so flattening is idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::{parse, FlattenOptions};
    ///
    /// let doc = parse("name,tags\nAlice,\"a|b\"").unwrap();
    /// let flat = doc.flatten(&FlattenOptions::new());
    /// assert_eq!(flat.len(), 2);
    /// ```
    #[must_use]
    pub fn flatten(&self, options: &FlattenOptions) -> Document {
        let flat = flatten_rows(&self.headers, &self.to_objects(), options);
        let cells: Vec<Vec<Cell>> = flat
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .map(|h| row.get(h).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Document {
            headers: self.headers.clone(),
            rows: flat.into_iter().map(Row::Object).collect(),
            cells: Some(cells),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("headers", &self.headers)?;
        state.serialize_field("rows", &self.rows)?;
        state.end()
    }
}
