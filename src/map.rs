//! Ordered map type for object-shaped rows.
//!
//! This module provides [`RowMap`], a wrapper around [`IndexMap`] that maps
//! header names to [`Cell`] values in insertion order. Header order is
//! significant for this dialect: it defines positional alignment with cell
//! rows and the column order of encoded output, so a plain `HashMap` would
//! not do.
//!
//! Duplicate header names are permitted in the dialect; when a row map is
//! built from such headers, the later duplicate's value shadows the earlier
//! one (standard map-insert semantics).
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::{Cell, RowMap};
//!
//! let mut row = RowMap::new();
//! row.insert("name".to_string(), Cell::from("Alice"));
//! row.insert("tags".to_string(), Cell::from(vec!["js", "ts"]));
//!
//! assert_eq!(row.len(), 2);
//! assert_eq!(row.get("name").and_then(|c| c.as_scalar()), Some("Alice"));
//! ```

use crate::Cell;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// An insertion-ordered map from header name to [`Cell`].
///
/// # Examples
///
/// ```rust
/// use dimcsv::{Cell, RowMap};
///
/// let mut row = RowMap::new();
/// row.insert("first".to_string(), Cell::from("1"));
/// row.insert("second".to_string(), Cell::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = row.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowMap(IndexMap<String, Cell>);

impl RowMap {
    /// Creates an empty `RowMap`.
    #[must_use]
    pub fn new() -> Self {
        RowMap(IndexMap::new())
    }

    /// Creates an empty `RowMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RowMap(IndexMap::with_capacity(capacity))
    }

    /// Pairs headers with cells positionally.
    ///
    /// Missing trailing cells read as empty scalars; cells beyond the
    /// header count are dropped from the map (they remain reachable only
    /// through the positional row view). A later duplicate header shadows
    /// an earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimcsv::{Cell, RowMap};
    ///
    /// let headers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    /// let cells = vec![Cell::from("1")];
    /// let row = RowMap::from_cells(&headers, &cells);
    ///
    /// assert_eq!(row.get("a"), Some(&Cell::from("1")));
    /// assert_eq!(row.get("b"), Some(&Cell::empty()));
    /// ```
    #[must_use]
    pub fn from_cells(headers: &[String], cells: &[Cell]) -> Self {
        let mut map = RowMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let cell = cells.get(i).cloned().unwrap_or_default();
            map.insert(header.clone(), cell);
        }
        map
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: String, value: Cell) -> Option<Cell> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the cell for the given header, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.0.get(key)
    }

    /// Returns the number of entries in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the header names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Cell> {
        self.0.keys()
    }

    /// Returns an iterator over the cells, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Cell> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Cell> {
        self.0.iter()
    }
}

impl Serialize for RowMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RowMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::deserialize(deserializer).map(RowMap)
    }
}

impl From<HashMap<String, Cell>> for RowMap {
    fn from(map: HashMap<String, Cell>) -> Self {
        RowMap(map.into_iter().collect())
    }
}

impl From<RowMap> for HashMap<String, Cell> {
    fn from(map: RowMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for RowMap {
    type Item = (String, Cell);
    type IntoIter = indexmap::map::IntoIter<String, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RowMap {
    type Item = (&'a String, &'a Cell);
    type IntoIter = indexmap::map::Iter<'a, String, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Cell)> for RowMap {
    fn from_iter<T: IntoIterator<Item = (String, Cell)>>(iter: T) -> Self {
        RowMap(IndexMap::from_iter(iter))
    }
}
