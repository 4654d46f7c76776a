/// Builds a [`RowMap`](crate::RowMap) literal.
///
/// A bare value becomes a scalar cell; a bracketed list becomes a list
/// cell.
///
/// # Examples
///
/// ```rust
/// use dimcsv::{row, Cell};
///
/// let r = row! {
///     "name" => "Alice",
///     "tags" => ["js", "ts", "rust"],
/// };
///
/// assert_eq!(r.get("name"), Some(&Cell::from("Alice")));
/// assert_eq!(r.get("tags"), Some(&Cell::from(vec!["js", "ts", "rust"])));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::RowMap::new()
    };

    ( $( $key:literal => $value:tt ),* $(,)? ) => {{
        let mut map = $crate::RowMap::new();
        $(
            map.insert($key.to_string(), $crate::row_cell!($value));
        )*
        map
    }};
}

/// Helper for [`row!`]: turns one value token into a [`Cell`](crate::Cell).
#[doc(hidden)]
#[macro_export]
macro_rules! row_cell {
    // Bracketed list of elements
    ([ $($elem:expr),* $(,)? ]) => {
        $crate::Cell::List(vec![ $( ($elem).to_string() ),* ])
    };

    // Anything else is a scalar
    ($value:expr) => {
        $crate::Cell::from($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Cell, RowMap};

    #[test]
    fn test_row_macro_empty() {
        assert_eq!(row! {}, RowMap::new());
    }

    #[test]
    fn test_row_macro_scalars_and_lists() {
        let r = row! {
            "a" => "1",
            "b" => ["x", "y"],
        };
        assert_eq!(r.get("a"), Some(&Cell::Scalar("1".into())));
        assert_eq!(r.get("b"), Some(&Cell::List(vec!["x".into(), "y".into()])));
    }

    #[test]
    fn test_row_macro_preserves_insertion_order() {
        let r = row! { "z" => "1", "a" => "2" };
        let keys: Vec<_> = r.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_row_macro_empty_list() {
        let r = row! { "tags" => [] };
        assert_eq!(r.get("tags"), Some(&Cell::List(vec![])));
    }
}
