//! Property-based tests - pragmatic approach testing core codec guarantees
//!
//! These complement the example-driven integration tests by checking the
//! round-trip, split/join, and flatten contracts across generated inputs.

use dimcsv::{parse, stringify, Cell, FlattenOptions};
use proptest::prelude::*;

/// Field text free of quotes, whitespace, and structural characters, so it
/// encodes unquoted and survives the decode pipeline's whole-input trim.
fn plain_field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{0,12}"
}

/// Element text that additionally never contains the dimension delimiter.
fn element() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,8}"
}

proptest! {
    #[test]
    fn prop_split_join_inverse(raw in "[a-zA-Z0-9|]{0,20}") {
        let cell = Cell::split(&raw, '|');
        prop_assert_eq!(cell.join('|'), raw);
    }

    #[test]
    fn prop_join_split_inverse(parts in prop::collection::vec(element(), 2..6)) {
        let cell = Cell::List(parts.clone());
        let rejoined = Cell::split(&cell.join('|'), '|');
        prop_assert_eq!(rejoined, Cell::List(parts));
    }

    #[test]
    fn prop_round_trip_plain_grid(
        grid in prop::collection::vec(prop::collection::vec(plain_field(), 3), 1..6)
    ) {
        // Build a canonical 3-column document: header plus data rows.
        let mut lines = vec!["c0,c1,c2".to_string()];
        for row in &grid {
            lines.push(row.join(","));
        }
        let csv = lines.join("\n");

        let doc = parse(&csv).unwrap();
        prop_assert_eq!(stringify(&doc), csv);
    }

    #[test]
    fn prop_flatten_result_is_all_scalar(
        values in prop::collection::vec(element(), 1..5),
        extra in plain_field()
    ) {
        let csv = format!("a,b\n\"{}\",{}", values.join("|"), extra);
        let doc = parse(&csv).unwrap();
        let flat = doc.flatten(&FlattenOptions::new());
        for row in flat.to_rows() {
            for cell in row {
                prop_assert!(cell.is_scalar());
            }
        }
    }

    #[test]
    fn prop_flatten_is_idempotent(
        values in prop::collection::vec(element(), 1..5)
    ) {
        let csv = format!("a,b\n\"{}\",x", values.join("|"));
        let doc = parse(&csv).unwrap();
        let once = doc.flatten(&FlattenOptions::new());
        let twice = once.flatten(&FlattenOptions::new());
        prop_assert_eq!(once.to_objects(), twice.to_objects());
    }

    #[test]
    fn prop_single_column_flatten_row_count(
        values in prop::collection::vec(element(), 1..6)
    ) {
        let csv = format!("a,b\n\"{}\",x", values.join("|"));
        let doc = parse(&csv).unwrap();
        let flat = doc.flatten(&FlattenOptions::new());
        // One list column with k elements expands to k rows (a singleton
        // list still counts as a list cell).
        prop_assert_eq!(flat.len(), values.len().max(1));
    }

    #[test]
    fn prop_cartesian_flatten_row_count(
        left in prop::collection::vec(element(), 2..5),
        right in prop::collection::vec(element(), 2..5)
    ) {
        let csv = format!("a,b\n\"{}\",\"{}\"", left.join("|"), right.join("|"));
        let doc = parse(&csv).unwrap();
        let flat = doc.flatten(&FlattenOptions::new());
        prop_assert_eq!(flat.len(), left.len() * right.len());
    }
}
