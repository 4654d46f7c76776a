//! Expanding list cells into scalar rows, join-table style.
//!
//! Run with: cargo run --example flattening

use dimcsv::{parse, stringify, FlattenOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let csv = "name,tags,skills\nAlice,\"a|b\",\"x|y\"\nBob,c,z";
    let doc = parse(csv)?;

    // Auto-detected targets: every column with at least one list cell.
    // Alice expands to the 2x2 Cartesian product; Bob stays one row.
    let flat = doc.flatten(&FlattenOptions::new());
    println!("auto-detect ({} rows):\n{}\n", flat.len(), stringify(&flat));

    // Explicit target: only tags expands, skills collapses to its first
    // element.
    let flat = doc.flatten(&FlattenOptions::new().with_columns(vec!["tags".into()]));
    println!("tags only ({} rows):\n{}", flat.len(), stringify(&flat));

    Ok(())
}
