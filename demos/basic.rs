//! First contact with the dimensional-CSV codec.
//!
//! Run with: cargo run --example basic

use dimcsv::{parse, stringify, Cell};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let csv = "name,age,tags\nAlice,30,\"js|ts|rust\"\nBob,25,\"hiking|photography\"";

    let doc = parse(csv)?;
    println!("headers: {:?}", doc.headers());

    for row in doc.to_objects() {
        for (header, cell) in &row {
            match cell {
                Cell::Scalar(s) => println!("  {header}: {s}"),
                Cell::List(values) => println!("  {header}: {values:?}"),
            }
        }
        println!();
    }

    // Encoding reproduces the canonical input exactly.
    assert_eq!(stringify(&doc), csv);
    println!("round trip: ok");

    Ok(())
}
