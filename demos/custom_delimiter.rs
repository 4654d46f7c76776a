//! Using a non-default dimension delimiter.
//!
//! Run with: cargo run --example custom_delimiter

use dimcsv::{parse_with_options, stringify_with_options, ParseOptions, StringifyOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Semicolon-delimited lists; '|' is plain text in this configuration.
    let csv = "name,emails\nAlice,\"a@x.io;b@x.io\"";

    let options = ParseOptions::new().with_dimension_delimiters(vec![';']);
    let doc = parse_with_options(csv, options)?;

    let emails = doc.to_objects()[0].get("emails").cloned().unwrap();
    println!("emails: {:?}", emails.as_list());

    let out = stringify_with_options(
        &doc,
        StringifyOptions::new().with_dimension_delimiters(vec![';']),
    );
    assert_eq!(out, csv);
    println!("round trip: ok");

    Ok(())
}
