//! Wire-format edge cases: quoting, terminators, ragged rows, and the JSON
//! shape of decoded documents.

use dimcsv::{
    parse, parse_with_options, row, stringify, stringify_rows, Cell, ParseOptions, Row,
    StringifyOptions,
};

#[test]
fn test_crlf_and_bare_cr_terminators() {
    let doc = parse("a,b\r\n1,2\r3,4").unwrap();
    assert_eq!(doc.headers(), ["a", "b"]);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.to_objects()[1], row! { "a" => "3", "b" => "4" });
}

#[test]
fn test_quoted_field_with_embedded_newline() {
    let doc = parse("note,id\n\"line1\nline2\",7").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.to_objects()[0].get("note"),
        Some(&Cell::from("line1\nline2"))
    );
}

#[test]
fn test_doubled_quotes_decode_to_one() {
    let doc = parse("a\n\"say \"\"hi\"\"\"").unwrap();
    assert_eq!(doc.to_objects()[0].get("a"), Some(&Cell::from("say \"hi\"")));
}

#[test]
fn test_unterminated_quote_is_accepted() {
    let doc = parse("a,b\n1,\"unterminated").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.to_objects()[0].get("b"),
        Some(&Cell::from("unterminated"))
    );
}

#[test]
fn test_ragged_row_missing_cells_read_empty() {
    let doc = parse("a,b,c\n1").unwrap();
    let rows = doc.to_objects();
    assert_eq!(rows[0].get("a"), Some(&Cell::from("1")));
    assert_eq!(rows[0].get("b"), Some(&Cell::empty()));
    assert_eq!(rows[0].get("c"), Some(&Cell::empty()));
}

#[test]
fn test_ragged_row_extra_cells_only_in_positional_view() {
    let doc = parse("a\n1,2,3").unwrap();
    // The positional view keeps the extras
    assert_eq!(
        doc.to_rows()[0],
        vec![Cell::from("1"), Cell::from("2"), Cell::from("3")]
    );
    // The object view cannot reach them
    let object = &doc.to_objects()[0];
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("a"), Some(&Cell::from("1")));
}

#[test]
fn test_duplicate_header_shadowing() {
    let doc = parse("a,a\n1,2").unwrap();
    assert_eq!(doc.headers(), ["a", "a"]);
    // Later duplicate shadows earlier in the object view
    assert_eq!(doc.to_objects()[0].get("a"), Some(&Cell::from("2")));
    // Both stay addressable positionally
    assert_eq!(doc.to_rows()[0], vec![Cell::from("1"), Cell::from("2")]);
}

#[test]
fn test_escaping_field_with_separator() {
    let rows = vec![Row::from(row! { "v" => "a,b" })];
    let out = stringify_rows(&[], &rows, &StringifyOptions::new());
    assert_eq!(out, "v\n\"a,b\"");
}

#[test]
fn test_escaping_field_with_quote() {
    let rows = vec![Row::from(row! { "v" => "a\"b" })];
    let out = stringify_rows(&[], &rows, &StringifyOptions::new());
    assert_eq!(out, "v\n\"a\"\"b\"");
}

#[test]
fn test_scalar_containing_delimiter_is_quoted() {
    // A scalar that textually contains the active delimiter must be quoted
    // even with quoted=false, or a re-parse would see a list.
    let rows = vec![Row::Array(vec![Cell::Scalar("a|b".into())])];
    let headers = vec!["v".to_string()];
    let out = stringify_rows(&headers, &rows, &StringifyOptions::new());
    assert_eq!(out, "v\n\"a|b\"");
}

#[test]
fn test_custom_delimiter_drives_quoting() {
    let rows = vec![Row::from(row! { "v" => "a~b" })];
    let options = StringifyOptions::new().with_dimension_delimiters(vec!['~']);
    let out = stringify_rows(&[], &rows, &options);
    assert_eq!(out, "v\n\"a~b\"");

    // The default delimiter is not dangerous under a custom one
    let rows = vec![Row::from(row! { "v" => "a|b" })];
    let options = StringifyOptions::new().with_dimension_delimiters(vec!['~']);
    let out = stringify_rows(&[], &rows, &options);
    assert_eq!(out, "v\na|b");
}

#[test]
fn test_empty_list_parts_round_trip() {
    let doc = parse("v\n\"a||b\"").unwrap();
    assert_eq!(
        doc.to_objects()[0].get("v"),
        Some(&Cell::from(vec!["a", "", "b"]))
    );
    assert_eq!(stringify(&doc), "v\n\"a||b\"");
}

#[test]
fn test_multi_level_delimiters_only_first_is_active() {
    let options = ParseOptions::new().with_dimension_delimiters(vec!['|', ';']);
    let doc = parse_with_options("v\n\"a|b;c\"", options).unwrap();
    // No nested splitting: the second delimiter stays literal text.
    assert_eq!(
        doc.to_objects()[0].get("v"),
        Some(&Cell::from(vec!["a", "b;c"]))
    );
}

#[test]
fn test_whole_input_trim() {
    let doc = parse("\n\nname\nAlice\n\n").unwrap();
    assert_eq!(doc.headers(), ["name"]);
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_json_wire_shape_of_document() {
    let doc = parse("name,tags\nAlice,\"js|ts\"\nBob,solo").unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["headers"], serde_json::json!(["name", "tags"]));
    // A list cell is a JSON array, a scalar cell a JSON string
    assert_eq!(json["rows"][0]["tags"], serde_json::json!(["js", "ts"]));
    assert_eq!(json["rows"][1]["tags"], serde_json::json!("solo"));
}

#[test]
fn test_json_wire_shape_positional_rows() {
    let options = ParseOptions::new().with_as_objects(false);
    let doc = parse_with_options("a,b\n\"x|y\",z", options).unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["rows"][0], serde_json::json!([["x", "y"], "z"]));
}
