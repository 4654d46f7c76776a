//! Low-level row tokenization and field escaping.
//!
//! This module is the quote-aware boundary between raw text and rows of raw
//! (unsplit) field strings. It knows nothing about dimension delimiters;
//! that happens one layer up in [`Cell::split`](crate::Cell::split).
//!
//! ## Tokenization rules
//!
//! - `,` separates fields, `\n`, `\r\n`, or bare `\r` separates rows
//! - a `"` outside a quoted region enters quoted mode without becoming part
//!   of the field text; a lone `"` inside exits it
//! - `""` inside a quoted region emits one literal quote
//! - any other character inside a quoted region is kept verbatim, including
//!   raw newlines, which is how a field legitimately spans physical lines
//!
//! The tokenizer has no error channel. Malformed input degrades: an
//! unterminated quote simply consumes to the end of input.
//!
//! ## Examples
//!
//! ```rust
//! use dimcsv::tokenizer::tokenize_rows;
//!
//! let rows = tokenize_rows("a,\"b,c\"\nd,e");
//! assert_eq!(rows, vec![
//!     vec!["a".to_string(), "b,c".to_string()],
//!     vec!["d".to_string(), "e".to_string()],
//! ]);
//! ```

const QUOTE: char = '"';
const FIELD_SEPARATOR: char = ',';

/// Tokenizes full input into rows of raw field strings.
///
/// At end of input the accumulated field and row are always pushed, so input
/// ending in a row terminator yields a final single-empty-field row; callers
/// that trim their input first (as the decode pipeline does) never observe
/// it. Wholly empty input yields no rows.
///
/// # Examples
///
/// ```rust
/// use dimcsv::tokenizer::tokenize_rows;
///
/// // Quoted fields may span lines
/// let rows = tokenize_rows("a,\"line1\nline2\"");
/// assert_eq!(rows, vec![vec!["a".to_string(), "line1\nline2".to_string()]]);
///
/// // All three terminator conventions are accepted
/// assert_eq!(tokenize_rows("a\r\nb\rc").len(), 3);
/// ```
#[must_use]
pub fn tokenize_rows(input: &str) -> Vec<Vec<String>> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quote {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    current.push(QUOTE);
                } else {
                    in_quote = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }
        match c {
            QUOTE => in_quote = true,
            FIELD_SEPARATOR => fields.push(std::mem::take(&mut current)),
            '\n' => {
                fields.push(std::mem::take(&mut current));
                rows.push(std::mem::take(&mut fields));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut current));
                rows.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    rows.push(fields);
    rows
}

/// Tokenizes a single line into raw field strings.
///
/// Embedded newlines in quoted fields are kept verbatim, but only the first
/// resulting row is returned.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<String> {
    tokenize_rows(line).into_iter().next().unwrap_or_default()
}

/// Escapes one field for output.
///
/// If `force_quote` is set, or the field contains any character in
/// `dangerous`, the field is wrapped in quotes with every internal quote
/// doubled; otherwise it is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use dimcsv::tokenizer::escape_field;
///
/// let dangerous = ['\n', '\r', ',', '"'];
/// assert_eq!(escape_field("plain", false, &dangerous), "plain");
/// assert_eq!(escape_field("a,b", false, &dangerous), "\"a,b\"");
/// assert_eq!(escape_field("a\"b", false, &dangerous), "\"a\"\"b\"");
/// assert_eq!(escape_field("plain", true, &dangerous), "\"plain\"");
/// ```
#[must_use]
pub fn escape_field(field: &str, force_quote: bool, dangerous: &[char]) -> String {
    if !force_quote && !field.contains(dangerous) {
        return field.to_string();
    }
    let mut out = String::with_capacity(field.len() + 2);
    out.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}

/// Escapes each field and joins them into one output line.
#[must_use]
pub fn write_row(fields: &[String], force_quote: bool, dangerous: &[char]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f, force_quote, dangerous))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_plain_rows() {
        assert_eq!(
            tokenize_rows("a,b\nc,d"),
            owned(&[&["a", "b"], &["c", "d"]])
        );
    }

    #[test]
    fn test_quoted_field_with_separator() {
        assert_eq!(tokenize_rows("\"a,b\",c"), owned(&[&["a,b", "c"]]));
    }

    #[test]
    fn test_doubled_quote_escape() {
        assert_eq!(tokenize_rows("\"say \"\"hi\"\"\""), owned(&[&["say \"hi\""]]));
    }

    #[test]
    fn test_quoted_field_spanning_lines() {
        assert_eq!(
            tokenize_rows("a,\"one\ntwo\"\nb,c"),
            owned(&[&["a", "one\ntwo"], &["b", "c"]])
        );
    }

    #[test]
    fn test_row_terminators() {
        assert_eq!(
            tokenize_rows("a\r\nb\rc\nd"),
            owned(&[&["a"], &["b"], &["c"], &["d"]])
        );
    }

    #[test]
    fn test_trailing_terminator_yields_trailing_empty_row() {
        assert_eq!(tokenize_rows("a\n"), owned(&[&["a"], &[""]]));
        assert_eq!(tokenize_rows("a"), owned(&[&["a"]]));
        assert_eq!(tokenize_rows(""), Vec::<Vec<String>>::new());
    }

    #[test]
    fn test_unterminated_quote_consumes_to_end() {
        assert_eq!(tokenize_rows("a,\"b,c\nd"), owned(&[&["a", "b,c\nd"]]));
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(tokenize_rows("a,,b"), owned(&[&["a", "", "b"]]));
        assert_eq!(tokenize_rows(",\n,"), owned(&[&["", ""], &["", ""]]));
    }

    #[test]
    fn test_tokenize_line() {
        assert_eq!(tokenize_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_write_row_round_trips() {
        let fields = vec!["a,b".to_string(), "c\"d".to_string(), "plain".to_string()];
        let line = write_row(&fields, false, &['\n', '\r', ',', '"']);
        assert_eq!(line, "\"a,b\",\"c\"\"d\",plain");
        assert_eq!(tokenize_line(&line), fields);
    }
}
