//! Utilities for the records output format
//!
//! Records output is line-oriented: a header line (`H trazo=1 records=1
//! mode=...`) followed by one line per record, fields separated by spaces.
//! Free-form text travels in a quoted field.

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Wrap free-form text in a quoted records field.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}
