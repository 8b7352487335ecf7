//! Parser for the bundled publications CSV.
//!
//! The dataset is a single machine-written export, so the grammar here is
//! deliberately small: no escaped quotes, no multi-line fields, no header
//! quoting. The quirks below are part of the contract and pinned by tests.

use std::collections::HashMap;

use crate::record::{Record, RecordSet};

/// Parse a whole CSV document into records.
///
/// The first line is the header row, split on `,` without quote handling and
/// trimmed per cell. Every later non-blank line becomes a record when it
/// yields at least as many fields as there are headers; shorter lines are
/// dropped, surplus fields are ignored, and kept values are trimmed.
pub fn parse_csv(text: &str) -> RecordSet {
    let mut lines = text.split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values = split_fields(line);
        if values.len() < headers.len() {
            continue;
        }
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(&values)
            .map(|(header, value)| ((*header).to_string(), value.trim().to_string()))
            .collect();
        records.push(Record::new(fields));
    }
    records
}

/// Split one data line on commas, honouring double quotes.
///
/// A `"` always toggles the in-quotes state and never reaches the field
/// value, so `""` is not an escape: a lone quote inside a field flips the
/// mode for the rest of the line. Known limitation, kept as-is because the
/// dataset never escapes quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
