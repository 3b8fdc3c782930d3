//! Field access over opaque book source records.
//!
//! Book sources come in two schema variants that name the same fields
//! differently (`bookSourceUrl` vs `sourceUrl`). Records are kept as raw JSON
//! so every other field passes through untouched.

use serde_json::Value;

/// One book source. Kept as raw JSON; only a couple of fields are inspected.
pub type SourceRecord = Value;

const NAME_FIELDS: [&str; 2] = ["bookSourceName", "sourceName"];
const URL_FIELDS: [&str; 2] = ["bookSourceUrl", "sourceUrl"];

/// Placeholder used when a record carries no display name.
pub const UNKNOWN_NAME: &str = "未知";

/// Return the first non-empty string value among `fields`, in order.
///
/// Missing fields, empty strings, and non-string values all fall through to
/// the next candidate. Non-object records have no fields.
pub fn field_with_fallback<'a>(record: &'a SourceRecord, fields: &[&str]) -> Option<&'a str> {
    let object = record.as_object()?;
    fields
        .iter()
        .filter_map(|field| object.get(*field).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

/// Display name of a record, or [`UNKNOWN_NAME`].
pub fn display_name(record: &SourceRecord) -> &str {
    field_with_fallback(record, &NAME_FIELDS).unwrap_or(UNKNOWN_NAME)
}

/// Deduplication key of a record; empty when the record has no URL.
pub fn natural_key(record: &SourceRecord) -> &str {
    field_with_fallback(record, &URL_FIELDS).unwrap_or("")
}
