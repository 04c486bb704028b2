//! Shared repair primitives
//!
//! Stored blobs are attacker-writable in some deployments, so repairs go
//! beyond type checks: control characters are stripped from strings,
//! lengths and collection sizes are capped to bound replay cost, and
//! numeric fields are forced into their documented ranges.

use serde_json::Value;

/// Longest accepted label, title, theme, or notification string
pub const MAX_LABEL_LEN: usize = 256;

/// Longest accepted chat message
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Most icon position/usage entries restored from one blob
pub const MAX_ICON_ENTRIES: usize = 100;

/// Most windows restored from one blob
pub const MAX_WINDOWS: usize = 50;

/// Most notification or buddy-message entries restored from one blob
pub const MAX_FEED_ENTRIES: usize = 100;

/// Strip control characters and cap the length at `max_len` characters
pub fn sanitize_string(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .take(max_len)
        .collect()
}

/// Read a finite f64, rejecting NaN and infinities
pub fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// Rehydrate a string array: drop non-strings, sanitize, cap entry count
pub fn string_entries(value: &Value, max_len: usize, max_entries: usize) -> Option<Vec<String>> {
    let array = value.as_array()?;
    Some(
        array
            .iter()
            .filter_map(Value::as_str)
            .map(|s| sanitize_string(s, max_len))
            .filter(|s| !s.is_empty())
            .take(max_entries)
            .collect(),
    )
}
