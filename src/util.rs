//! Small utility helpers for encoding, JSON extraction, and time handling.
//!
//! The functions in this module are intentionally lightweight to keep hot
//! paths fast and reduce compile times. They are used by networking, sorting,
//! and UI code.

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract an unsigned integer from a JSON object, trying keys in order.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - Returns `Some(u64)` for the first key holding a number or a numeric string; `None` otherwise.
///
/// Details:
/// - The theme catalog reports counters either as JSON numbers or as decimal strings
///   depending on the field, so both encodings are accepted.
#[must_use]
pub fn u64_of(v: &Value, keys: &[&str]) -> Option<u64> {
    for k in keys {
        if let Some(x) = v.get(*k) {
            if let Some(n) = x.as_u64() {
                return Some(n);
            }
            if let Some(st) = x.as_str()
                && let Ok(n) = st.trim().parse::<u64>()
            {
                return Some(n);
            }
        }
    }
    None
}

/// What: Extract a float from a JSON object, trying keys in order.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys tried in order.
///
/// Output:
/// - Returns `Some(f64)` for the first key holding a number or a numeric string; `None` otherwise.
#[must_use]
pub fn f64_of(v: &Value, keys: &[&str]) -> Option<f64> {
    for k in keys {
        if let Some(x) = v.get(*k) {
            if let Some(n) = x.as_f64() {
                return Some(n);
            }
            if let Some(st) = x.as_str()
                && let Ok(n) = st.trim().parse::<f64>()
            {
                return Some(n);
            }
        }
    }
    None
}

/// What: Parse a catalog `last_updated` value into a Unix timestamp.
///
/// Inputs:
/// - `raw`: Date string as reported by the catalog.
///
/// Output:
/// - `Some(i64)` seconds since the epoch on success; `None` for empty or unparseable input.
///
/// Details:
/// - Accepts `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD` (midnight UTC assumed).
#[must_use]
pub fn parse_last_updated(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(dt.and_utc().timestamp());
    }
    None
}

/// What: Render a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Inputs:
/// - `ts`: Optional seconds since the epoch.
///
/// Output:
/// - Formatted timestamp, or an empty string when absent/out of range.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    ts.and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
