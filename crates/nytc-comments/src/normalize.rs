//! Normalization of upstream comment fields into [`nytc_core::Comment`].
//!
//! Both comment sources hand over loosely-typed JSON scalars here. Counts and
//! timestamps arrive as numbers on one endpoint and numeric strings on the
//! other, so everything is read from `serde_json::Value`.

use chrono::{DateTime, TimeZone, Utc};
use nytc_core::{Comment, ANONYMOUS_AUTHOR};
use serde_json::Value;

/// Epoch values above this are taken to be milliseconds, not seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Raw fields of one upstream comment, before validation.
#[derive(Debug, Default)]
pub(crate) struct RawFields<'a> {
    pub(crate) author: Option<&'a str>,
    pub(crate) body: Option<&'a str>,
    pub(crate) created_at: Option<&'a Value>,
    pub(crate) recommendations: Option<&'a Value>,
    pub(crate) editor_selected: Option<&'a Value>,
}

/// Builds a [`Comment`] from raw fields.
///
/// Returns `None` when the body is empty or the timestamp is missing or
/// unparseable. A missing author becomes [`ANONYMOUS_AUTHOR`]; a missing
/// recommendation count becomes `0`.
pub(crate) fn build_comment(raw: &RawFields<'_>) -> Option<Comment> {
    let body = raw.body.map(str::trim).filter(|b| !b.is_empty())?;
    let created_at = raw.created_at.and_then(parse_timestamp)?;

    let author_display_name = raw
        .author
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR)
        .to_string();

    Some(Comment {
        author_display_name,
        body: body.to_string(),
        created_at,
        recommendation_count: raw.recommendations.map_or(0, parse_count),
        is_editor_selected: raw.editor_selected.is_some_and(parse_flag),
    })
}

/// Parses an RFC 3339 string or a Unix epoch (seconds or milliseconds, as a
/// number or a numeric string).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                from_epoch(secs)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| from_epoch(f.trunc() as i64))
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            s.parse::<i64>().ok().and_then(from_epoch)
        }
        _ => None,
    }
}

fn from_epoch(raw: i64) -> Option<DateTime<Utc>> {
    if raw >= EPOCH_MILLIS_THRESHOLD {
        Utc.timestamp_millis_opt(raw).single()
    } else {
        Utc.timestamp_opt(raw, 0).single()
    }
}

/// Reads a non-negative count. Negative or non-numeric values become `0`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_count(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Reads an editor-selection marker: booleans, pick counters (`> 0`), or
/// `"true"` / `"1"` strings.
pub(crate) fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f > 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
