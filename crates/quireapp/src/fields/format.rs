//! Display formatting of stored values.
//!
//! [`apply`] turns any [`Value`] into the string shown in list tables and
//! option labels. It never fails: formatting is a display concern, and a value
//! that cannot be rendered degrades to a fallback string instead of an error.
//!
//! ## Rules
//!
//! - Text with no format is returned unchanged.
//! - Text on a `date`, `datetime` or `time` field with a format is parsed with
//!   the type's input layout and re-rendered with the format (a chrono strftime
//!   pattern). Unparseable text renders the zero instant, see [`parse_lenient`].
//! - Numbers use their shortest display form (`42`, `1.5`).
//! - References render as the hyphenated UUID.
//! - Timestamps use the field's format, or [`DEFAULT_TIMESTAMP_FORMAT`].
//! - Lists have no single-cell rendering and yield [`NO_VALUE`].
//!
//! An invalid strftime pattern does not panic; the unformatted text is used.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{self, Write};

use super::FieldType;
use crate::model::Value;

/// Rendered for value shapes that have no display form.
pub const NO_VALUE: &str = "-nil-";

/// Default rendering of timestamps, e.g. `Apr 14, 2022 12:08pm`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %-d, %Y %-I:%M%P";

/// Formats `value` for display given a field's type and format.
///
/// `field_type` is `None` when a column names something that is not a schema
/// field (e.g. `title`); such values follow the untyped rules.
pub fn apply(field_type: Option<FieldType>, format: Option<&str>, value: &Value) -> String {
    let format = format.filter(|f| !f.is_empty());
    match value {
        Value::Text(text) => {
            let layout_type = field_type.filter(FieldType::is_temporal);
            match (format, layout_type) {
                (Some(pattern), Some(t)) => {
                    let instant = parse_lenient(t, text);
                    render(instant.format(pattern)).unwrap_or_else(|| text.clone())
                }
                _ => text.clone(),
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Reference(id) => id.to_string(),
        Value::Timestamp(ts) => format
            .and_then(|pattern| render(ts.format(pattern)))
            .or_else(|| render(ts.format(DEFAULT_TIMESTAMP_FORMAT)))
            .unwrap_or_default(),
        Value::List(_) => NO_VALUE.to_string(),
    }
}

/// Parses stored temporal text, falling back to the zero instant.
///
/// This is deliberately tolerant: a malformed stored value renders as
/// `0001-01-01 00:00` in the field's format rather than failing the whole
/// table. Non-temporal types also yield the zero instant.
pub fn parse_lenient(field_type: FieldType, raw: &str) -> NaiveDateTime {
    let raw = raw.trim();
    let parsed = field_type.input_layout().and_then(|layout| match field_type {
        FieldType::Date => NaiveDate::parse_from_str(raw, layout)
            .map(|d| d.and_time(NaiveTime::default()))
            .ok(),
        FieldType::Time => NaiveTime::parse_from_str(raw, layout)
            .map(|t| zero_instant().date().and_time(t))
            .ok(),
        _ => NaiveDateTime::parse_from_str(raw, layout).ok(),
    });
    parsed.unwrap_or_else(|| {
        tracing::debug!(%field_type, raw, "unparseable temporal value, using zero instant");
        zero_instant()
    })
}

fn zero_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::default())
}

// chrono reports bad patterns as a fmt::Error from Display; writing into a
// String surfaces that instead of panicking the way to_string() would.
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}
