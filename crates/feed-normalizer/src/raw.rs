//! Typed accessors over raw `serde_json::Value` records.
//!
//! Raw API records use snake_case keys with inconsistent nesting. These
//! helpers centralize the "required field or fail" policy: a missing key is
//! `MissingRequiredField`, a key with the wrong JSON shape is
//! `InvalidField`. Mappers build dotted paths into the `name` argument when
//! drilling into sub-objects so errors point at the exact offender.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{ParseError, ParseResult};
use crate::models::Id;

/// Look up a required field on a JSON object.
pub(crate) fn field<'a>(raw: &'a Value, name: &str) -> ParseResult<&'a Value> {
    match raw.get(name) {
        Some(Value::Null) | None => Err(ParseError::missing(name)),
        Some(value) => Ok(value),
    }
}

/// Look up an optional field; `null` and absent are both `None`.
pub(crate) fn opt_field<'a>(raw: &'a Value, name: &str) -> Option<&'a Value> {
    match raw.get(name) {
        Some(Value::Null) | None => None,
        value => value,
    }
}

/// Required string field.
pub(crate) fn str_field(raw: &Value, name: &str) -> ParseResult<String> {
    field(raw, name)?
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| ParseError::invalid(name, "string"))
}

/// Optional string field; absent and `null` yield `None`.
pub(crate) fn opt_str_field(raw: &Value, name: &str) -> ParseResult<Option<String>> {
    opt_field(raw, name)
        .map(|v| v.as_str().map(ToOwned::to_owned).ok_or_else(|| ParseError::invalid(name, "string")))
        .transpose()
}

/// Required integer field.
pub(crate) fn i64_field(raw: &Value, name: &str) -> ParseResult<i64> {
    field(raw, name)?.as_i64().ok_or_else(|| ParseError::invalid(name, "integer"))
}

/// Integer field defaulting to 0 when absent.
pub(crate) fn i64_field_or_zero(raw: &Value, name: &str) -> ParseResult<i64> {
    match opt_field(raw, name) {
        None => Ok(0),
        Some(v) => v.as_i64().ok_or_else(|| ParseError::invalid(name, "integer")),
    }
}

/// Float field defaulting to 0.0 when absent. Accepts integers.
pub(crate) fn f64_field_or_zero(raw: &Value, name: &str) -> ParseResult<f64> {
    match opt_field(raw, name) {
        None => Ok(0.0),
        Some(v) => v.as_f64().ok_or_else(|| ParseError::invalid(name, "number")),
    }
}

/// Boolean field defaulting to false when absent.
pub(crate) fn bool_field_or_false(raw: &Value, name: &str) -> ParseResult<bool> {
    match opt_field(raw, name) {
        None => Ok(false),
        Some(v) => v.as_bool().ok_or_else(|| ParseError::invalid(name, "boolean")),
    }
}

/// Required array field, returned as a slice for element-wise mapping.
pub(crate) fn array_field<'a>(raw: &'a Value, name: &str) -> ParseResult<&'a [Value]> {
    field(raw, name)?.as_array().map(Vec::as_slice).ok_or_else(|| ParseError::invalid(name, "array"))
}

/// Required opaque identifier field (numeric or string, never interpreted).
pub(crate) fn id_field(raw: &Value, name: &str) -> ParseResult<Id> {
    match field(raw, name)? {
        Value::Number(n) => {
            n.as_i64().map(Id::Number).ok_or_else(|| ParseError::invalid(name, "integer or string id"))
        }
        Value::String(s) => Ok(Id::Text(s.clone())),
        _ => Err(ParseError::invalid(name, "integer or string id")),
    }
}

/// Optional opaque identifier field.
pub(crate) fn opt_id_field(raw: &Value, name: &str) -> ParseResult<Option<Id>> {
    match opt_field(raw, name) {
        None => Ok(None),
        Some(_) => id_field(raw, name).map(Some),
    }
}

/// Required RFC 3339 timestamp field.
pub(crate) fn datetime_field(raw: &Value, name: &str) -> ParseResult<DateTime<Utc>> {
    let text = str_field(raw, name)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ParseError::InvalidTimestamp { field: name.to_owned(), source })
}

/// Clone a required sub-object so it can be augmented before delegation.
/// Mappers that inject fields work on this copy, never on caller-owned input.
pub(crate) fn cloned_object(raw: &Value, name: &str) -> ParseResult<Map<String, Value>> {
    field(raw, name)?
        .as_object()
        .cloned()
        .ok_or_else(|| ParseError::invalid(name, "object"))
}
