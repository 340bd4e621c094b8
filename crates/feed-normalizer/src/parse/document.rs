//! Unified-document mapping.

use serde_json::Value;

use crate::error::{ParseError, ParseResult};
use crate::models::UnifiedDocument;

/// Map a raw record into a [`UnifiedDocument`].
///
/// Accepts an optional `documents: {id, title, slug}` sub-object; paper
/// mappers backfill it before delegating here, other sources may nest it
/// natively.
pub fn parse_unified_document(raw: &Value) -> ParseResult<UnifiedDocument> {
    serde_json::from_value(raw.clone())
        .map_err(|source| ParseError::deserialize("unified_document", source))
}
