//! Content-type discriminator mapping.

use serde_json::Value;

use crate::error::ParseResult;
use crate::models::{ContentKind, ContentType};
use crate::raw;

/// Map a raw content-type sub-object into a [`ContentType`].
///
/// Resolves `name` through the closed discriminator set and propagates the
/// sub-object's own `id` untouched.
pub fn parse_content_type(raw: &Value) -> ParseResult<ContentType> {
    let name = raw::str_field(raw, "name")?;
    let kind = ContentKind::resolve(&name)?;
    let id = raw::opt_id_field(raw, "id")?;
    Ok(ContentType { id, kind })
}
