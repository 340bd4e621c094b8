//! Contribution dispatch and variant mapping.
//!
//! `parse_contribution` resolves the `content_type` discriminator, then
//! delegates to exactly one variant mapper over `raw.item`. The four
//! variants share one generic mapper parameterized by a small descriptor
//! (which field names the actor, whether the document summary is
//! backfilled); only the per-variant scalars differ.

use serde_json::{Value, json};
use tracing::{trace, warn};

use crate::error::ParseResult;
use crate::models::{
    CommentContribution, ContentKind, Contribution, ContributionItem, CreatedBy,
    HypothesisContribution, Id, PaperContribution, PostContribution, UnifiedDocument,
};
use crate::raw;

use super::author::parse_author_profile;
use super::content_type::parse_content_type;
use super::document::parse_unified_document;

/// Per-variant mapping descriptor.
struct VariantRules {
    /// Raw field naming the creating actor.
    created_by_field: &'static str,
    /// Whether to inject the `documents` summary before document parsing.
    backfill_documents: bool,
}

const COMMENT_RULES: VariantRules =
    VariantRules { created_by_field: "created_by", backfill_documents: false };
const PAPER_RULES: VariantRules =
    VariantRules { created_by_field: "uploaded_by", backfill_documents: true };
const POST_RULES: VariantRules =
    VariantRules { created_by_field: "created_by", backfill_documents: false };
const HYPOTHESIS_RULES: VariantRules =
    VariantRules { created_by_field: "created_by", backfill_documents: false };

/// Fields every contribution variant carries.
struct CommonFields {
    id: Id,
    created_by: CreatedBy,
    unified_document: UnifiedDocument,
}

fn parse_common(raw: &Value, rules: &VariantRules) -> ParseResult<CommonFields> {
    let id = raw::id_field(raw, "id")?;
    let created_by = parse_created_by(raw::field(raw, rules.created_by_field)?)?;
    let unified_document = if rules.backfill_documents {
        parse_unified_document(&with_backfilled_documents(raw)?)?
    } else {
        parse_unified_document(raw::field(raw, "unified_document")?)?
    };
    Ok(CommonFields { id, created_by, unified_document })
}

/// Build an augmented copy of `raw.unified_document` with a synthetic
/// `documents: {id, title, slug}` summary copied from the record's own
/// top-level fields.
///
/// Paper records do not nest the summary the document parser expects, so it
/// is backfilled here. The injection goes into a clone; the caller's record
/// is left untouched.
fn with_backfilled_documents(raw: &Value) -> ParseResult<Value> {
    let mut document = raw::cloned_object(raw, "unified_document")?;
    document.insert(
        "documents".to_owned(),
        json!({
            "id": raw::field(raw, "id")?.clone(),
            "title": raw::str_field(raw, "title")?,
            "slug": raw::str_field(raw, "slug")?,
        }),
    );
    Ok(Value::Object(document))
}

/// Map a raw actor record into a [`CreatedBy`].
///
/// The actor's own `first_name`/`last_name` are copied onto the nested
/// `author_profile` before that sub-record is mapped, overwriting whatever
/// name fields the profile carried. The top-level actor name is
/// authoritative; the overwrite is applied to a cloned copy of the profile.
pub fn parse_created_by(raw: &Value) -> ParseResult<CreatedBy> {
    let first_name = raw::str_field(raw, "first_name")?;
    let last_name = raw::str_field(raw, "last_name")?;

    let mut profile = raw::cloned_object(raw, "author_profile")?;
    profile.insert("first_name".to_owned(), Value::String(first_name.clone()));
    profile.insert("last_name".to_owned(), Value::String(last_name.clone()));
    let author_profile = parse_author_profile(&Value::Object(profile))?;

    Ok(CreatedBy { id: raw::id_field(raw, "id")?, first_name, last_name, author_profile })
}

/// Map a raw comment/reply/thread item.
pub fn parse_comment_contribution(raw: &Value) -> ParseResult<CommentContribution> {
    let common = parse_common(raw, &COMMENT_RULES)?;
    Ok(CommentContribution {
        id: common.id,
        plain_text: raw::str_field(raw, "plain_text")?,
        created_by: common.created_by,
        unified_document: common.unified_document,
    })
}

/// Map a raw paper item, backfilling the document summary.
pub fn parse_paper_contribution(raw: &Value) -> ParseResult<PaperContribution> {
    let common = parse_common(raw, &PAPER_RULES)?;
    Ok(PaperContribution {
        id: common.id,
        title: raw::str_field(raw, "title")?,
        slug: raw::str_field(raw, "slug")?,
        created_by: common.created_by,
        unified_document: common.unified_document,
    })
}

/// Map a raw native-post item.
pub fn parse_post_contribution(raw: &Value) -> ParseResult<PostContribution> {
    let common = parse_common(raw, &POST_RULES)?;
    Ok(PostContribution {
        id: common.id,
        title: raw::str_field(raw, "title")?,
        slug: raw::str_field(raw, "slug")?,
        created_by: common.created_by,
        unified_document: common.unified_document,
    })
}

/// Map a raw hypothesis item.
pub fn parse_hypothesis_contribution(raw: &Value) -> ParseResult<HypothesisContribution> {
    let common = parse_common(raw, &HYPOTHESIS_RULES)?;
    Ok(HypothesisContribution {
        id: common.id,
        title: raw::str_field(raw, "title")?,
        slug: raw::str_field(raw, "slug")?,
        created_by: common.created_by,
        unified_document: common.unified_document,
    })
}

/// Map a raw feed record into a [`Contribution`].
///
/// Resolution failures and mapping failures propagate as-is; no partial
/// result is ever returned and no fallback variant exists. The match below
/// is intentionally exhaustive over [`ContentKind`] so adding a content
/// type without a variant mapper fails to compile.
pub fn parse_contribution(raw: &Value) -> ParseResult<Contribution> {
    let content_type =
        parse_content_type(raw::field(raw, "content_type")?).inspect_err(|err| {
            if err.is_schema_drift() {
                warn!(error = %err, "rejected feed record with unknown content type");
            }
        })?;

    trace!(kind = %content_type.kind, "dispatching contribution variant");
    let item_raw = raw::field(raw, "item")?;
    let item = match content_type.kind {
        ContentKind::Comment => ContributionItem::Comment(parse_comment_contribution(item_raw)?),
        ContentKind::Paper => ContributionItem::Paper(parse_paper_contribution(item_raw)?),
        ContentKind::Post => ContributionItem::Post(parse_post_contribution(item_raw)?),
        ContentKind::Hypothesis => {
            ContributionItem::Hypothesis(parse_hypothesis_contribution(item_raw)?)
        }
    };

    Ok(Contribution {
        created_date: raw::datetime_field(raw, "created_date")?,
        content_type,
        item,
    })
}
