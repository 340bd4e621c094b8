//! Contribution aggregates for the activity feed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AuthorProfile, ContentKind, ContentType, Id, UnifiedDocument};

/// The actor who created a contribution.
///
/// Invariant: `author_profile.first_name`/`last_name` always equal the
/// actor's own `first_name`/`last_name` — the top-level actor name is
/// authoritative and overwrites whatever the nested profile carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBy {
    /// Actor id.
    pub id: Id,

    /// Actor first name.
    pub first_name: String,

    /// Actor last name.
    pub last_name: String,

    /// The actor's author profile, with name fields overwritten from the
    /// actor record.
    pub author_profile: AuthorProfile,
}

/// A comment, reply, or discussion-thread contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentContribution {
    /// Comment id.
    pub id: Id,

    /// Plain-text body of the comment.
    pub plain_text: String,

    /// The commenting actor.
    pub created_by: CreatedBy,

    /// The document the comment belongs to.
    pub unified_document: UnifiedDocument,
}

/// A paper-upload contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperContribution {
    /// Paper id.
    pub id: Id,

    /// Paper title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// The uploading actor.
    pub created_by: CreatedBy,

    /// The paper's unified document, with the backfilled document summary.
    pub unified_document: UnifiedDocument,
}

/// A native-post contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContribution {
    /// Post id.
    pub id: Id,

    /// Post title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// The posting actor.
    pub created_by: CreatedBy,

    /// The post's unified document.
    pub unified_document: UnifiedDocument,
}

/// A hypothesis contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisContribution {
    /// Hypothesis id.
    pub id: Id,

    /// Hypothesis title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// The creating actor.
    pub created_by: CreatedBy,

    /// The hypothesis's unified document.
    pub unified_document: UnifiedDocument,
}

/// The typed payload of a contribution. Exactly one arm is populated per
/// instance, selected by the resolved [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContributionItem {
    /// Comment/reply/thread payload.
    Comment(CommentContribution),
    /// Paper payload.
    Paper(PaperContribution),
    /// Post payload.
    Post(PostContribution),
    /// Hypothesis payload.
    Hypothesis(HypothesisContribution),
}

impl ContributionItem {
    /// The content kind this arm corresponds to.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Comment(_) => ContentKind::Comment,
            Self::Paper(_) => ContentKind::Paper,
            Self::Post(_) => ContentKind::Post,
            Self::Hypothesis(_) => ContentKind::Hypothesis,
        }
    }

    /// The actor shared by every variant.
    #[must_use]
    pub const fn created_by(&self) -> &CreatedBy {
        match self {
            Self::Comment(c) => &c.created_by,
            Self::Paper(p) => &p.created_by,
            Self::Post(p) => &p.created_by,
            Self::Hypothesis(h) => &h.created_by,
        }
    }

    /// The unified document shared by every variant.
    #[must_use]
    pub const fn unified_document(&self) -> &UnifiedDocument {
        match self {
            Self::Comment(c) => &c.unified_document,
            Self::Paper(p) => &p.unified_document,
            Self::Post(p) => &p.unified_document,
            Self::Hypothesis(h) => &h.unified_document,
        }
    }
}

/// One normalized feed entry: a typed payload plus its creation date and
/// resolved content type.
///
/// Constructed only by the parser, which derives `content_type.kind` and
/// the `item` arm from the same discriminator resolution, so the two always
/// agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// When the contribution was created.
    pub created_date: DateTime<Utc>,

    /// The resolved content type.
    pub content_type: ContentType,

    /// The typed payload.
    pub item: ContributionItem,
}

impl Contribution {
    /// The content kind of this contribution.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.content_type.kind
    }
}
