//! Typed domain models produced by the normalization layer.
//!
//! Output aggregates serialize camelCase (the platform's client-object
//! convention); collaborator models deserialized straight off the wire keep
//! snake_case keys and use `#[serde(default)]` for optional fields.

mod author;
mod content_type;
mod contribution;
mod document;
mod id;
mod institution;
mod leaderboard;
mod post_type;

pub use author::{
    Achievement, AuthorInstitution, AuthorProfile, FullAuthorProfile, SummaryStats, YearlyActivity,
};
pub use content_type::{ContentKind, ContentType};
pub use contribution::{
    CommentContribution, Contribution, ContributionItem, CreatedBy, HypothesisContribution,
    PaperContribution, PostContribution,
};
pub use document::{DocumentRef, Hub, UnifiedDocument};
pub use id::Id;
pub use institution::Institution;
pub use leaderboard::LeaderboardEntry;
pub use post_type::{PostGroup, PostType, post_types, question_post_types};
