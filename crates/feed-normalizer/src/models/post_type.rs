//! Post-type registry for the contribution editor.
//!
//! A static catalogue of the post types a user can create, with their
//! editor grouping and default selection. Mirrors the platform's post-type
//! configuration; presentation concerns (icons, placeholder copy) stay in
//! the UI layer.

use serde::{Deserialize, Serialize};

/// Which editor group a post type is offered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostGroup {
    /// Contributing content to an existing document.
    Contribute,
    /// Requesting content from the community.
    Request,
}

/// The closed set of post types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    /// Open discussion.
    Discussion,
    /// Summary of a paper.
    Summary,
    /// Peer review.
    Review,
    /// Answer to a question post.
    Answer,
    /// Request for a summary.
    SummaryRequest,
    /// Request for a peer review.
    ReviewRequest,
    /// Any other request.
    OtherRequest,
}

impl PostType {
    /// Label shown in the editor.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discussion => "Discuss",
            Self::Summary | Self::SummaryRequest => "Summary",
            Self::Review | Self::ReviewRequest => "Peer review",
            Self::Answer => "Answer",
            Self::OtherRequest => "Other",
        }
    }

    /// Editor group this type is offered under.
    #[must_use]
    pub const fn group(self) -> PostGroup {
        match self {
            Self::Discussion | Self::Summary | Self::Review | Self::Answer => PostGroup::Contribute,
            Self::SummaryRequest | Self::ReviewRequest | Self::OtherRequest => PostGroup::Request,
        }
    }
}

/// Post types offered on a document page, in display order. The first
/// entry is the editor's preselected default.
#[must_use]
pub const fn post_types() -> &'static [PostType] {
    &[
        PostType::Discussion,
        PostType::Review,
        PostType::Summary,
        PostType::ReviewRequest,
        PostType::SummaryRequest,
    ]
}

/// Post types offered on a question page, in display order. The first
/// entry is the editor's preselected default.
#[must_use]
pub const fn question_post_types() -> &'static [PostType] {
    &[PostType::Answer, PostType::Discussion]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_type_wire_format() {
        let parsed: PostType = serde_json::from_str("\"REVIEW_REQUEST\"").unwrap();
        assert_eq!(parsed, PostType::ReviewRequest);
        assert_eq!(serde_json::to_string(&PostType::Discussion).unwrap(), "\"DISCUSSION\"");
    }

    #[test]
    fn test_registry_defaults() {
        assert_eq!(post_types().first(), Some(&PostType::Discussion));
        assert_eq!(question_post_types().first(), Some(&PostType::Answer));
    }

    #[test]
    fn test_groups() {
        assert_eq!(PostType::Review.group(), PostGroup::Contribute);
        assert_eq!(PostType::ReviewRequest.group(), PostGroup::Request);
        assert_eq!(PostType::Review.label(), PostType::ReviewRequest.label());
    }
}
