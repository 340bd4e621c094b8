//! Content-type discriminator resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

use super::Id;

/// The closed set of content kinds a contribution can carry.
///
/// The raw API spells the discriminator several ways (`thread`, `comment`
/// and `reply` all denote a comment; a post arrives as `researchhubpost`);
/// [`ContentKind::resolve`] folds those spellings into this set. There is
/// deliberately no catch-all variant: a new upstream content type must fail
/// loudly at parse time rather than slip through a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A discussion thread, comment, or reply.
    Comment,
    /// An uploaded paper.
    Paper,
    /// A native post.
    Post,
    /// A hypothesis.
    Hypothesis,
}

impl ContentKind {
    /// Resolve a raw discriminator string into a kind.
    ///
    /// Case-sensitive, first match wins. Anything outside the closed set is
    /// an [`ParseError::UnrecognizedDiscriminator`] carrying the raw string.
    pub fn resolve(raw_name: &str) -> ParseResult<Self> {
        match raw_name {
            "thread" | "comment" | "reply" => Ok(Self::Comment),
            "paper" => Ok(Self::Paper),
            "researchhubpost" => Ok(Self::Post),
            "hypothesis" => Ok(Self::Hypothesis),
            other => Err(ParseError::unrecognized(other)),
        }
    }

    /// Normalized name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Paper => "paper",
            Self::Post => "post",
            Self::Hypothesis => "hypothesis",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved content-type object of a contribution. The raw
/// discriminator sub-object carries its own id, propagated untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    /// Id of the content-type record, when the API supplies one.
    pub id: Option<Id>,

    /// The resolved kind.
    #[serde(rename = "name")]
    pub kind: ContentKind,
}
