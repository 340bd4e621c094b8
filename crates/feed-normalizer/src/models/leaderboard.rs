//! Leaderboard models.

use serde::Serialize;

use super::{AuthorProfile, Id};

/// One row of the reputation leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// User id.
    pub id: Id,

    /// Reputation score.
    pub reputation: i64,

    /// The user's author profile.
    pub author_profile: AuthorProfile,
}

impl LeaderboardEntry {
    /// Display name composed from the author profile.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.author_profile.full_name()
    }
}
