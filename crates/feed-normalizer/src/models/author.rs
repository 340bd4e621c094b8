//! Author profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, Institution};

/// The lighter author profile used for coauthors, created-by actors, and
/// leaderboard entries. Deserialized straight off the wire (snake_case);
/// serializes camelCase like every other client object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AuthorProfile {
    /// Author profile id.
    pub id: Id,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Avatar URL.
    #[serde(default)]
    pub profile_image: Option<String>,

    /// Short headline shown under the name.
    #[serde(default)]
    pub headline: Option<String>,

    /// Whether the profile passed identity verification.
    #[serde(default)]
    pub is_verified: bool,
}

impl AuthorProfile {
    /// Full display name, first and last joined with a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile achievements awarded by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Achievement {
    /// The author's works have been cited.
    CitedAuthor,
    /// The author publishes open access.
    OpenAccess,
}

/// An author's affiliation with an institution over a span of years.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInstitution {
    /// Affiliation record id.
    pub id: Id,

    /// The institution itself.
    pub institution: Institution,

    /// Years of affiliation.
    pub years: Vec<i32>,
}

/// Publication and citation counts for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyActivity {
    /// Calendar year.
    pub year: i32,

    /// Works published that year.
    pub works_count: i64,

    /// Citations received that year.
    pub citation_count: i64,
}

/// Aggregate statistics over an author's whole output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Total works.
    pub works_count: i64,

    /// Total citations.
    pub citation_count: i64,

    /// Two-year mean citedness (impact-factor analogue).
    pub two_year_mean_citedness: f64,
}

/// The rich author aggregate backing profile pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAuthorProfile {
    /// Author profile id.
    pub id: Id,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Whether the profile passed identity verification.
    pub is_verified: bool,

    /// Avatar URL.
    pub profile_image: Option<String>,

    /// Short headline shown under the name; empty when the API omits it.
    pub headline: String,

    /// Free-form profile description.
    pub description: Option<String>,

    /// OpenAlex ids linked to this profile.
    pub openalex_ids: Vec<String>,

    /// Institutional affiliations.
    pub institutions: Vec<AuthorInstitution>,

    /// Frequent coauthors, as light profiles (no recursion).
    pub coauthors: Vec<AuthorProfile>,

    /// Per-year publication activity.
    pub activity_by_year: Vec<YearlyActivity>,

    /// Awarded achievements.
    pub achievements: Vec<Achievement>,

    /// Fraction of works published open access.
    pub open_access_pct: f64,

    /// h-index.
    pub h_index: i64,

    /// i10-index.
    pub i10_index: i64,

    /// When the profile was created.
    pub created_date: DateTime<Utc>,

    /// ORCID profile URL.
    pub orcid_url: Option<String>,

    /// X (Twitter) profile URL.
    pub x_url: Option<String>,

    /// LinkedIn profile URL.
    pub linked_in_url: Option<String>,

    /// Google Scholar profile URL.
    pub google_scholar_url: Option<String>,

    /// Whole-career summary statistics.
    pub summary_stats: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_profile_deserialize_minimal() {
        let json = r#"{"id": 9, "first_name": "Ada", "last_name": "Lovelace"}"#;
        let profile: AuthorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Id::Number(9));
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert!(profile.profile_image.is_none());
        assert!(!profile.is_verified);
    }

    #[test]
    fn test_author_profile_serializes_camel_case() {
        let profile = AuthorProfile {
            id: Id::Number(9),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            profile_image: None,
            headline: None,
            is_verified: true,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["isVerified"], true);
    }

    #[test]
    fn test_achievement_wire_format() {
        let parsed: Achievement = serde_json::from_str("\"CITED_AUTHOR\"").unwrap();
        assert_eq!(parsed, Achievement::CitedAuthor);
        assert!(serde_json::from_str::<Achievement>("\"TOP_POSTER\"").is_err());
    }
}
