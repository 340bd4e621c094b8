//! Author-profile mapping.

use serde_json::Value;
use tracing::trace;

use crate::error::{ParseError, ParseResult};
use crate::models::{
    Achievement, AuthorInstitution, AuthorProfile, FullAuthorProfile, Institution, SummaryStats,
    YearlyActivity,
};
use crate::raw;

/// Map a raw record into the lighter [`AuthorProfile`], used for coauthors,
/// created-by actors, and leaderboard entries.
pub fn parse_author_profile(raw: &Value) -> ParseResult<AuthorProfile> {
    serde_json::from_value(raw.clone())
        .map_err(|source| ParseError::deserialize("author_profile", source))
}

/// Map a raw record into an [`Institution`].
pub fn parse_institution(raw: &Value) -> ParseResult<Institution> {
    serde_json::from_value(raw.clone())
        .map_err(|source| ParseError::deserialize("institution", source))
}

fn parse_author_institution(raw: &Value) -> ParseResult<AuthorInstitution> {
    let years = raw::field(raw, "years")?;
    Ok(AuthorInstitution {
        id: raw::id_field(raw, "id")?,
        institution: parse_institution(raw::field(raw, "institution")?)?,
        years: serde_json::from_value(years.clone())
            .map_err(|source| ParseError::deserialize("institutions.years", source))?,
    })
}

fn parse_yearly_activity(raw: &Value) -> ParseResult<YearlyActivity> {
    Ok(YearlyActivity {
        year: i32::try_from(raw::i64_field(raw, "year")?)
            .map_err(|_| ParseError::invalid("activity_by_year.year", "calendar year"))?,
        works_count: raw::i64_field(raw, "works_count")?,
        citation_count: raw::i64_field(raw, "citation_count")?,
    })
}

fn parse_summary_stats(raw: &Value) -> ParseResult<SummaryStats> {
    Ok(SummaryStats {
        works_count: raw::i64_field(raw, "works_count")?,
        citation_count: raw::i64_field(raw, "citation_count")?,
        two_year_mean_citedness: raw::f64_field_or_zero(raw, "two_year_mean_citedness")?,
    })
}

fn parse_achievements(raw: &Value) -> ParseResult<Vec<Achievement>> {
    match raw::opt_field(raw, "achievements") {
        None => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|source| ParseError::deserialize("achievements", source)),
    }
}

/// Map a raw record into the rich [`FullAuthorProfile`] backing profile
/// pages.
///
/// `coauthors`, `institutions`, `activity_by_year`, and `summary_stats`
/// must be present and iterable; an absent one is `MissingRequiredField`,
/// never an empty default. Present-but-empty arrays succeed with empty
/// output sequences. Callers needing optional variants must pre-validate.
pub fn parse_full_author_profile(raw: &Value) -> ParseResult<FullAuthorProfile> {
    let coauthors = raw::array_field(raw, "coauthors")?
        .iter()
        .map(parse_author_profile)
        .collect::<ParseResult<Vec<_>>>()?;
    let institutions = raw::array_field(raw, "institutions")?
        .iter()
        .map(parse_author_institution)
        .collect::<ParseResult<Vec<_>>>()?;
    let activity_by_year = raw::array_field(raw, "activity_by_year")?
        .iter()
        .map(parse_yearly_activity)
        .collect::<ParseResult<Vec<_>>>()?;
    let summary_stats = parse_summary_stats(raw::field(raw, "summary_stats")?)?;

    let profile = FullAuthorProfile {
        id: raw::id_field(raw, "id")?,
        first_name: raw::str_field(raw, "first_name")?,
        last_name: raw::str_field(raw, "last_name")?,
        is_verified: raw::bool_field_or_false(raw, "is_verified")?,
        profile_image: raw::opt_str_field(raw, "profile_image")?,
        headline: raw::opt_str_field(raw, "headline")?.unwrap_or_default(),
        description: raw::opt_str_field(raw, "description")?,
        openalex_ids: match raw::opt_field(raw, "openalex_ids") {
            None => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|source| ParseError::deserialize("openalex_ids", source))?,
        },
        institutions,
        coauthors,
        activity_by_year,
        achievements: parse_achievements(raw)?,
        open_access_pct: raw::f64_field_or_zero(raw, "open_access_pct")?,
        h_index: raw::i64_field_or_zero(raw, "h_index")?,
        i10_index: raw::i64_field_or_zero(raw, "i10_index")?,
        created_date: raw::datetime_field(raw, "created_date")?,
        orcid_url: raw::opt_str_field(raw, "orcid_url")?,
        x_url: raw::opt_str_field(raw, "x_url")?,
        linked_in_url: raw::opt_str_field(raw, "linked_in_url")?,
        google_scholar_url: raw::opt_str_field(raw, "google_scholar_url")?,
        summary_stats,
    };

    trace!(author = %profile.id, coauthors = profile.coauthors.len(), "mapped full author profile");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Id;

    fn full_profile_raw() -> Value {
        json!({
            "id": 1,
            "first_name": "Grace",
            "last_name": "Hopper",
            "is_verified": true,
            "headline": "Rear Admiral",
            "openalex_ids": ["A501"],
            "achievements": ["CITED_AUTHOR"],
            "open_access_pct": 0.42,
            "h_index": 30,
            "i10_index": 55,
            "created_date": "2022-01-15T09:00:00Z",
            "coauthors": [
                {"id": 2, "first_name": "John", "last_name": "Mauchly"}
            ],
            "institutions": [
                {
                    "id": 31,
                    "institution": {"id": "I100", "display_name": "Yale University"},
                    "years": [1930, 1934]
                }
            ],
            "activity_by_year": [
                {"year": 1952, "works_count": 3, "citation_count": 120}
            ],
            "summary_stats": {
                "works_count": 52,
                "citation_count": 8000,
                "two_year_mean_citedness": 3.4
            }
        })
    }

    #[test]
    fn test_full_profile_maps_all_sections() {
        let profile = parse_full_author_profile(&full_profile_raw()).unwrap();
        assert_eq!(profile.id, Id::Number(1));
        assert_eq!(profile.headline, "Rear Admiral");
        assert_eq!(profile.coauthors[0].full_name(), "John Mauchly");
        assert_eq!(profile.institutions[0].institution.display_name, "Yale University");
        assert_eq!(profile.institutions[0].years, vec![1930, 1934]);
        assert_eq!(profile.activity_by_year[0].citation_count, 120);
        assert_eq!(profile.achievements, vec![Achievement::CitedAuthor]);
        assert_eq!(profile.summary_stats.works_count, 52);
    }

    #[test]
    fn test_full_profile_defaults() {
        let mut raw = full_profile_raw();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("headline");
        obj.remove("openalex_ids");
        obj.remove("achievements");
        obj.remove("h_index");

        let profile = parse_full_author_profile(&raw).unwrap();
        assert_eq!(profile.headline, "");
        assert!(profile.openalex_ids.is_empty());
        assert!(profile.achievements.is_empty());
        assert_eq!(profile.h_index, 0);
    }

    #[test]
    fn test_full_profile_missing_summary_stats() {
        let mut raw = full_profile_raw();
        raw.as_object_mut().unwrap().remove("summary_stats");
        assert!(matches!(
            parse_full_author_profile(&raw),
            Err(ParseError::MissingRequiredField { field }) if field == "summary_stats"
        ));
    }

    #[test]
    fn test_empty_collections_succeed() {
        let mut raw = full_profile_raw();
        let obj = raw.as_object_mut().unwrap();
        obj.insert("coauthors".to_owned(), json!([]));
        obj.insert("institutions".to_owned(), json!([]));
        obj.insert("activity_by_year".to_owned(), json!([]));

        let profile = parse_full_author_profile(&raw).unwrap();
        assert!(profile.coauthors.is_empty());
        assert!(profile.institutions.is_empty());
        assert!(profile.activity_by_year.is_empty());
    }

    #[test]
    fn test_unknown_achievement_rejected() {
        let mut raw = full_profile_raw();
        raw.as_object_mut().unwrap().insert("achievements".to_owned(), json!(["TOP_POSTER"]));
        assert!(matches!(
            parse_full_author_profile(&raw),
            Err(ParseError::Deserialize { context: "achievements", .. })
        ));
    }
}
