//! Leaderboard mapping.

use serde_json::Value;

use crate::error::ParseResult;
use crate::models::LeaderboardEntry;
use crate::raw;

use super::author::parse_author_profile;

/// Map one raw leaderboard user record.
pub fn parse_leaderboard_entry(raw: &Value) -> ParseResult<LeaderboardEntry> {
    Ok(LeaderboardEntry {
        id: raw::id_field(raw, "id")?,
        reputation: raw::i64_field(raw, "reputation")?,
        author_profile: parse_author_profile(raw::field(raw, "author_profile")?)?,
    })
}

/// Map a raw leaderboard response (a `results` envelope) into entries, in
/// ranking order.
pub fn parse_leaderboard(raw: &Value) -> ParseResult<Vec<LeaderboardEntry>> {
    raw::array_field(raw, "results")?.iter().map(parse_leaderboard_entry).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_leaderboard() {
        let raw = json!({
            "results": [
                {
                    "id": 1,
                    "reputation": 900,
                    "author_profile": {"id": 10, "first_name": "Jane", "last_name": "Doe"}
                },
                {
                    "id": 2,
                    "reputation": 450,
                    "author_profile": {"id": 20, "first_name": "John", "last_name": "Roe"}
                }
            ]
        });
        let entries = parse_leaderboard(&raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].reputation, 900);
        assert_eq!(entries[1].display_name(), "John Roe");
    }

    #[test]
    fn test_parse_leaderboard_missing_results() {
        assert!(matches!(
            parse_leaderboard(&json!({})),
            Err(ParseError::MissingRequiredField { field }) if field == "results"
        ));
    }
}
