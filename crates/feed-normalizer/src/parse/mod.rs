//! Mapping functions that turn raw API records into typed models.
//!
//! All mappers are synchronous pure transformations over borrowed
//! `serde_json::Value` input. The two documented field injections (the
//! created-by name overwrite and the paper document backfill) operate on
//! cloned sub-objects, so caller-owned records are never mutated and
//! concurrent calls over shared input cannot race.

mod author;
mod content_type;
mod contribution;
mod document;
mod leaderboard;

pub use author::{parse_author_profile, parse_full_author_profile, parse_institution};
pub use content_type::parse_content_type;
pub use contribution::{
    parse_comment_contribution, parse_contribution, parse_created_by,
    parse_hypothesis_contribution, parse_paper_contribution, parse_post_contribution,
};
pub use document::parse_unified_document;
pub use leaderboard::{parse_leaderboard, parse_leaderboard_entry};
