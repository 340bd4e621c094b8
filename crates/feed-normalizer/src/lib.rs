//! Feed Normalizer
//!
//! Normalization and dispatch layer for a research-content platform's API
//! records. Raw, loosely-typed JSON (snake_case keys, inconsistent nesting)
//! is converted into a closed set of strongly-typed domain objects:
//! contribution-feed entries, author profiles, and leaderboards.
//!
//! # Design
//!
//! - **Discriminated dispatch**: the `content_type.name` discriminator is
//!   folded into a closed [`models::ContentKind`] enum and dispatched with
//!   an exhaustive match. There is no fallback arm; schema drift in the
//!   external API surfaces at parse time as
//!   [`ParseError::UnrecognizedDiscriminator`].
//! - **Fail-fast mapping**: every mapper either produces a fully valid
//!   typed object or returns an error first. No placeholder fields, no
//!   partial results.
//! - **No input mutation**: the two documented field injections (actor-name
//!   authority, paper document backfill) build augmented copies of the
//!   relevant sub-objects; caller-owned records are never touched, so
//!   mapping is safe to invoke concurrently over shared raw data.
//!
//! # Example
//!
//! ```
//! use feed_normalizer::{models::ContentKind, parse_contribution};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "content_type": {"id": 1, "name": "researchhubpost"},
//!     "created_date": "2023-06-01T18:40:47Z",
//!     "item": {
//!         "id": 8,
//!         "title": "On the Shoulders of Giants",
//!         "slug": "on-the-shoulders-of-giants",
//!         "created_by": {
//!             "id": 11,
//!             "first_name": "Jane",
//!             "last_name": "Doe",
//!             "author_profile": {"id": 21, "first_name": "Jane", "last_name": "Doe"}
//!         },
//!         "unified_document": {"id": 70}
//!     }
//! });
//!
//! let contribution = parse_contribution(&raw)?;
//! assert_eq!(contribution.kind(), ContentKind::Post);
//! # Ok::<(), feed_normalizer::ParseError>(())
//! ```

pub mod error;
pub mod models;
pub mod parse;
mod raw;

pub use error::{ParseError, ParseResult};
pub use parse::{
    parse_author_profile, parse_content_type, parse_contribution, parse_created_by,
    parse_full_author_profile, parse_institution, parse_leaderboard, parse_unified_document,
};
