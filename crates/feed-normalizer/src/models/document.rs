//! Unified-document and hub models.

use serde::{Deserialize, Serialize};

use super::Id;

/// A research hub (topic community) a document is filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Hub {
    /// Hub id.
    pub id: Id,

    /// Hub display name.
    pub name: String,

    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Compact summary of the concrete document behind a unified document.
///
/// For paper-sourced records the raw API does not nest this; the paper
/// mapper backfills it from the paper's own top-level fields before the
/// unified document is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DocumentRef {
    /// Document id.
    pub id: Id,

    /// Document title.
    pub title: String,

    /// URL slug.
    pub slug: String,
}

/// The document aggregate every contribution points at.
///
/// Everything here is optional or defaulted: paper records arrive with an
/// empty `unified_document` object that only becomes useful after the
/// backfill injection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UnifiedDocument {
    /// Unified document id.
    #[serde(default)]
    pub id: Option<Id>,

    /// Summary of the concrete document (wire key `documents`).
    #[serde(default, rename(deserialize = "documents"))]
    pub document: Option<DocumentRef>,

    /// Upstream document type label.
    #[serde(default)]
    pub document_type: Option<String>,

    /// Whether moderators removed the document.
    #[serde(default)]
    pub is_removed: bool,

    /// Hubs the document is filed under.
    #[serde(default)]
    pub hubs: Vec<Hub>,
}
