//! The pipeline output record.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata extracted from a single curriculum project directory.
///
/// Constructed once per pipeline invocation, immutable, returned by value.
/// Serializes to camelCase JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Validated directory slug, with the translation suffix appended when
    /// one was configured.
    pub slug: String,
    /// The full locale tag the invocation was configured with.
    pub locale: String,
    /// Pass-through: curriculum track.
    pub track: Option<String>,
    /// Pass-through: source repository.
    pub repo: Option<String>,
    /// Pass-through: curriculum version.
    pub version: Option<String>,
    /// Text of the leading h1.
    pub title: String,
    /// First paragraph of the locale's project-summary section, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Referenced learning-objective codes, validated and expanded.
    pub learning_objectives: BTreeSet<String>,
    /// Thumbnail as a `data:image/png;base64,` URI, if a cover exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    /// Release identifier of the parser that produced this record.
    pub parser_version: String,
    /// Assembly time.
    pub created_at: DateTime<Utc>,
}
