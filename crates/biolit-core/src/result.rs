//! Result record domain model.
//!
//! A [`ResultRecord`] is the persisted outcome of one mode invocation:
//! the user's query, the raw model output, and metadata. Records are
//! immutable after creation except for the bookmark flag, and live only
//! in the history/bookmark store.

use crate::mode::AppMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A citation returned alongside a model response when web-search
/// grounding was attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// The persisted outcome of one mode invocation.
///
/// Field names serialize in camelCase so blobs match the format the
/// original local storage used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The user input that produced this result.
    pub original_query: String,
    /// Raw model output (text, markdown, or a JSON blob).
    pub content: String,
    /// The mode that produced this result.
    pub mode: AppMode,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Citations attached by web-search grounding, when used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_sources: Option<Vec<GroundingSource>>,
    /// Whether this record is a member of the bookmark set.
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl ResultRecord {
    /// Creates a fresh, unbookmarked record stamped with the current time.
    pub fn new(
        mode: AppMode,
        original_query: impl Into<String>,
        content: impl Into<String>,
        grounding_sources: Option<Vec<GroundingSource>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_query: original_query.into(),
            content: content.into(),
            mode,
            created_at: Utc::now(),
            grounding_sources,
            is_bookmarked: false,
        }
    }

    /// A copy of this record with the bookmark flag set, for insertion
    /// into the bookmark set.
    pub fn bookmarked(&self) -> Self {
        Self {
            is_bookmarked: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unbookmarked() {
        let record = ResultRecord::new(AppMode::QueryBuilder, "hydrogels", "(Hydrogels[MeSH])", None);
        assert!(!record.is_bookmarked);
        assert!(record.grounding_sources.is_none());
    }

    #[test]
    fn bookmarked_copy_keeps_identity() {
        let record = ResultRecord::new(AppMode::LabScout, "labs in Seoul", "### Region", None);
        let copy = record.bookmarked();
        assert!(copy.is_bookmarked);
        assert_eq!(copy.id, record.id);
        assert_eq!(copy.content, record.content);
    }

    #[test]
    fn serializes_in_camel_case() {
        let record = ResultRecord::new(AppMode::PicoProtocol, "q", "c", None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("originalQuery").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["mode"], "PICO_PROTOCOL");
        // Absent sources are omitted entirely
        assert!(json.get("groundingSources").is_none());
    }
}
