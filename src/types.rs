use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The ordered sequence of components held by a record's list-valued field.
/// Order defines display order and is preserved exactly except where an
/// explicit list edit changes it.
pub type ComponentList = Vec<Value>;

/// Display fields probed, in priority order, when deriving a record title.
pub const DISPLAY_FIELDS: &[&str] = &["title", "name", "heading", "label", "displayName", "slug"];

// ============================================================================
// Field reports
// ============================================================================

/// Structural kind of a reported field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Array,
    Media,
}

/// Summary of one media asset inside a media field report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
}

/// One path-addressed entry in a copy report. `path` is dot/bracket-addressed
/// from the component root, e.g. `image.items[2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub path: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FieldReport {
    pub fn scalar(path: String, value: Value) -> Self {
        Self {
            path,
            kind: FieldKind::Scalar,
            value: Some(value),
            count: None,
            items: Vec::new(),
            reason: None,
        }
    }

    pub fn object(path: String, value: Option<Value>) -> Self {
        Self {
            path,
            kind: FieldKind::Object,
            value,
            count: None,
            items: Vec::new(),
            reason: None,
        }
    }

    pub fn array(path: String, count: usize, sample: Option<Value>) -> Self {
        Self {
            path,
            kind: FieldKind::Array,
            value: sample,
            count: Some(count),
            items: Vec::new(),
            reason: None,
        }
    }

    pub fn media(path: String, count: usize, items: Vec<MediaItem>) -> Self {
        Self {
            path,
            kind: FieldKind::Media,
            value: None,
            count: Some(count),
            items,
            reason: None,
        }
    }

    pub fn removed(path: String, kind: FieldKind, value: Value, reason: &str) -> Self {
        Self {
            path,
            kind,
            value: Some(value),
            count: None,
            items: Vec::new(),
            reason: Some(reason.to_string()),
        }
    }
}

/// The three report buckets produced by comparing an original component with
/// its sanitized counterpart. Every reachable non-null key of the original
/// lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnalysis {
    pub fields: Vec<FieldReport>,
    pub media_fields: Vec<FieldReport>,
    pub removed_fields: Vec<FieldReport>,
}

// ============================================================================
// Copy results
// ============================================================================

/// Per-component report of what a copy kept, treated as media, or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyManifest {
    /// Index of the component in the source list.
    pub index: usize,
    pub component_type: String,
    pub fields: Vec<FieldReport>,
    pub media_fields: Vec<FieldReport>,
    pub removed_fields: Vec<FieldReport>,
    pub total_fields: usize,
    pub total_media: usize,
    pub total_removed: usize,
}

impl CopyManifest {
    pub fn new(index: usize, component_type: String, analysis: FieldAnalysis) -> Self {
        let total_fields = analysis.fields.len();
        let total_media = analysis
            .media_fields
            .iter()
            .map(|m| m.count.unwrap_or(0))
            .sum();
        let total_removed = analysis.removed_fields.len();
        Self {
            index,
            component_type,
            fields: analysis.fields,
            media_fields: analysis.media_fields,
            removed_fields: analysis.removed_fields,
            total_fields,
            total_media,
            total_removed,
        }
    }
}

/// Result of a copy: the new target list plus one manifest per copied
/// component. Nothing is persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyOutcome {
    pub list: ComponentList,
    pub manifest: Vec<CopyManifest>,
}

// ============================================================================
// Records
// ============================================================================

/// A record as read from the external store. `revision` increases on every
/// write and is checked back on `write_list` (optimistic versioning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub id: String,
    pub revision: u64,
    pub data: Value,
}

impl RecordSnapshot {
    /// The ordered component list held by `zone_field`, or empty when the
    /// field is absent or not an array.
    pub fn sections(&self, zone_field: &str) -> ComponentList {
        self.data
            .get(zone_field)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Human-readable title: first non-empty display field, falling back to
    /// `"ID: {id}"`.
    pub fn display_title(&self) -> String {
        for field in DISPLAY_FIELDS {
            if let Some(s) = self.data.get(*field).and_then(Value::as_str) {
                if !s.is_empty() {
                    return s.to_string();
                }
            }
        }
        format!("ID: {}", self.id)
    }
}

// ============================================================================
// Service summaries
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListing {
    pub record_id: String,
    pub title: String,
    pub section_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSections {
    pub record_id: String,
    pub title: String,
    pub sections: ComponentList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySummary {
    pub target_id: String,
    pub target_title: String,
    pub copied_count: usize,
    pub total_sections: usize,
    pub details: Vec<CopyManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSummary {
    pub record_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
