use serde_json::{Map, Value};

use crate::classify::COMPONENT_TAG;
use crate::sanitize::{is_removed_field, MAX_TREE_DEPTH, REMOVED_FIELDS};
use crate::types::{FieldAnalysis, FieldKind, FieldReport, MediaItem};

pub const SYSTEM_FIELD_REASON: &str = "System field (automatically removed)";
pub const COPY_REMOVED_REASON: &str = "Field removed during copy";

/// String values longer than this are truncated in reports.
const MAX_STRING_PREVIEW: usize = 50;

// ============================================================================
// Public API
// ============================================================================

/// Compare an original component with its sanitized counterpart and report
/// every reachable non-null field in exactly one of three buckets: retained
/// fields, media references, or removed fields.
///
/// This is a reporting tool, not a verifier — it never fails. A shape
/// mismatch beyond the removed-field case is reported conservatively as
/// "removed". Non-object input yields an empty analysis.
pub fn analyze(original: &Value, sanitized: &Value) -> FieldAnalysis {
    let mut analysis = FieldAnalysis::default();
    let root = match original.as_object() {
        Some(o) => o,
        None => return analysis,
    };

    // Root pass: system fields stripped by the sanitizer.
    for &field in REMOVED_FIELDS {
        if let Some(value) = root.get(field) {
            if sanitized.get(field).is_none() {
                analysis.removed_fields.push(FieldReport::removed(
                    field.to_string(),
                    kind_of(value),
                    summarize(value),
                    SYSTEM_FIELD_REASON,
                ));
            }
        }
    }

    let mut path: Vec<String> = Vec::new();
    traverse(original, sanitized, &mut path, &mut analysis, 0);
    analysis
}

// ============================================================================
// Path helpers
// ============================================================================

fn format_path(path: &[String]) -> String {
    path.join(".")
}

// ============================================================================
// Summaries
// ============================================================================

fn kind_of(value: &Value) -> FieldKind {
    match value {
        Value::Array(_) => FieldKind::Array,
        Value::Object(_) => FieldKind::Object,
        _ => FieldKind::Scalar,
    }
}

/// Compact rendering for removed values: arrays as `Array(n)`, objects as
/// `"Object"`, scalars verbatim.
fn summarize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::String(format!("Array({})", items.len())),
        Value::Object(_) => Value::String("Object".to_string()),
        _ => value.clone(),
    }
}

fn preview_scalar(value: &Value) -> Value {
    if let Value::String(s) = value {
        if s.chars().count() > MAX_STRING_PREVIEW {
            let head: String = s.chars().take(MAX_STRING_PREVIEW).collect();
            return Value::String(format!("{head}..."));
        }
    }
    value.clone()
}

// ============================================================================
// Media sniffing (reporting heuristic)
// ============================================================================

/// The reporter's media test is narrower than the classifier's: an identity
/// attribute plus a non-null mime, url, or formats attribute.
fn media_hint(map: &Map<String, Value>) -> bool {
    ["mime", "url", "formats"]
        .iter()
        .any(|k| map.get(*k).is_some_and(|v| !v.is_null()))
}

fn media_item(value: &Value) -> MediaItem {
    let map = value.as_object();
    let name = map
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            map.and_then(|m| m.get("alternativeText"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("Media")
        .to_string();
    MediaItem {
        id: map.and_then(|m| m.get("id")).cloned(),
        name,
        mime: map.and_then(|m| m.get("mime")).cloned(),
        url: map.and_then(|m| m.get("url")).cloned(),
    }
}

// ============================================================================
// Core traversal
// ============================================================================

fn traverse(
    original: &Value,
    sanitized: &Value,
    path: &mut Vec<String>,
    analysis: &mut FieldAnalysis,
    depth: usize,
) {
    if depth > MAX_TREE_DEPTH {
        return;
    }
    let orig = match original.as_object() {
        Some(o) => o,
        None => return,
    };

    for (key, value) in orig {
        if key == COMPONENT_TAG || key.starts_with('_') {
            continue;
        }
        // Root-level system fields were reported by the root pass; skipping
        // them here keeps each key in exactly one bucket.
        if path.is_empty() && is_removed_field(key) {
            continue;
        }
        if value.is_null() {
            continue;
        }

        path.push(key.clone());
        let current = format_path(path);
        let clean = sanitized.get(key);

        match clean {
            None => {
                analysis.removed_fields.push(FieldReport::removed(
                    current,
                    kind_of(value),
                    summarize(value),
                    COPY_REMOVED_REASON,
                ));
            }
            Some(clean) => match value {
                Value::Array(items) => {
                    report_array(key, items, clean, path, current, analysis, depth);
                }
                Value::Object(map) => {
                    report_object(map, value, clean, path, current, analysis, depth);
                }
                _ => {
                    analysis
                        .fields
                        .push(FieldReport::scalar(current, preview_scalar(value)));
                }
            },
        }
        path.pop();
    }
}

fn report_array(
    key: &str,
    items: &[Value],
    clean: &Value,
    path: &mut Vec<String>,
    current: String,
    analysis: &mut FieldAnalysis,
    depth: usize,
) {
    // Empty arrays carry no reportable content.
    let first = match items.first() {
        Some(first) => first,
        None => return,
    };

    match first.as_object() {
        Some(obj) if obj.contains_key("id") => {
            if media_hint(obj) {
                analysis.media_fields.push(FieldReport::media(
                    current,
                    items.len(),
                    items.iter().map(media_item).collect(),
                ));
            } else {
                // Array of identified entries: report the container, then
                // recurse pairwise into elements that survived.
                analysis
                    .fields
                    .push(FieldReport::array(current, items.len(), None));
                if let Some(clean_items) = clean.as_array() {
                    for (idx, item) in items.iter().enumerate() {
                        let clean_item = match clean_items.get(idx) {
                            Some(c) => c,
                            None => continue,
                        };
                        if !item.is_object() {
                            continue;
                        }
                        path.pop();
                        path.push(format!("{key}[{idx}]"));
                        traverse(item, clean_item, path, analysis, depth + 1);
                    }
                    path.pop();
                    path.push(key.to_string());
                }
            }
        }
        _ => {
            analysis.fields.push(FieldReport::array(
                current,
                items.len(),
                Some(summarize_sample(first)),
            ));
        }
    }
}

fn report_object(
    map: &Map<String, Value>,
    value: &Value,
    clean: &Value,
    path: &mut Vec<String>,
    current: String,
    analysis: &mut FieldAnalysis,
    depth: usize,
) {
    if let Some(id) = map.get("id") {
        if media_hint(map) {
            analysis
                .media_fields
                .push(FieldReport::media(current, 1, vec![media_item(value)]));
            return;
        }
        analysis
            .fields
            .push(FieldReport::object(current, Some(id.clone())));
    } else {
        analysis.fields.push(FieldReport::object(current, None));
    }
    traverse(value, clean, path, analysis, depth + 1);
}

/// Sample of the first element of an unidentified array: scalars previewed,
/// containers summarized.
fn summarize_sample(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => summarize(value),
        _ => preview_scalar(value),
    }
}
