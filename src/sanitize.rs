use serde_json::{Map, Value};

use crate::classify::{is_media_shape, COMPONENT_TAG};

/// System-owned identity and audit fields, stripped from every component and
/// plain-object level. Never applied inside media references.
pub const REMOVED_FIELDS: &[&str] = &[
    "id",
    "documentId",
    "createdAt",
    "updatedAt",
    "createdBy",
    "updatedBy",
    "publishedAt",
    "locale",
];

/// Attributes a media reference may keep after sanitization. Only those
/// actually present on the input survive.
pub const MEDIA_WHITELIST: &[&str] = &[
    "id",
    "name",
    "alternativeText",
    "caption",
    "width",
    "height",
    "formats",
    "hash",
    "ext",
    "mime",
    "size",
    "url",
    "previewUrl",
    "provider",
    "provider_metadata",
];

/// Recursion guard. Tree depth is user-controlled; subtrees past this depth
/// are replaced with null so the no-forbidden-fields guarantee holds at any
/// depth.
pub const MAX_TREE_DEPTH: usize = 100;

pub fn is_removed_field(key: &str) -> bool {
    REMOVED_FIELDS.contains(&key)
}

/// Produce a portable copy of a component: the tag is kept verbatim, the
/// removed-field set is stripped at every object level, and media references
/// are narrowed to the whitelist. The input is never mutated.
///
/// Non-object input is returned unchanged (defensive no-op), so the function
/// is total and idempotent.
pub fn sanitize(component: &Value) -> Value {
    if !component.is_object() {
        return component.clone();
    }
    sanitize_at(component, 0)
}

/// Recursive entry point for any node, not just components.
pub fn sanitize_node(node: &Value) -> Value {
    sanitize_at(node, 0)
}

fn sanitize_at(node: &Value, depth: usize) -> Value {
    if depth > MAX_TREE_DEPTH {
        return Value::Null;
    }
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| sanitize_at(item, depth + 1)).collect())
        }
        Value::Object(map) => {
            if is_media_shape(map) {
                narrow_media(map)
            } else {
                sanitize_object(map, depth)
            }
        }
        _ => node.clone(),
    }
}

/// Component or plain object: copy the tag first, drop removed fields, and
/// recurse into everything else.
fn sanitize_object(map: &Map<String, Value>, depth: usize) -> Value {
    let mut out = Map::new();
    if let Some(tag) = map.get(COMPONENT_TAG) {
        out.insert(COMPONENT_TAG.to_string(), tag.clone());
    }
    for (key, value) in map {
        if key == COMPONENT_TAG || is_removed_field(key) {
            continue;
        }
        out.insert(key.clone(), sanitize_at(value, depth + 1));
    }
    Value::Object(out)
}

fn narrow_media(map: &Map<String, Value>) -> Value {
    let mut out = Map::new();
    for &key in MEDIA_WHITELIST {
        if let Some(value) = map.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }
    Value::Object(out)
}
