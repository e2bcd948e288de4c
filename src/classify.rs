use serde_json::{Map, Value};

/// Attribute identifying a tagged component, e.g. `"sections.hero"`.
pub const COMPONENT_TAG: &str = "__component";

/// Structural role of a JSON value. The five kinds are mutually exclusive;
/// [`classify`] is total over all JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// String, number, boolean, or null.
    Scalar,
    /// Object with neither a component tag nor a media shape.
    PlainObject,
    /// Object shaped like a pointer to a binary asset.
    MediaAssetRef,
    /// Object carrying the component tag attribute.
    Component,
    /// Ordered sequence of any of the above.
    Array,
}

/// Determine the structural role of a node.
///
/// Tag presence dominates: an object carrying `__component` is a `Component`
/// even if it incidentally has a `url` or `mime` field.
pub fn classify(node: &Value) -> NodeKind {
    match node {
        Value::Array(_) => NodeKind::Array,
        Value::Object(map) => {
            if map.contains_key(COMPONENT_TAG) {
                NodeKind::Component
            } else if is_media_shape(map) {
                NodeKind::MediaAssetRef
            } else {
                NodeKind::PlainObject
            }
        }
        _ => NodeKind::Scalar,
    }
}

/// The component tag of a node, when it is a component with a string tag.
pub fn component_tag(node: &Value) -> Option<&str> {
    node.get(COMPONENT_TAG).and_then(Value::as_str)
}

/// Media-identifying attribute test. Key presence is what matters (a null
/// value still counts as present). An object with a component tag is never
/// media-shaped.
pub fn is_media_shape(map: &Map<String, Value>) -> bool {
    if map.contains_key(COMPONENT_TAG) {
        return false;
    }
    map.contains_key("mime")
        || map.contains_key("url")
        || map.contains_key("formats")
        || map.contains_key("provider")
        || (map.contains_key("id")
            && map.contains_key("hash")
            && (map.contains_key("name") || map.contains_key("alternativeText")))
}
