use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTENT_TYPE: &str = "api::page.page";
pub const DEFAULT_ZONE_FIELD: &str = "sections";

/// Which record type holds copyable content and which of its fields is the
/// ordered component list. Late-bound: always passed explicitly, never held
/// as process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyConfig {
    pub content_type: String,
    #[serde(rename = "dynamicZoneField")]
    pub zone_field: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            zone_field: DEFAULT_ZONE_FIELD.to_string(),
        }
    }
}
