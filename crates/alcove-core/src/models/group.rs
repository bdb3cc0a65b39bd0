use serde::{Deserialize, Serialize};

/// Alfresco group as returned by `GET /groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub is_root: bool,
}
