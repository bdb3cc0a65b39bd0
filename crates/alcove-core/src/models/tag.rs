use serde::{Deserialize, Serialize};

/// Alfresco tag as returned by `GET /tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub tag: String,
}
