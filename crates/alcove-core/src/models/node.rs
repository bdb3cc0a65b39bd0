use serde::{Deserialize, Serialize};

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content block of a file node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeContent {
    pub mime_type: String,
    #[serde(default)]
    pub mime_type_name: Option<String>,
    #[serde(default)]
    pub size_in_bytes: Option<i64>,
}

/// Alfresco node (file or folder) as returned by `GET /nodes/{id}` and the
/// search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub node_type: String,
    #[serde(default)]
    pub is_file: bool,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub content: Option<NodeContent>,
    // Alfresco emits offsets without a colon ("+0000"), so timestamps are
    // carried as strings and rendered as-is.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl Node {
    /// MIME type reported by the node metadata, defaulting to octet-stream
    /// for folders and nodes without a content block.
    pub fn mime_type(&self) -> &str {
        self.content
            .as_ref()
            .map(|c| c.mime_type.as_str())
            .unwrap_or(OCTET_STREAM)
    }
}
