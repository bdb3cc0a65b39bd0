use serde::{Deserialize, Serialize};

/// Alfresco site summary as returned by `GET /sites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub title: String,
    pub visibility: String,
    #[serde(default)]
    pub description: Option<String>,
}
