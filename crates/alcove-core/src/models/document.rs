use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locally persisted record of an uploaded file, created when the upload form
/// validates and cleared once the Alfresco round-trip finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(name: String, url: String, content_type: String, size_bytes: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            url,
            content_type,
            size_bytes,
            created_at: Utc::now(),
        }
    }
}
