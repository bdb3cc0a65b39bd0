use serde::{Deserialize, Serialize};

/// Alfresco person as returned by `GET /people` and `GET /people/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

impl Person {
    /// Name for display: displayName, then first/last, then the id.
    pub fn full_name(&self) -> String {
        if let Some(display) = &self.display_name {
            return display.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.id.clone(),
        }
    }
}
