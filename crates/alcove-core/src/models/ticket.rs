use serde::{Deserialize, Serialize};

/// Authentication ticket issued by `POST {auth}/tickets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Ticket {
    /// Basic-auth material for subsequent calls: Alfresco accepts the ticket
    /// as the password of the reserved `ROLE_TICKET` user.
    pub fn credential(&self) -> String {
        format!("ROLE_TICKET:{}", self.id)
    }
}
