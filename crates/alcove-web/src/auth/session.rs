//! In-memory session store.
//!
//! Sessions map a random id (carried in the session cookie) to the Alfresco
//! credential and user id. TTL is enforced on read; the final word on
//! validity stays with Alfresco via the per-request ticket validation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub credential: String,
    pub user_id: String,
    issued_at: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_seconds))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Store a new session and return its id.
    pub async fn issue(&self, credential: String, user_id: String) -> String {
        let id = Uuid::new_v4().simple().to_string();
        let session = Session {
            credential,
            user_id,
            issued_at: Instant::now(),
        };
        self.inner.write().await.insert(id.clone(), session);
        id
    }

    /// Look up a session, removing it when expired.
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let mut guard = self.inner.write().await;
        match guard.get(session_id) {
            Some(session) if session.issued_at.elapsed() < self.ttl => Some(session.clone()),
            Some(_) => {
                guard.remove(session_id);
                None
            }
            None => None,
        }
    }

    pub async fn invalidate(&self, session_id: &str) {
        self.inner.write().await.remove(session_id);
    }
}
