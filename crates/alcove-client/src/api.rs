//! Domain methods for the Alfresco API.
//!
//! [`AlfrescoApi`] is the seam between the web handlers and the wire: the
//! production implementation is [`AlfrescoClient`], tests substitute an
//! in-memory fake. Every method takes the session credential explicitly;
//! nothing here holds per-user state.

use alcove_core::models::{Entry, EntryList, Group, Node, Person, Site, Tag, Ticket};
use alcove_core::AppError;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};

use crate::{AlfrescoClient, DEFAULT_MAX_ITEMS, DEFAULT_SKIP_COUNT};

/// Parent under which uploads land: the authenticated user's home folder.
pub const USER_HOME: &str = "-my-";

/// Operations the console performs against Alfresco.
#[async_trait]
pub trait AlfrescoApi: Send + Sync {
    /// Exchange user credentials for a ticket. POST `{auth}/tickets`.
    async fn create_ticket(&self, user_id: &str, password: &str) -> Result<Ticket, AppError>;

    /// Whether the credential is still accepted. GET `{auth}/tickets/-me-`;
    /// any non-2xx means no.
    async fn validate_ticket(&self, credential: &str) -> Result<bool, AppError>;

    async fn list_sites(&self, credential: &str) -> Result<Vec<Site>, AppError>;
    async fn list_tags(&self, credential: &str) -> Result<Vec<Tag>, AppError>;
    async fn list_people(&self, credential: &str) -> Result<Vec<Person>, AppError>;
    async fn list_groups(&self, credential: &str) -> Result<Vec<Group>, AppError>;

    async fn count_sites(&self, credential: &str) -> Result<i64, AppError>;
    async fn count_tags(&self, credential: &str) -> Result<i64, AppError>;
    async fn count_people(&self, credential: &str) -> Result<i64, AppError>;
    async fn count_groups(&self, credential: &str) -> Result<i64, AppError>;

    async fn get_person(&self, credential: &str, person_id: &str) -> Result<Person, AppError>;

    async fn get_node(&self, credential: &str, node_id: &str) -> Result<Node, AppError>;

    /// Raw node entry object, for the informational JSON route.
    async fn get_node_info(&self, credential: &str, node_id: &str) -> Result<Value, AppError>;

    async fn get_content(&self, credential: &str, node_id: &str) -> Result<Bytes, AppError>;

    /// Create a `cm:content` child under `parent_id` (usually [`USER_HOME`]).
    async fn create_node(
        &self,
        credential: &str,
        parent_id: &str,
        name: &str,
    ) -> Result<Node, AppError>;

    /// Write the binary content of an existing node.
    async fn put_content(
        &self,
        credential: &str,
        node_id: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<Node, AppError>;

    /// Full-text (AFTS) search, fixed single page of 100.
    async fn search(&self, credential: &str, query: &str) -> Result<Vec<Node>, AppError>;

    /// CMIS query with a caller-chosen page size.
    async fn search_cmis(
        &self,
        credential: &str,
        query: &str,
        max_items: i64,
    ) -> Result<Vec<Node>, AppError>;
}

/// Search API request body for the given query language.
fn search_body(query: &str, language: &str, max_items: i64) -> Value {
    json!({
        "query": { "query": query, "language": language },
        "paging": { "skipCount": DEFAULT_SKIP_COUNT, "maxItems": max_items }
    })
}

fn default_paging() -> Vec<(&'static str, String)> {
    vec![
        ("skipCount", DEFAULT_SKIP_COUNT.to_string()),
        ("maxItems", DEFAULT_MAX_ITEMS.to_string()),
    ]
}

/// Counters only need the pagination block, so ask for a single entry.
fn count_paging() -> Vec<(&'static str, String)> {
    vec![("skipCount", "0".to_string()), ("maxItems", "1".to_string())]
}

impl AlfrescoClient {
    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        credential: &str,
        path: &str,
    ) -> Result<Vec<T>, AppError> {
        let url = self.core_url(path);
        let list: EntryList<T> = self.get_json(&url, credential, &default_paging()).await?;
        Ok(list.into_entries())
    }

    async fn count(&self, credential: &str, path: &str) -> Result<i64, AppError> {
        let url = self.core_url(path);
        let list: EntryList<Value> = self.get_json(&url, credential, &count_paging()).await?;
        Ok(list.total())
    }

    async fn run_search(
        &self,
        credential: &str,
        query: &str,
        language: &str,
        max_items: i64,
    ) -> Result<Vec<Node>, AppError> {
        let url = self.search_url("/search");
        let body = search_body(query, language, max_items);
        let list: EntryList<Node> = self.post_json(&url, credential, &body).await?;
        Ok(list.into_entries())
    }
}

#[async_trait]
impl AlfrescoApi for AlfrescoClient {
    async fn create_ticket(&self, user_id: &str, password: &str) -> Result<Ticket, AppError> {
        let url = self.auth_url("/tickets");
        let body = json!({ "userId": user_id, "password": password });
        let entry: Entry<Ticket> = self.post_json_unauthenticated(&url, &body).await?;
        Ok(entry.entry)
    }

    async fn validate_ticket(&self, credential: &str) -> Result<bool, AppError> {
        let url = self.auth_url("/tickets/-me-");
        match self.get_json::<Value>(&url, credential, &[]).await {
            Ok(_) => Ok(true),
            Err(AppError::Upstream { status, .. }) => {
                tracing::debug!(status, "Ticket validation rejected");
                Ok(false)
            }
            Err(other) => Err(other),
        }
    }

    async fn list_sites(&self, credential: &str) -> Result<Vec<Site>, AppError> {
        self.list(credential, "/sites").await
    }

    async fn list_tags(&self, credential: &str) -> Result<Vec<Tag>, AppError> {
        self.list(credential, "/tags").await
    }

    async fn list_people(&self, credential: &str) -> Result<Vec<Person>, AppError> {
        self.list(credential, "/people").await
    }

    async fn list_groups(&self, credential: &str) -> Result<Vec<Group>, AppError> {
        self.list(credential, "/groups").await
    }

    async fn count_sites(&self, credential: &str) -> Result<i64, AppError> {
        self.count(credential, "/sites").await
    }

    async fn count_tags(&self, credential: &str) -> Result<i64, AppError> {
        self.count(credential, "/tags").await
    }

    async fn count_people(&self, credential: &str) -> Result<i64, AppError> {
        self.count(credential, "/people").await
    }

    async fn count_groups(&self, credential: &str) -> Result<i64, AppError> {
        self.count(credential, "/groups").await
    }

    async fn get_person(&self, credential: &str, person_id: &str) -> Result<Person, AppError> {
        let url = self.core_url(&format!("/people/{}", urlencoding::encode(person_id)));
        let entry: Entry<Person> = self.get_json(&url, credential, &[]).await?;
        Ok(entry.entry)
    }

    async fn get_node(&self, credential: &str, node_id: &str) -> Result<Node, AppError> {
        let url = self.core_url(&format!("/nodes/{}", urlencoding::encode(node_id)));
        let entry: Entry<Node> = self.get_json(&url, credential, &[]).await?;
        Ok(entry.entry)
    }

    async fn get_node_info(&self, credential: &str, node_id: &str) -> Result<Value, AppError> {
        let url = self.core_url(&format!("/nodes/{}", urlencoding::encode(node_id)));
        let entry: Entry<Value> = self.get_json(&url, credential, &[]).await?;
        Ok(entry.entry)
    }

    async fn get_content(&self, credential: &str, node_id: &str) -> Result<Bytes, AppError> {
        let url = self.core_url(&format!("/nodes/{}/content", urlencoding::encode(node_id)));
        self.get_bytes(&url, credential).await
    }

    async fn create_node(
        &self,
        credential: &str,
        parent_id: &str,
        name: &str,
    ) -> Result<Node, AppError> {
        let url = self.core_url(&format!(
            "/nodes/{}/children",
            urlencoding::encode(parent_id)
        ));
        let body = json!({ "name": name, "nodeType": "cm:content" });
        let entry: Entry<Node> = self.post_json(&url, credential, &body).await?;
        Ok(entry.entry)
    }

    async fn put_content(
        &self,
        credential: &str,
        node_id: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<Node, AppError> {
        let url = self.core_url(&format!("/nodes/{}/content", urlencoding::encode(node_id)));
        let entry: Entry<Node> = self.put_bytes(&url, credential, body, content_type).await?;
        Ok(entry.entry)
    }

    async fn search(&self, credential: &str, query: &str) -> Result<Vec<Node>, AppError> {
        self.run_search(credential, query, "afts", DEFAULT_MAX_ITEMS)
            .await
    }

    async fn search_cmis(
        &self,
        credential: &str,
        query: &str,
        max_items: i64,
    ) -> Result<Vec<Node>, AppError> {
        self.run_search(credential, query, "cmis", max_items).await
    }
}
