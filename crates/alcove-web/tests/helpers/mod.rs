#![allow(dead_code)]

//! Test harness: an in-memory fake of the Alfresco API that records every
//! call, plus a `TestApp` wrapping an axum-test server over the real router.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;

use alcove_client::AlfrescoApi;
use alcove_core::models::{Group, Node, Person, Site, Tag, Ticket};
use alcove_core::{AppError, Config};
use alcove_web::setup::{build_state, routes::build_router};
use alcove_web::state::AppState;
use async_trait::async_trait;
use axum_test::TestServer;
use bytes::Bytes;
use serde_json::Value;
use tempfile::TempDir;

pub const TEST_TICKET: &str = "TICKET_0123456789abcdef";

/// Recording fake of the Alfresco API.
pub struct FakeAlfresco {
    pub calls: Mutex<Vec<String>>,
    pub valid_credentials: Mutex<HashSet<String>>,
    pub sites: Vec<Site>,
    pub tags: Vec<Tag>,
    pub people: Vec<Person>,
    pub groups: Vec<Group>,
    pub nodes: HashMap<String, (Node, Value, Bytes)>,
    pub search_results: Vec<Node>,
    pub fail_create_node: bool,
    pub fail_put_content: bool,
}

impl Default for FakeAlfresco {
    fn default() -> Self {
        let report_node: Node = serde_json::from_value(serde_json::json!({
            "id": "node-1",
            "name": "report.pdf",
            "nodeType": "cm:content",
            "isFile": true,
            "content": { "mimeType": "application/pdf" }
        }))
        .expect("node");
        let report_info = serde_json::json!({
            "id": "node-1",
            "name": "report.pdf",
            "nodeType": "cm:content",
            "content": { "mimeType": "application/pdf" }
        });

        let mut nodes = HashMap::new();
        // Bytes deliberately do not look like a PDF: the Content-Type must
        // come from the metadata, not the payload.
        nodes.insert(
            "node-1".to_string(),
            (report_node.clone(), report_info, Bytes::from_static(b"hello")),
        );

        Self {
            calls: Mutex::new(Vec::new()),
            valid_credentials: Mutex::new(HashSet::new()),
            sites: vec![
                site("intranet", "Intranet", "PUBLIC"),
                site("rnd", "R&D", "PRIVATE"),
            ],
            tags: vec![
                Tag {
                    id: "tag-1".to_string(),
                    tag: "finance".to_string(),
                },
                Tag {
                    id: "tag-2".to_string(),
                    tag: "hr".to_string(),
                },
                Tag {
                    id: "tag-3".to_string(),
                    tag: "legal".to_string(),
                },
            ],
            people: vec![person("admin", "Administrator"), person("jdoe", "Jane Doe")],
            groups: vec![Group {
                id: "GROUP_ALFRESCO_ADMINISTRATORS".to_string(),
                display_name: "ALFRESCO_ADMINISTRATORS".to_string(),
                is_root: true,
            }],
            nodes,
            search_results: vec![report_node],
            fail_create_node: false,
            fail_put_content: false,
        }
    }
}

fn site(id: &str, title: &str, visibility: &str) -> Site {
    serde_json::from_value(serde_json::json!({
        "id": id, "title": title, "visibility": visibility
    }))
    .expect("site")
}

fn person(id: &str, display_name: &str) -> Person {
    serde_json::from_value(serde_json::json!({
        "id": id, "displayName": display_name, "email": format!("{}@example.com", id),
        "enabled": true
    }))
    .expect("person")
}

impl FakeAlfresco {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    /// Calls other than the token check itself.
    pub fn data_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c != "validate_ticket" && !c.starts_with("create_ticket"))
            .cloned()
            .collect()
    }

    /// Make a previously issued credential invalid, as an expired ticket.
    pub fn expire_all_tickets(&self) {
        self.valid_credentials.lock().unwrap().clear();
    }

    fn node(&self, node_id: &str) -> Result<&(Node, Value, Bytes), AppError> {
        self.nodes.get(node_id).ok_or_else(|| AppError::Upstream {
            status: 404,
            body: format!("{{\"error\":\"node {} not found\"}}", node_id),
        })
    }
}

#[async_trait]
impl AlfrescoApi for FakeAlfresco {
    async fn create_ticket(&self, user_id: &str, password: &str) -> Result<Ticket, AppError> {
        self.record(format!("create_ticket:{}", user_id));
        if password == "wrong" {
            return Err(AppError::Upstream {
                status: 403,
                body: "{\"error\":\"Login failed\"}".to_string(),
            });
        }
        let ticket = Ticket {
            id: TEST_TICKET.to_string(),
            user_id: Some(user_id.to_string()),
        };
        self.valid_credentials
            .lock()
            .unwrap()
            .insert(ticket.credential());
        Ok(ticket)
    }

    async fn validate_ticket(&self, credential: &str) -> Result<bool, AppError> {
        self.record("validate_ticket");
        Ok(self.valid_credentials.lock().unwrap().contains(credential))
    }

    async fn list_sites(&self, _credential: &str) -> Result<Vec<Site>, AppError> {
        self.record("list_sites");
        Ok(self.sites.clone())
    }

    async fn list_tags(&self, _credential: &str) -> Result<Vec<Tag>, AppError> {
        self.record("list_tags");
        Ok(self.tags.clone())
    }

    async fn list_people(&self, _credential: &str) -> Result<Vec<Person>, AppError> {
        self.record("list_people");
        Ok(self.people.clone())
    }

    async fn list_groups(&self, _credential: &str) -> Result<Vec<Group>, AppError> {
        self.record("list_groups");
        Ok(self.groups.clone())
    }

    async fn count_sites(&self, _credential: &str) -> Result<i64, AppError> {
        self.record("count_sites");
        Ok(self.sites.len() as i64)
    }

    async fn count_tags(&self, _credential: &str) -> Result<i64, AppError> {
        self.record("count_tags");
        Ok(self.tags.len() as i64)
    }

    async fn count_people(&self, _credential: &str) -> Result<i64, AppError> {
        self.record("count_people");
        Ok(self.people.len() as i64)
    }

    async fn count_groups(&self, _credential: &str) -> Result<i64, AppError> {
        self.record("count_groups");
        Ok(self.groups.len() as i64)
    }

    async fn get_person(&self, _credential: &str, person_id: &str) -> Result<Person, AppError> {
        self.record(format!("get_person:{}", person_id));
        self.people
            .iter()
            .find(|p| p.id == person_id)
            .cloned()
            .ok_or_else(|| AppError::Upstream {
                status: 404,
                body: "{\"error\":\"person not found\"}".to_string(),
            })
    }

    async fn get_node(&self, _credential: &str, node_id: &str) -> Result<Node, AppError> {
        self.record(format!("get_node:{}", node_id));
        Ok(self.node(node_id)?.0.clone())
    }

    async fn get_node_info(&self, _credential: &str, node_id: &str) -> Result<Value, AppError> {
        self.record(format!("get_node_info:{}", node_id));
        Ok(self.node(node_id)?.1.clone())
    }

    async fn get_content(&self, _credential: &str, node_id: &str) -> Result<Bytes, AppError> {
        self.record(format!("get_content:{}", node_id));
        Ok(self.node(node_id)?.2.clone())
    }

    async fn create_node(
        &self,
        _credential: &str,
        parent_id: &str,
        name: &str,
    ) -> Result<Node, AppError> {
        self.record(format!("create_node:{}:{}", parent_id, name));
        if self.fail_create_node {
            return Err(AppError::Upstream {
                status: 409,
                body: "{\"error\":\"duplicate name\"}".to_string(),
            });
        }
        Ok(serde_json::from_value(serde_json::json!({
            "id": format!("created-{}", name),
            "name": name,
            "nodeType": "cm:content",
            "isFile": true
        }))
        .expect("node"))
    }

    async fn put_content(
        &self,
        _credential: &str,
        node_id: &str,
        _body: Bytes,
        _content_type: &str,
    ) -> Result<Node, AppError> {
        self.record(format!("put_content:{}", node_id));
        if self.fail_put_content {
            return Err(AppError::Upstream {
                status: 500,
                body: "{\"error\":\"content write failed\"}".to_string(),
            });
        }
        Ok(serde_json::from_value(serde_json::json!({
            "id": node_id,
            "name": "uploaded",
            "nodeType": "cm:content",
            "isFile": true
        }))
        .expect("node"))
    }

    async fn search(&self, _credential: &str, query: &str) -> Result<Vec<Node>, AppError> {
        self.record(format!("search:{}", query));
        Ok(self.search_results.clone())
    }

    async fn search_cmis(
        &self,
        _credential: &str,
        _query: &str,
        _max_items: i64,
    ) -> Result<Vec<Node>, AppError> {
        self.record("search_cmis");
        Ok(self.search_results.clone())
    }
}

/// Test application over the real router with the fake backend.
pub struct TestApp {
    pub server: TestServer,
    pub alfresco: Arc<FakeAlfresco>,
    pub state: Arc<AppState>,
    pub _upload_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(FakeAlfresco::default()).await
}

pub async fn setup_test_app_with(fake: FakeAlfresco) -> TestApp {
    build_test_app(fake, None).await
}

/// Like `setup_test_app_with`, but with `ALCOVE_UPLOAD_MAX_BYTES` set.
pub async fn setup_test_app_with_limit(fake: FakeAlfresco, max_bytes: usize) -> TestApp {
    build_test_app(fake, Some(max_bytes)).await
}

async fn build_test_app(fake: FakeAlfresco, max_bytes: Option<usize>) -> TestApp {
    let upload_dir = TempDir::new().expect("temp dir");
    let upload_path = upload_dir.path().to_str().expect("utf-8 path").to_string();

    let config = Config::from_lookup(move |key| match key {
        "ALFRESCO_BASE_URL" => Some("http://alfresco.test:8082".to_string()),
        "ALCOVE_UPLOAD_DIR" => Some(upload_path.clone()),
        "ALCOVE_UPLOAD_MAX_BYTES" => max_bytes.map(|b| b.to_string()),
        _ => None,
    })
    .expect("config");

    let alfresco = Arc::new(fake);
    let state = build_state(config, alfresco.clone())
        .await
        .expect("app state");
    let server = TestServer::new(build_router(state.clone())).expect("test server");

    TestApp {
        server,
        alfresco,
        state,
        _upload_dir: upload_dir,
    }
}

impl TestApp {
    /// Log in as admin and return the session `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .server
            .post("/login")
            .form(&[("username", "admin"), ("password", "admin")])
            .await;
        assert_eq!(response.status_code(), 303, "login should redirect");

        let set_cookie = response
            .headers()
            .get(http::header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .expect("cookie value")
            .to_string();
        set_cookie
            .split(';')
            .next()
            .expect("cookie pair")
            .to_string()
    }
}
