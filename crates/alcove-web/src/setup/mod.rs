//! Application wiring: state construction, routes, and the server loop.

pub mod routes;
pub mod server;

use std::sync::Arc;

use alcove_client::{AlfrescoApi, AlfrescoClient};
use alcove_core::Config;
use anyhow::Result;
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::auth::SessionStore;
use crate::db::DocumentRepository;
use crate::state::AppState;
use crate::templates::TemplateEngine;

/// Build the shared state around a given Alfresco implementation. Tests pass
/// a fake; `initialize_app` passes the HTTP client.
pub async fn build_state(config: Config, alfresco: Arc<dyn AlfrescoApi>) -> Result<Arc<AppState>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(config.database_url())
        .await?;

    let documents = DocumentRepository::new(pool);
    documents.init().await?;

    Ok(Arc::new(AppState {
        alfresco,
        sessions: SessionStore::new(config.session_ttl_seconds()),
        documents,
        templates: TemplateEngine::new()?,
        config,
    }))
}

/// Initialize the application: document store, session store, templates,
/// Alfresco client, and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let client = AlfrescoClient::new(&config)?;
    let state = build_state(config, Arc::new(client)).await?;
    let router = routes::build_router(state.clone());
    Ok((state, router))
}
