//! Application state shared across handlers.

use std::sync::Arc;

use alcove_client::AlfrescoApi;
use alcove_core::Config;

use crate::auth::session::SessionStore;
use crate::db::DocumentRepository;
use crate::templates::TemplateEngine;

/// Everything a handler needs: the Alfresco client (behind the trait seam),
/// the session store, the local document store, and the template engine.
pub struct AppState {
    pub alfresco: Arc<dyn AlfrescoApi>,
    pub sessions: SessionStore,
    pub documents: DocumentRepository,
    pub templates: TemplateEngine,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
