//! Viewer shell: renders the page around a node's content without calling
//! Alfresco; the embedded content route does the fetching.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn viewer(
    _ctx: SessionContext,
    Path(node_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    render_page(
        &state,
        "viewer.html",
        context! {
            build_page_title => "Alcove - Viewer",
            nodeId => node_id,
        },
    )
}
