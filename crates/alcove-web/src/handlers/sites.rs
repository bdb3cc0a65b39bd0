//! Sites listing (one fixed page of 100).

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn sites(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let sites = state.alfresco.list_sites(&ctx.credential).await?;

    render_page(
        &state,
        "sites.html",
        context! {
            build_page_title => "Alcove - Sites",
            title => "List of Sites",
            sites => sites,
        },
    )
}
