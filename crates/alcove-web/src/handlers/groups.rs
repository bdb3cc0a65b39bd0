//! Groups listing (one fixed page of 100).

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn groups(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let groups = state.alfresco.list_groups(&ctx.credential).await?;

    render_page(
        &state,
        "groups.html",
        context! {
            build_page_title => "Alcove - Groups",
            title => "List of Groups",
            groups => groups,
        },
    )
}
