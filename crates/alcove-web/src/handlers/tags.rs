//! Tags listing (one fixed page of 100).

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn tags(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let tags = state.alfresco.list_tags(&ctx.credential).await?;

    render_page(
        &state,
        "tags.html",
        context! {
            build_page_title => "Alcove - Tags",
            title => "List of Tags",
            tags => tags,
        },
    )
}
