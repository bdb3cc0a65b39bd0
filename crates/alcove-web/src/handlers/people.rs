//! People listing (one fixed page of 100).

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn people(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let people = state.alfresco.list_people(&ctx.credential).await?;

    render_page(
        &state,
        "people.html",
        context! {
            build_page_title => "Alcove - People",
            title => "List of People",
            people => people,
        },
    )
}
