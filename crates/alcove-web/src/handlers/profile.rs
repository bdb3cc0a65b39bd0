//! Profile page for the logged-in user.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

pub async fn profile(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let person = state
        .alfresco
        .get_person(&ctx.credential, &ctx.user_id)
        .await?;

    render_page(
        &state,
        "profile.html",
        context! {
            build_page_title => "Alcove - User Profile",
            title => "User Profile",
            user => context! {
                id => person.id,
                full_name => person.full_name(),
                email => person.email,
                enabled => person.enabled,
            },
        },
    )
}
