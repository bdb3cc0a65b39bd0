//! Full-text search page.
//!
//! GET renders the empty form; POST trims the submitted query and runs a
//! single AFTS search. An empty or whitespace-only query renders an empty
//! result list without touching the backend.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use minijinja::context;
use serde::Deserialize;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

pub async fn search_form(
    _ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    render_page(
        &state,
        "search.html",
        context! {
            build_page_title => "Alcove - Search",
            result_list => Vec::<alcove_core::models::Node>::new(),
        },
    )
}

pub async fn search(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, HttpAppError> {
    let query = form.query.trim();

    let result_list = if query.is_empty() {
        Vec::new()
    } else {
        state.alfresco.search(&ctx.credential, query).await?
    };

    render_page(
        &state,
        "search.html",
        context! {
            build_page_title => "Alcove - Search",
            result_list => result_list,
        },
    )
}
