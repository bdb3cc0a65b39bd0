//! Dashboard: entity counters, their percentages, and the latest documents.

use std::sync::Arc;

use alcove_core::percentage;
use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

const LAST_DOCUMENTS_QUERY: &str =
    "SELECT * FROM cmis:document ORDER BY cmis:creationDate DESC";
const LAST_DOCUMENTS_LIMIT: i64 = 10;

/// Counter widgets display against a fixed denominator of 100.
const COUNTER_DENOMINATOR: i64 = 100;

pub async fn index(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let credential = &ctx.credential;

    let count_sites = state.alfresco.count_sites(credential).await?;
    let count_tags = state.alfresco.count_tags(credential).await?;
    let count_people = state.alfresco.count_people(credential).await?;
    let count_groups = state.alfresco.count_groups(credential).await?;

    let result_list = state
        .alfresco
        .search_cmis(credential, LAST_DOCUMENTS_QUERY, LAST_DOCUMENTS_LIMIT)
        .await?;

    render_page(
        &state,
        "index.html",
        context! {
            build_page_title => "Alcove",
            count_sites => count_sites,
            count_tags => count_tags,
            count_people => count_people,
            count_groups => count_groups,
            percent_sites => percentage(count_sites, COUNTER_DENOMINATOR),
            percent_tags => percentage(count_tags, COUNTER_DENOMINATOR),
            percent_people => percentage(count_people, COUNTER_DENOMINATOR),
            percent_groups => percentage(count_groups, COUNTER_DENOMINATOR),
            result_list => result_list,
        },
    )
}
