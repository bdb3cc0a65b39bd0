//! One handler per page, composing the token guard, the Alfresco client
//! calls, and a template render or direct response.

pub mod content;
pub mod groups;
pub mod index;
pub mod login;
pub mod people;
pub mod profile;
pub mod search;
pub mod sites;
pub mod tags;
pub mod upload;
pub mod viewer;

use axum::response::Html;
use minijinja::Value;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Render a page template into an HTML response.
pub(crate) fn render_page(
    state: &AppState,
    name: &str,
    context: Value,
) -> Result<Html<String>, HttpAppError> {
    Ok(Html(state.templates.render(name, context)?))
}
