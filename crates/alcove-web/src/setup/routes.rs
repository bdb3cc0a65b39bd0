//! Route table.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    content, groups, index, login, people, profile, search, sites, tags, upload, viewer,
};
use crate::state::AppState;

/// Headroom for multipart boundaries and form fields on top of the payload.
const BODY_LIMIT_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    // The handler enforces upload_max_bytes itself; the transport limit only
    // has to sit above it so valid payloads are not cut off mid-read.
    let body_limit = DefaultBodyLimit::max(state.config.upload_max_bytes() + BODY_LIMIT_OVERHEAD);
    let media = ServeDir::new(state.config.upload_dir());

    Router::new()
        .route("/", get(index::index))
        .route("/login", get(login::login_form).post(login::login))
        .route("/logout", get(login::logout).post(login::logout))
        .route("/profile", get(profile::profile))
        .route("/sites", get(sites::sites))
        .route("/tags", get(tags::tags))
        .route("/people", get(people::people))
        .route("/groups", get(groups::groups))
        .route("/search", get(search::search_form).post(search::search))
        .route("/viewer/{node_id}", get(viewer::viewer))
        .route("/content/{node_id}", get(content::content))
        .route("/content/{node_id}/json", get(content::content_json))
        .route("/upload", get(upload::upload_page).post(upload::upload))
        .nest_service("/media", media)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
