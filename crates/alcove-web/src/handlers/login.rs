//! Login and logout.
//!
//! Login exchanges the submitted credentials for an Alfresco ticket and
//! stores the ticket-derived credential in a new session. Logout invalidates
//! the session and clears the cookie; both paths end at `/login`.

use std::sync::Arc;

use alcove_core::AppError;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use minijinja::context;
use serde::Deserialize;

use crate::auth::{clear_session_cookie, extract_session_id, session_cookie};
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpAppError> {
    let html = state.templates.render(
        "login.html",
        context! { build_page_title => "Alcove - Login" },
    )?;
    Ok(Html(html))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, HttpAppError> {
    match state
        .alfresco
        .create_ticket(&form.username, &form.password)
        .await
    {
        Ok(ticket) => {
            let user_id = ticket
                .user_id
                .clone()
                .unwrap_or_else(|| form.username.clone());
            tracing::info!(user_id = %user_id, "Login succeeded");
            let session_id = state.sessions.issue(ticket.credential(), user_id).await;
            Ok((
                StatusCode::SEE_OTHER,
                [
                    (header::LOCATION, "/".to_string()),
                    (header::SET_COOKIE, session_cookie(&session_id)),
                ],
            )
                .into_response())
        }
        Err(AppError::Upstream { status, .. }) if status == 401 || status == 403 => {
            tracing::debug!(user_id = %form.username, status, "Login rejected");
            let html = state.templates.render(
                "login.html",
                context! {
                    build_page_title => "Alcove - Login",
                    error => "Invalid username or password",
                },
            )?;
            Ok((StatusCode::UNAUTHORIZED, Html(html)).into_response())
        }
        Err(other) => Err(other.into()),
    }
}

pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(session_id) = extract_session_id(&headers) {
        state.sessions.invalidate(&session_id).await;
    }
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, "/login".to_string()),
            (header::SET_COOKIE, clear_session_cookie()),
        ],
    )
        .into_response()
}
