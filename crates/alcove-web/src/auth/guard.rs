//! Token guard.
//!
//! `SessionContext` is the request-scoped credential context: extracting it
//! checks the session cookie, the session store, and finally asks Alfresco
//! whether the ticket is still accepted. Any failure invalidates the local
//! session and rejects with a redirect to `/login`, so a handler that takes
//! a `SessionContext` can never run unauthenticated and never issues a data
//! call first.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::auth::{clear_session_cookie, extract_session_id};
use crate::state::AppState;

/// Credential and identity for the current request.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub user_id: String,
    pub credential: String,
}

/// Rejection: 303 to the login page, clearing the session cookie.
#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        (
            StatusCode::SEE_OTHER,
            [
                (header::LOCATION, "/login".to_string()),
                (header::SET_COOKIE, clear_session_cookie()),
            ],
        )
            .into_response()
    }
}

impl FromRequestParts<Arc<AppState>> for SessionContext {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session_id = extract_session_id(&parts.headers).ok_or(AuthRedirect)?;

        let Some(session) = state.sessions.get(&session_id).await else {
            return Err(AuthRedirect);
        };

        match state.alfresco.validate_ticket(&session.credential).await {
            Ok(true) => Ok(SessionContext {
                session_id,
                user_id: session.user_id,
                credential: session.credential,
            }),
            Ok(false) => {
                tracing::debug!(user_id = %session.user_id, "Ticket no longer valid, ending session");
                state.sessions.invalidate(&session_id).await;
                Err(AuthRedirect)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ticket validation failed, ending session");
                state.sessions.invalidate(&session_id).await;
                Err(AuthRedirect)
            }
        }
    }
}
