//! Session cookie handling and the token guard.

pub mod guard;
pub mod session;

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

pub use guard::{AuthRedirect, SessionContext};
pub use session::{Session, SessionStore};

pub const SESSION_COOKIE: &str = "alcove_session";

/// `Set-Cookie` value carrying the session id.
pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, session_id
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}

/// Session id from the request's `Cookie` header(s), if present.
pub fn extract_session_id(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next() == Some(SESSION_COOKIE) {
                let id = parts.next().unwrap_or("");
                if !id.is_empty() {
                    return Some(id.to_string());
                }
            }
        }
    }
    None
}
