//! HTTP error response conversion
//!
//! Wraps `AppError` so handlers can return
//! `Result<impl IntoResponse, HttpAppError>` and have errors render
//! consistently: an expired token turns into the login redirect, an upstream
//! Alfresco failure is passed through with its original status and body, and
//! everything else renders its status code with a plain-text message.

use alcove_core::{AppError, ErrorMetadata, LogLevel};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};

/// Wrapper type for AppError to implement IntoResponse (orphan rule: the
/// trait and the error both live elsewhere).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code, "Request error");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code, "Request error");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code, "Request error");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|env| {
            let env = env.to_lowercase();
            env == "production" || env == "prod"
        })
        .unwrap_or(false)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let error = &self.0;
        log_error(error);

        if let AppError::Unauthorized(_) = error {
            return Redirect::to("/login").into_response();
        }

        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Upstream bodies are surfaced verbatim; everything else uses the
        // client message, with details hidden in production.
        let body = if is_production_env() && error.is_sensitive() {
            error.error_code().to_string()
        } else {
            error.client_message()
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
