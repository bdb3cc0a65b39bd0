//! Upload flow: Received → Validated → Synced.
//!
//! A validated file is persisted locally, then mirrored into Alfresco under
//! the user's home folder: create the node, and only on success write its
//! content. The local `documents` table is cleared at the end of the flow
//! regardless of the remote outcome (at-most-once locally, best-effort
//! remotely), so a remote failure is logged but still reported as a valid
//! upload to the browser.

use std::path::Path as FsPath;
use std::sync::Arc;

use alcove_client::api::USER_HOME;
use alcove_core::models::Document;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use bytes::Bytes;
use minijinja::context;
use serde::Serialize;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::handlers::render_page;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UploadResponse {
    fn invalid() -> Self {
        Self {
            is_valid: false,
            name: None,
            url: None,
        }
    }

    fn valid(name: String, url: String) -> Self {
        Self {
            is_valid: true,
            name: Some(name),
            url: Some(url),
        }
    }
}

pub async fn upload_page(
    _ctx: SessionContext,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let documents = state.documents.list().await?;

    render_page(
        &state,
        "upload.html",
        context! {
            build_page_title => "Alcove - Upload",
            documents => documents,
        },
    )
}

pub async fn upload(
    ctx: SessionContext,
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // Received -> Validated. A failed validation is terminal: no local or
    // remote side effects.
    let Some(file) = validate_upload(multipart, &state).await else {
        return Ok(Json(UploadResponse::invalid()));
    };

    // Validated -> Synced: persist locally first.
    let upload_dir = state.config.upload_dir().to_string();
    tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
        alcove_core::AppError::Internal(format!("Failed to create upload dir: {}", e))
    })?;
    let local_path = FsPath::new(&upload_dir).join(&file.name);
    tokio::fs::write(&local_path, &file.bytes)
        .await
        .map_err(|e| {
            alcove_core::AppError::Internal(format!("Failed to persist upload: {}", e))
        })?;

    let mime_type = mime_guess::from_path(&file.name)
        .first_or_octet_stream()
        .to_string();
    let url = format!("/media/{}", file.name);
    let document = Document::new(
        file.name.clone(),
        url.clone(),
        mime_type.clone(),
        file.bytes.len() as i64,
    );
    state.documents.insert(&document).await?;

    sync_to_alfresco(&state, &ctx.credential, &file.name, file.bytes, &mime_type).await;

    let response = UploadResponse::valid(file.name, url);

    // Local records are cleared regardless of the remote outcome.
    state.documents.clear().await?;

    Ok(Json(response))
}

struct ValidatedFile {
    name: String,
    bytes: Bytes,
}

/// Form-level validation: a `file` part with a usable filename, an allowed
/// extension, and a non-empty body within the size limit.
async fn validate_upload(mut multipart: Multipart, state: &AppState) -> Option<ValidatedFile> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::debug!("Upload rejected: no file field in form");
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Upload rejected: malformed multipart payload");
                return None;
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let Some(name) = field.file_name().and_then(sanitize_filename) else {
            tracing::debug!("Upload rejected: missing or unusable filename");
            return None;
        };

        if !has_allowed_extension(&name, state.config.upload_allowed_extensions()) {
            tracing::debug!(name = %name, "Upload rejected: extension not allowed");
            return None;
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Upload rejected: failed to read file body");
                return None;
            }
        };

        if bytes.is_empty() {
            tracing::debug!(name = %name, "Upload rejected: empty file");
            return None;
        }
        if bytes.len() > state.config.upload_max_bytes() {
            tracing::debug!(name = %name, size = bytes.len(), "Upload rejected: file too large");
            return None;
        }

        return Some(ValidatedFile { name, bytes });
    }
}

/// Strip any path components; reject names that reduce to nothing.
fn sanitize_filename(raw: &str) -> Option<String> {
    let name = FsPath::new(raw)
        .file_name()
        .and_then(|n| n.to_str())?
        .to_string();
    if name.is_empty() || name.starts_with('.') {
        return None;
    }
    Some(name)
}

fn has_allowed_extension(name: &str, allowed: &[String]) -> bool {
    FsPath::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|a| a == &ext.to_lowercase()))
        .unwrap_or(false)
}

/// Best-effort mirror into Alfresco: create the node under the user home,
/// then write the content only if creation succeeded. Failures are logged
/// and deliberately not propagated (see module docs).
async fn sync_to_alfresco(
    state: &AppState,
    credential: &str,
    name: &str,
    bytes: Bytes,
    mime_type: &str,
) {
    match state.alfresco.create_node(credential, USER_HOME, name).await {
        Ok(node) => {
            if let Err(e) = state
                .alfresco
                .put_content(credential, &node.id, bytes, mime_type)
                .await
            {
                tracing::warn!(error = %e, node_id = %node.id, name = %name,
                    "Partial sync: node created but content write failed");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, name = %name, "Upload not mirrored: node creation failed");
        }
    }
}
