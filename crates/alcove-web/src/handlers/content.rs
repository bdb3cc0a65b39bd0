//! Node content routes.
//!
//! `GET /content/{id}` proxies the raw bytes with the `Content-Type` taken
//! from the node metadata (not sniffed from the bytes). `GET
//! /content/{id}/json` re-serializes the node's informational JSON with
//! sorted keys and 4-space indentation so the output is byte-for-byte
//! reproducible.

use std::sync::Arc;

use alcove_core::AppError;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::auth::SessionContext;
use crate::error::HttpAppError;
use crate::state::AppState;

pub async fn content(
    ctx: SessionContext,
    Path(node_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    // The metadata lookup decides the Content-Type, independent of the bytes.
    let node = state.alfresco.get_node(&ctx.credential, &node_id).await?;
    let mime_type = node.mime_type().to_string();

    let bytes = state.alfresco.get_content(&ctx.credential, &node_id).await?;

    tracing::debug!(node_id = %node_id, mime_type = %mime_type, size = bytes.len(), "Proxying node content");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)).into())
}

pub async fn content_json(
    ctx: SessionContext,
    Path(node_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let info = state
        .alfresco
        .get_node_info(&ctx.credential, &node_id)
        .await?;

    let body = to_pretty_sorted(&info)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)).into())
}

/// Serialize with keys sorted at every level and a 4-space indent.
pub fn to_pretty_sorted(value: &Value) -> Result<String, AppError> {
    let sorted = sort_keys(value.clone());
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    sorted
        .serialize(&mut serializer)
        .map_err(|e| AppError::Internal(format!("Failed to serialize node info: {}", e)))?;
    String::from_utf8(out).map_err(|e| AppError::Internal(format!("Invalid UTF-8: {}", e)))
}

/// Rebuild the value with object keys inserted in sorted order, recursively.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = serde_json::Map::new();
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
