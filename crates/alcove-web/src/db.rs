//! Local document store.
//!
//! One `documents` table wrapping uploads while they round-trip to
//! Alfresco. Rows are inserted on a validated upload and the whole table is
//! cleared at the end of the flow, so the store only ever holds in-flight
//! records.

use alcove_core::models::Document;
use alcove_core::AppError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema if missing.
    pub async fn init(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                content_type TEXT NOT NULL,
                size_bytes INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert(&self, document: &Document) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO documents (id, name, url, content_type, size_bytes, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(document.id.to_string())
        .bind(&document.name)
        .bind(&document.url)
        .bind(&document.content_type)
        .bind(document.size_bytes)
        .bind(document.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, url, content_type, size_bytes, created_at
            FROM documents ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_document).collect()
    }

    /// Drop every local record, regardless of remote sync outcome.
    pub async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM documents")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_document(row: sqlx::sqlite::SqliteRow) -> Result<Document, AppError> {
    let id: String = row.try_get("id").map_err(AppError::Database)?;
    let created_at: String = row.try_get("created_at").map_err(AppError::Database)?;
    Ok(Document {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::Internal(format!("Corrupt document id: {}", e)))?,
        name: row.try_get("name").map_err(AppError::Database)?,
        url: row.try_get("url").map_err(AppError::Database)?,
        content_type: row.try_get("content_type").map_err(AppError::Database)?,
        size_bytes: row.try_get("size_bytes").map_err(AppError::Database)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| AppError::Internal(format!("Corrupt document timestamp: {}", e)))?
            .with_timezone(&Utc),
    })
}
