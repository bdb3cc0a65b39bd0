use serde::{Deserialize, Serialize};

/// Paging block present on every Alfresco list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub count: i64,
    #[serde(default)]
    pub total_items: Option<i64>,
    #[serde(default)]
    pub has_more_items: bool,
    #[serde(default)]
    pub skip_count: i64,
    #[serde(default)]
    pub max_items: i64,
}

impl Pagination {
    /// Total item count, falling back to the page count when the server
    /// omits `totalItems`.
    pub fn total(&self) -> i64 {
        self.total_items.unwrap_or(self.count)
    }
}

/// Single `{ "entry": { … } }` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T> {
    pub entry: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBody<T> {
    pub pagination: Pagination,
    pub entries: Vec<Entry<T>>,
}

/// Top-level `{ "list": { "pagination": …, "entries": [ … ] } }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryList<T> {
    pub list: ListBody<T>,
}

impl<T> EntryList<T> {
    /// Unwrap the entries, dropping the envelope.
    pub fn into_entries(self) -> Vec<T> {
        self.list.entries.into_iter().map(|e| e.entry).collect()
    }

    pub fn total(&self) -> i64 {
        self.list.pagination.total()
    }
}
