//! Request and response types for the Meilisearch API.
//!
//! Field names follow the server's camelCase JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Instance
// ─────────────────────────────────────────────────────────────────────────────

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Usually `available`.
    pub status: String,
}

/// Response of `GET /version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub commit_sha: String,
    pub commit_date: String,
    pub pkg_version: String,
}

/// Response of `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Size of the database in bytes.
    pub database_size: u64,
    #[serde(default)]
    pub used_database_size: Option<u64>,
    /// RFC 3339 timestamp of the last update, if any.
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub indexes: BTreeMap<String, IndexStats>,
}

/// Per-index statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: u64,
    pub is_indexing: bool,
    #[serde(default)]
    pub field_distribution: BTreeMap<String, u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────────────────────

/// Summary returned when an asynchronous operation is enqueued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub task_uid: u64,
    #[serde(default)]
    pub index_uid: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub enqueued_at: String,
}

/// Error attached to a failed task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskError {
    pub message: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Full task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub uid: u64,
    #[serde(default)]
    pub batch_uid: Option<u64>,
    #[serde(default)]
    pub index_uid: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub canceled_by: Option<u64>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<TaskError>,
    /// ISO 8601 duration, e.g. `PT0.0123S`.
    #[serde(default)]
    pub duration: Option<String>,
    pub enqueued_at: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

/// Response of `GET /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksResults {
    pub results: Vec<Task>,
    #[serde(default)]
    pub total: Option<u64>,
    pub limit: u32,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub next: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Indexes
// ─────────────────────────────────────────────────────────────────────────────

/// An index as returned by `GET /indexes/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub uid: String,
    #[serde(default)]
    pub primary_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Paginated list of indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexesResults {
    pub results: Vec<Index>,
    pub offset: u32,
    pub limit: u32,
    pub total: u64,
}

/// Request body of `POST /indexes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexRequest {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
}

/// One pair of indexes to swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapIndexes {
    pub indexes: [String; 2],
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All settings of an index. Fields stay untyped JSON where their shape
/// depends on the server version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub ranking_rules: Vec<String>,
    #[serde(default)]
    pub distinct_attribute: Option<String>,
    #[serde(default)]
    pub searchable_attributes: Vec<String>,
    #[serde(default)]
    pub displayed_attributes: Vec<String>,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub filterable_attributes: Vec<serde_json::Value>,
    #[serde(default)]
    pub sortable_attributes: Vec<String>,
    #[serde(default)]
    pub typo_tolerance: Option<serde_json::Value>,
    #[serde(default)]
    pub pagination: Option<serde_json::Value>,
    #[serde(default)]
    pub faceting: Option<serde_json::Value>,
    #[serde(default)]
    pub embedders: Option<serde_json::Value>,
    #[serde(default)]
    pub search_cutoff_ms: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

/// An API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub key: String,
    pub uid: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub indexes: Vec<String>,
    /// `None` when the key never expires.
    #[serde(default)]
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Paginated list of keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysResults {
    pub results: Vec<Key>,
    pub offset: u32,
    pub limit: u32,
    pub total: u64,
}

/// Request body of `POST /keys`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub actions: Vec<String>,
    pub indexes: Vec<String>,
    /// RFC 3339 timestamp, `None` for a key that never expires.
    pub expires_at: Option<String>,
}

/// Request body of `PATCH /keys/{key}`. Only name and description can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateKeyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Request body of `POST /indexes/{uid}/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub hits: Vec<serde_json::Value>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub processing_time_ms: u64,
    #[serde(default)]
    pub estimated_total_hits: Option<u64>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}
