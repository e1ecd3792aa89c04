//! Indexes API.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{CreateIndexRequest, Index, IndexesResults, SwapIndexes, TaskInfo};

/// Query parameters for listing indexes.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ListIndexesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Indexes API client.
pub struct IndexesApi {
    client: MeiliClient,
}

impl IndexesApi {
    pub(crate) fn new(client: MeiliClient) -> Self {
        Self { client }
    }

    /// List indexes.
    pub async fn list(&self, query: &ListIndexesQuery) -> Result<IndexesResults> {
        self.client.get_with_query(&["indexes"], query).await
    }

    /// Get an index by uid.
    pub async fn get(&self, uid: &str) -> Result<Index> {
        self.client.get(&["indexes", uid]).await
    }

    /// Enqueue creation of an index.
    pub async fn create(&self, uid: &str, primary_key: Option<&str>) -> Result<TaskInfo> {
        let request = CreateIndexRequest {
            uid: uid.to_string(),
            primary_key: primary_key.map(str::to_string),
        };
        self.client.post(&["indexes"], &request).await
    }

    /// Enqueue deletion of an index.
    pub async fn delete(&self, uid: &str) -> Result<TaskInfo> {
        self.client.delete(&["indexes", uid]).await
    }

    /// Enqueue an atomic swap of one or more index pairs.
    pub async fn swap(&self, swaps: &[SwapIndexes]) -> Result<TaskInfo> {
        self.client.post(&["swap-indexes"], swaps).await
    }
}
