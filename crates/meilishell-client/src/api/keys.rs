//! Keys API.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{CreateKeyRequest, Key, KeysResults, UpdateKeyRequest};

/// Query parameters for listing keys.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ListKeysQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Keys API client. Needs the master key.
pub struct KeysApi {
    client: MeiliClient,
}

impl KeysApi {
    pub(crate) fn new(client: MeiliClient) -> Self {
        Self { client }
    }

    /// List keys.
    pub async fn list(&self, query: &ListKeysQuery) -> Result<KeysResults> {
        self.client.get_with_query(&["keys"], query).await
    }

    /// Get a key by its value or uid.
    pub async fn get(&self, key_or_uid: &str) -> Result<Key> {
        self.client.get(&["keys", key_or_uid]).await
    }

    /// Create a key.
    pub async fn create(&self, request: &CreateKeyRequest) -> Result<Key> {
        self.client.post(&["keys"], request).await
    }

    /// Update the name and/or description of a key.
    pub async fn update(&self, key_or_uid: &str, request: &UpdateKeyRequest) -> Result<Key> {
        self.client.patch(&["keys", key_or_uid], request).await
    }

    /// Delete a key.
    pub async fn delete(&self, key_or_uid: &str) -> Result<()> {
        self.client.delete_empty(&["keys", key_or_uid]).await
    }
}
