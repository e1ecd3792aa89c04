//! Health API.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::Health;

/// Health API client.
///
/// `/health` is public on Meilisearch, so a successful check says nothing
/// about the API key.
pub struct HealthApi {
    client: MeiliClient,
}

impl HealthApi {
    pub(crate) fn new(client: MeiliClient) -> Self {
        Self { client }
    }

    /// Check basic health.
    pub async fn check(&self) -> Result<Health> {
        self.client.get(&["health"]).await
    }

    /// Simple connectivity check - returns true if the server answered.
    pub async fn is_healthy(&self) -> bool {
        self.check().await.is_ok()
    }
}
