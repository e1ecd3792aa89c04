//! Instance-wide routes: version, stats and dumps.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{Stats, TaskInfo, Version};

impl MeiliClient {
    /// Get the server version. Requires a valid key on protected instances.
    pub async fn version(&self) -> Result<Version> {
        self.get(&["version"]).await
    }

    /// Get database statistics.
    pub async fn stats(&self) -> Result<Stats> {
        self.get(&["stats"]).await
    }

    /// Enqueue a dump creation task.
    pub async fn create_dump(&self) -> Result<TaskInfo> {
        self.post_empty(&["dumps"]).await
    }
}
