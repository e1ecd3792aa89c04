//! Tasks API.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{Task, TaskInfo, TasksResults};

/// Query parameters for listing tasks.
#[derive(Debug, Default, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Uid of the first task returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    /// Comma separated statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<String>,
    /// Comma separated task types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Comma separated index uids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_uids: Option<String>,
}

/// Task selection by uid, serialized as `uids=1,2,3`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskUidsQuery {
    uids: String,
}

impl TaskUidsQuery {
    pub fn new(uids: &[u64]) -> Self {
        let uids = uids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self { uids }
    }
}

/// Tasks API client.
pub struct TasksApi {
    client: MeiliClient,
}

impl TasksApi {
    pub(crate) fn new(client: MeiliClient) -> Self {
        Self { client }
    }

    /// List tasks, newest first.
    pub async fn list(&self, query: &ListTasksQuery) -> Result<TasksResults> {
        self.client.get_with_query(&["tasks"], query).await
    }

    /// Get a task by uid.
    pub async fn get(&self, uid: u64) -> Result<Task> {
        let uid = uid.to_string();
        self.client.get(&["tasks", uid.as_str()]).await
    }

    /// Enqueue cancellation of the given tasks.
    pub async fn cancel(&self, uids: &[u64]) -> Result<TaskInfo> {
        self.client
            .post_with_query(&["tasks", "cancel"], &TaskUidsQuery::new(uids))
            .await
    }

    /// Enqueue deletion of the given tasks.
    pub async fn delete(&self, uids: &[u64]) -> Result<TaskInfo> {
        self.client
            .delete_with_query(&["tasks"], &TaskUidsQuery::new(uids))
            .await
    }
}
