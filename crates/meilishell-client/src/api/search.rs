//! Search API.

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{SearchRequest, SearchResponse};

/// Search client bound to one index.
pub struct SearchApi {
    client: MeiliClient,
    index_uid: String,
}

impl SearchApi {
    pub(crate) fn new(client: MeiliClient, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    /// Run a search.
    pub async fn query(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.client
            .post(&["indexes", self.index_uid.as_str(), "search"], request)
            .await
    }
}
