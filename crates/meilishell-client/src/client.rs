//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::api::{HealthApi, IndexesApi, KeysApi, SearchApi, SettingsApi, TasksApi};
use crate::error::{Error, ErrorResponse, Result};

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Meilisearch API client.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Clone)]
pub struct MeiliClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL, always ending with `/`.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl std::fmt::Debug for MeiliClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeiliClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl MeiliClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the health API.
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    /// Access the indexes API.
    pub fn indexes(&self) -> IndexesApi {
        IndexesApi::new(self.clone())
    }

    /// Access the settings of one index.
    pub fn settings(&self, index_uid: impl Into<String>) -> SettingsApi {
        SettingsApi::new(self.clone(), index_uid.into())
    }

    /// Access the keys API.
    pub fn keys(&self) -> KeysApi {
        KeysApi::new(self.clone())
    }

    /// Access the tasks API.
    pub fn tasks(&self) -> TasksApi {
        TasksApi::new(self.clone())
    }

    /// Search one index.
    pub fn search(&self, index_uid: impl Into<String>) -> SearchApi {
        SearchApi::new(self.clone(), index_uid.into())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL from path segments.
    ///
    /// Each segment is percent-encoded, so an identifier containing `/`, `?`
    /// or `#` stays inside its own segment. Empty, `.` and `..` segments are
    /// rejected.
    pub(crate) fn url(&self, path: &[&str]) -> Result<Url> {
        if let Some(segment) = path
            .iter()
            .find(|s| s.trim().is_empty() || matches!(**s, "." | ".."))
        {
            return Err(Error::InvalidIdentifier((*segment).to_string()));
        }

        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!("cannot append a path to '{}'", self.inner.base_url))
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(%method, %url, "meilisearch request");
        Ok(self
            .inner
            .http
            .request(method, url)
            .timeout(self.inner.timeout))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &[&str], query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path)?.query(query).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request carrying only query parameters.
    pub(crate) async fn post_with_query<T, Q>(&self, path: &[&str], query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path)?
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &[&str],
    ) -> Result<T> {
        let response = self.request(Method::POST, path)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let response = self.request(Method::PATCH, path)?.json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, path)?.json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request that returns a body (usually a task summary).
    pub(crate) async fn delete<T: serde::de::DeserializeOwned>(
        &self,
        path: &[&str],
    ) -> Result<T> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request with query parameters.
    pub(crate) async fn delete_with_query<T, Q>(&self, path: &[&str], query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self
            .request(Method::DELETE, path)?
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request that answers `204 No Content`.
    pub(crate) async fn delete_empty(&self, path: &[&str]) -> Result<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    pub(crate) async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(status, body = %body, "meilisearch error response");

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => Error::Api {
                status,
                code: err.code,
                kind: err.kind,
                message: err.message,
                link: err.link,
            },
            Err(_) => Error::Api {
                status,
                code: "unknown".to_string(),
                kind: "unknown".to_string(),
                message: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body
                },
                link: None,
            },
        }
    }
}

/// Builder for creating a [`MeiliClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key or master key. Empty keys are ignored.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MeiliClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        let mut base_url = Url::parse(&base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme '{}', expected http or https",
                base_url.scheme()
            )));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| Error::Config("Invalid API key".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("meilishell/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MeiliClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
