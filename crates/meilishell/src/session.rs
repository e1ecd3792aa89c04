//! Connection state shared by every command.
//!
//! A [`Session`] only exists once a connect check has passed, so handlers
//! never see a half-configured client. `connect` builds a new one and the
//! caller decides whether to replace the current session with it.

use std::time::Duration;

use meilishell_client::{MeiliClient, Version};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::output::format_banner;

/// What to connect to.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub host: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Why a connect attempt failed.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error(
        "❌ Failed connect to Meilisearch at {host}, host or API key is invalid: {source}"
    )]
    Unreachable {
        host: String,
        #[source]
        source: meilishell_client::Error,
    },

    #[error("master key is invalid, 'meilishell --api-key foobar'")]
    InvalidCredentials {
        host: String,
        #[source]
        source: meilishell_client::Error,
    },

    #[error("failed to read Meilisearch version: {0}")]
    Version(#[source] meilishell_client::Error),
}

/// The active connection.
#[derive(Debug, Clone)]
pub struct Session {
    client: MeiliClient,
    host: Url,
    prefix: String,
    server_version: Version,
    timeout: Duration,
}

impl Session {
    /// Check the server is healthy and read its version.
    pub async fn connect(options: &ConnectOptions) -> Result<Self, ConnectError> {
        let host = parse_host(&options.host)?;

        let mut builder = MeiliClient::builder()
            .base_url(host.as_str())
            .timeout(options.timeout);
        if let Some(key) = &options.api_key {
            builder = builder.api_key(key);
        }
        let client = builder.build().map_err(|e| ConnectError::InvalidHost {
            host: options.host.clone(),
            reason: e.to_string(),
        })?;

        debug!(host = %host, "checking meilisearch health");
        if let Err(e) = client.health().check().await {
            return Err(if e.is_auth_error() {
                ConnectError::InvalidCredentials {
                    host: options.host.clone(),
                    source: e,
                }
            } else {
                ConnectError::Unreachable {
                    host: options.host.clone(),
                    source: e,
                }
            });
        }

        let server_version = client.version().await.map_err(|e| {
            if e.is_auth_error() {
                ConnectError::InvalidCredentials {
                    host: options.host.clone(),
                    source: e,
                }
            } else {
                ConnectError::Version(e)
            }
        })?;

        info!(host = %host, version = %server_version.pkg_version, "connected to meilisearch");

        Ok(Self {
            prefix: prompt_prefix(&host),
            client,
            host,
            server_version,
            timeout: options.timeout,
        })
    }

    pub fn client(&self) -> &MeiliClient {
        &self.client
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Prompt text, `Meilishell@host:port > `.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn server_version(&self) -> &Version {
        &self.server_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Welcome text stamped with the current local time.
    pub fn banner(&self) -> String {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        format_banner(&self.server_version.pkg_version, &now)
    }
}

/// Parse a user supplied host. A bare `host:port` is taken as plain http.
fn parse_host(raw: &str) -> Result<Url, ConnectError> {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&candidate).map_err(|e| ConnectError::InvalidHost {
        host: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConnectError::InvalidHost {
            host: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConnectError::InvalidHost {
            host: raw.to_string(),
            reason: "missing host name".to_string(),
        });
    }
    Ok(url)
}

fn prompt_prefix(host: &Url) -> String {
    let name = host.host_str().unwrap_or_default();
    match host.port() {
        Some(port) => format!("Meilishell@{}:{} > ", name, port),
        None => format!("Meilishell@{} > ", name),
    }
}
