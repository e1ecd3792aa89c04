//! Configuration types.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "http://localhost:7700";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// History entries kept when nothing else is configured.
pub const DEFAULT_HISTORY_ENTRIES: usize = 1000;

/// Default history filename within the config directory.
const HISTORY_FILE: &str = "history";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Connection defaults.
    #[serde(default)]
    pub connection: Option<ConnectionConfig>,

    /// Line history.
    #[serde(default)]
    pub history: Option<HistoryConfig>,
}

/// `[connection]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Meilisearch URL.
    pub host: Option<String>,
    /// API key or master key.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[history]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    pub enabled: Option<bool>,
    pub max_entries: Option<usize>,
    pub file: Option<PathBuf>,
}

impl ShellConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Merge another config on top of this one (other takes priority,
    /// field by field).
    pub fn merge(&mut self, other: ShellConfig) {
        if let Some(other) = other.connection {
            let connection = self.connection.get_or_insert_with(Default::default);
            if other.host.is_some() {
                connection.host = other.host;
            }
            if other.api_key.is_some() {
                connection.api_key = other.api_key;
            }
            if other.timeout_secs.is_some() {
                connection.timeout_secs = other.timeout_secs;
            }
        }

        if let Some(other) = other.history {
            let history = self.history.get_or_insert_with(Default::default);
            if other.enabled.is_some() {
                history.enabled = other.enabled;
            }
            if other.max_entries.is_some() {
                history.max_entries = other.max_entries;
            }
            if other.file.is_some() {
                history.file = other.file;
            }
        }
    }

    /// Configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.connection
            .as_ref()
            .and_then(|c| c.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.connection.as_ref().and_then(|c| c.api_key.as_deref())
    }

    /// Request timeout. Zero is not a usable timeout and falls back to the
    /// default.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .connection
            .as_ref()
            .and_then(|c| c.timeout_secs)
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Whether history is loaded and saved. On by default.
    pub fn history_enabled(&self) -> bool {
        self.history.as_ref().and_then(|h| h.enabled).unwrap_or(true)
    }

    /// Maximum number of history entries.
    pub fn history_max_entries(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|h| h.max_entries)
            .unwrap_or(DEFAULT_HISTORY_ENTRIES)
    }

    /// History file: the configured one, else `<config_dir>/history`.
    pub fn history_file(&self, config_dir: Option<&Path>) -> Option<PathBuf> {
        self.history
            .as_ref()
            .and_then(|h| h.file.clone())
            .or_else(|| config_dir.map(|dir| dir.join(HISTORY_FILE)))
    }

    /// True when a file stores the API key in plain text.
    pub fn has_plaintext_api_key(&self) -> bool {
        self.api_key().is_some_and(|key| !key.is_empty())
    }
}
