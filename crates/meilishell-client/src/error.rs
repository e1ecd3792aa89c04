//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Meilisearch returned an error response.
    #[error("API error ({status} {code}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Meilisearch error code, e.g. `index_not_found`.
        code: String,
        /// Meilisearch error type, e.g. `invalid_request` or `auth`.
        kind: String,
        /// Human readable message.
        message: String,
        /// Documentation link for the error code.
        link: Option<String>,
    },

    /// An identifier cannot be used as a URL path segment.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by Meilisearch.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> Error {
        Error::Api {
            status,
            code: "code".to_string(),
            kind: "auth".to_string(),
            message: "message".to_string(),
            link: None,
        }
    }

    #[test]
    fn test_auth_statuses() {
        assert!(api(401).is_auth_error());
        assert!(api(403).is_auth_error());
        assert!(!api(404).is_auth_error());
        assert!(!api(500).is_auth_error());
        assert!(!Error::InvalidIdentifier("..".to_string()).is_auth_error());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 404,
            code: "index_not_found".to_string(),
            kind: "invalid_request".to_string(),
            message: "Index `movies` not found.".to_string(),
            link: None,
        };
        assert_eq!(
            err.to_string(),
            "API error (404 index_not_found): Index `movies` not found."
        );
    }
}
