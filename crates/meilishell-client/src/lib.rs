//! HTTP client for the Meilisearch administrative API.
//!
//! This crate provides a typed client for the routes the shell needs.
//!
//! # Example
//!
//! ```no_run
//! use meilishell_client::{MeiliClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = MeiliClient::builder()
//!     .base_url("http://localhost:7700")
//!     .api_key("masterKey")
//!     .build()?;
//!
//! if client.health().is_healthy().await {
//!     let version = client.version().await?;
//!     println!("Meilisearch v{}", version.pkg_version);
//! }
//!
//! let task = client.indexes().create("movies", Some("id")).await?;
//! println!("enqueued task {}", task.task_uid);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Health / Version / Stats**: server status
//! - **Indexes**: get, list, create, delete, swap
//! - **Settings**: full settings and every sub-resource (get, update, reset)
//! - **Keys**: create, list, get, update, delete
//! - **Tasks**: get, list, cancel, delete
//! - **Dumps**: create
//! - **Search**: basic query against one index

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, MeiliClient};
pub use error::{Error, Result};
pub use types::*;

pub use api::{ListIndexesQuery, ListKeysQuery, ListTasksQuery, SettingsResource, TaskUidsQuery};
