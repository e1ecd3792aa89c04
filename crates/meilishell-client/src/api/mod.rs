//! API endpoint implementations.

mod health;
mod indexes;
mod instance;
mod keys;
mod search;
mod settings;
mod tasks;

pub use health::HealthApi;
pub use indexes::{IndexesApi, ListIndexesQuery};
pub use keys::{KeysApi, ListKeysQuery};
pub use search::SearchApi;
pub use settings::{SettingsApi, SettingsResource, UpdateMethod};
pub use tasks::{ListTasksQuery, TaskUidsQuery, TasksApi};
