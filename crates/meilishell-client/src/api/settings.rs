//! Index settings API.

use std::fmt;
use std::str::FromStr;

use crate::client::MeiliClient;
use crate::error::Result;
use crate::types::{Settings, TaskInfo};

/// HTTP method Meilisearch expects when updating a settings resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

/// One settings sub-resource of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsResource {
    RankingRules,
    DistinctAttribute,
    SearchableAttributes,
    DisplayedAttributes,
    StopWords,
    Synonyms,
    FilterableAttributes,
    SortableAttributes,
    TypoTolerance,
    Pagination,
    Faceting,
    Embedders,
    SearchCutoffMs,
}

impl SettingsResource {
    pub const ALL: [SettingsResource; 13] = [
        SettingsResource::RankingRules,
        SettingsResource::DistinctAttribute,
        SettingsResource::SearchableAttributes,
        SettingsResource::DisplayedAttributes,
        SettingsResource::StopWords,
        SettingsResource::Synonyms,
        SettingsResource::FilterableAttributes,
        SettingsResource::SortableAttributes,
        SettingsResource::TypoTolerance,
        SettingsResource::Pagination,
        SettingsResource::Faceting,
        SettingsResource::Embedders,
        SettingsResource::SearchCutoffMs,
    ];

    /// URL segment, also the name users type.
    pub fn path(self) -> &'static str {
        match self {
            SettingsResource::RankingRules => "ranking-rules",
            SettingsResource::DistinctAttribute => "distinct-attribute",
            SettingsResource::SearchableAttributes => "searchable-attributes",
            SettingsResource::DisplayedAttributes => "displayed-attributes",
            SettingsResource::StopWords => "stop-words",
            SettingsResource::Synonyms => "synonyms",
            SettingsResource::FilterableAttributes => "filterable-attributes",
            SettingsResource::SortableAttributes => "sortable-attributes",
            SettingsResource::TypoTolerance => "typo-tolerance",
            SettingsResource::Pagination => "pagination",
            SettingsResource::Faceting => "faceting",
            SettingsResource::Embedders => "embedders",
            SettingsResource::SearchCutoffMs => "search-cutoff-ms",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            SettingsResource::RankingRules => "Ranking Rules",
            SettingsResource::DistinctAttribute => "Distinct Attribute",
            SettingsResource::SearchableAttributes => "Searchable Attributes",
            SettingsResource::DisplayedAttributes => "Displayed Attributes",
            SettingsResource::StopWords => "Stop Words",
            SettingsResource::Synonyms => "Synonyms",
            SettingsResource::FilterableAttributes => "Filterable Attributes",
            SettingsResource::SortableAttributes => "Sortable Attributes",
            SettingsResource::TypoTolerance => "Typo Tolerance",
            SettingsResource::Pagination => "Pagination",
            SettingsResource::Faceting => "Faceting",
            SettingsResource::Embedders => "Embedders",
            SettingsResource::SearchCutoffMs => "Search Cutoff Ms",
        }
    }

    /// Object-shaped settings are merged with PATCH, the rest replaced with PUT.
    pub fn update_method(self) -> UpdateMethod {
        match self {
            SettingsResource::TypoTolerance
            | SettingsResource::Pagination
            | SettingsResource::Faceting
            | SettingsResource::Embedders => UpdateMethod::Patch,
            _ => UpdateMethod::Put,
        }
    }

    /// All resource names, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(SettingsResource::path)
    }
}

impl fmt::Display for SettingsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SettingsResource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|resource| resource.path().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown settings resource '{}', expected one of: {}",
                    s,
                    Self::names().collect::<Vec<_>>().join(", ")
                )
            })
    }
}

/// Settings client bound to one index.
pub struct SettingsApi {
    client: MeiliClient,
    index_uid: String,
}

impl SettingsApi {
    pub(crate) fn new(client: MeiliClient, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn path(&self) -> [&str; 3] {
        ["indexes", self.index_uid.as_str(), "settings"]
    }

    fn resource_path(&self, resource: SettingsResource) -> [&str; 4] {
        ["indexes", self.index_uid.as_str(), "settings", resource.path()]
    }

    /// Get all settings.
    pub async fn get(&self) -> Result<Settings> {
        self.client.get(&self.path()).await
    }

    /// Merge a partial settings object into the index settings.
    pub async fn update(&self, settings: &serde_json::Value) -> Result<TaskInfo> {
        self.client.patch(&self.path(), settings).await
    }

    /// Reset every setting to its default.
    pub async fn reset(&self) -> Result<TaskInfo> {
        self.client.delete(&self.path()).await
    }

    /// Get one settings resource as raw JSON.
    pub async fn get_resource(&self, resource: SettingsResource) -> Result<serde_json::Value> {
        self.client.get(&self.resource_path(resource)).await
    }

    /// Update one settings resource.
    pub async fn update_resource(
        &self,
        resource: SettingsResource,
        value: &serde_json::Value,
    ) -> Result<TaskInfo> {
        let path = self.resource_path(resource);
        match resource.update_method() {
            UpdateMethod::Put => self.client.put(&path, value).await,
            UpdateMethod::Patch => self.client.patch(&path, value).await,
        }
    }

    /// Reset one settings resource.
    pub async fn reset_resource(&self, resource: SettingsResource) -> Result<TaskInfo> {
        self.client.delete(&self.resource_path(resource)).await
    }
}
