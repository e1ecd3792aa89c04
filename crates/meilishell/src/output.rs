//! Fixed-format text blocks for API responses.
//!
//! Every formatter returns a `String` ending in a newline so handlers can
//! hand it straight to [`Console::block`](crate::console::Console::block).

use std::fmt::Write as _;

use meilishell_client::{Index, Key, Settings, SettingsResource, Stats, Task, TaskInfo, Version};
use serde_json::Value;

/// Separator printed between entries of a list.
pub const DIVIDER: &str = "---------------------------------";

const PROJECT_URL: &str = "https://github.com/Ja7ad/meilishell";
const DOCS_URL: &str = "https://www.meilisearch.com/docs/reference/api/overview";

/// Welcome text shown after a successful connect.
pub fn format_banner(server_version: &str, time: &str) -> String {
    format!(
        "Welcome to MeiliShell v{} | {}\n\n\
         - Server: Meilisearch v{}\n\
         - Status: ✅ Meilisearch is healthy\n\
         - Time: {}\n\
         - Docs: {}\n\n",
        env!("CARGO_PKG_VERSION"),
        PROJECT_URL,
        server_version,
        time,
        DOCS_URL,
    )
}

pub fn format_task_info(info: &TaskInfo) -> String {
    let mut out = String::new();
    field(&mut out, "Task UID", info.task_uid);
    field(&mut out, "Index UID", opt(&info.index_uid));
    field(&mut out, "Status", &info.status);
    field(&mut out, "Type", &info.kind);
    field(&mut out, "Enqueued At", &info.enqueued_at);
    out
}

pub fn format_task(task: &Task) -> String {
    let mut out = String::new();
    field(&mut out, "Task UID", task.uid);
    field(&mut out, "Index UID", opt(&task.index_uid));
    field(&mut out, "Status", &task.status);
    field(&mut out, "Type", &task.kind);
    field(
        &mut out,
        "Error",
        task.error.as_ref().map(|e| e.message.as_str()).unwrap_or(""),
    );
    field(&mut out, "Duration", opt(&task.duration));
    field(&mut out, "Enqueued At", &task.enqueued_at);
    field(&mut out, "Started At", opt(&task.started_at));
    field(&mut out, "Finished At", opt(&task.finished_at));
    field(
        &mut out,
        "Details",
        task.details.as_ref().map(display_value).unwrap_or_default(),
    );
    field(
        &mut out,
        "Canceled By",
        task.canceled_by.map(|uid| uid.to_string()).unwrap_or_default(),
    );
    out
}

pub fn format_key(key: &Key) -> String {
    let mut out = String::new();
    field(&mut out, "Name", opt(&key.name));
    field(&mut out, "Description", opt(&key.description));
    field(&mut out, "Key", &key.key);
    field(&mut out, "UID", &key.uid);
    field(&mut out, "Actions", key.actions.join(","));
    field(&mut out, "Indexes", key.indexes.join(","));
    field(
        &mut out,
        "Expires At",
        key.expires_at.as_deref().unwrap_or("no expire"),
    );
    field(&mut out, "Created At", &key.created_at);
    field(&mut out, "Updated At", &key.updated_at);
    out
}

/// Index block; `number` is the 1-based position when printed in a list.
pub fn format_index(index: &Index, number: Option<usize>) -> String {
    let mut out = String::new();
    if let Some(number) = number {
        field(&mut out, "No", number);
    }
    field(&mut out, "Index UID", &index.uid);
    field(&mut out, "Primary Key", opt(&index.primary_key));
    field(&mut out, "Created At", &index.created_at);
    field(&mut out, "Updated At", &index.updated_at);
    out
}

pub fn format_settings(settings: &Settings) -> String {
    let mut out = String::new();
    let line = |out: &mut String, resource: SettingsResource, value: String| {
        field(out, resource.label(), value)
    };

    line(&mut out, SettingsResource::RankingRules, settings.ranking_rules.join(","));
    line(
        &mut out,
        SettingsResource::DistinctAttribute,
        opt(&settings.distinct_attribute).to_string(),
    );
    line(
        &mut out,
        SettingsResource::SearchableAttributes,
        settings.searchable_attributes.join(","),
    );
    line(
        &mut out,
        SettingsResource::DisplayedAttributes,
        settings.displayed_attributes.join(","),
    );
    line(&mut out, SettingsResource::StopWords, settings.stop_words.join(","));
    line(
        &mut out,
        SettingsResource::Synonyms,
        if settings.synonyms.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&settings.synonyms).unwrap_or_default()
        },
    );
    line(
        &mut out,
        SettingsResource::FilterableAttributes,
        settings
            .filterable_attributes
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
    );
    line(
        &mut out,
        SettingsResource::SortableAttributes,
        settings.sortable_attributes.join(","),
    );
    for (resource, value) in [
        (SettingsResource::TypoTolerance, &settings.typo_tolerance),
        (SettingsResource::Pagination, &settings.pagination),
        (SettingsResource::Faceting, &settings.faceting),
        (SettingsResource::Embedders, &settings.embedders),
    ] {
        line(
            &mut out,
            resource,
            value.as_ref().map(display_value).unwrap_or_default(),
        );
    }
    line(
        &mut out,
        SettingsResource::SearchCutoffMs,
        settings
            .search_cutoff_ms
            .map(|ms| ms.to_string())
            .unwrap_or_default(),
    );
    out
}

/// One settings resource as a single labelled line.
pub fn format_setting(resource: SettingsResource, value: &Value) -> String {
    let mut out = String::new();
    field(&mut out, resource.label(), display_value(value));
    out
}

pub fn format_stats(stats: &Stats) -> String {
    let mut out = String::new();
    field(&mut out, "Database Size", format_bytes(stats.database_size));
    field(&mut out, "Last Update", opt(&stats.last_update));
    // BTreeMap keys are already sorted
    let names: Vec<&str> = stats.indexes.keys().map(String::as_str).collect();
    field(&mut out, "Indexes", names.join(","));
    out
}

pub fn format_version(version: &Version) -> String {
    let mut out = String::new();
    field(&mut out, "Version", &version.pkg_version);
    field(&mut out, "Commit SHA", &version.commit_sha);
    field(&mut out, "Commit Date", &version.commit_date);
    out
}

/// Byte count in the largest unit that keeps the value at or above one.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// Render a JSON value for a single line: strings unquoted, arrays of
/// scalars comma joined, everything else compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(is_scalar) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}: {}", label, value);
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
