//! Tab completion derived from the command tree.

use clap::{Command, CommandFactory};
use meilishell_client::SettingsResource;

use super::command::ShellLine;

/// Completes subcommands, long flags and settings resource names.
pub struct ShellCompleter {
    root: Command,
}

impl ShellCompleter {
    pub fn new() -> Self {
        let mut root = ShellLine::command();
        // Adds the generated `help` subcommand and `--help` flags.
        root.build();
        Self { root }
    }

    /// Completion for the last word of `line`: the byte offset where the
    /// word starts and the sorted candidates that extend it.
    pub fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let start = line
            .char_indices()
            .rfind(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let prefix = &line[start..];
        let words: Vec<&str> = line[..start].split_whitespace().collect();

        let mut node = &self.root;
        let mut path = Vec::new();
        for word in &words {
            match node.find_subcommand(word) {
                Some(child) => {
                    path.push(child.get_name());
                    node = child;
                }
                None => break,
            }
        }

        let mut found: Vec<String> = if prefix.starts_with('-') {
            node.get_arguments()
                .filter(|arg| !arg.is_hide_set())
                .filter_map(|arg| arg.get_long())
                .map(|long| format!("--{}", long))
                .filter(|flag| flag.starts_with(prefix))
                .collect()
        } else if words.len() == 3 && is_settings_leaf(&path) {
            SettingsResource::names()
                .filter(|name| name.starts_with(prefix))
                .map(str::to_string)
                .collect()
        } else if path.len() == words.len() {
            node.get_subcommands()
                .filter(|sub| !sub.is_hide_set())
                .flat_map(|sub| std::iter::once(sub.get_name()).chain(sub.get_visible_aliases()))
                .filter(|name| name.starts_with(prefix))
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        found.sort();
        found.dedup();
        (start, found)
    }
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_settings_leaf(path: &[&str]) -> bool {
    matches!(path, ["index", "settings", "get" | "reset" | "update"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(line: &str) -> Vec<String> {
        ShellCompleter::new().candidates(line).1
    }

    #[test]
    fn test_top_level_commands() {
        let all = complete("");
        for name in ["health", "index", "key", "task", "connect", "exit", "help"] {
            assert!(all.iter().any(|c| c == name), "missing {name}");
        }
        assert_eq!(complete("st"), vec!["stats"]);
    }

    #[test]
    fn test_child_commands() {
        assert_eq!(complete("index s"), vec!["settings", "swap"]);
        assert_eq!(complete("index settings "), vec!["get", "help", "reset", "update"]);
    }

    #[test]
    fn test_flags_of_resolved_node() {
        assert_eq!(complete("index create movies --p"), vec!["--primary-key"]);
        let flags = complete("key create --");
        assert!(flags.contains(&"--expire-at".to_string()));
        assert!(flags.contains(&"--help".to_string()));
    }

    #[test]
    fn test_settings_resources() {
        assert_eq!(
            complete("index settings get s"),
            vec!["search-cutoff-ms", "searchable-attributes", "sortable-attributes", "stop-words", "synonyms"]
        );
        // Second positional is the index uid, nothing to offer.
        assert!(complete("index settings get stop-words m").is_empty());
    }

    #[test]
    fn test_start_offset() {
        let (start, _) = ShellCompleter::new().candidates("index li");
        assert_eq!(start, 6);
    }

    #[test]
    fn test_multibyte_whitespace_separates_words() {
        let line = "index\u{3000}li";
        let (start, found) = ShellCompleter::new().candidates(line);
        assert_eq!(start, "index\u{3000}".len());
        assert_eq!(found, vec!["list"]);
    }

    #[test]
    fn test_unknown_path_offers_nothing() {
        assert!(complete("frobnicate x").is_empty());
    }
}
