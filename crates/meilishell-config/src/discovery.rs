//! Config file discovery and layered merging.
//!
//! Resolution order (later overrides earlier):
//! 1. `<config dir>/config.toml` (user config)
//! 2. `./meilishell.toml` (project-local)
//! 3. CLI arguments and environment (handled by the binary)

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{ConfigError, DEFAULT_TIMEOUT_SECS, Result, ShellConfig};

/// Default config filename for project-local config.
const PROJECT_CONFIG_FILE: &str = "meilishell.toml";

/// Default config filename within the user config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for directory resolution.
const APP_NAME: &str = "meilishell";

/// Environment variable to override the config directory.
pub const CONFIG_DIR_ENV: &str = "MEILISHELL_CONFIG_DIR";

/// Tracks where each config layer was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found and loaded.
    pub loaded: bool,
}

/// Result of config discovery and loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: ShellConfig,
    /// User config directory that was used, if one could be resolved.
    pub config_dir: Option<PathBuf>,
    /// Sources that were checked, in order of precedence (lowest first).
    pub sources: Vec<ConfigSource>,
    /// Warnings generated during loading (bad files, plaintext keys).
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Get paths of sources that were actually loaded.
    pub fn loaded_from(&self) -> Vec<&Path> {
        self.sources
            .iter()
            .filter(|s| s.loaded)
            .map(|s| s.path.as_path())
            .collect()
    }
}

/// Load configuration by discovering and merging all config layers.
///
/// `config_dir` overrides both `MEILISHELL_CONFIG_DIR` and the platform default.
pub fn load_config_with_options(
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut config = ShellConfig::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();

    // 1. User config: explicit override, then env var, then platform default
    let config_dir = match config_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => xdg_config_dir(),
    };
    if let Some(dir) = &config_dir {
        let source = load_layer(&mut config, &dir.join(USER_CONFIG_FILE), &mut warnings)?;
        sources.push(source);
    }

    // 2. Project-local config
    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    let source = load_layer(&mut config, &project_path, &mut warnings)?;
    sources.push(source);

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(LoadedConfig {
        config,
        config_dir,
        sources,
        warnings,
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ShellConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    ShellConfig::from_toml(&contents)
}

/// Get the user config directory.
///
/// Checks `MEILISHELL_CONFIG_DIR` first, then falls back to the platform
/// default (`~/.config/meilishell` on Linux).
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Try to load a config file and merge it into the existing config.
fn load_layer(
    config: &mut ShellConfig,
    path: &Path,
    warnings: &mut Vec<String>,
) -> Result<ConfigSource> {
    if !path.is_file() {
        return Ok(ConfigSource {
            path: path.to_path_buf(),
            loaded: false,
        });
    }

    match load_config_file(path) {
        Ok(layer) => {
            if layer.has_plaintext_api_key() {
                warnings.push(format!(
                    "{} contains a plaintext api_key. \
                     Consider setting MEILISHELL_API_KEY instead.",
                    path.display()
                ));
            }
            if layer.connection.as_ref().and_then(|c| c.timeout_secs) == Some(0) {
                warnings.push(format!(
                    "{} sets timeout_secs = 0, using the default of {} seconds",
                    path.display(),
                    DEFAULT_TIMEOUT_SECS
                ));
            }
            config.merge(layer);
            Ok(ConfigSource {
                path: path.to_path_buf(),
                loaded: true,
            })
        }
        Err(e) => {
            warnings.push(format!("Failed to load {}: {}", path.display(), e));
            Ok(ConfigSource {
                path: path.to_path_buf(),
                loaded: false,
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
