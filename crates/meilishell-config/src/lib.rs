//! Configuration for meilishell.
//!
//! Provides TOML-based configuration with:
//! - Connection defaults (`[connection]`: host, API key, timeout)
//! - History settings (`[history]`)
//! - Config file layering (user config dir + project-local override)
//!
//! Command-line flags and environment variables take precedence over
//! anything loaded here; that last step happens in the binary.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    CONFIG_DIR_ENV, ConfigSource, LoadedConfig, load_config_file, load_config_with_options,
    xdg_config_dir,
};
pub use error::{ConfigError, Result};
pub use types::*;
