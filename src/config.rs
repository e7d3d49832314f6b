use config::{Config, ConfigError, File};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shell::TemplateRegistry;

/// Defaults for the `comphook` command line.
///
/// Every key can be overridden per invocation with the matching flag.
///
/// # Examples
///
/// ```toml
/// # Shell to generate hooks for when --shell is not given.
/// # Without this, the shell is detected from $SHELL.
/// shell = "zsh"
///
/// # Generate hooks that dispatch to any program passed as $1
/// multiple = false
/// ```
///
/// Config file location:
/// - Linux/macOS: `~/.config/comphook/config.toml` (respects `XDG_CONFIG_HOME`)
/// - Windows: `%APPDATA%\comphook\config.toml`
///
/// Environment variables: `COMPHOOK_SHELL`, `COMPHOOK_MULTIPLE`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComphookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    #[serde(default)]
    pub multiple: bool,
}

impl ComphookConfig {
    /// Load configuration from config file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Config file (see [`get_config_path`])
    /// 3. Environment variables (COMPHOOK_*)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(get_config_path().as_deref())
    }

    /// Load using an explicit config file path instead of the user's.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("multiple", false)?;

        if let Some(config_path) = config_path
            && config_path.exists()
        {
            log::debug!("Loading config from {}", config_path.display());
            builder = builder.add_source(File::from(config_path));
        }

        builder = builder.add_source(config::Environment::with_prefix("COMPHOOK"));

        let config: Self = builder.build()?.try_deserialize()?;
        if let Some(shell) = &config.shell {
            validate_shell(shell)?;
        }
        Ok(config)
    }
}

/// Path of the user's config file, whether or not it exists.
pub fn get_config_path() -> Option<PathBuf> {
    choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join("comphook").join("config.toml"))
}

fn validate_shell(shell: &str) -> Result<(), ConfigError> {
    let registry = TemplateRegistry::global();
    if registry.contains(shell) {
        return Ok(());
    }

    Err(ConfigError::Message(format!(
        "shell must be one of {}, got {shell:?}",
        registry.shell_types().join(", ")
    )))
}
