use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::util::log::project_directory;

pub const CONFIG_PATH_ENV: &str = "SAAVN_CONFIG_PATH";

impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path())
    }

    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SAAVN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.limit == 0 {
            return Err("api.limit must be >= 1".to_string());
        }
        if self.player.tick_interval_ms == 0 {
            return Err("player.tick_interval_ms must be >= 1".to_string());
        }
        if self.player.volume > 100 {
            return Err("player.volume must be <= 100".to_string());
        }
        Ok(())
    }
}

/// `SAAVN_CONFIG_PATH` if set, otherwise the platform config directory.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join("config.toml"))
}
