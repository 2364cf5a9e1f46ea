use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::store::ViewMode;

/// Where the configuration came from, for the startup log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was absent; built-in defaults were used.
    Defaults(PathBuf),
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "userdesk", version, about = "Browse and edit a user directory in the terminal")]
pub struct Args {
    /// Path to the config file (default: ~/.config/userdesk/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the users endpoint
    #[arg(long, value_name = "URL")]
    pub users_url: Option<String>,

    /// Initial layout
    #[arg(long, value_enum, value_name = "MODE")]
    pub view: Option<ViewMode>,

    /// Hide alerts automatically after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub auto_dismiss_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// `--config`, or the platform default location.
    pub fn config_file(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn config_source(&self) -> ConfigSource {
        let path = self.config_file();
        if path.exists() {
            ConfigSource::File(path)
        } else {
            ConfigSource::Defaults(path)
        }
    }

    /// Read the config file, apply CLI overrides on top, then validate the
    /// merged result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::read_from(&self.config_file())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.users_url {
            config.api.users_url = url.clone();
        }
        if let Some(view) = self.view {
            config.ui.default_view_mode = view;
        }
        if let Some(ms) = self.auto_dismiss_ms {
            config.ui.alert_auto_dismiss_ms = Some(ms);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
