//! Optional TOML configuration for the `file-helper` binary.
//!
//! ```toml
//! working_directory = "/srv/project"
//! root_dir = "/srv/project"
//! temp_dir = "/var/tmp/phpstan"
//! path_style = "posix"
//! ```
//!
//! Every key is optional. `PHPSTAN_TEMP_DIR` takes precedence over
//! `temp_dir`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::file::{FileHelper, PathStyle, TempDirOverride};

/// Errors returned when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub working_directory: Option<String>,
    pub root_dir: Option<String>,
    pub temp_dir: Option<String>,
    pub path_style: Option<PathStyle>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn style(&self) -> PathStyle {
        self.path_style.unwrap_or_default()
    }

    /// Build a `FileHelper`, falling back to `default_cwd` when no working
    /// directory is configured.
    pub fn file_helper(&self, default_cwd: &str) -> FileHelper {
        let wd = self.working_directory.as_deref().unwrap_or(default_cwd);
        FileHelper::new(wd, self.style())
    }

    /// The temp override in effect: `env_value` (normally the contents of
    /// `PHPSTAN_TEMP_DIR`) wins over the configured `temp_dir`.
    pub fn temp_override(&self, env_value: Option<TempDirOverride>) -> Option<TempDirOverride> {
        env_value.or_else(|| self.temp_dir.as_deref().and_then(TempDirOverride::new))
    }
}
