// ABOUTME: Configuration types and parsing for tntbox.yml.
// ABOUTME: Handles YAML parsing, discovery, env overrides and credential lookup.

mod env_value;
mod init;

pub use env_value::EnvValue;
pub use init::init_config;

use crate::error::{Error, Result};
use crate::types::{Password, Username};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "tntbox.yml";
pub const CONFIG_FILENAME_ALT: &str = "tntbox.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".tntbox/config.yml";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TNTBOX_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-call timeout; calls wait indefinitely when unset.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// User targeted by `su` when the caller names none.
    #[serde(default)]
    pub default_user: Option<Username>,

    /// Passwords by user name.
    #[serde(default)]
    pub credentials: BTreeMap<String, EnvValue>,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find a config file in `dir`, trying each known name in turn.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Load from `TNTBOX_CONFIG` when set, otherwise discover in `dir`.
    /// A missing config is not an error here; defaults apply.
    pub fn resolve(dir: &Path) -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(&PathBuf::from(path));
        }

        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// The named user, or the configured default.
    pub fn username_or_default(&self, name: Option<&str>) -> Result<Username> {
        match name {
            Some(name) => Ok(Username::new(name)?),
            None => self.default_user.clone().ok_or(Error::MissingUsername),
        }
    }

    /// Resolve the password configured for `user`.
    pub fn credential(&self, user: &str) -> Result<Password> {
        let value = self
            .credentials
            .get(user)
            .ok_or_else(|| Error::UnknownCredential(user.to_string()))?;
        value.resolve(user)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::InvalidConfig("timeout must be greater than zero".into()));
        }

        for user in self.credentials.keys() {
            Username::new(user)
                .map_err(|e| Error::InvalidConfig(format!("credentials key {user:?}: {e}")))?;
        }

        Ok(())
    }
}
