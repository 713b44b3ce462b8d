//! Settings that locate the configuration service and the login token.

use std::path::{Path, PathBuf};

use reuni_core::error::{ReuniError, Result};
use reuni_messages::MESSAGES;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::user_paths;

/// Service endpoint used when neither the settings file nor the
/// environment names one.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Overrides `server_url`.
pub const SERVER_URL_ENV: &str = "REUNI_SERVER_URL";

/// Supplies the bearer token directly, bypassing the token file.
pub const TOKEN_ENV: &str = "REUNI_TOKEN";

/// Root structure of `~/.reuni/config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the configuration service
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// File holding the login token; `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path: Option<String>,

    #[serde(skip)]
    token: Option<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            token_path: None,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Load settings from `path`, or from `~/.reuni/config.yaml` when no
    /// path is given, then apply environment overrides.
    ///
    /// A missing default file yields the defaults. An explicitly named file
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let default_path = user_paths::config_path()?;
                if default_path.exists() {
                    Self::load_from_path(&default_path)?
                } else {
                    debug!("No settings file at {}, using defaults", default_path.display());
                    Self::default()
                }
            }
        };

        Ok(config.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Load settings from a specific path without environment overrides
    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReuniError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.server_url = url;
        }
        if let Some(token) = lookup(TOKEN_ENV) {
            self.token = Some(token);
        }
        self
    }

    /// Base URL without a trailing slash, ready for path joins.
    pub fn base_url(&self) -> &str {
        self.server_url.trim().trim_end_matches('/')
    }

    /// Where the login token is read from when no token override is set.
    pub fn token_file(&self) -> Result<PathBuf> {
        match &self.token_path {
            Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).as_ref())),
            None => user_paths::default_token_path(),
        }
    }

    /// Resolve the bearer token from the environment override or the token
    /// file. An empty token counts as missing.
    pub fn resolve_token(&self) -> Result<String> {
        let token = match &self.token {
            Some(token) => token.trim().to_string(),
            None => {
                let path = self.token_file()?;
                debug!("Reading token from {}", path.display());
                match std::fs::read_to_string(&path) {
                    Ok(contents) => contents.trim().to_string(),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                    Err(e) => return Err(e.into()),
                }
            }
        };

        if token.is_empty() {
            return Err(ReuniError::Config(MESSAGES.error_token_missing.to_string()));
        }
        Ok(token)
    }
}
