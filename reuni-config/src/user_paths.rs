use std::path::PathBuf;

use reuni_core::error::{ReuniError, Result};

/// Directory holding the reuni settings file and the login token.
pub fn reuni_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".reuni"))
        .ok_or_else(|| ReuniError::Config("Failed to get home directory".to_string()))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(reuni_dir()?.join("config.yaml"))
}

pub fn default_token_path() -> Result<PathBuf> {
    Ok(reuni_dir()?.join("token"))
}
