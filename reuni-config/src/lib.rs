//! Client-side settings for the reuni CLI.
//!
//! The settings file lives at `~/.reuni/config.yaml` and only says where
//! the configuration service is and where the login token is stored.
//! Environment variables take precedence over the file.

pub mod client_config;
pub mod user_paths;

pub use client_config::{ClientConfig, DEFAULT_SERVER_URL, SERVER_URL_ENV, TOKEN_ENV};
