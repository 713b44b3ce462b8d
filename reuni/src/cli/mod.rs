// CLI argument parsing and definitions

use clap::{Args as ClapArgs, Parser, Subcommand};
use reuni_client::Scope;
use reuni_core::error::{ReuniError, Result};
use reuni_messages::MESSAGES;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "reuni")]
#[command(about = "Manage versioned configuration of your services")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom reuni settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage Configuration of your namespace
    #[command(
        long_about = "Manage Configuration of your namespace. Organization, service and namespace name are required"
    )]
    Configuration {
        #[command(flatten)]
        flags: ConfigurationArgs,

        #[command(subcommand)]
        command: Option<ConfigurationSubcommand>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigurationSubcommand {
    /// Display version list of configuration
    List,
    /// Display detail of configuration
    Show,
    /// Update configuration interactively, or from --configurations
    Update,
    /// Set one configuration key
    Set,
    /// Remove one configuration key
    Unset,
}

/// Flags shared by every configuration subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ConfigurationArgs {
    /// Your organization name
    #[arg(short = 'o', long, global = true, default_value = "")]
    pub organization: String,

    /// Your service name
    #[arg(short = 's', long, global = true, default_value = "")]
    pub service: String,

    /// Your namespace name
    #[arg(short = 'n', long, global = true, default_value = "")]
    pub namespace: String,

    /// Your configurations, as a JSON object of string values
    #[arg(short = 'c', long, global = true)]
    pub configurations: Option<String>,

    /// Version
    #[arg(
        short = 'v',
        long = "versions",
        global = true,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub versions: i64,

    /// Configuration key
    #[arg(long, global = true, default_value = "")]
    pub key: String,

    /// Configuration value
    #[arg(long, global = true, default_value = "")]
    pub value: String,
}

impl ConfigurationArgs {
    /// The resource path named by the flags. Every segment must be non-empty.
    pub fn scope(&self) -> Result<Scope> {
        if self.organization.is_empty() {
            return Err(ReuniError::Validation(
                MESSAGES.scope_invalid_organization.to_string(),
            ));
        }
        if self.service.is_empty() {
            return Err(ReuniError::Validation(
                MESSAGES.scope_invalid_service.to_string(),
            ));
        }
        if self.namespace.is_empty() {
            return Err(ReuniError::Validation(
                MESSAGES.scope_invalid_namespace.to_string(),
            ));
        }

        Ok(Scope::new(
            self.organization.as_str(),
            self.service.as_str(),
            self.namespace.as_str(),
        ))
    }
}
