//! Configuration command handlers
//!
//! Every handler reads the service through [`ConfigurationClient`] and writes
//! to the console itself. Read failures degrade the way operators expect
//! from this tool: an unresolvable latest version becomes `0`, a failed fetch
//! shows an empty configuration, and commands that would write stop instead
//! of submitting a mapping they never read.

use std::io::{self, IsTerminal};

use reuni_client::{ConfigurationClient, ConfigurationMap, ConfigurationVersion, Scope, SubmitOutcome};
use reuni_core::error::{ReuniError, Result};
use reuni_core::{reuni_error, reuni_println};
use reuni_messages::{msg, MESSAGES};
use tracing::{debug, warn};

use crate::cli::{ConfigurationArgs, ConfigurationSubcommand};
use crate::display;
use crate::editor::{self, LinePrompter, Prompter, TerminalPrompter};

/// Handle one configuration subcommand for an already validated scope
pub async fn handle_configuration_command(
    client: &ConfigurationClient,
    scope: &Scope,
    flags: &ConfigurationArgs,
    command: &ConfigurationSubcommand,
) -> Result<()> {
    match command {
        ConfigurationSubcommand::List => handle_list(client, scope).await,
        ConfigurationSubcommand::Show => handle_show(client, scope, flags.versions).await,
        ConfigurationSubcommand::Set => handle_set(client, scope, &flags.key, &flags.value).await,
        ConfigurationSubcommand::Unset => handle_unset(client, scope, &flags.key).await,
        ConfigurationSubcommand::Update => match &flags.configurations {
            Some(raw) => {
                let changes = parse_configurations(raw)?;
                handle_update(client, scope, |configuration| {
                    configuration.extend(changes);
                    Ok(())
                })
                .await
            }
            None => {
                let mut prompter = stdin_prompter();
                handle_update(client, scope, |configuration| {
                    editor::edit_configuration(configuration, prompter.as_mut())
                })
                .await
            }
        },
    }
}

/// Print every version stored for the scope
async fn handle_list(client: &ConfigurationClient, scope: &Scope) -> Result<()> {
    let versions = match client.list_versions(scope).await {
        Ok(versions) => versions,
        Err(e) => {
            reuni_error!("{}", e);
            return Ok(());
        }
    };

    reuni_println!(
        "{}",
        display::version_list(&scope.service, &scope.namespace, &versions)
    );
    Ok(())
}

/// Print one version; a requested version below 1 means the latest
async fn handle_show(client: &ConfigurationClient, scope: &Scope, requested: i64) -> Result<()> {
    let version = if requested < 1 {
        resolve_latest(client, scope).await
    } else {
        requested
    };

    let current = match client.fetch_configuration(scope, version).await {
        Ok(current) => current,
        Err(e) => {
            reuni_error!("{}", e);
            ConfigurationVersion::default()
        }
    };

    print_configuration(scope, &current);
    Ok(())
}

async fn handle_set(client: &ConfigurationClient, scope: &Scope, key: &str, value: &str) -> Result<()> {
    let Some(current) = fetch_latest(client, scope).await else {
        return Ok(());
    };

    let mut configuration = current.configuration;
    configuration.insert(key.to_string(), value.to_string());
    submit(client, scope, &configuration).await;
    Ok(())
}

/// Remove `key`; a configuration that could not be fetched has no keys.
async fn handle_unset(client: &ConfigurationClient, scope: &Scope, key: &str) -> Result<()> {
    let Some(current) = fetch_latest(client, scope).await else {
        reuni_println!("{}", MESSAGES.config_key_not_found);
        return Ok(());
    };

    let mut configuration = current.configuration;
    if configuration.shift_remove(key).is_none() {
        reuni_println!("{}", MESSAGES.config_key_not_found);
        return Ok(());
    }

    submit(client, scope, &configuration).await;
    Ok(())
}

/// Show the latest configuration, let `edit` change a local copy, then
/// submit the whole result even when nothing changed.
async fn handle_update<F>(client: &ConfigurationClient, scope: &Scope, edit: F) -> Result<()>
where
    F: FnOnce(&mut ConfigurationMap) -> Result<()>,
{
    let Some(current) = fetch_latest(client, scope).await else {
        return Ok(());
    };
    print_configuration(scope, &current);

    let mut configuration = current.configuration;
    edit(&mut configuration)?;

    reuni_println!("{}", MESSAGES.config_sending);
    reuni_println!("{}", display::key_value_table(&configuration));
    submit(client, scope, &configuration).await;
    Ok(())
}

/// Latest version number, or `0` after printing why it could not be resolved.
///
/// `0` is also what a caller sees when the scope has no versions at all.
async fn resolve_latest(client: &ConfigurationClient, scope: &Scope) -> i64 {
    match client.latest_version(scope).await {
        Ok(version) => version,
        Err(e) => {
            reuni_error!("{}", e);
            warn!(scope = %scope.path(), "latest version unavailable, using 0");
            0
        }
    }
}

/// Configuration of the latest version, or `None` after printing the failure.
async fn fetch_latest(client: &ConfigurationClient, scope: &Scope) -> Option<ConfigurationVersion> {
    let version = resolve_latest(client, scope).await;
    match client.fetch_configuration(scope, version).await {
        Ok(current) => {
            debug!(version = current.version, keys = current.configuration.len(), "fetched configuration");
            Some(current)
        }
        Err(e) => {
            reuni_error!("{}", e);
            None
        }
    }
}

async fn submit(client: &ConfigurationClient, scope: &Scope, configuration: &ConfigurationMap) {
    match client.submit_configuration(scope, configuration).await {
        Ok(SubmitOutcome::Created) => reuni_println!("{}", MESSAGES.config_created),
        Ok(SubmitOutcome::Rejected { status, message }) => reuni_println!(
            "{}",
            msg!(MESSAGES.config_http_error, status = status, message = message)
        ),
        Err(e) => reuni_error!("{}", e),
    }
}

fn print_configuration(scope: &Scope, current: &ConfigurationVersion) {
    reuni_println!(
        "{}",
        display::header(&scope.service, &scope.namespace, current.version)
    );
    reuni_println!("{}", display::key_value_table(&current.configuration));
}

/// Parse `--configurations` as a JSON object of string values.
fn parse_configurations(raw: &str) -> Result<ConfigurationMap> {
    serde_json::from_str(raw).map_err(|e| {
        ReuniError::Validation(msg!(
            MESSAGES.config_invalid_configurations,
            error = e.to_string()
        ))
    })
}

fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
