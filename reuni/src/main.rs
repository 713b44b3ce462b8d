// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use reuni_core::error::ReuniError;
use reuni_core::{reuni_error, reuni_println, tracing_init};
use reuni_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod commands;
mod display;
mod editor;

use cli::Args;
use commands::execute_command;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    if let Err(e) = tracing_init::init_with_defaults(default_filter) {
        reuni_error!("{}", e);
    }
    debug!(command = ?args.command, "Starting reuni command");

    if let Err(e) = execute_command(args).await {
        match e {
            // Validation messages are the whole user-facing answer.
            ReuniError::Validation(message) => reuni_println!("{}", message),
            other => reuni_error!("{}", msg!(MESSAGES.error_generic, error = other.to_string())),
        }
        std::process::exit(1);
    }
}
