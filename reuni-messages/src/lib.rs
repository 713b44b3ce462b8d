//! reuni-messages
//!
//! Centralized messaging system for the reuni CLI.
//! Provides the user-facing templates and a small builder for
//! `{variable}` substitution.

pub mod builder;
pub mod macros;
pub mod messages;

pub use builder::MessageBuilder;
pub use messages::{Messages, MESSAGES};
