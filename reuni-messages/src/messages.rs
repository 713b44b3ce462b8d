//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `error_*` - Failures reported before or instead of a command
//! - `scope_*` - Scope flag validation
//! - `config_*` - Configuration command output
//! - `prompt_*` - Interactive edit loop prompts
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct Messages {
    // ============================================================================
    // Error Messages
    // ============================================================================
    pub error_generic: &'static str,
    pub error_input_closed: &'static str,
    pub error_token_missing: &'static str,

    // ============================================================================
    // Scope Validation
    // ============================================================================
    pub scope_invalid_organization: &'static str,
    pub scope_invalid_service: &'static str,
    pub scope_invalid_namespace: &'static str,

    // ============================================================================
    // Configuration Commands
    // ============================================================================
    pub config_created: &'static str,
    pub config_http_error: &'static str,
    pub config_invalid_configurations: &'static str,
    pub config_key_not_found: &'static str,
    pub config_sending: &'static str,

    // ============================================================================
    // Interactive Edit Loop
    // ============================================================================
    pub prompt_add_key: &'static str,
    pub prompt_delete_key: &'static str,
    pub prompt_edit_key: &'static str,
    pub prompt_key: &'static str,
    pub prompt_new_value: &'static str,
    pub prompt_value: &'static str,
    pub prompt_which_key: &'static str,
}

pub const MESSAGES: Messages = Messages {
    // Errors
    error_generic: "Error: {error}",
    error_input_closed: "input closed before the edit session finished",
    error_token_missing: "Please login first",

    // Scope
    scope_invalid_organization: "Invalid Organization",
    scope_invalid_service: "Invalid Service",
    scope_invalid_namespace: "Invalid Namespace",

    // Configuration
    config_created: "New Configuration Created",
    config_http_error: "HTTP Error {status}: {message}",
    config_invalid_configurations: "Invalid configurations: {error}",
    config_key_not_found: "key not found!",
    config_sending: "sending new data",

    // Prompts
    prompt_add_key: "Do you want to add a key (Y/N)",
    prompt_delete_key: "Do you want to delete a key (Y/N)",
    prompt_edit_key: "Do you want to edit a key (Y/N)",
    prompt_key: "Key",
    prompt_new_value: "New Value",
    prompt_value: "Value",
    prompt_which_key: "Which key",
};
