//! Interactive editing of a fetched configuration.
//!
//! The session runs three phases in order (edit, delete, add) on a local
//! copy of the mapping. Nothing is sent to the service until the caller
//! submits the result.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use reuni_client::ConfigurationMap;
use reuni_core::error::{ReuniError, Result};
use reuni_core::reuni_println;
use reuni_messages::MESSAGES;

/// Source of operator answers for the edit session.
pub trait Prompter {
    /// Show `prompt` and return one line of input without its line terminator.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    fn say(&mut self, message: &str) -> Result<()>;
}

/// Plain line-oriented prompter for piped stdin and scripted sessions.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ReuniError::Input(MESSAGES.error_input_closed.to_string()));
        }

        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

/// Terminal prompter built on dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ReuniError::Input(e.to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        reuni_println!("{}", message);
        Ok(())
    }
}

/// Run the edit, delete and add phases against `configuration`.
pub fn edit_configuration<P>(configuration: &mut ConfigurationMap, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    edit_existing_keys(configuration, prompter)?;
    delete_keys(configuration, prompter)?;
    add_keys(configuration, prompter)
}

fn edit_existing_keys<P>(configuration: &mut ConfigurationMap, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    loop {
        if prompter.ask(MESSAGES.prompt_edit_key)?.eq_ignore_ascii_case("N") {
            return Ok(());
        }

        let key = prompter.ask(MESSAGES.prompt_which_key)?;
        if configuration.contains_key(&key) {
            let value = prompter.ask(MESSAGES.prompt_new_value)?;
            configuration.insert(key, value);
        } else {
            prompter.say(MESSAGES.config_key_not_found)?;
        }
    }
}

fn delete_keys<P>(configuration: &mut ConfigurationMap, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    loop {
        if prompter.ask(MESSAGES.prompt_delete_key)?.eq_ignore_ascii_case("n") {
            return Ok(());
        }

        let key = prompter.ask(MESSAGES.prompt_which_key)?;
        if configuration.shift_remove(&key).is_none() {
            prompter.say(MESSAGES.config_key_not_found)?;
        }
    }
}

fn add_keys<P>(configuration: &mut ConfigurationMap, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    loop {
        if prompter.ask(MESSAGES.prompt_add_key)?.eq_ignore_ascii_case("n") {
            return Ok(());
        }

        let key = loop {
            let key = prompter.ask(MESSAGES.prompt_key)?;
            if !key.is_empty() {
                break key;
            }
        };
        let value = prompter.ask(MESSAGES.prompt_value)?;
        configuration.insert(key, value);
    }
}
