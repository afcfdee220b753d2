//! Command parsing, dispatch, and error translation for the shell.

use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::fmt::Debug;

use crate::config::Config;
use crate::contacts::{AddressBook, ContactError};

pub mod birthday_handler;
pub mod contact_handler;
pub mod exit_handler;
pub mod hello_handler;

/// Command line arguments structure
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Split an input line into a lower-cased command token and its
    /// arguments. Argument case is preserved: contact names are
    /// case-sensitive.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace().map(str::to_string);
        let command = tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("No command provided"))?
            .to_lowercase();
        Ok(Self { command, args: tokens.collect() })
    }
}

/// Classified, user-recoverable command failures. Anything outside this
/// set ends the session.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed values, or wrong argument shape on mutating commands.
    #[error("{0}")]
    InvalidArguments(String),
    /// Arity errors on query commands and no-argument commands.
    #[error("{0}")]
    WrongArgumentCount(String),
    /// Lookup of a contact that was never added.
    #[error("{0}")]
    ContactNotFound(String),
}

impl CommandError {
    fn color(&self) -> colored::Color {
        match self {
            CommandError::InvalidArguments(_) | CommandError::WrongArgumentCount(_) => {
                colored::Color::Red
            }
            CommandError::ContactNotFound(_) => colored::Color::Yellow,
        }
    }

    /// Render with the severity color the shell shows for this category.
    pub fn render(&self) -> String {
        self.to_string().color(self.color()).to_string()
    }
}

impl From<ContactError> for CommandError {
    fn from(err: ContactError) -> Self {
        CommandError::InvalidArguments(err.to_string())
    }
}

pub trait CommandHandler: Debug {
    fn execute(
        &self,
        book: &mut AddressBook,
        config: &Config,
        args: &CommandArgs,
    ) -> Result<String>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(hello_handler::HelloHandler),
            Box::new(contact_handler::ContactHandler),
            Box::new(birthday_handler::BirthdayHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    /// Dispatch `args` to the first handler that claims the command.
    ///
    /// Classified failures come back as `Ok(Some(colored message))`;
    /// unknown commands as `Ok(None)`, ignored without output; anything
    /// else propagates and ends the session.
    pub fn execute(
        &self,
        book: &mut AddressBook,
        config: &Config,
        args: &CommandArgs,
    ) -> Result<Option<String>> {
        debug!("Attempting to execute command: {}", args.command);
        for handler in &self.handlers {
            if handler.can_handle(&args.command) {
                return match handler.execute(book, config, args) {
                    Ok(output) => Ok(Some(output)),
                    Err(err) => match err.downcast::<CommandError>() {
                        Ok(classified) => Ok(Some(classified.render())),
                        Err(unclassified) => Err(unclassified),
                    },
                };
            }
        }
        debug!("Ignoring unrecognized command: {}", args.command);
        Ok(None)
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}
