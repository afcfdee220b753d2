//! Hello command handler for the assistant shell.
//!
//! Greets the user; takes no arguments.

use super::{CommandArgs, CommandError, CommandHandler};
use crate::config::Config;
use crate::contacts::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct HelloHandler;

impl CommandHandler for HelloHandler {
    fn execute(
        &self,
        _book: &mut AddressBook,
        _config: &Config,
        args: &CommandArgs,
    ) -> Result<String> {
        if !args.args.is_empty() {
            return Err(CommandError::WrongArgumentCount(
                "\"hello\" doesn't need arguments".to_string(),
            )
            .into());
        }
        Ok("How can I help you?".to_string())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "hello"
    }
}
