//! Exit command handler for the assistant shell.
//!
//! Handles exit and close. The handler only produces the farewell; the
//! shell loop itself terminates after dispatching either command.

use super::{CommandArgs, CommandHandler};
use crate::config::Config;
use crate::contacts::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(
        &self,
        _book: &mut AddressBook,
        _config: &Config,
        _args: &CommandArgs,
    ) -> Result<String> {
        Ok("Good bye!".to_string())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "close"
    }
}
