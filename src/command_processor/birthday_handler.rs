//! Birthday command handler for the assistant shell.
//!
//! Handles add-birthday, show-birthday, and the upcoming birthdays
//! listing.

use super::{CommandArgs, CommandError, CommandHandler};
use crate::config::Config;
use crate::contacts::{AddressBook, BIRTHDAY_FORMAT};
use anyhow::{anyhow, Result};
use chrono::Local;

#[derive(Debug)]
pub struct BirthdayHandler;

impl CommandHandler for BirthdayHandler {
    fn execute(
        &self,
        book: &mut AddressBook,
        config: &Config,
        args: &CommandArgs,
    ) -> Result<String> {
        match args.command.as_str() {
            "add-birthday" => add_birthday(book, &args.args),
            "show-birthday" => show_birthday(book, &args.args),
            "birthdays" => birthdays(book, config, &args.args),
            other => Err(anyhow!("unsupported birthday command: {}", other)),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add-birthday" | "show-birthday" | "birthdays")
    }
}

fn add_birthday(book: &mut AddressBook, args: &[String]) -> Result<String> {
    if args.len() != 2 {
        return Err(CommandError::InvalidArguments(
            "Incorrect number of arguments. Please try \"add-birthday <name> <DD.MM.YYYY>\""
                .to_string(),
        )
        .into());
    }
    let (name, birthday) = (&args[0], &args[1]);
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday).map_err(CommandError::from)?;
            Ok("Contact updated.".to_string())
        }
        None => Err(CommandError::ContactNotFound("Contact doesn't exist".to_string()).into()),
    }
}

fn show_birthday(book: &AddressBook, args: &[String]) -> Result<String> {
    if args.len() != 1 {
        return Err(CommandError::WrongArgumentCount(
            "Incorrect number of arguments. Please try \"show-birthday <name>\"".to_string(),
        )
        .into());
    }
    let name = &args[0];
    match book.find(name) {
        Some(record) => Ok(match record.birthday() {
            Some(date) => date.format(BIRTHDAY_FORMAT).to_string(),
            None => format!("{} doesn't have birthday set", name),
        }),
        None => Err(CommandError::ContactNotFound("Contact doesn't exist".to_string()).into()),
    }
}

fn birthdays(book: &AddressBook, config: &Config, args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Err(CommandError::WrongArgumentCount(
            "\"birthdays\" doesn't need arguments".to_string(),
        )
        .into());
    }
    let today = Local::now().date_naive();
    let mut listing = String::new();
    for entry in book.upcoming_birthdays(config.birthdays.window_days, today) {
        let congratulation = entry.congratulation_date.format(BIRTHDAY_FORMAT).to_string();
        listing.push_str(&format!("{:<20}{:<20}\n", entry.name, congratulation));
    }
    Ok(listing)
}
