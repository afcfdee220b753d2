//! Contact command handler for the assistant shell.
//!
//! Handles add, change, phone, and all.

use super::{CommandArgs, CommandError, CommandHandler};
use crate::config::Config;
use crate::contacts::{AddressBook, Record, BIRTHDAY_FORMAT};
use anyhow::{anyhow, Result};
use log::debug;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(
        &self,
        book: &mut AddressBook,
        _config: &Config,
        args: &CommandArgs,
    ) -> Result<String> {
        match args.command.as_str() {
            "add" => add_contact(book, &args.args),
            "change" => change_contact(book, &args.args),
            "phone" => get_phone(book, &args.args),
            "all" => get_all(book, &args.args),
            other => Err(anyhow!("unsupported contact command: {}", other)),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "all")
    }
}

fn add_contact(book: &mut AddressBook, args: &[String]) -> Result<String> {
    if args.len() != 2 {
        return Err(CommandError::InvalidArguments(
            "Incorrect number of arguments. Please try \"add <name> <phone>\"".to_string(),
        )
        .into());
    }
    let (name, phone) = (&args[0], &args[1]);

    let mut message = "Contact updated.";
    if book.find(name).is_none() {
        debug!("Creating new contact '{}'", name);
        book.add_record(Record::new(name.as_str()));
        message = "Contact added.";
    }
    // The record is inserted before the phone is validated; a rejected
    // phone leaves a phoneless contact behind.
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone).map_err(CommandError::from)?;
            Ok(message.to_string())
        }
        None => Err(anyhow!("contact '{}' missing right after insert", name)),
    }
}

fn change_contact(book: &mut AddressBook, args: &[String]) -> Result<String> {
    if args.len() != 3 {
        return Err(CommandError::InvalidArguments(
            "Incorrect number of arguments. Please try \"change <name> <old_phone> <new_phone>\""
                .to_string(),
        )
        .into());
    }
    let (name, old_phone, new_phone) = (&args[0], &args[1], &args[2]);
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone).map_err(CommandError::from)?;
            Ok("Contact updated.".to_string())
        }
        None => Err(CommandError::ContactNotFound(
            "Contact doesn't exist, please use \"add <name> <phone>\"".to_string(),
        )
        .into()),
    }
}

fn get_phone(book: &AddressBook, args: &[String]) -> Result<String> {
    if args.len() != 1 {
        return Err(CommandError::WrongArgumentCount(
            "Incorrect number of arguments. Please try \"phone <name>\"".to_string(),
        )
        .into());
    }
    match book.find(&args[0]) {
        Some(record) => Ok(record.phones().join("; ")),
        None => Err(CommandError::ContactNotFound("Contact doesn't exist".to_string()).into()),
    }
}

fn get_all(book: &AddressBook, args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Err(
            CommandError::WrongArgumentCount("\"all\" doesn't need arguments".to_string()).into()
        );
    }
    if book.is_empty() {
        return Ok("It's lonely here:( Please use \"add\" command".to_string());
    }
    let mut listing = format!("{:<20} {:<12} {}\n", "Name", "Birthday", "Phone(s)");
    for record in book.iter() {
        let birthday = record
            .birthday()
            .map(|date| date.format(BIRTHDAY_FORMAT).to_string())
            .unwrap_or_else(|| "Not set".to_string());
        listing.push_str(&format!(
            "{:<20} {:<12} {}\n",
            record.name(),
            birthday,
            record.phones().join("; ")
        ));
    }
    Ok(listing)
}
