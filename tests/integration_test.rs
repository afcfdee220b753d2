use anyhow::Result;
use rolodex::command_processor::{CommandArgs, CommandProcessor};
use rolodex::config::Config;
use rolodex::contacts::AddressBook;

fn dispatch(
    processor: &CommandProcessor,
    book: &mut AddressBook,
    line: &str,
) -> Result<Option<String>> {
    let args = CommandArgs::parse(line)?;
    processor.execute(book, &Config::default(), &args)
}

#[test]
fn test_full_contact_session() -> Result<()> {
    colored::control::set_override(false);
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    assert_eq!(dispatch(&processor, &mut book, "hello")?.as_deref(), Some("How can I help you?"));

    assert_eq!(
        dispatch(&processor, &mut book, "add Ann 1234567890")?.as_deref(),
        Some("Contact added.")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "add Ann 0987654321")?.as_deref(),
        Some("Contact updated.")
    );
    assert_eq!(book.len(), 1);

    assert_eq!(
        dispatch(&processor, &mut book, "phone Ann")?.as_deref(),
        Some("1234567890; 0987654321")
    );

    assert_eq!(
        dispatch(&processor, &mut book, "change Ann 1234567890 1111111111")?.as_deref(),
        Some("Contact updated.")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "phone Ann")?.as_deref(),
        Some("1111111111; 0987654321")
    );

    assert_eq!(
        dispatch(&processor, &mut book, "add-birthday Ann 15.03.1990")?.as_deref(),
        Some("Contact updated.")
    );
    assert_eq!(dispatch(&processor, &mut book, "show-birthday Ann")?.as_deref(), Some("15.03.1990"));

    assert_eq!(dispatch(&processor, &mut book, "exit")?.as_deref(), Some("Good bye!"));
    Ok(())
}

#[test]
fn test_unknown_command_is_ignored_without_output() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    assert_eq!(dispatch(&processor, &mut book, "foobar")?, None);
    assert_eq!(dispatch(&processor, &mut book, "foobar Ann 123")?, None);
    assert!(book.is_empty());
    Ok(())
}

#[test]
fn test_classified_errors_are_reported_not_fatal() -> Result<()> {
    colored::control::set_override(false);
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    assert_eq!(
        dispatch(&processor, &mut book, "change Ann 1234567890 1111111111")?.as_deref(),
        Some("Contact doesn't exist, please use \"add <name> <phone>\"")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "phone Ann")?.as_deref(),
        Some("Contact doesn't exist")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "hello there")?.as_deref(),
        Some("\"hello\" doesn't need arguments")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "add Ann")?.as_deref(),
        Some("Incorrect number of arguments. Please try \"add <name> <phone>\"")
    );

    // the session keeps going after every one of these
    assert_eq!(
        dispatch(&processor, &mut book, "add Ann 1234567890")?.as_deref(),
        Some("Contact added.")
    );
    Ok(())
}

#[test]
fn test_change_with_unlisted_old_phone() -> Result<()> {
    colored::control::set_override(false);
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    dispatch(&processor, &mut book, "add Ann 1234567890")?;
    assert_eq!(
        dispatch(&processor, &mut book, "change Ann 0000000000 1111111111")?.as_deref(),
        Some("Phone number '0000000000' is not listed for this contact")
    );
    assert_eq!(dispatch(&processor, &mut book, "phone Ann")?.as_deref(), Some("1234567890"));
    Ok(())
}

#[test]
fn test_all_listing() -> Result<()> {
    colored::control::set_override(false);
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    assert_eq!(
        dispatch(&processor, &mut book, "all")?.as_deref(),
        Some("It's lonely here:( Please use \"add\" command")
    );

    dispatch(&processor, &mut book, "add Ann 1234567890")?;
    dispatch(&processor, &mut book, "add-birthday Ann 15.03.1990")?;
    dispatch(&processor, &mut book, "add Bob 0987654321")?;

    let listing = dispatch(&processor, &mut book, "all")?.unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].starts_with("Ann") && lines[1].contains("15.03.1990"));
    assert!(lines[2].starts_with("Bob") && lines[2].contains("Not set"));
    Ok(())
}

#[test]
fn test_invalid_birthday_then_valid() -> Result<()> {
    colored::control::set_override(false);
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    dispatch(&processor, &mut book, "add Ann 1234567890")?;
    assert_eq!(
        dispatch(&processor, &mut book, "add-birthday Ann 32.01.2000")?.as_deref(),
        Some("Invalid birthday '32.01.2000': expected DD.MM.YYYY")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "show-birthday Ann")?.as_deref(),
        Some("Ann doesn't have birthday set")
    );
    assert_eq!(
        dispatch(&processor, &mut book, "add-birthday Ann 15.03.1990")?.as_deref(),
        Some("Contact updated.")
    );
    Ok(())
}
