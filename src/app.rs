use crate::command_processor::{CommandArgs, CommandProcessor};
use crate::config::Config;
use crate::contacts::AddressBook;
use anyhow::Result;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
}

impl Application {
    pub fn new() -> Self {
        Self { command_processor: CommandProcessor::new() }
    }

    pub fn run(&self) -> Result<()> {
        log::info!("Starting Rolodex shell");
        let config = Config::load()?;

        // The one address book for the session; handed to every dispatch
        // explicitly rather than held as global state.
        let mut book = AddressBook::new();

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to the assistant bot!");

        loop {
            match rl.readline(&config.shell.prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    let args = match CommandArgs::parse(&line) {
                        Ok(args) => args,
                        // blank line
                        Err(_) => continue,
                    };
                    let leaving = matches!(args.command.as_str(), "exit" | "close");
                    match self.command_processor.execute(&mut book, &config, &args) {
                        Ok(Some(output)) => println!("{}", output),
                        // unknown command, deliberately silent
                        Ok(None) => {}
                        Err(err) => {
                            log::error!("Unclassified command failure: {:?}", err);
                            println!("Unexpected error: {}", err);
                            break;
                        }
                    }
                    if leaving {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
