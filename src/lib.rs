pub mod app;
pub mod command_processor;
pub mod config;
pub mod contacts;

use anyhow::Result;
use log::info;

pub fn run() -> Result<()> {
    let app = app::Application::new();
    info!("Initializing Rolodex application");
    app.run()
}

// Re-export commonly used types
pub use config::Config;
pub use contacts::{AddressBook, Record};
