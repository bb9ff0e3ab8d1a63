//! Configuration CLI command handlers

use crate::cli::commands::{Cli, ConfigCommand};
use crate::error::Result;

/// Handle configuration commands
///
/// `path` never reads the file, so it still works when the file is broken.
pub fn handle_config(command: ConfigCommand, cli: &Cli) -> Result<()> {
    match command {
        ConfigCommand::Show => print!("{}", cli.load_config()?.to_toml()?),
        ConfigCommand::Path => println!("{}", cli.config_path()?.display()),
    }
    Ok(())
}
