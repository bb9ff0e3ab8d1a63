//! ctop-rs - top for containers
//!
//! Run without arguments to launch the TUI, or use `ctop config` to inspect
//! the configuration.
//!
//! Available as the `ctop` command.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ctop_rs::cli::commands::{Cli, Commands};
use ctop_rs::cli::config;
use ctop_rs::error::Result;
use ctop_rs::tui::App;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Config(args)) => {
            init_logging(None);
            config::handle_config(args.command, &cli)
        }

        // No subcommand - launch TUI mode
        None => {
            let settings = cli.load_config()?;
            init_logging(settings.log_path());
            tracing::info!(?settings, "starting dashboard");
            App::new(settings).run().await
        }
    }
}

/// Initialize logging
///
/// The TUI owns stdout, so while it runs logs go to a file. Without one they
/// go to stderr.
fn init_logging(log_path: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = log_path.and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
