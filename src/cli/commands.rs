//! CLI command definitions using clap
//!
//! Defines the command structure for the `ctop` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::error::Result;

/// ctop - top for containers
///
/// Shows running containers with live CPU, memory and network usage.
/// Run without a subcommand to launch the TUI.
#[derive(Parser, Debug)]
#[command(name = "ctop", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "CTOP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Include stopped containers
    #[arg(short, long, global = true)]
    pub all: bool,

    /// Docker executable to invoke
    #[arg(long, global = true, value_name = "BIN")]
    pub docker: Option<String>,

    /// Seconds between docker samples
    #[arg(
        short,
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config(ConfigArgs),
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}

impl Cli {
    /// The configuration file this invocation reads
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Load the configuration file and apply command line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(&self.config_path()?)?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Flags win over file values
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.all {
            config.show_all = true;
        }
        if let Some(docker) = &self.docker {
            config.docker_bin = docker.clone();
        }
        if let Some(interval) = self.interval {
            config.poll_interval_secs = interval;
        }
    }
}
