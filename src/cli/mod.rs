//! CLI module for ctop-rs
//!
//! This module contains the command line definitions and the handlers for
//! subcommands that run without the TUI.

pub mod commands;
pub mod config;

pub use commands::{Cli, Commands};
