//! ctop-rs - a top-like dashboard for running containers
//!
//! This library provides the sorted, cursor-driven container grid, the
//! terminal display loop that renders it, and the docker feed that keeps
//! it populated with live metrics.

pub mod cli;
pub mod core;
pub mod docker;
pub mod error;
pub mod tui;

pub use error::{CtopError, Result};
