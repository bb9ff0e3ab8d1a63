//! Core functionality for ctop-rs
//!
//! This module contains shared state that is independent of the terminal:
//! - Application configuration
//! - Live metric samples and their read-only lookup

pub mod config;
pub mod metrics;

pub use config::Config;
pub use metrics::{Metrics, MetricsProvider, MetricsStore, NoMetrics};
