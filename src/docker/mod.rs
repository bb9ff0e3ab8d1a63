//! Docker integration
//!
//! Supplies the container list and live metrics shown by the grid.

pub mod client;
pub mod collector;

pub use client::{ContainerInfo, ContainerStats, DockerCli};
pub use collector::Collector;
