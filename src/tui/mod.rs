//! Terminal User Interface module
//!
//! This module contains the ratatui-based container grid and its display loop.

pub mod app;
pub mod event;
pub mod grid;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, Display};
pub use grid::Grid;
