//! Display loop
//!
//! [`Display`] wires the grid's sorted, cursor-aware view to a terminal and
//! applies events to it one at a time. [`App`] is the startup sequence for
//! the real terminal and docker feed.

use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::core::config::Config;
use crate::core::metrics::{MetricsProvider, MetricsStore};
use crate::docker::client::DockerCli;
use crate::docker::collector::Collector;
use crate::error::{CtopError, Result};
use crate::tui::event::{AppEvent, EventHandler, TICK_RATE};
use crate::tui::grid::Grid;
use crate::tui::terminal::TerminalGuard;
use crate::tui::ui;

fn terminal_error(e: std::io::Error) -> CtopError {
    CtopError::Terminal(e.to_string())
}

/// One display session: a surface, the grid it shows, and where metric
/// text comes from
pub struct Display<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    grid: &'a mut Grid,
    metrics: &'a dyn MetricsProvider,
    widths: [u16; 5],
    running: bool,
    status: Option<String>,
    frames: u64,
}

impl<'a, B: Backend> Display<'a, B> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        grid: &'a mut Grid,
        metrics: &'a dyn MetricsProvider,
    ) -> Self {
        Self {
            terminal,
            grid,
            metrics,
            widths: [0; 5],
            running: false,
            status: None,
            frames: 0,
        }
    }

    /// Show a message in the footer until the next successful feed update
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Lay out the columns, highlight the cursor row and draw the first frame
    pub fn start(&mut self) -> Result<()> {
        let size = self.terminal.size().map_err(terminal_error)?;
        self.widths = ui::column_widths(size.width);
        self.running = true;

        self.grid.cursor();
        self.render()
    }

    /// Apply one event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::NavigateUp => {
                if self.grid.move_up() {
                    self.cursor_moved()?;
                }
            }
            AppEvent::NavigateDown => {
                if self.grid.move_down() {
                    self.cursor_moved()?;
                }
            }
            AppEvent::Quit => {
                tracing::debug!("quit requested");
                self.running = false;
            }
            AppEvent::Tick => self.render()?,
            AppEvent::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.terminal
                    .resize(Rect::new(0, 0, width, height))
                    .map_err(terminal_error)?;
                self.widths = ui::column_widths(width);
                self.terminal.clear().map_err(terminal_error)?;
                self.render()?;
            }
            AppEvent::Containers(containers) => {
                self.grid.sync(&containers);
                self.status = None;
                self.grid.cursor();
                self.render()?;
            }
            AppEvent::SourceError(message) => {
                self.status = Some(message);
                self.render()?;
            }
        }
        Ok(())
    }

    fn cursor_moved(&mut self) -> Result<()> {
        tracing::trace!(
            pos = self.grid.cursor_pos(),
            selected = ?self.grid.selected_id(),
            "cursor moved"
        );
        self.grid.cursor();
        self.render()
    }

    /// Draw the current grid
    pub fn render(&mut self) -> Result<()> {
        let rows = self.grid.rows(self.metrics);
        let selected = (!self.grid.is_empty()).then(|| self.grid.cursor_pos());
        let widths = self.widths;
        let status = self.status.as_deref();

        self.terminal
            .draw(|frame| ui::render(frame, rows, &widths, selected, status))
            .map_err(terminal_error)?;
        self.frames += 1;
        Ok(())
    }

    /// Start, then handle events in delivery order until quit
    pub async fn run(&mut self, events: &mut EventHandler) -> Result<()> {
        self.start()?;

        while self.running {
            match events.next().await {
                Some(event) => self.handle_event(event)?,
                None => break,
            }
        }
        tracing::debug!(frames = self.frames, "display loop finished");
        Ok(())
    }
}

/// The dashboard: docker feed plus display loop on the real terminal
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until the user quits
    pub async fn run(&self) -> Result<()> {
        let docker = DockerCli::new(self.config.docker_bin.clone());
        let mut grid = Grid::new();
        let mut initial_error = None;

        match docker.list_containers(self.config.show_all).await {
            Ok(containers) => {
                for c in &containers {
                    grid.add_container(c.id.clone(), c.names.clone());
                }
                tracing::info!(count = grid.len(), "initial container list");
            }
            Err(e) => {
                tracing::warn!("Initial container listing failed: {}", e);
                initial_error = e.to_string().lines().next().map(String::from);
            }
        }

        let mut terminal = TerminalGuard::acquire()?;

        let store = MetricsStore::new();
        let mut events = EventHandler::new(TICK_RATE);
        let collector = Collector::new(
            docker,
            Duration::from_secs(self.config.poll_interval_secs.max(1)),
            self.config.show_all,
            events.sender(),
            store.clone(),
        )
        .spawn();

        let result = {
            let mut display = Display::new(&mut *terminal, &mut grid, &store);
            if let Some(msg) = initial_error {
                display.set_status(msg);
            }
            display.run(&mut events).await
        };

        collector.abort();
        result
    }
}
