//! Event handling for TUI
//!
//! Keyboard input, the redraw timer and the docker feed all land on one
//! ordered queue. The display loop consumes it one event at a time.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::docker::client::ContainerInfo;

/// Redraw cadence of the display loop
pub const TICK_RATE: Duration = Duration::from_secs(1);

const QUEUE_CAPACITY: usize = 100;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Move the cursor one row up
    NavigateUp,
    /// Move the cursor one row down
    NavigateDown,
    /// Stop the display loop
    Quit,
    /// Periodic redraw
    Tick,
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Fresh container list from the feed
    Containers(Vec<ContainerInfo>),
    /// The feed could not list containers
    SourceError(String),
}

impl AppEvent {
    /// Translate a terminal event; anything unrecognized yields `None`
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(&key),
            CrosstermEvent::Resize(width, height) => Some(AppEvent::Resize { width, height }),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        if is_quit_key(key) {
            return Some(AppEvent::Quit);
        }
        match key.code {
            KeyCode::Up => Some(AppEvent::NavigateUp),
            KeyCode::Down => Some(AppEvent::NavigateDown),
            _ => None,
        }
    }
}

/// Event handler for the TUI
pub struct EventHandler {
    tx: mpsc::Sender<AppEvent>,
    rx: mpsc::Receiver<AppEvent>,
    /// Handle to the input task for cleanup
    task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    /// Create a handler fed by the terminal and a `tick_rate` timer
    pub fn new(tick_rate: Duration) -> Self {
        let mut handler = Self::detached();
        let tx = handler.tx.clone();

        let task = tokio::spawn(async move {
            let mut tick_interval = interval(tick_rate);
            let mut reader = EventStream::new();

            loop {
                let event = tokio::select! {
                    _ = tick_interval.tick() => Some(AppEvent::Tick),
                    maybe_event = reader.next() => match maybe_event {
                        Some(Ok(evt)) => AppEvent::from_terminal(evt),
                        Some(Err(e)) => {
                            tracing::warn!("Terminal input error: {}", e);
                            None
                        }
                        None => break,
                    },
                };

                if let Some(event) = event {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            }
        });

        handler.task = Some(task);
        handler
    }

    /// Create a handler with no input source; events arrive only through
    /// [`EventHandler::sender`]
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        Self { tx, rx, task: None }
    }

    /// A sender that enqueues behind every event already delivered
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Helper to check for quit key combinations
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}
