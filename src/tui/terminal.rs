//! Scoped ownership of the real terminal
//!
//! [`TerminalGuard`] puts the terminal into raw mode on the alternate screen
//! and restores it when dropped. A panic hook restores it too, so a crash
//! never leaves the shell in raw mode.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::{CtopError, Result};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of a display session
pub struct TerminalGuard {
    terminal: CrosstermTerminal,
}

impl TerminalGuard {
    /// Setup terminal for TUI
    ///
    /// Anything already switched on is switched back off if a later step fails.
    pub fn acquire() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().map_err(|e| CtopError::Terminal(e.to_string()))?;

        let terminal = (|| -> io::Result<CrosstermTerminal> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, Hide)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })();

        match terminal {
            Ok(terminal) => {
                tracing::debug!("terminal acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(CtopError::Terminal(e.to_string()))
            }
        }
    }
}

impl Deref for TerminalGuard {
    type Target = CrosstermTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        tracing::debug!("terminal released");
    }
}

/// Restore terminal to normal state, ignoring individual failures
fn restore() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!("Failed to leave alternate screen: {}", e);
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}
