//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Foreground/background pair applied to a row's id cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub fg: Color,
    pub bg: Color,
}

/// Application color theme
pub struct Theme;

impl Theme {
    /// Id cell of the row under the cursor
    pub const SELECTED: Highlight = Highlight {
        fg: Color::Reset,
        bg: Color::White,
    };

    /// Id cell of every other row
    pub const UNSELECTED: Highlight = Highlight {
        fg: Color::White,
        bg: Color::Reset,
    };

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Error color
    pub const ERROR: Color = Color::Red;

    /// Column header style
    pub fn header() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Footer/help line style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Footer error text
    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }
}

impl Highlight {
    pub fn style(self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}
