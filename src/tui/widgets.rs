//! Per-container row widget

use ratatui::style::Color;
use ratatui::widgets::{Cell, Row};

use crate::core::metrics::{Metrics, MISSING};
use crate::tui::theme::{Highlight, Theme};

/// Display state of one container row
///
/// Only the highlight lives here. Metric text is passed in when the row is
/// built so the feed never writes into widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerWidgets {
    id: String,
    names: Vec<String>,
    highlight: Highlight,
}

impl ContainerWidgets {
    pub fn new(id: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            id: id.into(),
            names,
            highlight: Theme::UNSELECTED,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Set the id cell colors
    pub fn set_highlight(&mut self, fg: Color, bg: Color) {
        self.highlight = Highlight { fg, bg };
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_selected(&self) -> bool {
        self.highlight == Theme::SELECTED
    }

    /// Build the table row: id, CPU, MEM, NET RX/TX, names
    pub fn make_row(&self, metrics: Option<&Metrics>) -> Row<'static> {
        let (cpu, mem, net) = match metrics {
            Some(m) => (m.cpu_text(), m.mem_text(), m.net_text()),
            None => (MISSING.into(), MISSING.into(), MISSING.into()),
        };

        Row::new(vec![
            Cell::from(format!(" {}", self.id)).style(self.highlight.style()),
            Cell::from(format!(" {}", cpu)),
            Cell::from(format!(" {}", mem)),
            Cell::from(format!(" {}", net)),
            Cell::from(format!(" {}", self.names.join(", "))),
        ])
    }
}
