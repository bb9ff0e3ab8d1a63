//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::tui::theme::Theme;

/// Column titles, left to right
pub const HEADERS: [&str; 5] = ["CID", "CPU", "MEM", "NET RX/TX", "NAMES"];

/// Relative column widths; the id column gets half the space of the others
const COLUMN_SPANS: [u16; 5] = [1, 2, 2, 2, 2];

/// First terminal row holding a container (header plus its margin above it)
pub const FIRST_ROW_Y: u16 = 2;

/// Split `width` cells across the five columns
pub fn column_widths(width: u16) -> [u16; 5] {
    let area = Rect::new(0, 0, width, 1);
    let chunks = Layout::horizontal(COLUMN_SPANS.map(Constraint::Fill)).split(area);

    let mut widths = [0; 5];
    for (w, chunk) in widths.iter_mut().zip(chunks.iter()) {
        *w = chunk.width;
    }
    widths
}

/// Render the UI
///
/// `selected` is the cursor row; the table scrolls to keep it on screen.
pub fn render(
    frame: &mut Frame,
    rows: Vec<Row<'static>>,
    widths: &[u16; 5],
    selected: Option<usize>,
    status: Option<&str>,
) {
    let count = rows.len();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Grid
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_grid(frame, chunks[0], rows, widths, selected);
    render_footer(frame, chunks[1], count, status);
}

fn header() -> Row<'static> {
    Row::new(HEADERS.map(|title| Cell::from(format!(" {}", title))))
        .style(Theme::header())
        .bottom_margin(1)
}

/// Render the header and one line per container
fn render_grid(
    frame: &mut Frame,
    area: Rect,
    rows: Vec<Row<'static>>,
    widths: &[u16; 5],
    selected: Option<usize>,
) {
    let empty = rows.is_empty();

    let table = Table::new(rows, widths.iter().map(|w| Constraint::Length(*w)))
        .header(header())
        .column_spacing(0);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);

    if empty && area.height > FIRST_ROW_Y {
        let placeholder = Rect {
            y: area.y + FIRST_ROW_Y,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(" No containers").style(Theme::muted()),
            placeholder,
        );
    }
}

/// Render the key help, container count and last feed error
fn render_footer(frame: &mut Frame, area: Rect, count: usize, status: Option<&str>) {
    let mut spans = vec![
        Span::styled(" [↑/↓] Navigate  [q] Quit", Theme::muted()),
        Span::styled(format!(" │ {}", container_count(count)), Theme::muted()),
    ];
    if let Some(msg) = status {
        spans.push(Span::styled(" │ ", Theme::muted()));
        spans.push(Span::styled(msg.to_string(), Theme::error()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn container_count(count: usize) -> String {
    match count {
        1 => "1 container".to_string(),
        n => format!("{} containers", n),
    }
}
