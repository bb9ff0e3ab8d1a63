//! Container registry and cursor
//!
//! Display order is always derived by sorting ids at query time, and the
//! cursor is a rank into that order. Every registry or cursor change goes
//! through [`Grid`] so the bound `cursor_pos < max(1, len())` is kept here.

use std::collections::HashMap;

use ratatui::widgets::Row;

use crate::core::metrics::MetricsProvider;
use crate::docker::client::ContainerInfo;
use crate::tui::theme::Theme;
use crate::tui::widgets::ContainerWidgets;

/// One tracked container; its names live in the row widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub widgets: ContainerWidgets,
}

impl Container {
    pub fn new(id: impl Into<String>, names: Vec<String>) -> Self {
        let id = id.into();
        let widgets = ContainerWidgets::new(id.clone(), names);
        Self { id, widgets }
    }

    pub fn names(&self) -> &[String] {
        self.widgets.names()
    }
}

/// Sorted, cursor-addressable set of containers
#[derive(Debug, Default)]
pub struct Grid {
    cursor_pos: usize,
    containers: HashMap<String, Container>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the container keyed by `id`
    ///
    /// Growing the registry never invalidates the cursor, so no clamping
    /// happens here.
    pub fn add_container(&mut self, id: impl Into<String>, names: Vec<String>) {
        let container = Container::new(id, names);
        self.containers.insert(container.id.clone(), container);
    }

    /// Remove a container, pulling the cursor back onto the last row if needed
    pub fn remove_container(&mut self, id: &str) -> Option<Container> {
        let removed = self.containers.remove(id);
        if removed.is_some() {
            self.clamp_cursor();
        }
        removed
    }

    /// Make the registry match `containers` exactly
    ///
    /// New and renamed containers go in before departed ones are removed,
    /// so the cursor is only clamped against the final size.
    pub fn sync(&mut self, containers: &[ContainerInfo]) {
        for info in containers {
            let unchanged = self
                .containers
                .get(&info.id)
                .is_some_and(|c| c.names() == info.names.as_slice());
            if !unchanged {
                self.add_container(info.id.clone(), info.names.clone());
            }
        }

        let gone: Vec<String> = self
            .containers
            .keys()
            .filter(|id| !containers.iter().any(|c| &c.id == *id))
            .cloned()
            .collect();
        for id in gone {
            tracing::debug!(%id, "container gone");
            self.remove_container(&id);
        }
    }

    /// Number of containers/rows
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Container ids in ascending byte order
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.containers.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Id of the row under the cursor
    pub fn selected_id(&self) -> Option<String> {
        self.sorted_ids().into_iter().nth(self.cursor_pos)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    /// Move the cursor one row up. Returns whether it moved.
    pub fn move_up(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one row down. Returns whether it moved.
    pub fn move_down(&mut self) -> bool {
        if self.cursor_pos + 1 < self.len() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    /// Re-highlight every row: the one at `cursor_pos` selected, all others not
    pub fn cursor(&mut self) {
        let cursor_pos = self.cursor_pos;
        for (rank, id) in self.sorted_ids().iter().enumerate() {
            let Some(container) = self.containers.get_mut(id) else {
                continue;
            };
            let colors = if rank == cursor_pos {
                Theme::SELECTED
            } else {
                Theme::UNSELECTED
            };
            container.widgets.set_highlight(colors.fg, colors.bg);
        }
    }

    /// One renderable row per container, in sorted order
    pub fn rows(&self, metrics: &dyn MetricsProvider) -> Vec<Row<'static>> {
        self.sorted_ids()
            .iter()
            .filter_map(|id| self.containers.get(id))
            .map(|c| c.widgets.make_row(metrics.metrics(&c.id).as_ref()))
            .collect()
    }

    fn clamp_cursor(&mut self) {
        let last = self.len().max(1) - 1;
        if self.cursor_pos > last {
            tracing::debug!(from = self.cursor_pos, to = last, "clamping cursor");
            self.cursor_pos = last;
        }
    }
}
