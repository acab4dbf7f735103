//! Column visibility and ordering

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction for [`ColumnLayout::move_column`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Display settings for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnState {
    pub id: String,
    pub label: String,
    /// Columns that cannot hide stay visible regardless of toggles
    pub can_hide: bool,
    pub visible: bool,
}

impl ColumnState {
    /// Visible, hideable column labelled with its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            can_hide: true,
            visible: true,
        }
    }

    /// Set the header text
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark the column as always visible
    pub fn pinned(mut self) -> Self {
        self.can_hide = false;
        self.visible = true;
        self
    }
}

/// Ordered column list for a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    columns: Vec<ColumnState>,
}

impl ColumnLayout {
    /// Layout in the given order
    pub fn new(columns: Vec<ColumnState>) -> Self {
        Self { columns }
    }

    /// Layout from plain ids, all visible and hideable
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(ColumnState::new).collect())
    }

    /// All columns in display order, hidden ones included
    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    /// Look up a column by id
    pub fn get(&self, id: &str) -> Option<&ColumnState> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Show or hide a column. Returns false if nothing changed.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(column) = self.columns.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if !column.can_hide && !visible {
            debug!(column = id, "ignoring hide request for pinned column");
            return false;
        }
        let changed = column.visible != visible;
        column.visible = visible;
        changed
    }

    /// Swap a column with its neighbour. No-op at either end.
    pub fn move_column(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.columns.iter().position(|c| c.id == id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.columns.len() => index + 1,
            _ => return false,
        };
        self.columns.swap(index, target);
        true
    }

    /// Ids of visible columns in display order
    pub fn visible_ids(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.id.as_str())
            .collect()
    }
}
