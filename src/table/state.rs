//! Caller-owned table state
//!
//! Bundles everything a table widget needs between frames. The widget keeps
//! it (or hands it to its parent); the engine functions stay pure.

use super::columns::ColumnLayout;
use super::filter::{filter_global, FilterRule};
use super::paginate::PaginationState;
use super::pipeline::{compose, TableView};
use super::row::Row;
use super::sort::SortRule;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Sorting, filtering, paging and column settings for one table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub sorting: Vec<SortRule>,
    pub filters: Vec<FilterRule>,
    pub global_filter: String,
    pub pagination: Option<PaginationState>,
    pub columns: ColumnLayout,
}

impl TableState {
    /// Create an unsorted, unfiltered, unpaginated state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column layout
    pub fn with_columns(mut self, columns: ColumnLayout) -> Self {
        self.columns = columns;
        self
    }

    /// Paginate starting from `pagination`
    pub fn with_pagination(mut self, pagination: PaginationState) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Header click: ascending, then descending, then unsorted
    ///
    /// With `multi` the column is added to or cycled within the existing
    /// rules; otherwise it replaces them.
    pub fn toggle_sort(&mut self, key: &str, multi: bool) {
        let current = self.sorting.iter().position(|r| r.key == key);
        match current {
            Some(i) if !self.sorting[i].descending => {
                self.sorting[i].descending = true;
                if !multi {
                    self.sorting.retain(|r| r.key == key);
                }
            }
            Some(i) => {
                self.sorting.remove(i);
                if !multi {
                    self.sorting.clear();
                }
            }
            None => {
                if !multi {
                    self.sorting.clear();
                }
                self.sorting.push(SortRule::asc(key));
            }
        }
        trace!(key, sorting = ?self.sorting, "sort toggled");
    }

    /// Direction currently applied to a column, if any
    pub fn sort_direction(&self, key: &str) -> Option<bool> {
        self.sorting
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.descending)
    }

    /// Replace the filter for one column; a null or empty value removes it
    pub fn set_filter(&mut self, key: &str, value: impl Into<Value>) {
        self.filters.retain(|f| f.key != key);
        let rule = FilterRule::new(key, value);
        if !rule.is_noop() {
            self.filters.push(rule);
        }
        self.reset_page();
    }

    /// Drop column filters and the global query; back to the first page
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.global_filter.clear();
        self.reset_page();
    }

    /// Set the search text matched against visible columns; back to the first page
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.global_filter = query.into();
        self.reset_page();
    }

    /// Go to the next page if one exists
    pub fn next_page(&mut self, page_count: usize) {
        if let Some(p) = self.pagination {
            self.pagination = Some(p.next(page_count));
        }
    }

    /// Go to the previous page if one exists
    pub fn prev_page(&mut self) {
        if let Some(p) = self.pagination {
            self.pagination = Some(p.prev());
        }
    }

    /// Change the page size, enabling pagination if it was off
    pub fn set_page_size(&mut self, page_size: usize) {
        let current = self.pagination.unwrap_or_default();
        self.pagination = Some(current.with_page_size(page_size));
    }

    fn reset_page(&mut self) {
        if let Some(p) = self.pagination.as_mut() {
            p.page_index = 0;
        }
    }

    /// Produce the rows to display
    ///
    /// The global filter searches the visible columns, then the column
    /// filters, sorting and pagination run through [`compose`].
    pub fn view<R: Row>(&self, rows: Vec<R>) -> TableView<R> {
        let searched = filter_global(rows, &self.global_filter, &self.columns.visible_ids());
        compose(searched, &self.sorting, &self.filters, self.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Ada", "city": "London"}),
            json!({"id": 2, "name": "Grace", "city": "Arlington"}),
            json!({"id": 3, "name": "Linus", "city": "Helsinki"}),
            json!({"id": 4, "name": "Barbara", "city": "Boston"}),
        ]
    }

    fn ids(view: &TableView<Value>) -> Vec<i64> {
        view.rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_toggle_sort_cycle() {
        let mut state = TableState::new();
        state.toggle_sort("name", false);
        assert_eq!(state.sort_direction("name"), Some(false));
        state.toggle_sort("name", false);
        assert_eq!(state.sort_direction("name"), Some(true));
        state.toggle_sort("name", false);
        assert_eq!(state.sort_direction("name"), None);
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn test_toggle_sort_single_replaces() {
        let mut state = TableState::new();
        state.toggle_sort("name", false);
        state.toggle_sort("city", false);
        assert_eq!(state.sorting, vec![SortRule::asc("city")]);
    }

    #[test]
    fn test_toggle_sort_multi_appends() {
        let mut state = TableState::new();
        state.toggle_sort("name", true);
        state.toggle_sort("city", true);
        state.toggle_sort("name", true);
        assert_eq!(
            state.sorting,
            vec![SortRule::desc("name"), SortRule::asc("city")]
        );
    }

    #[test]
    fn test_filters_reset_page() {
        let mut state = TableState::new().with_pagination(PaginationState::new(3, 2));
        state.set_filter("city", "on");
        assert_eq!(state.pagination.unwrap().page_index, 0);
        assert_eq!(state.filters.len(), 1);

        state.set_filter("city", "");
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_view_with_global_filter_on_visible_columns() {
        let mut state = TableState::new().with_columns(ColumnLayout::from_ids(["name", "city"]));
        state.set_global_filter("ar");
        // Grace (Arlington) and Barbara
        assert_eq!(ids(&state.view(rows())), vec![2, 4]);

        state.columns.set_visible("city", false);
        assert_eq!(ids(&state.view(rows())), vec![4]);
    }

    #[test]
    fn test_view_pipeline() {
        let mut state = TableState::new()
            .with_columns(ColumnLayout::from_ids(["name", "city"]))
            .with_pagination(PaginationState::new(0, 2));
        state.toggle_sort("name", false);
        state.toggle_sort("name", false);

        let view = state.view(rows());
        assert_eq!(ids(&view), vec![3, 2]);
        assert_eq!(view.total_rows, 4);
        assert_eq!(view.page_count, 2);

        state.next_page(view.page_count);
        assert_eq!(ids(&state.view(rows())), vec![4, 1]);
        state.next_page(view.page_count);
        assert_eq!(state.pagination.unwrap().page_index, 1);

        state.set_page_size(3);
        assert_eq!(state.pagination, Some(PaginationState::new(0, 3)));
    }

    #[test]
    fn test_next_page_at_saturated_index() {
        let huge = PaginationState::from_f64(1e30, 10.0).unwrap();
        let mut state = TableState::new().with_pagination(huge);
        state.next_page(4);
        assert_eq!(state.pagination, Some(huge));
        assert!(state.view(rows()).rows.is_empty());
    }

    #[test]
    fn test_state_from_json() {
        let state: TableState = serde_json::from_value(json!({
            "sorting": [{"key": "name"}],
            "pagination": {"page_index": 1, "page_size": 5}
        }))
        .unwrap();
        assert_eq!(state.sorting, vec![SortRule::asc("name")]);
        assert!(state.filters.is_empty());
        assert_eq!(state.pagination, Some(PaginationState::new(1, 5)));
    }
}
