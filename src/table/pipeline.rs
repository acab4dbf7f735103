//! Filter, sort and paginate in one pass

use super::filter::{filter, FilterRule};
use super::paginate::{paginate, PaginationState};
use super::row::Row;
use super::sort::{sort, SortRule};

/// Output of [`compose`]
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R> {
    /// Rows to display
    pub rows: Vec<R>,
    /// Row count after filtering, before pagination
    pub total_rows: usize,
    pub page_count: usize,
}

/// Run the full table pipeline: filter, then sort, then paginate
///
/// `total_rows` counts the filtered set, so pager controls reflect what the
/// filters left. Without pagination every row comes back on a single page.
pub fn compose<R: Row>(
    rows: Vec<R>,
    sorting: &[SortRule],
    filters: &[FilterRule],
    pagination: Option<PaginationState>,
) -> TableView<R> {
    let filtered = filter(rows, filters);
    let total_rows = filtered.len();
    let sorted = sort(filtered, sorting);

    match pagination {
        Some(state) => {
            let page = paginate(sorted, state);
            TableView {
                rows: page.rows,
                total_rows,
                page_count: page.page_count,
            }
        }
        None => TableView {
            rows: sorted,
            total_rows,
            page_count: 1,
        },
    }
}
