//! Tabular data engine
//!
//! Sorting, filtering and pagination over arbitrary record collections,
//! plus the small amount of state a table widget carries between frames.
//!
//! # Example
//!
//! ```ignore
//! let view = compose(
//!     rows,
//!     &[SortRule::asc("name")],
//!     &[FilterRule::new("city", "lon")],
//!     Some(PaginationState::new(0, 10)),
//! );
//! render_rows(&view.rows);
//! render_pager(page_window(1, view.page_count, 1));
//! ```

pub mod columns;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod row;
pub mod sort;
pub mod state;

pub use columns::{ColumnLayout, ColumnState, MoveDirection};
pub use filter::{filter, filter_global, FilterRule};
pub use paginate::{
    page_count, page_window, paginate, Page, PageItem, PaginationState, DEFAULT_PAGE_SIZE,
};
pub use pipeline::{compose, TableView};
pub use row::{value_text, Row};
pub use sort::{compare_values, sort, SortRule};
pub use state::TableState;
