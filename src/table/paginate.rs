//! Page slicing and pager navigation

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which page to show and how large pages are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page, treated as at least 1
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Create a state for a zero-based page
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Build from loosely-typed numbers, e.g. values read from a form control
    ///
    /// Negative values clamp (index to 0, size to 1) and fractions are
    /// truncated toward zero. NaN or infinite values are a caller bug and are
    /// rejected.
    pub fn from_f64(page_index: f64, page_size: f64) -> Result<Self> {
        if !page_index.is_finite() {
            return Err(Error::NonFinitePagination {
                field: "page_index",
                value: page_index,
            });
        }
        if !page_size.is_finite() {
            return Err(Error::NonFinitePagination {
                field: "page_size",
                value: page_size,
            });
        }
        // `as` saturates for out-of-range floats
        Ok(Self {
            page_index: page_index.max(0.0) as usize,
            page_size: page_size.max(1.0) as usize,
        })
    }

    /// Page size with the lower bound applied
    pub fn effective_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.effective_size())
    }

    /// Whether a previous page exists
    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a following page exists
    pub fn can_next(&self, page_count: usize) -> bool {
        self.page_index.saturating_add(1) < page_count
    }

    /// Step back one page, staying on the first page
    pub fn prev(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self
        }
    }

    /// Step forward one page, staying on the last page
    pub fn next(self, page_count: usize) -> Self {
        if self.can_next(page_count) {
            Self {
                page_index: self.page_index + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Change page size while keeping the first visible row on screen
    pub fn with_page_size(self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_index: self.offset() / page_size,
            page_size,
        }
    }
}

/// One page of rows plus the page count for the whole set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub rows: Vec<R>,
    pub page_count: usize,
}

/// Number of pages needed for `total` rows, never less than 1
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice out the requested page
///
/// An index past the end yields an empty page rather than an error.
pub fn paginate<R>(rows: Vec<R>, state: PaginationState) -> Page<R> {
    let page_count = page_count(rows.len(), state.page_size);
    let rows = rows
        .into_iter()
        .skip(state.offset())
        .take(state.effective_size())
        .collect();
    Page { rows, page_count }
}

/// Entry in a pager's page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// One-based page number
    Page(usize),
    /// Gap between non-adjacent page numbers
    Ellipsis,
}

/// Page numbers to show around `current` (one-based)
///
/// Always includes the first and last page, `siblings` pages on each side of
/// the current one, and an ellipsis wherever numbers are skipped.
pub fn page_window(current: usize, total: usize, siblings: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    if total == 0 {
        return items;
    }
    let current = current.clamp(1, total);
    let left = current.saturating_sub(siblings).max(1);
    let right = current.saturating_add(siblings).min(total);

    if left > 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
    } else if left > 1 {
        items.push(PageItem::Page(1));
    }

    items.extend((left..=right).map(PageItem::Page));

    if right.saturating_add(1) < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if right < total {
        items.push(PageItem::Page(total));
    }

    items
}
