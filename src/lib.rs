//! widgetkit - state and data cores for interface widgets
//!
//! The parts of a widget catalog that carry real logic, free of any
//! rendering:
//! - Tabular data: sort, filter, paginate and compose over generic rows
//! - Text masks: raw <-> formatted conversion and masked field editing
//! - Date ranges: three-state range selection, focus cursor, month grids
//! - Select boxes: option filtering and generation-gated async search
//!
//! State is plain values owned by the caller. Widgets that take keyboard
//! input implement [`EventHandler`]; with the `tui` feature crossterm events
//! convert straight into [`Event`].

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod i18n;
pub mod mask;
pub mod select;
pub mod table;

// Re-export commonly used types
pub use calendar::{
    clear_range, move_focus, select_date, DateBounds, DatePicker, FocusCursor, MonthView,
    RangeState,
};
pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use event::{Event, EventHandler, Key};
pub use i18n::Locale;
pub use mask::{apply, extract_raw, Mask, MaskToken, Masked, MaskedInput};
pub use select::{OptionList, OptionSearch, SearchHandle, SelectOption};
pub use table::{
    compose, filter, paginate, sort, FilterRule, PaginationState, Row, SortRule, TableState,
    TableView,
};
