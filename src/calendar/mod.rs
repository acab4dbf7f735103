//! Date range selection
//!
//! - [`select_date`] / [`clear_range`]: the three-state range machine
//! - [`move_focus`]: keyboard cursor, independent of the selection
//! - [`MonthView`] and [`month_cells`]: month grid layout
//! - [`DatePicker`]: all of the above bundled for one widget
//!
//! # Example
//!
//! ```ignore
//! let bounds = DateBounds::new(Some(min), Some(max))?;
//! let state = select_date(RangeState::Empty, tenth, &bounds);
//! let state = select_date(state, fifth, &bounds);
//! assert_eq!(state, RangeState::seeded(fifth, tenth));
//! ```

pub mod cursor;
pub mod month;
pub mod picker;
pub mod range;

pub use cursor::{move_focus, FocusCursor};
pub use month::{month_cells, DayCell, MonthView, PickerSnapshot};
pub use picker::{DatePicker, Mode};
pub use range::{clear_range, select_date, DateBounds, DateRange, RangeState};
