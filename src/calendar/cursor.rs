//! Keyboard focus cursor

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The keyboard-highlighted date
///
/// Independent of the selection and never limited by date bounds, so the user
/// can walk through disabled dates to reach enabled ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusCursor(NaiveDate);

impl FocusCursor {
    /// Cursor resting on `date`
    pub fn new(date: NaiveDate) -> Self {
        FocusCursor(date)
    }

    /// Focused date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days; see [`move_focus`]
    pub fn moved_by(self, delta_days: i64) -> Self {
        move_focus(self, delta_days)
    }
}

impl From<NaiveDate> for FocusCursor {
    fn from(date: NaiveDate) -> Self {
        FocusCursor(date)
    }
}

/// Move the cursor by `delta_days`
///
/// Stops at the first or last representable date instead of overflowing.
pub fn move_focus(cursor: FocusCursor, delta_days: i64) -> FocusCursor {
    let days = Days::new(delta_days.unsigned_abs());
    let moved = if delta_days < 0 {
        cursor.0.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    } else {
        cursor.0.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    };
    FocusCursor(moved)
}
