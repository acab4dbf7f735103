//! Date picker state container
//!
//! Holds the selection, focus cursor and visible month for one picker. The
//! caller owns it and routes key events in; rendering reads [`DatePicker::cells`]
//! and [`DatePicker::display_label`].
//!
//! # Keys
//!
//! - Left / Right: previous / next day
//! - Up / Down: same weekday in the previous / next week
//! - PageUp / PageDown: previous / next month view
//! - Enter: pick the focused date
//! - Ctrl+L: clear the selection

use super::cursor::{move_focus, FocusCursor};
use super::month::{month_cells, DayCell, MonthView, PickerSnapshot};
use super::range::{clear_range, select_date, DateBounds, RangeState};
use crate::event::{Event, EventHandler, Key};
use crate::i18n::Locale;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pick one date or a start/end pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    Range,
}

/// Caller-owned picker state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    mode: Mode,
    bounds: DateBounds,
    range: RangeState,
    selected: Option<NaiveDate>,
    cursor: FocusCursor,
    view: MonthView,
    today: NaiveDate,
    focused: bool,
}

impl DatePicker {
    /// New picker with the cursor on `today`
    pub fn new(mode: Mode, today: NaiveDate) -> Self {
        Self {
            mode,
            bounds: DateBounds::unbounded(),
            range: RangeState::Empty,
            selected: None,
            cursor: FocusCursor::new(today),
            view: MonthView::containing(today),
            today,
            focused: false,
        }
    }

    /// Disable dates outside `bounds`
    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Start from an existing range; the cursor moves to its start
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = RangeState::seeded(start, end);
        self.focus_date(start.min(end));
        self
    }

    /// Start from an existing single date; the cursor moves to it
    pub fn with_selected(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self.focus_date(date);
        self
    }

    /// Single date or range selection
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Enabled date limits
    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Range selection so far
    pub fn range(&self) -> RangeState {
        self.range
    }

    /// Picked date in single mode
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Keyboard focus
    pub fn cursor(&self) -> FocusCursor {
        self.cursor
    }

    /// Month currently shown
    pub fn view(&self) -> MonthView {
        self.view
    }

    /// Put the cursor on `date` and show its month
    pub fn focus_date(&mut self, date: NaiveDate) {
        self.cursor = FocusCursor::new(date);
        self.view = MonthView::containing(date);
    }

    /// Move the cursor by whole days, following it to its month
    pub fn move_focus(&mut self, delta_days: i64) {
        let date = move_focus(self.cursor, delta_days).date();
        self.focus_date(date);
    }

    /// Show the previous month; the cursor stays put
    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
    }

    /// Show the next month; the cursor stays put
    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    /// Pick a date. Returns false if it was disabled.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        match self.mode {
            Mode::Range => {
                let enabled = !self.bounds.is_disabled(date);
                self.range = select_date(self.range, date, &self.bounds);
                enabled
            }
            Mode::Single if self.bounds.is_disabled(date) => {
                debug!(%date, "ignoring disabled date");
                false
            }
            Mode::Single => {
                self.selected = Some(date);
                true
            }
        }
    }

    /// Pick the focused date
    pub fn commit(&mut self) -> bool {
        self.select(self.cursor.date())
    }

    /// Drop the range and the single selection
    pub fn clear(&mut self) {
        self.range = clear_range();
        self.selected = None;
    }

    /// Annotated grid for the visible month
    pub fn cells(&self, week_start: Weekday) -> Vec<Option<DayCell>> {
        let snapshot = PickerSnapshot {
            bounds: self.bounds,
            range: self.range,
            selected: self.selected,
            focus: self.cursor,
            today: self.today,
            week_start,
        };
        month_cells(self.view, &snapshot)
    }

    /// Text for the closed picker, `None` when nothing is picked
    ///
    /// Ranges render as `start – end`, or `start – …` while the end is open.
    pub fn display_label(&self, locale: &Locale) -> Option<String> {
        match (self.mode, self.range) {
            (Mode::Single, _) => self.selected.map(|d| locale.format_date(d)),
            (Mode::Range, RangeState::Empty) => None,
            (Mode::Range, RangeState::Partial { start }) => {
                Some(format!("{} – …", locale.format_date(start)))
            }
            (Mode::Range, RangeState::Complete { start, end }) => Some(format!(
                "{} – {}",
                locale.format_date(start),
                locale.format_date(end)
            )),
        }
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Left => self.move_focus(-1),
            Key::Right => self.move_focus(1),
            Key::Up => self.move_focus(-7),
            Key::Down => self.move_focus(7),
            Key::PageUp => self.prev_month(),
            Key::PageDown => self.next_month(),
            Key::Enter => {
                self.commit();
            }
            Key::Ctrl('l') => self.clear(),
            _ => return false,
        }
        true
    }
}

impl EventHandler for DatePicker {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            _ => false,
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
