//! Month grid
//!
//! Lays out one month as week rows and annotates each day with what a
//! renderer needs to style it.

use super::cursor::FocusCursor;
use super::range::{DateBounds, RangeState};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// A displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// `None` if the month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1 to 12
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of days, 28 to 31
    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&d| self.first.with_day(d).is_some())
            .unwrap_or(28)
    }

    /// Whether `date` falls in this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Previous month, or this one at the start of the calendar
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Next month, or this one at the end of the calendar
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Grid cells: a blank for each column before day 1, then every day
    pub fn cells(&self, week_start: Weekday) -> Vec<Option<NaiveDate>> {
        let leading = (7 + self.first.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let days = (0..self.days_in_month() as u64)
            .filter_map(|i| self.first.checked_add_days(Days::new(i)))
            .map(Some);
        std::iter::repeat(None)
            .take(leading as usize)
            .chain(days)
            .collect()
    }
}

/// Everything that decides how a day renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSnapshot {
    pub bounds: DateBounds,
    pub range: RangeState,
    /// Single-date selection
    pub selected: Option<NaiveDate>,
    pub focus: FocusCursor,
    pub today: NaiveDate,
    pub week_start: Weekday,
}

/// One day in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub disabled: bool,
    pub today: bool,
    pub focused: bool,
    /// Chosen single date or a range endpoint
    pub selected: bool,
    pub in_range: bool,
    pub is_start: bool,
    pub is_end: bool,
}

/// Annotated grid for `view`
pub fn month_cells(view: MonthView, snapshot: &PickerSnapshot) -> Vec<Option<DayCell>> {
    view.cells(snapshot.week_start)
        .into_iter()
        .map(|cell| {
            cell.map(|date| {
                let is_start = snapshot.range.start() == Some(date);
                let is_end = snapshot.range.end() == Some(date);
                DayCell {
                    date,
                    disabled: snapshot.bounds.is_disabled(date),
                    today: date == snapshot.today,
                    focused: date == snapshot.focus.date(),
                    selected: snapshot.selected == Some(date) || is_start || is_end,
                    in_range: snapshot.range.contains(date),
                    is_start,
                    is_end,
                }
            })
        })
        .collect()
}
