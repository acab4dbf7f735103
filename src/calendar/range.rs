//! Date range selection state machine
//!
//! A range picker cycles through three states as dates are picked:
//!
//! ```text
//! Empty --pick d--> Partial(d) --pick e--> Complete(min(d,e), max(d,e))
//!   ^                                          |
//!   +---------------- clear -------------------+--pick f--> Partial(f)
//! ```
//!
//! Picking a disabled date never changes state.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Inclusive limits on selectable dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateBounds {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl DateBounds {
    /// Bounds with either side optional; `min` after `max` is rejected
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvertedBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// No limits; every date is enabled
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Earliest enabled date
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    /// Latest enabled date
    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Whether `date` falls outside the limits
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// Selection status of a range picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RangeState {
    #[default]
    Empty,
    /// First endpoint picked, waiting for the second
    Partial { start: NaiveDate },
    /// Both endpoints picked, `start <= end`
    Complete { start: NaiveDate, end: NaiveDate },
}

impl RangeState {
    /// Complete state from an existing range in either order
    pub fn seeded(a: NaiveDate, b: NaiveDate) -> Self {
        RangeState::Complete {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// First endpoint, once picked
    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            RangeState::Empty => None,
            RangeState::Partial { start } | RangeState::Complete { start, .. } => Some(start),
        }
    }

    /// Second endpoint of a complete range
    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            RangeState::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Nothing picked yet
    pub fn is_empty(&self) -> bool {
        matches!(self, RangeState::Empty)
    }

    /// Both endpoints picked
    pub fn is_complete(&self) -> bool {
        matches!(self, RangeState::Complete { .. })
    }

    /// Endpoints as optional dates
    pub fn as_range(&self) -> DateRange {
        DateRange {
            start: self.start(),
            end: self.end(),
        }
    }

    /// Whether `date` lies within a complete range, endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            RangeState::Complete { start, end } => start <= date && date <= end,
            _ => false,
        }
    }

    /// Whether `date` is a picked endpoint
    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start() == Some(date) || self.end() == Some(date)
    }

    /// Apply a pick; see [`select_date`]
    pub fn select(self, date: NaiveDate, bounds: &DateBounds) -> Self {
        select_date(self, date, bounds)
    }
}

/// Plain start/end view of a range, as handed to callers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl From<RangeState> for DateRange {
    fn from(state: RangeState) -> Self {
        state.as_range()
    }
}

/// Transition for a picked date
pub fn select_date(state: RangeState, date: NaiveDate, bounds: &DateBounds) -> RangeState {
    if bounds.is_disabled(date) {
        debug!(%date, "ignoring disabled date");
        return state;
    }

    let next = match state {
        RangeState::Empty | RangeState::Complete { .. } => RangeState::Partial { start: date },
        RangeState::Partial { start } => RangeState::seeded(start, date),
    };
    trace!(%date, from = ?state, to = ?next, "range selection");
    next
}

/// Reset to no selection
pub fn clear_range() -> RangeState {
    RangeState::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn march() -> DateBounds {
        DateBounds::new(Some(day(1)), Some(day(31))).unwrap()
    }

    #[test]
    fn test_picks_normalize_order() {
        let state = select_date(RangeState::Empty, day(10), &march());
        assert_eq!(state, RangeState::Partial { start: day(10) });

        let state = select_date(state, day(5), &march());
        assert_eq!(
            state,
            RangeState::Complete {
                start: day(5),
                end: day(10)
            }
        );
    }

    #[test]
    fn test_same_day_range() {
        let state = RangeState::Empty
            .select(day(7), &march())
            .select(day(7), &march());
        assert_eq!(state, RangeState::seeded(day(7), day(7)));
        assert!(state.contains(day(7)));
    }

    #[test]
    fn test_complete_restarts() {
        let state = RangeState::seeded(day(3), day(9)).select(day(20), &march());
        assert_eq!(state, RangeState::Partial { start: day(20) });
    }

    #[test]
    fn test_disabled_date_is_ignored() {
        let bounds = DateBounds::new(Some(day(5)), Some(day(25))).unwrap();
        assert_eq!(
            select_date(RangeState::Empty, day(2), &bounds),
            RangeState::Empty
        );

        let partial = RangeState::Partial { start: day(10) };
        assert_eq!(select_date(partial, day(28), &bounds), partial);

        // Endpoints themselves are enabled
        assert!(!bounds.is_disabled(day(5)));
        assert!(!bounds.is_disabled(day(25)));
    }

    #[test]
    fn test_open_bounds() {
        let bounds = DateBounds::new(Some(day(10)), None).unwrap();
        assert!(bounds.is_disabled(day(9)));
        assert!(!bounds.is_disabled(NaiveDate::MAX));
        assert!(!DateBounds::unbounded().is_disabled(NaiveDate::MIN));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = DateBounds::new(Some(day(20)), Some(day(10))).unwrap_err();
        assert!(matches!(err, Error::InvertedBounds { .. }));
    }

    #[test]
    fn test_clear() {
        assert_eq!(clear_range(), RangeState::Empty);
        assert!(clear_range().is_empty());
    }

    #[test]
    fn test_accessors() {
        let state = RangeState::seeded(day(12), day(4));
        assert_eq!(state.start(), Some(day(4)));
        assert_eq!(state.end(), Some(day(12)));
        assert!(state.is_endpoint(day(12)));
        assert!(!state.is_endpoint(day(8)));
        assert!(state.contains(day(8)));
        assert!(!state.contains(day(13)));

        let partial = RangeState::Partial { start: day(4) };
        assert_eq!(
            DateRange::from(partial),
            DateRange {
                start: Some(day(4)),
                end: None
            }
        );
        assert!(!partial.contains(day(4)));
        assert!(partial.is_endpoint(day(4)));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(RangeState::seeded(day(1), day(2))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"state": "complete", "start": "2024-03-01", "end": "2024-03-02"})
        );
        let back: RangeState = serde_json::from_value(json).unwrap();
        assert!(back.is_complete());
    }

    fn any_day() -> impl Strategy<Value = NaiveDate> {
        (1u32..=31).prop_map(day)
    }

    proptest::proptest! {
        #[test]
        fn prop_two_picks_are_ordered(a in any_day(), b in any_day()) {
            let state = RangeState::Empty.select(a, &march()).select(b, &march());
            prop_assert_eq!(state.start(), Some(a.min(b)));
            prop_assert_eq!(state.end(), Some(a.max(b)));
        }

        #[test]
        fn prop_disabled_never_transitions(
            picks in proptest::collection::vec(any_day(), 0..6),
            blocked in 1u32..=9,
        ) {
            let bounds = DateBounds::new(Some(day(10)), Some(day(31))).unwrap();
            let mut state = RangeState::Empty;
            for d in picks {
                state = state.select(d, &bounds);
            }
            prop_assert_eq!(state.select(day(blocked), &bounds), state);
        }
    }
}
