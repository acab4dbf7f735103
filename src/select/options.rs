//! Selectable option list with keyboard navigation
//!
//! Provides the state behind a select box:
//! - Optional search query filtering options by label
//! - Active (highlighted) option with clamped j/k navigation
//! - Single or multiple selection, disabled options skipped
//! - Remote options replacing the static ones after an async search
//!
//! # Example
//!
//! ```ignore
//! let mut list = OptionList::new(vec![
//!     SelectOption::new("nl", "Netherlands"),
//!     SelectOption::new("no", "Norway"),
//! ])
//! .with_searchable(true);
//!
//! list.set_query("nor");
//! list.choose_active();
//! assert_eq!(list.selected_labels(), vec!["Norway"]);
//! ```

use super::search::{OptionSearch, SearchHandle, SearchOutcome, SearchProvider};
use crate::event::{Event, EventHandler, Key};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One choice in a select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the option as not selectable
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Select box state
#[derive(Debug, Default)]
pub struct OptionList {
    /// Caller-supplied options
    options: Vec<SelectOption>,

    /// Options from the latest applied search, shadowing `options`
    remote: Option<Vec<SelectOption>>,

    /// Search text as typed
    query: String,

    searchable: bool,
    multiple: bool,

    /// Selected values in selection order
    selected: Vec<String>,

    /// Index into the filtered options
    active: usize,

    search: OptionSearch,
    open: bool,
    focused: bool,
}

impl OptionList {
    /// Create a closed, single-choice list
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Filter options by the typed query
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Allow several values to be selected
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Preselect values; single mode keeps only the first
    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = values.into_iter().map(Into::into).collect();
        if !self.multiple {
            self.selected.truncate(1);
        }
        self
    }

    /// Options currently in effect: search results if any, else the static ones
    pub fn options(&self) -> &[SelectOption] {
        self.remote.as_deref().unwrap_or(&self.options)
    }

    /// Replace the static options
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.clamp_active();
    }

    /// Get the search text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the search text; the highlight returns to the top
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.active = 0;
    }

    /// Options matching the query, in option order
    ///
    /// Matching is case-insensitive containment of the trimmed query in the
    /// label. Without `searchable`, or with a blank query, everything matches.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        let query = self.query.trim().to_lowercase();
        if !self.searchable || query.is_empty() {
            return self.options().iter().collect();
        }
        self.options()
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&query))
            .collect()
    }

    /// Index of the highlighted option in [`OptionList::filtered`]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Get the highlighted option
    pub fn active_option(&self) -> Option<&SelectOption> {
        self.filtered().get(self.active).copied()
    }

    /// Highlight the next option, stopping at the last
    pub fn select_next(&mut self) {
        let last = self.filtered().len().saturating_sub(1);
        self.active = (self.active + 1).min(last);
    }

    /// Highlight the previous option, stopping at the first
    pub fn select_prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Highlight the first option
    pub fn select_first(&mut self) {
        self.active = 0;
    }

    /// Highlight the last option
    pub fn select_last(&mut self) {
        self.active = self.filtered().len().saturating_sub(1);
    }

    fn clamp_active(&mut self) {
        self.active = self.active.min(self.filtered().len().saturating_sub(1));
    }

    /// Choose an option by value
    ///
    /// Single mode replaces the selection and closes the list; multiple mode
    /// toggles the value. Disabled or unknown values are refused.
    pub fn choose(&mut self, value: &str) -> bool {
        let Some(option) = self.options().iter().find(|o| o.value == value) else {
            return false;
        };
        if option.disabled {
            debug!(value, "ignoring disabled option");
            return false;
        }

        if !self.multiple {
            self.selected = vec![value.to_string()];
            self.open = false;
        } else if let Some(pos) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value.to_string());
        }
        true
    }

    /// Choose the highlighted option
    pub fn choose_active(&mut self) -> bool {
        match self.active_option().map(|o| o.value.clone()) {
            Some(value) => self.choose(&value),
            None => false,
        }
    }

    /// Check if a value is selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Selected values in selection order
    pub fn selected_values(&self) -> &[String] {
        &self.selected
    }

    /// Labels of selected values that are among the current options
    pub fn selected_labels(&self) -> Vec<&str> {
        self.options()
            .iter()
            .filter(|o| self.is_selected(&o.value))
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Deselect everything
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Check if the dropdown is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dropdown
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Open or close the dropdown
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Whether a search is in flight
    pub fn is_loading(&self) -> bool {
        self.search.is_loading()
    }

    /// Start a search for the current query
    pub fn begin_search(&mut self) -> SearchHandle {
        self.search.begin(&self.query)
    }

    /// Run the current query through `provider`
    pub fn spawn_search<P>(&mut self, provider: &P) -> BoxFuture<'static, SearchOutcome>
    where
        P: SearchProvider + ?Sized,
    {
        self.search.spawn(provider, &self.query)
    }

    /// Feed a finished search back in; stale outcomes are dropped
    pub fn finish_search(&mut self, outcome: SearchOutcome) -> bool {
        if !self.search.finish(outcome) {
            return false;
        }
        self.remote = self.search.take_results();
        self.clamp_active();
        true
    }

    /// Drop search results and go back to the static options
    pub fn reset_search(&mut self) {
        self.search.cancel();
        self.remote = None;
        self.clamp_active();
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Down => self.select_next(),
            Key::Up => self.select_prev(),
            Key::Char('j') if !self.searchable => self.select_next(),
            Key::Char('k') if !self.searchable => self.select_prev(),
            Key::Home => self.select_first(),
            Key::End => self.select_last(),
            Key::Enter => {
                self.choose_active();
            }
            Key::Esc => self.close(),
            Key::Char(c) if self.searchable => {
                let mut query = std::mem::take(&mut self.query);
                query.push(*c);
                self.set_query(query);
            }
            Key::Backspace if self.searchable => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
            }
            _ => return false,
        }
        true
    }
}

impl EventHandler for OptionList {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) if self.searchable => {
                let query = format!("{}{}", self.query, text);
                self.set_query(query);
                true
            }
            _ => false,
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana").disabled(),
            SelectOption::new("cherry", "Cherry"),
            SelectOption::new("grape", "Grape"),
        ]
    }

    fn key(list: &mut OptionList, key: Key) -> bool {
        list.handle_event(&Event::Key(key))
    }

    #[test]
    fn test_navigation_clamps() {
        let mut list = OptionList::new(fruits());
        list.select_prev();
        assert_eq!(list.active_index(), 0);

        list.select_last();
        list.select_next();
        assert_eq!(list.active_index(), 3);
        assert_eq!(list.active_option().map(|o| o.label.as_str()), Some("Grape"));
    }

    #[test]
    fn test_search_filter() {
        let mut list = OptionList::new(fruits()).with_searchable(true);
        list.set_query("  AP ");
        let labels: Vec<&str> = list.filtered().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Apple", "Grape"]);

        list.set_query("   ");
        assert_eq!(list.filtered().len(), 4);
    }

    #[test]
    fn test_query_ignored_when_not_searchable() {
        let mut list = OptionList::new(fruits());
        list.set_query("zzz");
        assert_eq!(list.filtered().len(), 4);
    }

    #[test]
    fn test_single_choice_replaces_and_closes() {
        let mut list = OptionList::new(fruits());
        list.open();
        assert!(list.choose("apple"));
        assert!(!list.is_open());
        assert!(list.choose("cherry"));
        assert_eq!(list.selected_values(), ["cherry".to_string()]);
    }

    #[test]
    fn test_disabled_and_unknown_refused() {
        let mut list = OptionList::new(fruits());
        assert!(!list.choose("banana"));
        assert!(!list.choose("durian"));
        assert!(list.selected_values().is_empty());
    }

    #[test]
    fn test_multiple_toggles() {
        let mut list = OptionList::new(fruits()).with_multiple(true);
        list.choose("grape");
        list.choose("apple");
        list.choose("cherry");
        list.choose("apple");
        assert_eq!(list.selected_values(), ["grape".to_string(), "cherry".to_string()]);
        // Labels follow option order
        assert_eq!(list.selected_labels(), vec!["Cherry", "Grape"]);
    }

    #[test]
    fn test_with_selected_single_keeps_one() {
        let list = OptionList::new(fruits()).with_selected(["apple", "grape"]);
        assert_eq!(list.selected_labels(), vec!["Apple"]);
    }

    #[test]
    fn test_keys() {
        let mut list = OptionList::new(fruits());
        list.on_focus();
        assert!(key(&mut list, Key::Char('j')));
        assert!(key(&mut list, Key::Char('j')));
        assert!(key(&mut list, Key::Char('k')));
        assert_eq!(list.active_index(), 1);

        // Disabled option stays unselected
        key(&mut list, Key::Enter);
        assert!(list.selected_values().is_empty());

        key(&mut list, Key::Down);
        key(&mut list, Key::Enter);
        assert!(list.is_selected("cherry"));
    }

    #[test]
    fn test_typing_into_searchable_list() {
        let mut list = OptionList::new(fruits()).with_searchable(true);
        list.on_focus();
        key(&mut list, Key::Down);
        for c in "jx".chars() {
            key(&mut list, Key::Char(c));
        }
        assert_eq!(list.query(), "jx");
        assert_eq!(list.active_index(), 0);
        assert!(list.filtered().is_empty());
        assert!(!list.choose_active());

        key(&mut list, Key::Backspace);
        key(&mut list, Key::Backspace);
        list.handle_event(&Event::Paste("rap".into()));
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_blur_closes() {
        let mut list = OptionList::new(fruits());
        list.on_focus();
        list.toggle_open();
        list.on_blur();
        assert!(!list.is_open());
        assert!(!key(&mut list, Key::Down));
    }
}
