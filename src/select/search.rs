//! Generation-gated async search
//!
//! Every search gets the next generation number. A finished search is only
//! applied while its generation is still the newest one issued, so a slow
//! response to an old query can never overwrite the results of a newer one.
//!
//! ```text
//! begin("a")  -> gen 1 ----------------------------> finish: stale, dropped
//! begin("ab") -> gen 2 ------> finish: applied
//! ```

use super::options::SelectOption;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Source of options for a query
pub trait SearchProvider {
    /// Look up options for `query`. The future must not borrow `self`.
    fn search(&self, query: &str) -> BoxFuture<'static, anyhow::Result<Vec<SelectOption>>>;
}

/// Ticket for one issued search
#[derive(Debug, Clone)]
pub struct SearchHandle {
    generation: u64,
    query: String,
    latest: Arc<AtomicU64>,
}

impl SearchHandle {
    /// Generation number, starting at 1
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Trimmed query this search was issued for
    pub fn query(&self) -> &str {
        &self.query
    }

    /// No newer search has been issued and nothing was cancelled
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}

/// A search that has run to completion
pub struct SearchOutcome {
    pub handle: SearchHandle,
    pub result: anyhow::Result<Vec<SelectOption>>,
}

impl SearchOutcome {
    /// Pair a handle with its provider result
    pub fn new(handle: SearchHandle, result: anyhow::Result<Vec<SelectOption>>) -> Self {
        Self { handle, result }
    }
}

impl fmt::Debug for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOutcome")
            .field("generation", &self.handle.generation)
            .field("query", &self.handle.query)
            .field("ok", &self.result.is_ok())
            .finish()
    }
}

/// Issues search generations and keeps the latest applied results
#[derive(Debug, Default)]
pub struct OptionSearch {
    latest: Arc<AtomicU64>,
    loading: bool,
    results: Option<Vec<SelectOption>>,
}

impl OptionSearch {
    /// Create a gate with nothing issued
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation for `query` (trimmed), superseding all others
    pub fn begin(&mut self, query: &str) -> SearchHandle {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading = true;
        trace!(generation, query, "search started");
        SearchHandle {
            generation,
            query: query.trim().to_string(),
            latest: Arc::clone(&self.latest),
        }
    }

    /// Apply an outcome if it is still current
    ///
    /// Returns true when the results replaced the previous ones. A failed
    /// current search ends loading but keeps the previous results.
    pub fn finish(&mut self, outcome: SearchOutcome) -> bool {
        let SearchOutcome { handle, result } = outcome;
        if !handle.is_current() {
            debug!(
                generation = handle.generation,
                query = %handle.query,
                "discarding stale search result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(options) => {
                trace!(generation = handle.generation, count = options.len(), "search applied");
                self.results = Some(options);
                true
            }
            Err(err) => {
                warn!(query = %handle.query, error = %err, "search failed");
                false
            }
        }
    }

    /// Invalidate every search in flight
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.loading = false;
    }

    /// Begin a search and run it through `provider`
    ///
    /// The returned future resolves to an outcome for [`OptionSearch::finish`].
    pub fn spawn<P>(&mut self, provider: &P, query: &str) -> BoxFuture<'static, SearchOutcome>
    where
        P: SearchProvider + ?Sized,
    {
        let handle = self.begin(query);
        let search = provider.search(handle.query());
        async move {
            let result = search.await;
            SearchOutcome { handle, result }
        }
        .boxed()
    }

    /// Whether the newest search is still outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Most recently applied results
    pub fn results(&self) -> Option<&[SelectOption]> {
        self.results.as_deref()
    }

    /// Move the applied results out
    pub fn take_results(&mut self) -> Option<Vec<SelectOption>> {
        self.results.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::OptionList;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn opts(labels: &[&str]) -> Vec<SelectOption> {
        labels
            .iter()
            .map(|l| SelectOption::new(l.to_lowercase(), *l))
            .collect()
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Provider whose responses are released by the test, one channel per query
    #[derive(Default)]
    struct ChannelProvider {
        pending: Mutex<HashMap<String, oneshot::Receiver<Vec<SelectOption>>>>,
    }

    impl ChannelProvider {
        fn expect(&self, query: &str) -> oneshot::Sender<Vec<SelectOption>> {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().insert(query.to_string(), rx);
            tx
        }
    }

    impl SearchProvider for ChannelProvider {
        fn search(&self, query: &str) -> BoxFuture<'static, anyhow::Result<Vec<SelectOption>>> {
            let rx = self.pending.lock().unwrap().remove(query);
            async move {
                match rx {
                    Some(rx) => Ok(rx.await?),
                    None => anyhow::bail!("no response scripted for query"),
                }
            }
            .boxed()
        }
    }

    #[test]
    fn test_generations_increase() {
        let mut search = OptionSearch::new();
        let first = search.begin("a");
        let second = search.begin(" ab ");
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(second.query(), "ab");
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let provider = ChannelProvider::default();
        let tx_a = provider.expect("a");
        let tx_ab = provider.expect("ab");

        let mut search = OptionSearch::new();
        let slow = search.spawn(&provider, "a");
        let fast = search.spawn(&provider, "ab");

        // Newer query answers first
        tx_ab.send(opts(&["Abby", "Abe"])).unwrap();
        let outcome = block_on(fast);
        assert_eq!(outcome.handle.generation(), 2);
        assert!(search.finish(outcome));
        assert!(!search.is_loading());

        // Older query answers late and must not win
        tx_a.send(opts(&["Adam", "Abby", "Ava"])).unwrap();
        let outcome = block_on(slow);
        assert_eq!(outcome.handle.generation(), 1);
        assert!(!search.finish(outcome));

        assert_eq!(labels(search.results().unwrap()), vec!["Abby", "Abe"]);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut search = OptionSearch::new();
        let first = search.begin("a");
        assert!(search.finish(SearchOutcome::new(first, Ok(opts(&["A"])))));
        let second = search.begin("b");
        assert!(search.finish(SearchOutcome::new(second, Ok(opts(&["B"])))));
        assert_eq!(labels(search.results().unwrap()), vec!["B"]);
    }

    #[test]
    fn test_cancel_invalidates_in_flight() {
        let mut search = OptionSearch::new();
        let handle = search.begin("a");
        search.cancel();
        assert!(!search.is_loading());
        assert!(!search.finish(SearchOutcome::new(handle, Ok(opts(&["A"])))));
        assert!(search.results().is_none());
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let provider = ChannelProvider::default();
        let tx = provider.expect("x");
        let mut search = OptionSearch::new();

        let ok = search.spawn(&provider, "x");
        tx.send(opts(&["Xena"])).unwrap();
        assert!(search.finish(block_on(ok)));

        // Nothing scripted for this query, so the provider fails
        let failed = block_on(search.spawn(&provider, "y"));
        assert!(failed.result.is_err());
        assert!(!search.finish(failed));
        assert!(!search.is_loading());
        assert_eq!(labels(search.results().unwrap()), vec!["Xena"]);
    }

    #[test]
    fn test_dropped_sender_is_an_error() {
        let provider = ChannelProvider::default();
        drop(provider.expect("gone"));
        let mut search = OptionSearch::new();
        let outcome = block_on(search.spawn(&provider, "gone"));
        assert!(outcome.result.is_err());
    }

    #[test]
    fn test_option_list_uses_latest_results() {
        let mut list = OptionList::new(opts(&["Static"])).with_searchable(true);
        list.set_query("a");
        let old = list.begin_search();
        list.set_query("ab");
        let new = list.begin_search();
        assert!(list.is_loading());

        assert!(list.finish_search(SearchOutcome::new(new, Ok(opts(&["Abe"])))));
        assert!(!list.finish_search(SearchOutcome::new(old, Ok(opts(&["Adam"])))));
        assert_eq!(labels(list.options()), vec!["Abe"]);
        assert!(!list.is_loading());

        list.reset_search();
        assert_eq!(labels(list.options()), vec!["Static"]);
    }
}
