//! Select box state
//!
//! [`OptionList`] filters, navigates and selects options. [`OptionSearch`]
//! gates asynchronous search results by generation so only the newest query
//! ever lands.
//!
//! # Example
//!
//! ```ignore
//! let pending = list.begin_search();
//! let outcome = SearchOutcome::new(pending, provider_result);
//! if !list.finish_search(outcome) {
//!     // superseded by a newer query
//! }
//! ```

pub mod options;
pub mod search;

pub use options::{OptionList, SelectOption};
pub use search::{OptionSearch, SearchHandle, SearchOutcome, SearchProvider};
