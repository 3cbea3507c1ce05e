//! Search provider abstraction.
//!
//! The search engine that turns a query and a filter set into a filtered item
//! list is a collaborator, not part of the synchronizer. [`SearchHelpers`] is the
//! narrow capability handed to the synchronizer on every update; the wider
//! [`SearchProvider`] adds the operations the host UI drives directly.
//!
//! Implementations signal a filter change by replacing their
//! [`FilterList`](crate::domain::FilterList); an operation that leaves the
//! active filters as they were must keep the same list.

use crate::app::SearchSnapshot;
use crate::domain::{FilterRef, Item};

/// Capability passed to the synchronizer with each update.
pub trait SearchHelpers {
    /// Activates the catalog filter with this URL title, if it exists.
    fn add_filter(&mut self, filter: &FilterRef);

    /// Clears the query and every active filter.
    fn reset_search_state(&mut self);

    /// Current query and filters.
    fn snapshot(&self) -> SearchSnapshot;
}

/// Full search engine surface used by the host.
///
/// # Implementations
///
/// - [`InMemorySearch`](crate::provider::InMemorySearch): catalog-backed, fuzzy query matching
pub trait SearchProvider: SearchHelpers {
    fn set_query(&mut self, query: &str);

    /// Deactivates the filter with this URL title. Returns `false` if it was not active.
    fn remove_filter(&mut self, url_title: &str) -> bool;

    /// Flips the favorite flag of an item. Returns `false` for unknown ids.
    fn toggle_favorite(&mut self, item_id: &str) -> bool;

    /// Items matching the current query and filters.
    fn filtered_items(&self) -> &[Item];
}
