//! Snapshots compared by the synchronizer on every update.
//!
//! The search provider reports each transition as a pair of snapshots of its own
//! state (`query`, `filters`) and of the host props (`pathname`, `base_url`).
//! The previous half is absent on the first (mount) update, which therefore
//! counts as a change of everything.

use crate::domain::FilterList;

/// Provider-owned search state.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    pub query: String,
    pub filters: FilterList,
}

impl SearchSnapshot {
    #[must_use]
    pub fn new(query: impl Into<String>, filters: FilterList) -> Self {
        Self {
            query: query.into(),
            filters,
        }
    }

    /// `true` iff the query is non-empty or any filter is active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || !self.filters.is_empty()
    }
}

/// Host-supplied props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostProps {
    pub pathname: String,
    pub base_url: String,
}

impl HostProps {
    #[must_use]
    pub fn new(pathname: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            base_url: base_url.into(),
        }
    }
}

/// A previous/current pair. `prev` is `None` on the first update.
#[derive(Debug, Clone)]
pub struct Change<T> {
    pub prev: Option<T>,
    pub current: T,
}

impl<T> Change<T> {
    pub const fn new(prev: Option<T>, current: T) -> Self {
        Self { prev, current }
    }

    pub const fn initial(current: T) -> Self {
        Self {
            prev: None,
            current,
        }
    }
}

/// One provider update as seen by the synchronizer.
#[derive(Debug, Clone)]
pub struct Update {
    pub state: Change<SearchSnapshot>,
    pub props: Change<HostProps>,
}

impl Update {
    #[must_use]
    pub const fn new(state: Change<SearchSnapshot>, props: Change<HostProps>) -> Self {
        Self { state, props }
    }

    /// Pathname differs from the previous props (always true without previous props).
    #[must_use]
    pub fn path_changed(&self) -> bool {
        self.props
            .prev
            .as_ref()
            .map_or(true, |prev| prev.pathname != self.props.current.pathname)
    }

    /// The filter list was replaced (identity comparison).
    #[must_use]
    pub fn filters_changed(&self) -> bool {
        self.state
            .prev
            .as_ref()
            .map_or(true, |prev| !prev.filters.same_list(&self.state.current.filters))
    }

    #[must_use]
    pub fn query_changed(&self) -> bool {
        self.state
            .prev
            .as_ref()
            .map_or(true, |prev| prev.query != self.state.current.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterSelection;

    #[test]
    fn first_update_changes_everything() {
        let update = Update::new(
            Change::initial(SearchSnapshot::default()),
            Change::initial(HostProps::new("/shop", "/shop")),
        );
        assert!(update.path_changed());
        assert!(update.filters_changed());
        assert!(update.query_changed());
    }

    #[test]
    fn shared_filter_list_is_unchanged() {
        let filters = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
        let prev = SearchSnapshot::new("", filters.clone());
        let cur = SearchSnapshot::new("boots", filters);
        let props = HostProps::new("/shop/red", "/shop");
        let update = Update::new(
            Change::new(Some(prev), cur),
            Change::new(Some(props.clone()), props),
        );
        assert!(!update.path_changed());
        assert!(!update.filters_changed());
        assert!(update.query_changed());
    }

    #[test]
    fn active_filters_flag() {
        assert!(!SearchSnapshot::default().has_active_filters());
        assert!(SearchSnapshot::new("x", FilterList::default()).has_active_filters());
        let filters = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
        assert!(SearchSnapshot::new("", filters).has_active_filters());
    }
}
