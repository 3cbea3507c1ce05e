//! Derived display state and pagination rules.
//!
//! [`DisplayState`] is non-authoritative: it is recomputed from the provider's
//! query and filters. The only field with its own history is
//! `items_filtered_limit`, which grows with "load more" and is reset to the
//! default only when the query or the filter set changes.

use serde::Serialize;

/// Default number of filtered items shown.
pub const DEFAULT_ITEMS_LIMIT: usize = 24;

/// Items added per "load more".
pub const ITEMS_LIMIT_INCREMENT: usize = 24;

/// Pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub default_limit: usize,
    pub increment: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_ITEMS_LIMIT,
            increment: ITEMS_LIMIT_INCREMENT,
        }
    }
}

/// Heading, pagination limit and active-filter flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// Empty until first computed.
    pub page_heading: String,
    pub items_filtered_limit: usize,
    pub has_active_filters: bool,
}

impl DisplayState {
    /// Initial state at mount.
    #[must_use]
    pub fn new(pagination: Pagination) -> Self {
        Self {
            page_heading: String::new(),
            items_filtered_limit: pagination.default_limit,
            has_active_filters: false,
        }
    }

    /// Raises the limit by `pagination.increment`. No upper bound.
    pub fn load_more(&mut self, pagination: Pagination) {
        self.items_filtered_limit = self.items_filtered_limit.saturating_add(pagination.increment);
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(Pagination::default())
    }
}
