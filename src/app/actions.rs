//! Actions produced by the synchronizer's transition function.
//!
//! Actions bridge the pure transition ([`crate::app::transition::plan`]) and the
//! effectful collaborators: the search provider, the router and the document.
//! An empty action list is the no-op outcome.
//!
//! At most one of [`Action::SeedFiltersFromUrl`] and [`Action::NavigateTo`]
//! appears per update; this keeps "URL sets filters" and "filters set URL" from
//! feeding each other.
//!
//! # Example
//!
//! ```rust
//! use content_finder::app::Action;
//!
//! let actions = vec![Action::NavigateTo("/shop/red".to_string())];
//! assert!(actions[0].is_url_sync());
//! ```

/// Commands emitted for one provider update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Call `add_filter` on the provider once per URL title, in order.
    SeedFiltersFromUrl(Vec<String>),

    /// Push a new location to the router.
    NavigateTo(String),

    /// Replace the derived display state.
    RecomputeDisplay {
        /// Heading built from the active filter names.
        page_heading: String,
        /// Freshly computed active-filter flag.
        has_active_filters: bool,
        /// Reset the pagination limit to its default (query or filters changed).
        reset_limit: bool,
    },

    /// Set the document title.
    SetPageTitle(String),

    /// Set the document meta description.
    SetMetaDescription(String),
}

impl Action {
    /// `true` for the two URL/filter synchronization directions.
    #[must_use]
    pub const fn is_url_sync(&self) -> bool {
        matches!(self, Self::SeedFiltersFromUrl(_) | Self::NavigateTo(_))
    }
}
