//! Filter/location transition function.
//!
//! [`plan`] is the whole synchronization algorithm as a pure function of the
//! current display state and one provider [`Update`]. It classifies the update
//! in priority order:
//!
//! 1. **Path changed** (including the first update): the URL segment after the
//!    base URL is split into titles and emitted as
//!    [`Action::SeedFiltersFromUrl`]. No navigation.
//! 2. **Filters changed, path unchanged**: the filter list is encoded and, unless
//!    it matches the previous encoding or the current location, emitted as
//!    [`Action::NavigateTo`].
//! 3. **Neither**: no URL action.
//!
//! Display state is then recomputed only if filters, query or path changed, or
//! the active-filter flag differs from the stored one. Without this guard the
//! echo update caused by storing the display state would recompute forever.
//!
//! # Example
//!
//! ```rust
//! use content_finder::app::{plan, Action, Change, DisplayState, HostProps, SearchSnapshot, Update};
//! use content_finder::headings::FilterNamesByDropdown;
//!
//! let headings = |_: &FilterNamesByDropdown| "Shoes".to_string();
//! let update = Update::new(
//!     Change::initial(SearchSnapshot::default()),
//!     Change::initial(HostProps::new("/shop/red", "/shop")),
//! );
//! let actions = plan(&DisplayState::default(), &update, &headings);
//! assert_eq!(actions[0], Action::SeedFiltersFromUrl(vec!["red".to_string()]));
//! ```

use super::actions::Action;
use super::snapshot::Update;
use super::state::DisplayState;
use crate::codec;
use crate::headings::{FilterNamesByDropdown, HeadingBuilder};

/// Computes the actions for one provider update.
///
/// The pagination reset is expressed as a flag on [`Action::RecomputeDisplay`]
/// and applied by the executor, which owns the pagination parameters.
#[must_use]
pub fn plan(display: &DisplayState, update: &Update, headings: &dyn HeadingBuilder) -> Vec<Action> {
    let props = &update.props.current;
    let current = &update.state.current;

    let _span = tracing::debug_span!(
        "plan",
        pathname = %props.pathname,
        filter_count = current.filters.len(),
        query_len = current.query.len()
    )
    .entered();

    let path_changed = update.path_changed();
    let filters_changed = update.filters_changed();
    let query_changed = update.query_changed();

    let mut actions = Vec::new();

    if path_changed {
        let segment = codec::url_filter_segment(&props.pathname, &props.base_url);
        let titles = codec::parse_segment(&segment);
        tracing::debug!(segment = %segment, title_count = titles.len(), "path changed, seeding filters");
        if !titles.is_empty() {
            actions.push(Action::SeedFiltersFromUrl(titles));
        }
    } else if filters_changed {
        if let Some(path) = navigation_target(update) {
            tracing::debug!(path = %path, "filters changed, navigating");
            actions.push(Action::NavigateTo(path));
        } else {
            tracing::debug!("filters changed, location already matches");
        }
    }

    let has_active_filters = current.has_active_filters();
    let should_recompute = filters_changed
        || query_changed
        || path_changed
        || has_active_filters != display.has_active_filters;

    if !should_recompute {
        tracing::trace!("display inputs unchanged");
        return actions;
    }

    let names = FilterNamesByDropdown::from_filters(&current.filters);
    let page_heading = headings.page_heading(&names);
    let meta_description = headings.meta_description(&names);
    let reset_limit = query_changed || filters_changed;

    tracing::debug!(
        page_heading = %page_heading,
        has_active_filters = has_active_filters,
        reset_limit = reset_limit,
        "recomputing display state"
    );

    actions.push(Action::RecomputeDisplay {
        page_heading: page_heading.clone(),
        has_active_filters,
        reset_limit,
    });
    actions.push(Action::SetPageTitle(page_heading));
    if let Some(description) = meta_description {
        actions.push(Action::SetMetaDescription(description));
    }

    actions
}

/// Location to navigate to after a local filter change, if any.
fn navigation_target(update: &Update) -> Option<String> {
    let props = &update.props.current;
    let new_segment = codec::encode(&update.state.current.filters);
    let old_segment = update
        .state
        .prev
        .as_ref()
        .map(|prev| codec::encode(&prev.filters));

    if old_segment.as_deref() == Some(new_segment.as_str()) || new_segment == props.pathname {
        return None;
    }

    let mut path = format!("{}{}", props.base_url, new_segment);
    if path.is_empty() {
        path.push('/');
    }
    if path == props.pathname {
        return None;
    }
    Some(path)
}
