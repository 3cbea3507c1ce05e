//! Filter-location synchronizer.
//!
//! Owns the display state and executes the actions planned by
//! [`plan`](super::transition::plan) against its collaborators. The
//! synchronizer never touches provider state directly; it goes through the
//! [`SearchHelpers`] capability handed to it with each update.

use super::actions::Action;
use super::snapshot::Update;
use super::state::{DisplayState, Pagination};
use super::store::DisplayStore;
use super::transition::plan;
use crate::domain::FilterRef;
use crate::headings::HeadingBuilder;
use crate::provider::SearchHelpers;
use crate::router::{Document, Router};
use std::fmt;

/// Collaborators an update may act on.
pub struct Ports<'a> {
    pub helpers: &'a mut dyn SearchHelpers,
    pub router: &'a mut dyn Router,
    pub document: &'a mut dyn Document,
}

/// Reacts to provider updates by syncing filters and URL and recomputing display state.
pub struct Synchronizer {
    store: DisplayStore,
    headings: Box<dyn HeadingBuilder>,
    pagination: Pagination,
}

impl Synchronizer {
    #[must_use]
    pub fn new(headings: impl HeadingBuilder + 'static, pagination: Pagination) -> Self {
        Self {
            store: DisplayStore::new(DisplayState::new(pagination)),
            headings: Box::new(headings),
            pagination,
        }
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        self.store.get()
    }

    /// Store access for subscribing to display changes.
    pub fn store_mut(&mut self) -> &mut DisplayStore {
        &mut self.store
    }

    /// Handles one provider update. Returns the actions that were executed.
    pub fn on_update(&mut self, update: &Update, ports: &mut Ports<'_>) -> Vec<Action> {
        let actions = plan(self.store.get(), update, self.headings.as_ref());
        for action in &actions {
            self.execute_action(action, ports);
        }
        actions
    }

    /// Shows `pagination.increment` more filtered items.
    pub fn load_more(&mut self) {
        let pagination = self.pagination;
        self.store.update(|state| state.load_more(pagination));
        tracing::debug!(
            items_filtered_limit = self.store.get().items_filtered_limit,
            "load more"
        );
    }

    fn execute_action(&mut self, action: &Action, ports: &mut Ports<'_>) {
        match action {
            Action::SeedFiltersFromUrl(titles) => {
                for title in titles {
                    ports.helpers.add_filter(&FilterRef::new(title.as_str()));
                }
            }
            Action::NavigateTo(path) => ports.router.navigate(path),
            Action::RecomputeDisplay {
                page_heading,
                has_active_filters,
                reset_limit,
            } => {
                let default_limit = self.pagination.default_limit;
                self.store.update(|state| {
                    state.page_heading.clone_from(page_heading);
                    state.has_active_filters = *has_active_filters;
                    if *reset_limit {
                        state.items_filtered_limit = default_limit;
                    }
                });
            }
            Action::SetPageTitle(title) => ports.document.set_title(title),
            Action::SetMetaDescription(description) => {
                ports.document.set_meta_description(description);
            }
        }
    }
}

impl fmt::Debug for Synchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronizer")
            .field("store", &self.store)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}
