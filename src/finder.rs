//! Content finder driver.
//!
//! [`ContentFinder`] wires a [`SearchProvider`], a [`Router`] and a [`Document`]
//! to a [`Synchronizer`] and plays the role of the host UI's commit cycle: after
//! every user operation it fires one update per observed transition, feeding
//! the previous snapshot back in, until an update produces no actions.
//!
//! The echo update that follows a display change is fired too, and is expected
//! to plan nothing; this is where the recompute guard of the transition
//! function keeps the loop finite.
//!
//! # Example
//!
//! ```rust
//! use content_finder::{Config, ContentFinder};
//! use content_finder::headings::TemplateHeadings;
//! use content_finder::provider::{Catalog, InMemorySearch};
//! use content_finder::router::{HistoryRouter, RecordingDocument, Router};
//!
//! let config = Config { base_url: "/shop".to_string(), ..Config::default() };
//! let mut finder = ContentFinder::new(
//!     &config,
//!     InMemorySearch::new(Catalog::default()),
//!     HistoryRouter::new("/shop"),
//!     RecordingDocument::default(),
//!     TemplateHeadings::new("{all} Shoes", ""),
//! );
//! finder.mount()?;
//! finder.set_query("boot")?;
//! assert_eq!(finder.router().pathname(), "/shop");
//! assert!(finder.display().has_active_filters);
//! # Ok::<(), content_finder::FinderError>(())
//! ```

use crate::app::{Action, Change, DisplayState, HostProps, Ports, SearchSnapshot, Synchronizer, Update};
use crate::domain::{FilterRef, FinderError, Result};
use crate::headings::HeadingBuilder;
use crate::provider::{SearchHelpers, SearchProvider};
use crate::router::{Document, Router};
use crate::ui::FinderViewModel;
use crate::Config;

/// Upper bound on updates fired for one operation.
const MAX_SETTLE_PASSES: usize = 16;

/// Synchronizer plus its collaborators.
#[derive(Debug)]
pub struct ContentFinder<P, R, D> {
    provider: P,
    router: R,
    document: D,
    sync: Synchronizer,
    base_url: String,
    last_state: Option<SearchSnapshot>,
    last_props: Option<HostProps>,
}

impl<P, R, D> ContentFinder<P, R, D>
where
    P: SearchProvider,
    R: Router,
    D: Document,
{
    pub fn new(
        config: &Config,
        provider: P,
        router: R,
        document: D,
        headings: impl HeadingBuilder + 'static,
    ) -> Self {
        Self {
            provider,
            router,
            document,
            sync: Synchronizer::new(headings, config.pagination()),
            base_url: config.base_url.clone(),
            last_state: None,
            last_props: None,
        }
    }

    /// Fires the initial update (no previous snapshots) and settles.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::UnsettledUpdates`] if updates never settle.
    pub fn mount(&mut self) -> Result<()> {
        tracing::debug!(pathname = %self.router.pathname(), base_url = %self.base_url, "mounting content finder");
        self.last_state = None;
        self.last_props = None;
        self.settle()
    }

    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn set_query(&mut self, query: &str) -> Result<()> {
        self.provider.set_query(query);
        self.settle()
    }

    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn add_filter(&mut self, url_title: &str) -> Result<()> {
        self.provider.add_filter(&FilterRef::new(url_title));
        self.settle()
    }

    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn remove_filter(&mut self, url_title: &str) -> Result<()> {
        self.provider.remove_filter(url_title);
        self.settle()
    }

    /// Clears query and filters.
    ///
    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn reset_search(&mut self) -> Result<()> {
        self.provider.reset_search_state();
        self.settle()
    }

    /// Marks or unmarks an item as favorite; pagination is kept.
    ///
    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn toggle_favorite(&mut self, item_id: &str) -> Result<()> {
        if !self.provider.toggle_favorite(item_id) {
            tracing::debug!(item_id = %item_id, "unknown item");
        }
        self.settle()
    }

    /// Navigation initiated outside the finder (address bar, history, links).
    ///
    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn visit(&mut self, path: &str) -> Result<()> {
        self.router.navigate(path);
        self.settle()
    }

    /// Goes back in the router's history and settles. Returns `false` at the
    /// start of history, in which case nothing is fired.
    ///
    /// # Errors
    ///
    /// See [`ContentFinder::mount`].
    pub fn back(&mut self) -> Result<bool> {
        if !self.router.back() {
            return Ok(false);
        }
        self.settle()?;
        Ok(true)
    }

    pub fn load_more(&mut self) {
        self.sync.load_more();
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        self.sync.display()
    }

    pub fn synchronizer_mut(&mut self) -> &mut Synchronizer {
        &mut self.sync
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub const fn router(&self) -> &R {
        &self.router
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn view_model(&self) -> FinderViewModel {
        FinderViewModel::compute(self.sync.display(), self.provider.filtered_items())
    }

    /// Fires updates until one plans no actions.
    fn settle(&mut self) -> Result<()> {
        for pass in 0..MAX_SETTLE_PASSES {
            let actions = self.fire_update();
            tracing::debug!(pass = pass, action_count = actions.len(), "update handled");
            if actions.is_empty() {
                return Ok(());
            }
        }
        tracing::warn!(passes = MAX_SETTLE_PASSES, "updates did not settle");
        Err(FinderError::UnsettledUpdates {
            passes: MAX_SETTLE_PASSES,
        })
    }

    fn fire_update(&mut self) -> Vec<Action> {
        let state = self.provider.snapshot();
        let props = HostProps::new(self.router.pathname(), self.base_url.as_str());

        let update = Update::new(
            Change::new(self.last_state.replace(state.clone()), state),
            Change::new(self.last_props.replace(props.clone()), props),
        );

        let mut ports = Ports {
            helpers: &mut self.provider,
            router: &mut self.router,
            document: &mut self.document,
        };
        self.sync.on_update(&update, &mut ports)
    }
}
