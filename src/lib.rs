//! Content finder: keeps a searchable, filterable item list in sync with the URL.
//!
//! The crate provides:
//! - A filter-location synchronizer that seeds filters from the URL path and
//!   rewrites the URL when filters change, without the two directions feeding
//!   each other
//! - A canonical URL filter segment codec (`{base_url}/{title}/{title}...`)
//! - Derived display state: page heading, active-filter flag and a paginated
//!   "filtered items" window
//! - A catalog-backed reference search engine with fuzzy query matching
//! - A `content-finder` CLI that replays event scripts against a catalog

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Script replay
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Driver (finder)                                    │  ← Update cycle
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Snapshot diffing and transition planning         │
//! │  - Action execution                                 │
//! │  - Observable display state                         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Provider      │   │ Router        │   │ UI            │
//! │ (provider/)   │   │ (router)      │   │ (ui/)         │
//! │ - Catalog     │   │ - navigate    │   │ - View model  │
//! │ - Search      │   │ - Document    │   │ - Text render │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, codec and headings                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: synchronizer state machine with snapshot/action model
//! - [`codec`]: URL filter segment encoding and parsing
//! - [`domain`]: filters, items, errors
//! - [`finder`]: driver wiring provider, router and document
//! - [`headings`]: heading and meta description builders
//! - [`provider`]: search engine port and in-memory implementation
//! - [`router`]: navigation and document ports
//! - [`ui`]: view model and renderer
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! ```toml
//! base_url = "/shop"
//! page_size = 24
//! page_increment = 24
//! heading_template = "{color} {size} Shoes"
//! description_template = "Browse {all} shoes"
//! trace_level = "debug"
//! trace_file = "/tmp/content-finder.log"
//! ```

pub mod app;
pub mod codec;
pub mod domain;
pub mod finder;
pub mod headings;
pub mod provider;
pub mod router;
pub mod ui;

pub mod observability;

pub use app::{Action, DisplayState, Synchronizer};
pub use domain::{FinderError, Result};
pub use finder::ContentFinder;

use app::{Pagination, DEFAULT_ITEMS_LIMIT, ITEMS_LIMIT_INCREMENT};
use headings::TemplateHeadings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Finder configuration, usually read from a TOML file.
///
/// Missing keys take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path prefix under which filter segments live. May be empty.
    ///
    /// Read as a pattern when stripping it from a pathname.
    pub base_url: String,

    /// Filtered items shown before any "load more". Default: 24
    pub page_size: usize,

    /// Items added per "load more". Default: 24
    pub page_increment: usize,

    /// Heading template, see [`TemplateHeadings`]. Default: `"{all}"`
    pub heading_template: String,

    /// Meta description template. Default: empty (no description).
    pub description_template: String,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// Log file; stderr when unset.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_size: DEFAULT_ITEMS_LIMIT,
            page_increment: ITEMS_LIMIT_INCREMENT,
            heading_template: "{all}".to_string(),
            description_template: String::new(),
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use content_finder::Config;
    ///
    /// let config = Config::from_toml_str("base_url = \"/shop\"\npage_size = 12")?;
    /// assert_eq!(config.base_url, "/shop");
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.page_increment, 24);
    /// # Ok::<(), content_finder::FinderError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Toml`] on malformed input and [`FinderError::Config`]
    /// on invalid values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// # Errors
    ///
    /// Returns [`FinderError::Config`] if a pagination value is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(FinderError::Config("page_size must be non-zero".to_string()));
        }
        if self.page_increment == 0 {
            return Err(FinderError::Config(
                "page_increment must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination {
            default_limit: self.page_size,
            increment: self.page_increment,
        }
    }

    #[must_use]
    pub fn headings(&self) -> TemplateHeadings {
        TemplateHeadings::new(&self.heading_template, &self.description_template)
    }
}
