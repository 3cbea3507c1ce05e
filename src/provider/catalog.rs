//! Filter and item catalog.
//!
//! The catalog is the only source of filter display names and dropdowns: a URL
//! carries nothing but URL titles, which are resolved here.
//!
//! # File Format
//!
//! ```toml
//! [[dropdowns]]
//! id = "color"
//! name = "Color"
//!
//! [[filters]]
//! url_title = "red"
//! display_name = "Red"
//! dropdown = "color"
//!
//! [[items]]
//! id = "boot-1"
//! title = "Red leather boot"
//! tags = ["red"]
//! ```

use crate::domain::{Dropdown, FilterSelection, FinderError, Item, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A filter as declared in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogFilter {
    pub url_title: String,
    pub display_name: String,
    pub dropdown: String,
}

/// Dropdowns, filters and items known to the search engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub dropdowns: Vec<Dropdown>,
    #[serde(default)]
    pub filters: Vec<CatalogFilter>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalog {
    /// Parses and validates a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Toml`] on malformed TOML and [`FinderError::Catalog`]
    /// if the catalog is inconsistent (see [`Catalog::validate`]).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Catalog::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loading catalog");
        Self::from_toml_str(&source)
    }

    /// Checks that URL titles are unique, non-empty, contain no `/`, and that every
    /// filter names a declared dropdown.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Catalog`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let dropdowns: HashSet<&str> = self.dropdowns.iter().map(|d| d.id.as_str()).collect();
        let mut titles = HashSet::new();

        for filter in &self.filters {
            if filter.url_title.is_empty() || filter.url_title.contains('/') {
                return Err(FinderError::Catalog(format!(
                    "filter url_title {:?} must be a single non-empty path segment",
                    filter.url_title
                )));
            }
            if !titles.insert(filter.url_title.as_str()) {
                return Err(FinderError::Catalog(format!(
                    "duplicate filter url_title {:?}",
                    filter.url_title
                )));
            }
            if !dropdowns.contains(filter.dropdown.as_str()) {
                return Err(FinderError::Catalog(format!(
                    "filter {:?} references unknown dropdown {:?}",
                    filter.url_title, filter.dropdown
                )));
            }
        }
        Ok(())
    }

    /// Resolves a URL title to a full filter selection.
    #[must_use]
    pub fn resolve(&self, url_title: &str) -> Option<FilterSelection> {
        self.filters
            .iter()
            .find(|f| f.url_title == url_title)
            .map(|f| FilterSelection::new(&f.url_title, &f.display_name, &f.dropdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [[dropdowns]]
        id = "color"
        name = "Color"

        [[filters]]
        url_title = "red"
        display_name = "Red"
        dropdown = "color"

        [[items]]
        id = "a"
        title = "Apple"
        tags = ["red"]
    "#;

    #[test]
    fn parses_and_resolves() {
        let catalog = Catalog::from_toml_str(CATALOG).unwrap();
        let red = catalog.resolve("red").unwrap();
        assert_eq!(red.display_name, "Red");
        assert_eq!(red.from_dropdown.id, "color");
        assert!(catalog.resolve("blue").is_none());
        assert!(!catalog.items[0].favorite);
    }

    #[test]
    fn rejects_unknown_dropdown() {
        let source = CATALOG.replace("dropdown = \"color\"", "dropdown = \"size\"");
        assert!(matches!(
            Catalog::from_toml_str(&source),
            Err(FinderError::Catalog(_))
        ));
    }

    #[test]
    fn rejects_slash_in_url_title() {
        let source = CATALOG.replace("url_title = \"red\"", "url_title = \"re/d\"");
        assert!(matches!(
            Catalog::from_toml_str(&source),
            Err(FinderError::Catalog(_))
        ));
    }
}
