//! Filter domain model.
//!
//! A [`FilterSelection`] is one active facet value. It is identified by its
//! `url_title`, which is also the path segment it contributes to the URL. The
//! human label and the owning [`Dropdown`] come from the search provider's own
//! catalog, never from the URL.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A category of mutually-filterable facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dropdown {
    /// Stable key, used when building heading metadata.
    pub id: String,
    /// Human label for the category.
    pub name: String,
}

/// Reference from a filter to the dropdown it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropdownRef {
    pub id: String,
}

/// One active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// URL-safe title; stable identity and URL path segment.
    pub url_title: String,
    /// Human label.
    pub display_name: String,
    /// Dropdown this filter is grouped under.
    pub from_dropdown: DropdownRef,
}

impl FilterSelection {
    #[must_use]
    pub fn new(
        url_title: impl Into<String>,
        display_name: impl Into<String>,
        dropdown_id: impl Into<String>,
    ) -> Self {
        Self {
            url_title: url_title.into(),
            display_name: display_name.into(),
            from_dropdown: DropdownRef {
                id: dropdown_id.into(),
            },
        }
    }
}

/// The argument of `addFilter`: only the URL title is known when seeding from a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRef {
    pub url_title: String,
}

impl FilterRef {
    #[must_use]
    pub fn new(url_title: impl Into<String>) -> Self {
        Self {
            url_title: url_title.into(),
        }
    }
}

/// Shared, immutable list of active filters.
///
/// Cloning shares the same allocation. Two lists are considered "the same
/// filters" only when they share an allocation ([`FilterList::same_list`]); a
/// provider signals a filter change by building a new list.
#[derive(Debug, Clone)]
pub struct FilterList(Arc<[FilterSelection]>);

impl FilterList {
    #[must_use]
    pub fn new(filters: Vec<FilterSelection>) -> Self {
        Self(filters.into())
    }

    /// Identity comparison: `true` iff both handles point at the same list.
    #[must_use]
    pub fn same_list(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// URL titles in selection order.
    pub fn url_titles(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.url_title.as_str())
    }
}

impl Default for FilterList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for FilterList {
    type Target = [FilterSelection];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<FilterSelection>> for FilterList {
    fn from(filters: Vec<FilterSelection>) -> Self {
        Self::new(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let list = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
        let shared = list.clone();
        assert!(list.same_list(&shared));
    }

    #[test]
    fn equal_contents_are_not_the_same_list() {
        let a = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
        let b = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
        assert!(!a.same_list(&b));
        assert_eq!(&*a, &*b);
    }
}
