//! Searchable item model.

use serde::{Deserialize, Serialize};

/// An entry in the searchable list.
///
/// `tags` holds the URL titles of every filter the item satisfies; the
/// reference search engine requires an item to carry the tag of each active
/// filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: Vec::new(),
            favorite: false,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_tag(&self, url_title: &str) -> bool {
        self.tags.iter().any(|t| t == url_title)
    }
}
