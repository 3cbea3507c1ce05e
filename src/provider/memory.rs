//! In-memory search engine over a [`Catalog`].
//!
//! # Filtering Algorithm
//!
//! 1. **Filter Match**: an item must carry the tag of every active filter
//! 2. **Query Tokenization**: split the query on whitespace, lowercase
//! 3. **Token Matching**: every token must fuzzy-match the lowercased title
//!
//! Catalog order is preserved. A dropdown holds at most one active filter:
//! adding a second filter from the same dropdown replaces the first in place.

use super::backend::{SearchHelpers, SearchProvider};
use super::catalog::Catalog;
use crate::app::SearchSnapshot;
use crate::domain::{FilterList, FilterRef, Item};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Catalog-backed [`SearchProvider`].
#[derive(Debug)]
pub struct InMemorySearch {
    catalog: Catalog,
    query: String,
    filters: FilterList,
    filtered: Vec<Item>,
}

impl InMemorySearch {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut search = Self {
            catalog,
            query: String::new(),
            filters: FilterList::default(),
            filtered: Vec::new(),
        };
        search.apply_search_filter();
        search
    }

    fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_items = self.catalog.items.len(),
            query_len = self.query.len(),
            filter_count = self.filters.len()
        )
        .entered();

        let tokens: Vec<String> = self
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let filters = &self.filters;
        self.filtered = self
            .catalog
            .items
            .iter()
            .filter(|item| filters.url_titles().all(|title| item.has_tag(title)))
            .filter(|item| {
                matcher.as_ref().map_or(true, |m| {
                    let title = item.title.to_lowercase();
                    tokens.iter().all(|token| m.fuzzy_match(&title, token).is_some())
                })
            })
            .cloned()
            .collect();

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }
}

impl SearchHelpers for InMemorySearch {
    fn add_filter(&mut self, filter: &FilterRef) {
        let Some(selection) = self.catalog.resolve(&filter.url_title) else {
            tracing::debug!(url_title = %filter.url_title, "unknown filter, ignoring");
            return;
        };

        if self.filters.iter().any(|f| *f == selection) {
            tracing::trace!(url_title = %selection.url_title, "filter already active");
            return;
        }

        let mut next: Vec<_> = self.filters.to_vec();
        if let Some(slot) = next
            .iter_mut()
            .find(|f| f.from_dropdown == selection.from_dropdown)
        {
            tracing::debug!(
                replaced = %slot.url_title,
                url_title = %selection.url_title,
                "replacing filter in dropdown"
            );
            *slot = selection;
        } else {
            tracing::debug!(url_title = %selection.url_title, "adding filter");
            next.push(selection);
        }

        self.filters = FilterList::new(next);
        self.apply_search_filter();
    }

    fn reset_search_state(&mut self) {
        if self.query.is_empty() && self.filters.is_empty() {
            return;
        }
        self.query.clear();
        self.filters = FilterList::default();
        self.apply_search_filter();
    }

    fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot::new(self.query.clone(), self.filters.clone())
    }
}

impl SearchProvider for InMemorySearch {
    fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.apply_search_filter();
    }

    fn remove_filter(&mut self, url_title: &str) -> bool {
        if !self.filters.url_titles().any(|t| t == url_title) {
            return false;
        }
        let next = self
            .filters
            .iter()
            .filter(|f| f.url_title != url_title)
            .cloned()
            .collect();
        self.filters = FilterList::new(next);
        self.apply_search_filter();
        true
    }

    fn toggle_favorite(&mut self, item_id: &str) -> bool {
        let Some(item) = self.catalog.items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };
        item.favorite = !item.favorite;
        tracing::debug!(item_id = %item_id, favorite = item.favorite, "favorite toggled");
        self.apply_search_filter();
        true
    }

    fn filtered_items(&self) -> &[Item] {
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dropdown;
    use crate::provider::catalog::CatalogFilter;

    fn catalog() -> Catalog {
        let dropdown = |id: &str| Dropdown {
            id: id.to_string(),
            name: id.to_string(),
        };
        let filter = |t: &str, d: &str| CatalogFilter {
            url_title: t.to_string(),
            display_name: t.to_uppercase(),
            dropdown: d.to_string(),
        };
        Catalog {
            dropdowns: vec![dropdown("color"), dropdown("size")],
            filters: vec![filter("red", "color"), filter("blue", "color"), filter("large", "size")],
            items: vec![
                Item::new("1", "Red boot").with_tags(["red", "large"]),
                Item::new("2", "Blue boot").with_tags(["blue"]),
                Item::new("3", "Red scarf").with_tags(["red"]),
            ],
        }
    }

    fn ids(search: &InMemorySearch) -> Vec<&str> {
        search.filtered_items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn filters_by_tags() {
        let mut search = InMemorySearch::new(catalog());
        assert_eq!(ids(&search), vec!["1", "2", "3"]);
        search.add_filter(&FilterRef::new("red"));
        assert_eq!(ids(&search), vec!["1", "3"]);
        search.add_filter(&FilterRef::new("large"));
        assert_eq!(ids(&search), vec!["1"]);
    }

    #[test]
    fn query_tokens_all_match() {
        let mut search = InMemorySearch::new(catalog());
        search.set_query("red boot");
        assert_eq!(ids(&search), vec!["1"]);
    }

    #[test]
    fn same_dropdown_replaces_in_place() {
        let mut search = InMemorySearch::new(catalog());
        search.add_filter(&FilterRef::new("red"));
        search.add_filter(&FilterRef::new("large"));
        search.add_filter(&FilterRef::new("blue"));
        let titles: Vec<String> = search
            .snapshot()
            .filters
            .url_titles()
            .map(String::from)
            .collect();
        assert_eq!(titles, vec!["blue", "large"]);
    }

    #[test]
    fn re_adding_keeps_list_identity() {
        let mut search = InMemorySearch::new(catalog());
        search.add_filter(&FilterRef::new("red"));
        let before = search.snapshot().filters;
        search.add_filter(&FilterRef::new("red"));
        search.add_filter(&FilterRef::new("nope"));
        assert!(before.same_list(&search.snapshot().filters));
    }

    #[test]
    fn favorite_toggle_keeps_filters() {
        let mut search = InMemorySearch::new(catalog());
        search.add_filter(&FilterRef::new("red"));
        let before = search.snapshot().filters;
        assert!(search.toggle_favorite("3"));
        assert!(search.filtered_items()[1].favorite);
        assert!(before.same_list(&search.snapshot().filters));
        assert!(!search.toggle_favorite("missing"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut search = InMemorySearch::new(catalog());
        search.add_filter(&FilterRef::new("red"));
        search.set_query("scarf");
        search.reset_search_state();
        let snapshot = search.snapshot();
        assert!(!snapshot.has_active_filters());
        assert_eq!(search.filtered_items().len(), 3);
    }

    #[test]
    fn remove_filter_reports_absence() {
        let mut search = InMemorySearch::new(catalog());
        assert!(!search.remove_filter("red"));
        search.add_filter(&FilterRef::new("red"));
        assert!(search.remove_filter("red"));
        assert!(search.snapshot().filters.is_empty());
    }
}
