//! View model types representing renderable finder state.
//!
//! View models are computed from the display state and the provider's filtered
//! items. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use content_finder::app::DisplayState;
//! use content_finder::domain::Item;
//! use content_finder::ui::{FinderViewModel, ViewMode};
//!
//! let items = vec![Item::new("1", "Boot")];
//! let vm = FinderViewModel::compute(&DisplayState::default(), &items);
//! assert_eq!(vm.mode, ViewMode::Browse);
//! assert_eq!(vm.cards.len(), 1);
//! ```

use crate::app::DisplayState;
use crate::domain::Item;
use serde::Serialize;

/// Which surface is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Query or filters active: the paginated filtered view is shown.
    Filtered,
    /// Nothing active: the host's default content is shown.
    Browse,
}

/// One card in the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardInfo {
    pub id: String,
    pub title: String,
    pub favorite: bool,
}

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinderViewModel {
    pub page_heading: String,
    pub mode: ViewMode,
    /// First `items_filtered_limit` filtered items.
    pub cards: Vec<CardInfo>,
    /// Number of filtered items before the limit.
    pub total_matches: usize,
    /// Whether a "load more" control should be offered.
    pub has_more: bool,
}

impl FinderViewModel {
    #[must_use]
    pub fn compute(display: &DisplayState, filtered_items: &[Item]) -> Self {
        let limit = display.items_filtered_limit;
        let cards = filtered_items
            .iter()
            .take(limit)
            .map(|item| CardInfo {
                id: item.id.clone(),
                title: item.title.clone(),
                favorite: item.favorite,
            })
            .collect();

        Self {
            page_heading: display.page_heading.clone(),
            mode: if display.has_active_filters {
                ViewMode::Filtered
            } else {
                ViewMode::Browse
            },
            cards,
            total_matches: filtered_items.len(),
            has_more: filtered_items.len() > limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(i.to_string(), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn window_is_capped_by_limit() {
        let display = DisplayState {
            page_heading: "All".to_string(),
            items_filtered_limit: 24,
            has_active_filters: true,
        };
        let vm = FinderViewModel::compute(&display, &items(30));
        assert_eq!(vm.cards.len(), 24);
        assert_eq!(vm.total_matches, 30);
        assert!(vm.has_more);
        assert_eq!(vm.mode, ViewMode::Filtered);
    }

    #[test]
    fn exact_fit_has_no_more() {
        let display = DisplayState::default();
        let vm = FinderViewModel::compute(&display, &items(24));
        assert!(!vm.has_more);
        assert_eq!(vm.cards.len(), 24);
    }
}
