//! Domain layer for the content finder.
//!
//! Core types shared by every other layer, independent of routing, rendering
//! or the search engine.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Filters, dropdowns and identity-comparable filter lists
//! - [`item`]: Searchable items
//!
//! # Examples
//!
//! ```
//! use content_finder::domain::{FilterList, FilterSelection};
//!
//! let filters = FilterList::new(vec![FilterSelection::new("red", "Red", "color")]);
//! assert_eq!(filters.url_titles().collect::<Vec<_>>(), vec!["red"]);
//! ```

pub mod error;
pub mod filter;
pub mod item;

pub use error::{FinderError, Result};
pub use filter::{Dropdown, DropdownRef, FilterList, FilterRef, FilterSelection};
pub use item::Item;
