//! Search provider layer.
//!
//! # Modules
//!
//! - `backend`: [`SearchHelpers`] and [`SearchProvider`] traits
//! - `catalog`: TOML catalog of dropdowns, filters and items
//! - `memory`: in-memory reference search engine

pub mod backend;
pub mod catalog;
pub mod memory;

pub use backend::{SearchHelpers, SearchProvider};
pub use catalog::{Catalog, CatalogFilter};
pub use memory::InMemorySearch;
