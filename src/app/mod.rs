//! Application layer: the filter-location synchronizer.
//!
//! # Architecture
//!
//! ```text
//! Provider update ─→ Update {prev, current} ─→ plan ─→ Vec<Action> ─→ execute
//!        ↑                                                              │
//!        └──── add_filter / navigate / display store change ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: commands emitted by the transition function
//! - [`snapshot`]: previous/current snapshots of search state and host props
//! - [`state`]: display state and pagination rules
//! - [`store`]: observable display state with explicit subscriptions
//! - [`synchronizer`]: executes planned actions against the collaborators
//! - [`transition`]: the pure transition function

pub mod actions;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod synchronizer;
pub mod transition;

pub use actions::Action;
pub use snapshot::{Change, HostProps, SearchSnapshot, Update};
pub use state::{DisplayState, Pagination, DEFAULT_ITEMS_LIMIT, ITEMS_LIMIT_INCREMENT};
pub use store::{DisplayStore, SubscriptionId};
pub use synchronizer::{Ports, Synchronizer};
pub use transition::plan;
