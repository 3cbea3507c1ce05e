//! User interface layer.
//!
//! ```text
//! DisplayState + filtered items → FinderViewModel::compute → render_with
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types
//! - [`renderer`]: plain-text renderer used by the CLI

pub mod renderer;
pub mod viewmodel;

pub use renderer::{default_browse, default_card, render_to_string, render_with};
pub use viewmodel::{CardInfo, FinderViewModel, ViewMode};
