//! Error types for the content finder.
//!
//! This module defines the centralized error type [`FinderError`] and a type alias
//! [`Result`] used by the fallible outer surfaces of the crate (configuration,
//! catalog loading, script replay, the settle loop). The synchronization core itself
//! is total and never returns these errors.

use thiserror::Error;

/// The main error type for content finder operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use content_finder::FinderError;
///
/// fn validate() -> Result<(), FinderError> {
///     Err(FinderError::Config("page_size must be non-zero".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FinderError {
    /// The configured base URL could not be used as a path pattern.
    ///
    /// Raised by [`crate::codec::try_url_filter_segment`]. The fail-soft variant
    /// [`crate::codec::url_filter_segment`] maps it to an empty segment.
    #[error("invalid base url pattern {pattern:?}: {source}")]
    InvalidBaseUrl {
        /// The offending base URL.
        pattern: String,
        /// Underlying pattern compilation error.
        #[source]
        source: regex::Error,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The filter catalog is inconsistent (e.g. a filter names an unknown dropdown).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON document could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Updates kept producing changes after the maximum number of settle passes.
    #[error("updates did not settle after {passes} passes")]
    UnsettledUpdates {
        /// Number of update passes that ran.
        passes: usize,
    },
}

/// A specialized `Result` type for content finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
