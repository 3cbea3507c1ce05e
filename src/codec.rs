//! URL filter segment codec.
//!
//! The active filter set is encoded in the URL as one path segment per filter,
//! in selection order:
//!
//! ```text
//! {base_url}/{url_title_1}/{url_title_2}/...
//! ```
//!
//! No filters yields the bare `base_url`. Parsing can only recover the URL
//! titles; display names and dropdowns come from the search provider's catalog.
//!
//! # Example
//!
//! ```rust
//! use content_finder::codec::{encode, parse_segment, url_filter_segment};
//! use content_finder::domain::FilterSelection;
//!
//! let filters = vec![
//!     FilterSelection::new("red", "Red", "color"),
//!     FilterSelection::new("large", "Large", "size"),
//! ];
//! assert_eq!(encode(&filters), "/red/large");
//!
//! let segment = url_filter_segment("/shop/red/large", "/shop");
//! assert_eq!(parse_segment(&segment), vec!["red", "large"]);
//! ```

use crate::domain::{FilterSelection, FinderError, Result};
use regex::{NoExpand, Regex};

/// Encodes filters as a URL segment: `""` when empty, else `"/" + titles.join("/")`.
#[must_use]
pub fn encode(filters: &[FilterSelection]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let titles: Vec<&str> = filters.iter().map(|f| f.url_title.as_str()).collect();
    format!("/{}", titles.join("/"))
}

/// Splits a segment on `/`, discarding empty tokens.
#[must_use]
pub fn parse_segment(segment: &str) -> Vec<String> {
    segment
        .split('/')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Removes the first match of `base_url`, read as a pattern, from `pathname`.
///
/// # Errors
///
/// Returns [`FinderError::InvalidBaseUrl`] if `base_url` is not a valid pattern.
pub fn try_url_filter_segment(pathname: &str, base_url: &str) -> Result<String> {
    let pattern = Regex::new(base_url).map_err(|source| FinderError::InvalidBaseUrl {
        pattern: base_url.to_string(),
        source,
    })?;
    Ok(pattern.replacen(pathname, 1, NoExpand("")).into_owned())
}

/// Fail-soft variant of [`try_url_filter_segment`].
///
/// A malformed base URL degrades to "no filters" (`""`) instead of failing
/// navigation. The failure is logged so a miswired base URL is still visible.
#[must_use]
pub fn url_filter_segment(pathname: &str, base_url: &str) -> String {
    match try_url_filter_segment(pathname, base_url) {
        Ok(segment) => segment,
        Err(e) => {
            tracing::warn!(pathname = %pathname, base_url = %base_url, error = %e, "ignoring url filter segment");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(titles: &[&str]) -> Vec<FilterSelection> {
        titles
            .iter()
            .map(|t| FilterSelection::new(*t, t.to_uppercase(), "dd"))
            .collect()
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn encode_joins_in_selection_order() {
        assert_eq!(encode(&filters(&["b", "a", "c"])), "/b/a/c");
    }

    #[test]
    fn parse_recovers_url_titles() {
        let original = filters(&["red", "large", "cotton"]);
        let titles: Vec<String> = original.iter().map(|f| f.url_title.clone()).collect();
        assert_eq!(parse_segment(&encode(&original)), titles);
    }

    #[test]
    fn parse_drops_empty_tokens() {
        assert_eq!(parse_segment("//a///b/"), vec!["a", "b"]);
        assert!(parse_segment("").is_empty());
        assert!(parse_segment("/").is_empty());
    }

    #[test]
    fn strips_base_url_prefix() {
        assert_eq!(url_filter_segment("/shop/red", "/shop"), "/red");
        assert_eq!(url_filter_segment("/shop", "/shop"), "");
    }

    #[test]
    fn empty_base_url_keeps_pathname() {
        assert_eq!(url_filter_segment("/red/large", ""), "/red/large");
    }

    #[test]
    fn only_first_match_is_removed() {
        assert_eq!(url_filter_segment("/a/x/a", "/a"), "/x/a");
    }

    #[test]
    fn invalid_pattern_degrades_to_no_filters() {
        assert_eq!(url_filter_segment("/shop(/red", "/shop("), "");
        assert!(matches!(
            try_url_filter_segment("/shop(/red", "/shop("),
            Err(FinderError::InvalidBaseUrl { .. })
        ));
    }
}
