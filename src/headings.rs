//! Page heading and meta description derivation.
//!
//! When display state is recomputed, the active filters are folded into a
//! [`FilterNamesByDropdown`] mapping (dropdown id to display name) and handed
//! to a caller-supplied [`HeadingBuilder`]. Lookups of missing dropdowns yield
//! an empty string, so builders never deal with absent keys.
//!
//! [`TemplateHeadings`] is a configurable builder driven by templates such as
//! `"{color} {size} Shoes"`.

use crate::domain::FilterSelection;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// `{key}` placeholders in heading templates.
static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();

/// Mapping from dropdown id to the display name of its active filter.
///
/// Keeps insertion order; inserting an existing dropdown id overwrites its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterNamesByDropdown {
    entries: Vec<(String, String)>,
}

impl FilterNamesByDropdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from active filters, later filters overwriting earlier ones.
    #[must_use]
    pub fn from_filters(filters: &[FilterSelection]) -> Self {
        let mut names = Self::new();
        for filter in filters {
            names.insert(&filter.from_dropdown.id, &filter.display_name);
        }
        names
    }

    pub fn insert(&mut self, dropdown_id: &str, display_name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| id == dropdown_id) {
            entry.1 = display_name.to_string();
        } else {
            self.entries
                .push((dropdown_id.to_string(), display_name.to_string()));
        }
    }

    /// Returns the display name for `dropdown_id`, or `default` when absent.
    #[must_use]
    pub fn lookup_or_default<'a>(&'a self, dropdown_id: &str, default: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(id, _)| id == dropdown_id)
            .map_or(default, |(_, name)| name.as_str())
    }

    /// Shorthand for `lookup_or_default(dropdown_id, "")`.
    #[must_use]
    pub fn get(&self, dropdown_id: &str) -> &str {
        self.lookup_or_default(dropdown_id, "")
    }

    /// Display names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }
}

/// Builds page text from the active filter names.
pub trait HeadingBuilder {
    /// Heading for the page; also used as the page title.
    fn page_heading(&self, names: &FilterNamesByDropdown) -> String;

    /// Meta description for the page, `None` when the builder has none.
    ///
    /// `Some("")` clears a previously written description.
    fn meta_description(&self, _names: &FilterNamesByDropdown) -> Option<String> {
        None
    }
}

impl<F> HeadingBuilder for F
where
    F: Fn(&FilterNamesByDropdown) -> String,
{
    fn page_heading(&self, names: &FilterNamesByDropdown) -> String {
        self(names)
    }
}

/// Template-driven [`HeadingBuilder`].
///
/// `{dropdown_id}` expands to that dropdown's active display name (or nothing),
/// `{all}` to every active name joined by spaces. Runs of whitespace left by
/// empty placeholders collapse to a single space.
///
/// # Example
///
/// ```rust
/// use content_finder::headings::{FilterNamesByDropdown, HeadingBuilder, TemplateHeadings};
///
/// let headings = TemplateHeadings::new("{color} {size} Shoes", "");
/// let mut names = FilterNamesByDropdown::new();
/// names.insert("color", "Red");
/// assert_eq!(headings.page_heading(&names), "Red Shoes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHeadings {
    heading: String,
    description: String,
}

impl TemplateHeadings {
    #[must_use]
    pub fn new(heading: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            description: description.into(),
        }
    }

    fn expand(template: &str, names: &FilterNamesByDropdown) -> String {
        let placeholder = PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^{}]*)\}").ok());
        let expanded = match placeholder {
            Some(re) => re.replace_all(template, |caps: &Captures<'_>| match &caps[1] {
                "all" => names.names().collect::<Vec<_>>().join(" "),
                key => names.get(key).to_string(),
            }),
            None => template.into(),
        };

        expanded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl HeadingBuilder for TemplateHeadings {
    fn page_heading(&self, names: &FilterNamesByDropdown) -> String {
        Self::expand(&self.heading, names)
    }

    fn meta_description(&self, names: &FilterNamesByDropdown) -> Option<String> {
        (!self.description.is_empty()).then(|| Self::expand(&self.description, names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dropdown_reads_as_empty() {
        let names = FilterNamesByDropdown::new();
        assert_eq!(names.get("color"), "");
        assert_eq!(names.lookup_or_default("color", "Any"), "Any");
    }

    #[test]
    fn later_filter_in_same_dropdown_wins() {
        let names = FilterNamesByDropdown::from_filters(&[
            FilterSelection::new("red", "Red", "color"),
            FilterSelection::new("large", "Large", "size"),
            FilterSelection::new("blue", "Blue", "color"),
        ]);
        assert_eq!(names.get("color"), "Blue");
        assert_eq!(names.names().collect::<Vec<_>>(), vec!["Blue", "Large"]);
    }

    #[test]
    fn template_collapses_empty_placeholders() {
        let headings = TemplateHeadings::new("{color} {size} Shoes", "Shop {all} shoes");
        let mut names = FilterNamesByDropdown::new();
        names.insert("size", "Large");
        assert_eq!(headings.page_heading(&names), "Large Shoes");
        assert_eq!(
            headings.meta_description(&names).as_deref(),
            Some("Shop Large shoes")
        );
        assert_eq!(
            headings.page_heading(&FilterNamesByDropdown::new()),
            "Shoes"
        );
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let headings = TemplateHeadings::new("Shoes {color", "");
        assert_eq!(
            headings.page_heading(&FilterNamesByDropdown::new()),
            "Shoes {color"
        );
    }

    #[test]
    fn closures_are_builders() {
        let builder = |names: &FilterNamesByDropdown| format!("{} things", names.get("kind"));
        let mut names = FilterNamesByDropdown::new();
        names.insert("kind", "Blue");
        assert_eq!(builder.page_heading(&names), "Blue things");
        assert_eq!(builder.meta_description(&names), None);
    }

    #[test]
    fn description_template_may_expand_to_empty() {
        let headings = TemplateHeadings::new("Shoes", "{color}");
        assert_eq!(
            headings.meta_description(&FilterNamesByDropdown::new()).as_deref(),
            Some("")
        );
        let unset = TemplateHeadings::new("Shoes", "");
        assert_eq!(unset.meta_description(&FilterNamesByDropdown::new()), None);
    }

    #[test]
    fn all_and_repeated_placeholders_expand() {
        let headings = TemplateHeadings::new("{all} / {color} {color}", "");
        let mut names = FilterNamesByDropdown::new();
        names.insert("color", "Red");
        names.insert("size", "Large");
        assert_eq!(headings.page_heading(&names), "Red Large / Red Red");
    }
}
