//! Router and document collaborators.
//!
//! The synchronizer only needs two primitives from its host: reading the current
//! pathname and `navigate(path)`, plus a place to put the page title and meta
//! description. Both are fire-and-forget.
//!
//! [`HistoryRouter`] and [`RecordingDocument`] are in-memory implementations used
//! by the CLI and by tests.

/// Navigation primitive.
pub trait Router {
    fn pathname(&self) -> &str;

    fn navigate(&mut self, path: &str);

    /// Returns to the previous location. `false` when there is none.
    fn back(&mut self) -> bool {
        false
    }
}

/// Head metadata sink.
pub trait Document {
    fn set_title(&mut self, title: &str);

    fn set_meta_description(&mut self, description: &str);
}

/// Router keeping a history stack of every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRouter {
    history: Vec<String>,
}

impl HistoryRouter {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
        }
    }

    /// All locations visited, oldest first. Never empty.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for HistoryRouter {
    fn pathname(&self) -> &str {
        self.history.last().map_or("", String::as_str)
    }

    fn navigate(&mut self, path: &str) {
        tracing::debug!(from = %self.pathname(), to = %path, "navigate");
        self.history.push(path.to_string());
    }

    fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            tracing::debug!(to = %self.pathname(), "back");
            true
        } else {
            false
        }
    }
}

/// Document that remembers what was written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDocument {
    pub title: String,
    pub meta_description: String,
    pub title_writes: usize,
}

impl Document for RecordingDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.title_writes += 1;
    }

    fn set_meta_description(&mut self, description: &str) {
        self.meta_description = description.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_pushes_history() {
        let mut router = HistoryRouter::new("/shop");
        router.navigate("/shop/red");
        assert_eq!(router.pathname(), "/shop/red");
        assert_eq!(router.history().len(), 2);
        assert!(router.back());
        assert_eq!(router.pathname(), "/shop");
        assert!(!router.back());
    }
}
