//! Observable holder of the display state.
//!
//! Consumers that render the heading, the filtered view or the load-more
//! control either read [`DisplayStore::get`] directly or subscribe for change
//! notifications. Subscriptions are explicit: [`DisplayStore::subscribe`]
//! returns an id that must be passed to [`DisplayStore::unsubscribe`].

use super::state::DisplayState;
use std::fmt;

/// Handle returned by [`DisplayStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&DisplayState)>;

/// Display state plus its subscribers.
pub struct DisplayStore {
    state: DisplayState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl DisplayStore {
    #[must_use]
    pub fn new(state: DisplayState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &DisplayState {
        &self.state
    }

    /// Registers a listener called after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&DisplayState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(subscription = id.0, "display subscriber added");
        id
    }

    /// Removes a listener. Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    /// Applies `f` and notifies listeners if the state changed.
    ///
    /// Returns whether the state changed.
    pub fn update(&mut self, f: impl FnOnce(&mut DisplayState)) -> bool {
        let mut next = self.state.clone();
        f(&mut next);
        if next == self.state {
            return false;
        }
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}

impl fmt::Debug for DisplayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
