//! Screen registry - ordered collection of all registered screens
//!
//! Insertion order is display order and is never resorted. Duplicate titles
//! are allowed; identity is tracked through the [`ScreenId`] handle returned
//! by `register`, which is what `unregister` matches on.

use crate::screen::Screen;
use tracing::debug;

/// Opaque identity handle for a registered screen.
///
/// Replaces reference identity: callers keep the id returned by
/// [`ScreenRegistry::register`] if they ever intend to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

struct Entry {
    id: ScreenId,
    screen: Box<dyn Screen>,
}

/// Ordered sequence of screens, insertion order preserved.
#[derive(Default)]
pub struct ScreenRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a screen. Never rejects; duplicates by title are permitted.
    pub fn register(&mut self, screen: Box<dyn Screen>) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        debug!(title = screen.title(), "registered screen");
        self.entries.push(Entry { id, screen });
        id
    }

    /// Remove the first entry matching `id`. No-op if absent.
    pub fn unregister(&mut self, id: ScreenId) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            let entry = self.entries.remove(pos);
            debug!(title = entry.screen.title(), "unregistered screen");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Screen> {
        // Explicit cast: the closure would otherwise infer `dyn Screen + 'static`
        self.entries
            .get_mut(index)
            .map(|e| &mut *e.screen as &mut dyn Screen)
    }

    /// Titles in display order, for the menu buffer.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.screen.title()).collect()
    }

    /// Iterate mutably over all screens in display order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Screen>> {
        self.entries.iter_mut().map(|e| &mut e.screen)
    }
}
