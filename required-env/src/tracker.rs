use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexSet;

/// Names that were looked up, found absent, and had no default.
///
/// Each name is kept once, in first-seen order. Entries stay until
/// [`Tracker::remove`] or [`Tracker::clear`] is called, even if the variable
/// is set later on.
#[derive(Debug, Default)]
pub struct Tracker {
    names: Mutex<IndexSet<String>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored, every operation leaves the set consistent.
    fn lock(&self) -> MutexGuard<'_, IndexSet<String>> {
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if `name` was not tracked yet.
    pub fn insert(&self, name: &str) -> bool {
        let mut names = self.lock();
        if names.contains(name) {
            return false;
        }
        names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    pub fn remove(&self, name: &str) -> bool {
        self.lock().shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of the tracked names in first-seen order.
    pub fn names(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }
}
