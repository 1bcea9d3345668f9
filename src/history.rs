//! Back-navigation stack.

/// Stack of previously visited views.
///
/// Entries are plain view descriptors. The stack never replays anything
/// itself: [`back`](Self::back) hands the target back to the caller, which
/// re-enters its navigation routine and thereby pushes the target again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory<V> {
    entries: Vec<V>,
}

impl<V> Default for NavigationHistory<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> NavigationHistory<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: V) {
        self.entries.push(entry);
    }

    /// Discard `skip` entries and pop the one below them.
    ///
    /// Returns `None` and leaves the stack untouched unless it holds strictly
    /// more than `skip` entries.
    pub fn back(&mut self, skip: usize) -> Option<V> {
        if self.entries.len() <= skip {
            return None;
        }
        self.entries.truncate(self.entries.len() - skip);
        self.entries.pop()
    }

    /// The entry describing the view currently on screen.
    pub fn current(&self) -> Option<&V> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[V] {
        &self.entries
    }
}
