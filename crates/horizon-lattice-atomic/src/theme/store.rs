//! Shared, swappable theme snapshots.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Theme;
use crate::logging::targets;

/// Holds the current theme behind a lock.
///
/// Readers take an [`Arc`] snapshot and keep it for a whole resolution pass,
/// so a concurrent [`replace`](Self::replace) never changes a pass in flight.
#[derive(Debug, Default)]
pub struct ThemeStore {
    current: RwLock<Arc<Theme>>,
}

impl ThemeStore {
    /// Create a store holding `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            current: RwLock::new(Arc::new(theme)),
        }
    }

    /// The current theme.
    pub fn snapshot(&self) -> Arc<Theme> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new theme, returning the previous one.
    pub fn replace(&self, theme: Theme) -> Arc<Theme> {
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(theme));
        tracing::debug!(target: targets::THEME, "theme replaced");
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_survives_replace() {
        let store = ThemeStore::default();
        let before = store.snapshot();

        let previous = store.replace(Theme::empty());

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.color("red"), Some("#f87171"));
        assert_eq!(store.snapshot().color("red"), None);
    }
}
