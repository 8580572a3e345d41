//! File watching for theme hot-reload.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::logging::targets;
use crate::theme::{Theme, ThemeStore};
use crate::{Error, Result};

/// Event indicating a theme file changed.
#[derive(Debug, Clone)]
pub struct ThemeChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was created or modified.
    Modified,
    /// File was removed.
    Removed,
}

/// Watches theme TOML files and swaps the store's theme when they change.
///
/// The new theme is the base theme with every watched file overlaid, in path
/// order. A file that fails to parse leaves the current theme in place.
///
/// # Example
///
/// ```ignore
/// let store = ThemeStore::default();
/// let mut watcher = ThemeWatcher::new(Theme::builtin())?;
/// watcher.watch("theme/brand.toml")?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// watcher.apply_changes(&store, &changes);
/// ```
pub struct ThemeWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_paths: BTreeSet<PathBuf>,
    base: Theme,
}

impl ThemeWatcher {
    /// Create a watcher overlaying files onto `base`.
    pub fn new(base: Theme) -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_paths: BTreeSet::new(),
            base,
        })
    }

    /// Start watching a theme file.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if !self.watched_paths.contains(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            tracing::info!(target: targets::HOT_RELOAD, path = %path.display(), "watching theme");
            self.watched_paths.insert(path);
        }

        Ok(())
    }

    /// Stop watching a theme file.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let Ok(path) = path.as_ref().canonicalize() else {
            return Ok(());
        };

        if self.watched_paths.remove(&path) {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!(target: targets::HOT_RELOAD, path = %path.display(), "stopped watching theme");
        }

        Ok(())
    }

    /// Poll for theme file changes. Call this in your event loop.
    pub fn poll(&mut self) -> Vec<ThemeChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any
                            || !self.watched_paths.contains(&event.path)
                        {
                            continue;
                        }
                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(ThemeChangeEvent {
                            path: event.path,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!(target: targets::HOT_RELOAD, error = %e, "file watcher error");
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!(target: targets::HOT_RELOAD, "file watcher disconnected");
                    break;
                }
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Build the theme from the base and all watched files.
    ///
    /// Missing files are skipped.
    pub fn load(&self) -> Result<Theme> {
        let mut theme = self.base.clone();
        for path in &self.watched_paths {
            if !path.exists() {
                tracing::warn!(target: targets::HOT_RELOAD, path = %path.display(), "theme file missing");
                continue;
            }
            theme.merge(Theme::from_file(path)?);
        }
        Ok(theme)
    }

    /// Rebuild the theme and swap it into `store`.
    pub fn reload(&self, store: &ThemeStore) -> Result<()> {
        let theme = self.load()?;
        store.replace(theme);
        tracing::info!(
            target: targets::HOT_RELOAD,
            files = self.watched_paths.len(),
            "theme reloaded"
        );
        Ok(())
    }

    /// Reload if anything changed. Returns whether the store was updated.
    ///
    /// Reload failures are logged and leave the current theme in place.
    pub fn apply_changes(&self, store: &ThemeStore, changes: &[ThemeChangeEvent]) -> bool {
        if changes.is_empty() {
            return false;
        }

        for change in changes {
            tracing::debug!(
                target: targets::HOT_RELOAD,
                path = %change.path.display(),
                kind = ?change.kind,
                "theme file changed"
            );
        }

        match self.reload(store) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(target: targets::HOT_RELOAD, error = %e, "failed to reload theme");
                false
            }
        }
    }

    /// Get the number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched_paths.len()
    }

    /// Get the watched paths.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched_paths.iter().map(|p| p.as_path())
    }
}
