//! Hot-reload support for theme files.
//!
//! This module is only available with the `hot-reload` feature.

mod watcher;

pub use watcher::{ChangeKind, ThemeChangeEvent, ThemeWatcher};
