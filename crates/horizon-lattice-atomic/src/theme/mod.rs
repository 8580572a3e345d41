//! Theme data: color palette, line widths and the shared theme store.

mod builtin;
mod palette;
mod store;

pub use builtin::Theme;
pub use palette::{ThemeColor, builtin_colors};
pub use store::ThemeStore;
