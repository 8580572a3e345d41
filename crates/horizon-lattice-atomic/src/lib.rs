//! Atomic utility-class resolution for Horizon Lattice.
//!
//! This crate turns short utility tokens such as `outline-offset-4`,
//! `list-roman` or `accent-red/50` into style declarations:
//!
//! - **Rule table**: ordered exact and pattern rules; the first rule whose
//!   handler accepts the token wins
//! - **Value normalization**: bracket literals, `$variables`, global
//!   keywords, pixel and percent units
//! - **Colors**: theme palette lookup with opacity custom properties
//! - **Themes**: built-in palette, TOML overlays, swappable snapshots
//! - **Hot Reload**: reload theme files during development
//!
//! # Example
//!
//! ```
//! use horizon_lattice_atomic::prelude::*;
//!
//! let config = EngineConfig::default();
//! let resolver = Resolver::from_config(&config)?;
//! let store = ThemeStore::new(config.theme());
//!
//! let out = resolver.resolve_with("outline-hidden", &store).unwrap();
//! assert_eq!(out.len(), 2);
//! assert_eq!(out[0].to_string(), "outline-style: none;");
//! assert_eq!(out[1].parent(), Some("@media (forced-colors: active)"));
//! # Ok::<(), horizon_lattice_atomic::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod declaration;
pub mod logging;
pub mod property;
pub mod resolve;
pub mod rules;
pub mod theme;
pub mod value;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{ParsedColor, Rgba, color_resolver, parse_color};
    pub use crate::config::EngineConfig;
    pub use crate::declaration::{Declaration, HandlerResult, PropertyMap};
    pub use crate::property::{PropertyOptions, Vars, define_property};
    pub use crate::resolve::{Collector, PropertyPolicy, ResolveContext, Resolver};
    pub use crate::rules::{Captures, Handler, Matcher, Rule, RuleTable, make_global_static_rules};
    pub use crate::theme::{Theme, ThemeColor, ThemeStore};
    pub use crate::value::{GlobalKeyword, Normalizer, Stage, is_css_math_fn};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::ThemeWatcher;
}
