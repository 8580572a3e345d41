//! Custom property naming and `@property` registration.

use crate::declaration::Declaration;
use crate::error::{Error, Result};

/// Builds custom property names under a fixed prefix.
///
/// With the default prefix `hl`, `Vars::default().name("outline-style")` is
/// `--hl-outline-style`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vars {
    prefix: String,
}

impl Vars {
    /// Default custom property prefix.
    pub const DEFAULT_PREFIX: &'static str = "hl";

    /// Create with a prefix. The prefix must be a non-empty identifier
    /// (ASCII letters, digits, `-`, `_`) and must not start with `-`.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let valid = !prefix.is_empty()
            && !prefix.starts_with('-')
            && prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(Self { prefix })
        } else {
            Err(Error::InvalidPrefix(prefix))
        }
    }

    /// The prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `--<prefix>-<ident>`.
    pub fn name(&self, ident: &str) -> String {
        format!("--{}-{ident}", self.prefix)
    }

    /// Opacity variable for a color role: `--<prefix>-<role>-opacity`.
    ///
    /// Both `*-op-*` rules and color rules take their variable from here.
    pub fn opacity(&self, role: &str) -> String {
        self.name(&format!("{role}-opacity"))
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Options for an `@property` registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyOptions {
    /// Value of `syntax`, without quotes.
    pub syntax: String,
    /// Value of `inherits`.
    pub inherits: bool,
    /// Value of `initial-value`.
    pub initial_value: String,
}

impl PropertyOptions {
    /// Universal syntax, not inherited, with the given initial value.
    pub fn initial(initial_value: impl Into<String>) -> Self {
        Self {
            initial_value: initial_value.into(),
            ..Self::default()
        }
    }

    /// Set the syntax.
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    /// Set inheritance.
    pub fn with_inherits(mut self, inherits: bool) -> Self {
        self.inherits = inherits;
        self
    }
}

impl Default for PropertyOptions {
    fn default() -> Self {
        Self {
            syntax: "*".to_string(),
            inherits: false,
            initial_value: String::new(),
        }
    }
}

const PROPERTY_AT_RULE: &str = "@property ";

/// Build the `@property <name>` registration for a custom property.
///
/// ```
/// use horizon_lattice_atomic::property::{PropertyOptions, define_property};
///
/// let decl = define_property("--hl-outline-style", PropertyOptions::initial("solid"));
/// assert_eq!(
///     decl.to_string(),
///     "@property --hl-outline-style { syntax: \"*\"; inherits: false; initial-value: solid; }"
/// );
/// ```
pub fn define_property(name: &str, options: PropertyOptions) -> Declaration {
    let mut entries = vec![
        ("syntax".to_string(), format!("\"{}\"", options.syntax)),
        ("inherits".to_string(), options.inherits.to_string()),
    ];
    if !options.initial_value.is_empty() {
        entries.push(("initial-value".to_string(), options.initial_value));
    }

    Declaration::scoped(format!("{PROPERTY_AT_RULE}{name}"), Declaration::map(entries))
}

/// The custom property name if `decl` is an `@property` registration.
pub fn registered_property(decl: &Declaration) -> Option<&str> {
    decl.parent()?.strip_prefix(PROPERTY_AT_RULE)
}
