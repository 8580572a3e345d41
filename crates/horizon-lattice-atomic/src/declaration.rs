//! Resolved declaration types.
//!
//! A resolved token produces one or more [`Declaration`]s. Most are a plain
//! property map; some need an explicit ordered list (repeated properties with
//! vendor fallbacks) or must be nested by the caller under an at-rule or
//! selector.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_atomic::prelude::Declaration;
//!
//! let plain = Declaration::map([("outline-style", "none")]);
//! assert_eq!(plain.get("outline-style"), Some("none"));
//!
//! let scoped = Declaration::scoped(
//!     "@media (forced-colors: active)",
//!     Declaration::map([("outline-offset", "2px")]),
//! );
//! assert_eq!(scoped.parent(), Some("@media (forced-colors: active)"));
//! assert_eq!(scoped.to_string(), "@media (forced-colors: active) { outline-offset: 2px; }");
//! ```

use std::fmt;

/// Result of a rule handler.
///
/// `None` is a soft non-match: the driver keeps scanning later rules.
pub type HandlerResult = Option<Vec<Declaration>>;

/// Property map with unique keys and stable insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing an existing value in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}

/// One resolved unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Property map with unique keys.
    Map(PropertyMap),
    /// Ordered pairs; the same property may repeat.
    Pairs(Vec<(String, String)>),
    /// A declaration the caller nests under `parent` (an at-rule or selector).
    Scoped {
        /// At-rule or selector to nest under.
        parent: String,
        /// The nested declaration.
        body: Box<Declaration>,
    },
}

impl Declaration {
    /// Create a property map declaration.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Map(entries.into_iter().collect())
    }

    /// Create an ordered pair list declaration.
    pub fn pairs<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Pairs(
            entries
                .into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }

    /// Create a declaration scoped under a parent at-rule or selector.
    pub fn scoped(parent: impl Into<String>, body: Declaration) -> Self {
        Self::Scoped {
            parent: parent.into(),
            body: Box::new(body),
        }
    }

    /// The parent annotation, if scoped.
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Scoped { parent, .. } => Some(parent),
            _ => None,
        }
    }

    /// Check if this declaration is scoped.
    pub fn is_scoped(&self) -> bool {
        matches!(self, Self::Scoped { .. })
    }

    /// Property/value entries; for scoped declarations, the body's entries.
    pub fn entries(&self) -> &[(String, String)] {
        match self {
            Self::Map(map) => map.as_slice(),
            Self::Pairs(pairs) => pairs,
            Self::Scoped { body, .. } => body.entries(),
        }
    }

    /// First value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries()
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoped { parent, body } => write!(f, "{parent} {{ {body} }}"),
            _ => {
                for (index, (property, value)) in self.entries().iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{property}: {value};")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_insertion_order_and_unique_keys() {
        let mut map = PropertyMap::new();
        map.insert("list-style-position", "outside");
        map.insert("list-style-type", "disc");
        map.insert("list-style-position", "inside");

        assert_eq!(map.len(), 2);
        assert_eq!(map.as_slice()[0], ("list-style-position".into(), "inside".into()));
        assert_eq!(map.get("list-style-type"), Some("disc"));
    }

    #[test]
    fn pairs_allow_repeats() {
        let decl = Declaration::pairs([
            ("image-rendering", "-moz-crisp-edges"),
            ("image-rendering", "pixelated"),
        ]);

        assert_eq!(decl.entries().len(), 2);
        assert_eq!(decl.get("image-rendering"), Some("-moz-crisp-edges"));
        assert_eq!(
            decl.to_string(),
            "image-rendering: -moz-crisp-edges; image-rendering: pixelated;"
        );
    }

    #[test]
    fn scoped_delegates_entries() {
        let decl = Declaration::scoped("@supports (x: y)", Declaration::map([("a", "b")]));

        assert!(decl.is_scoped());
        assert_eq!(decl.get("a"), Some("b"));
        assert_eq!(decl.to_string(), "@supports (x: y) { a: b; }");
    }
}
