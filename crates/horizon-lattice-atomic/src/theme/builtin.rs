//! Theme snapshot with the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::palette::{ThemeColor, builtin_colors};
use crate::logging::targets;
use crate::{Error, Result};

/// Theme data consulted during resolution.
///
/// `Theme::default()` is the built-in theme. Themes parsed from TOML contain
/// only what the file lists; overlay them onto a base with [`Theme::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Theme {
    /// Named colors and color scales.
    #[serde(default)]
    pub colors: BTreeMap<String, ThemeColor>,
    /// Named line widths (`outline-DEFAULT`, `outline-none`...).
    #[serde(default)]
    pub line_width: BTreeMap<String, String>,
}

impl Theme {
    /// A theme with no entries.
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
            line_width: BTreeMap::new(),
        }
    }

    /// The built-in theme.
    pub fn builtin() -> Self {
        Self {
            colors: builtin_colors(),
            line_width: BTreeMap::from([
                ("DEFAULT".to_string(), "1px".to_string()),
                ("none".to_string(), "0".to_string()),
            ]),
        }
    }

    /// Parse a theme from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_toml_str(&text)?;
        tracing::info!(
            target: targets::THEME,
            path = %path.display(),
            colors = theme.colors.len(),
            "loaded theme"
        );
        Ok(theme)
    }

    /// Overlay `other` onto this theme.
    pub fn merge(&mut self, other: Theme) {
        for (name, color) in other.colors {
            match self.colors.get_mut(&name) {
                Some(existing) => existing.merge(color),
                None => {
                    self.colors.insert(name, color);
                }
            }
        }
        self.line_width.extend(other.line_width);
    }

    /// This theme with `other` overlaid.
    pub fn merged(mut self, other: Theme) -> Self {
        self.merge(other);
        self
    }

    /// Look up a color key.
    ///
    /// Accepts `name`, `name-shade` and `nameshade` (`red`, `red-500`,
    /// `red500`); names may contain dashes (`light-blue-300`).
    pub fn color(&self, key: &str) -> Option<&str> {
        if let Some(color) = self.colors.get(key) {
            return color.default_value();
        }

        if let Some((name, shade)) = key.rsplit_once('-') {
            if let Some(value) = self.colors.get(name).and_then(|c| c.shade(shade)) {
                return Some(value);
            }
        }

        let name = key.trim_end_matches(|c: char| c.is_ascii_digit());
        if name.is_empty() || name.len() == key.len() {
            return None;
        }
        self.colors.get(name)?.shade(&key[name.len()..])
    }

    /// Look up a named line width.
    pub fn line_width(&self, key: &str) -> Option<&str> {
        self.line_width.get(key).map(String::as_str)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_key_forms() {
        let theme = Theme::default();
        assert_eq!(theme.color("red"), Some("#f87171"));
        assert_eq!(theme.color("red-500"), Some("#ef4444"));
        assert_eq!(theme.color("red500"), Some("#ef4444"));
        assert_eq!(theme.color("light-blue"), Some("#38bdf8"));
        assert_eq!(theme.color("light-blue-300"), Some("#7dd3fc"));
        assert_eq!(theme.color("black"), Some("#000"));
    }

    #[test]
    fn unknown_colors() {
        let theme = Theme::default();
        for key in ["", "red-", "red-501", "bogus", "500", "black-500"] {
            assert_eq!(theme.color(key), None, "{key:?}");
        }
    }

    #[test]
    fn line_widths() {
        let theme = Theme::default();
        assert_eq!(theme.line_width("DEFAULT"), Some("1px"));
        assert_eq!(theme.line_width("none"), Some("0"));
        assert_eq!(theme.line_width("thick"), None);
    }

    #[test]
    fn toml_overlay() {
        let overlay = Theme::from_toml_str(
            r##"
            [colors]
            brand = "#336699"

            [colors.red]
            500 = "#ff0000"

            [line-width]
            thick = "3px"
            "##,
        )
        .unwrap();
        assert_eq!(overlay.colors.len(), 2);

        let theme = Theme::builtin().merged(overlay);
        assert_eq!(theme.color("brand"), Some("#336699"));
        assert_eq!(theme.color("red-500"), Some("#ff0000"));
        assert_eq!(theme.color("red-600"), Some("#dc2626"));
        assert_eq!(theme.line_width("thick"), Some("3px"));
        assert_eq!(theme.line_width("DEFAULT"), Some("1px"));
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            Theme::from_toml_str("colors = 3"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
