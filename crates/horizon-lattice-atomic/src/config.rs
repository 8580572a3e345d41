//! Engine configuration.
//!
//! ```toml
//! prefix = "hl"
//! property-policy = "first-wins"
//!
//! [theme.colors]
//! brand = "#336699"
//!
//! [theme.line-width]
//! thick = "3px"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::logging::targets;
use crate::property::Vars;
use crate::resolve::PropertyPolicy;
use crate::theme::Theme;
use crate::{Error, Result};

/// Engine configuration, usually read from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Custom property prefix (`hl` → `--hl-outline-style`).
    pub prefix: String,
    /// Registration de-duplication policy for collectors.
    pub property_policy: PropertyPolicy,
    /// Theme entries overlaid on the built-in theme.
    pub theme: Theme,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix: Vars::DEFAULT_PREFIX.to_string(),
            property_policy: PropertyPolicy::default(),
            theme: Theme::empty(),
        }
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.vars()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            target: targets::THEME,
            path = %path.display(),
            prefix = %config.prefix,
            "loaded engine configuration"
        );
        Ok(config)
    }

    /// Custom property names for the configured prefix.
    pub fn vars(&self) -> Result<Vars> {
        Vars::new(self.prefix.clone())
    }

    /// The built-in theme with the configured overlay.
    pub fn theme(&self) -> Theme {
        Theme::builtin().merged(self.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.vars().unwrap().name("x"), "--hl-x");
        assert_eq!(config.theme(), Theme::builtin());
    }

    #[test]
    fn full_config() {
        let config = EngineConfig::from_toml_str(
            r##"
            prefix = "un"
            property-policy = "last-wins"

            [theme.colors]
            brand = "#336699"

            [theme.line-width]
            thick = "3px"
            "##,
        )
        .unwrap();

        assert_eq!(config.property_policy, PropertyPolicy::LastWins);
        assert_eq!(config.vars().unwrap().opacity("caret"), "--un-caret-opacity");

        let theme = config.theme();
        assert_eq!(theme.color("brand"), Some("#336699"));
        assert_eq!(theme.color("red"), Some("#f87171"));
        assert_eq!(theme.line_width("thick"), Some("3px"));
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let err = EngineConfig::from_toml_str(r#"prefix = "bad prefix""#).unwrap_err();
        assert!(matches!(err, Error::InvalidPrefix(_)));
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = EngineConfig::from_toml_str(r#"property-policy = "random""#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atomic.toml");
        std::fs::write(&path, "prefix = \"tw\"\n").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.prefix, "tw");
    }
}
