//! Color palette definitions.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A theme color: a single value or a scale of shades.
///
/// In TOML a single color is a string, a scale is a table:
///
/// ```toml
/// brand = "#336699"
///
/// [red]
/// DEFAULT = "#f87171"
/// 500 = "#ef4444"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// One color value.
    Single(String),
    /// Shades keyed by name (`50`..`950`, `DEFAULT`).
    Scale(BTreeMap<String, String>),
}

impl ThemeColor {
    /// Shade key used when a color is referenced without a shade.
    pub const DEFAULT_SHADE: &'static str = "DEFAULT";

    /// Value used when no shade is given.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Scale(shades) => shades.get(Self::DEFAULT_SHADE).map(String::as_str),
        }
    }

    /// Value of a named shade. Single colors have no shades.
    pub fn shade(&self, shade: &str) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Scale(shades) => shades.get(shade).map(String::as_str),
        }
    }

    /// Overlay `other` onto this color. Scales merge shade by shade; any other
    /// combination replaces.
    pub fn merge(&mut self, other: ThemeColor) {
        match (self, other) {
            (Self::Scale(shades), Self::Scale(overlay)) => shades.extend(overlay),
            (this, other) => *this = other,
        }
    }
}

const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Built-in color scales. `DEFAULT` is the 400 shade.
const SCALES: &[(&str, [&str; 11])] = &[
    (
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
            "#374151", "#1f2937", "#111827", "#030712",
        ],
    ),
    (
        "red",
        [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
            "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
        ],
    ),
    (
        "orange",
        [
            "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c",
            "#c2410c", "#9a3412", "#7c2d12", "#431407",
        ],
    ),
    (
        "yellow",
        [
            "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04",
            "#a16207", "#854d0e", "#713f12", "#422006",
        ],
    ),
    (
        "green",
        [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a",
            "#15803d", "#166534", "#14532d", "#052e16",
        ],
    ),
    (
        "blue",
        [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
            "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
        ],
    ),
    (
        "indigo",
        [
            "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5",
            "#4338ca", "#3730a3", "#312e81", "#1e1b4b",
        ],
    ),
    (
        "purple",
        [
            "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea",
            "#7e22ce", "#6b21a8", "#581c87", "#3b0764",
        ],
    ),
    (
        "pink",
        [
            "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
            "#be185d", "#9d174d", "#831843", "#500724",
        ],
    ),
    (
        "light-blue",
        [
            "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7",
            "#0369a1", "#075985", "#0c4a6e", "#082f49",
        ],
    ),
];

/// The built-in palette.
pub fn builtin_colors() -> BTreeMap<String, ThemeColor> {
    let mut colors = BTreeMap::new();
    colors.insert("black".to_string(), ThemeColor::Single("#000".to_string()));
    colors.insert("white".to_string(), ThemeColor::Single("#fff".to_string()));

    for (name, values) in SCALES {
        let mut shades: BTreeMap<String, String> = SHADES
            .iter()
            .zip(values)
            .map(|(shade, value)| (shade.to_string(), value.to_string()))
            .collect();
        shades.insert(ThemeColor::DEFAULT_SHADE.to_string(), values[4].to_string());
        colors.insert(name.to_string(), ThemeColor::Scale(shades));
    }

    colors
}
