//! CSS keyword tables.

/// CSS-wide keywords, valid on every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKeyword {
    /// Take the parent's computed value.
    Inherit,
    /// Use the property's initial value.
    Initial,
    /// Roll back to the user-agent/user origin.
    Revert,
    /// Roll back to the previous cascade layer.
    RevertLayer,
    /// Inherit for inherited properties, initial otherwise.
    Unset,
}

impl GlobalKeyword {
    /// All global keywords, in output order.
    pub const ALL: [GlobalKeyword; 5] = [
        Self::Inherit,
        Self::Initial,
        Self::Revert,
        Self::RevertLayer,
        Self::Unset,
    ];

    /// Parse from CSS text. Tokens are case-sensitive.
    pub fn from_css(s: &str) -> Option<Self> {
        match s {
            "inherit" => Some(Self::Inherit),
            "initial" => Some(Self::Initial),
            "revert" => Some(Self::Revert),
            "revert-layer" => Some(Self::RevertLayer),
            "unset" => Some(Self::Unset),
            _ => None,
        }
    }

    /// CSS text of the keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Revert => "revert",
            Self::RevertLayer => "revert-layer",
            Self::Unset => "unset",
        }
    }
}

/// Check if a string is a global keyword.
pub fn is_global_keyword(s: &str) -> bool {
    GlobalKeyword::from_css(s).is_some()
}

/// Length units accepted after a number.
pub(crate) const LENGTH_UNITS: &[&str] = &[
    "px", "pt", "pc", "in", "cm", "mm", "q", "%", "em", "rem", "ex", "rex", "ch", "rch", "cap",
    "rcap", "ic", "ric", "lh", "rlh", "vw", "vh", "vi", "vb", "vmin", "vmax", "svw", "svh",
    "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
];

/// Known animatable CSS property names (used by `will-change`).
const CSS_PROPERTIES: &[&str] = &[
    "accent-color",
    "background",
    "background-color",
    "background-position",
    "background-size",
    "backdrop-filter",
    "border",
    "border-color",
    "border-radius",
    "border-width",
    "bottom",
    "box-shadow",
    "caret-color",
    "clip-path",
    "color",
    "column-gap",
    "contain",
    "fill",
    "filter",
    "flex",
    "flex-basis",
    "flex-grow",
    "flex-shrink",
    "font-size",
    "font-weight",
    "gap",
    "grid-template-columns",
    "grid-template-rows",
    "height",
    "inset",
    "left",
    "letter-spacing",
    "line-height",
    "margin",
    "mask",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "object-position",
    "offset",
    "opacity",
    "order",
    "outline",
    "outline-color",
    "outline-offset",
    "outline-width",
    "padding",
    "perspective",
    "right",
    "rotate",
    "row-gap",
    "scale",
    "stroke",
    "stroke-width",
    "text-decoration-color",
    "text-shadow",
    "top",
    "transform",
    "transform-origin",
    "translate",
    "visibility",
    "width",
    "z-index",
];

/// Check if a string is a known CSS property name.
pub fn is_css_property(s: &str) -> bool {
    CSS_PROPERTIES.contains(&s)
}
