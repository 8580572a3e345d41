//! Value normalization for captured token text.
//!
//! Every handler turns captured text into a CSS value through a
//! [`Normalizer`]: an ordered list of [`Stage`]s where the first stage that
//! accepts the text produces the value. Text no stage accepts yields `None`,
//! which handlers report as "rule does not apply".
//!
//! # Example
//!
//! ```
//! use horizon_lattice_atomic::value::{LENGTH, OPACITY};
//!
//! assert_eq!(LENGTH.apply("4").as_deref(), Some("4px"));
//! assert_eq!(LENGTH.apply("0").as_deref(), Some("0"));
//! assert_eq!(LENGTH.apply("[calc(100%-4px)]").as_deref(), Some("calc(100% - 4px)"));
//! assert_eq!(LENGTH.apply("$ring").as_deref(), Some("var(--ring)"));
//! assert_eq!(LENGTH.apply("unset").as_deref(), Some("unset"));
//! assert_eq!(LENGTH.apply("red"), None);
//!
//! assert_eq!(OPACITY.apply("50").as_deref(), Some("50%"));
//! ```

mod bracket;
mod keywords;
mod math;

pub use bracket::{BracketValue, TypeHint, bracket, bracket_of_type, parse_bracket};
pub use keywords::{GlobalKeyword, is_css_property, is_global_keyword};
pub use math::{MATH_FUNCTIONS, is_css_math_fn};

use keywords::LENGTH_UNITS;

/// One normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `[...]` literal, see [`bracket`].
    Bracket,
    /// `$name` / `$name,fallback` → `var(--name[, fallback])`.
    CssVar,
    /// CSS-wide keywords pass through.
    Global,
    /// `auto` passes through.
    Auto,
    /// Bare number → `Npx` (`0` stays unitless); number with a length unit passes through.
    Px,
    /// Bare number → `N%`; `N%` passes through.
    Percent,
    /// Comma-separated known property names pass through.
    Properties,
}

impl Stage {
    /// Run this stage alone.
    pub fn apply(self, raw: &str) -> Option<String> {
        match self {
            Self::Bracket => bracket(raw),
            Self::CssVar => cssvar(raw),
            Self::Global => global(raw),
            Self::Auto => auto(raw),
            Self::Px => px(raw),
            Self::Percent => percent(raw),
            Self::Properties => properties(raw),
        }
    }
}

/// An ordered chain of normalization stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    stages: &'static [Stage],
}

impl Normalizer {
    /// Create a normalizer from stages, tried left to right.
    pub const fn new(stages: &'static [Stage]) -> Self {
        Self { stages }
    }

    /// The stages of this normalizer.
    pub fn stages(&self) -> &'static [Stage] {
        self.stages
    }

    /// Normalize raw captured text; the first accepting stage wins.
    pub fn apply(&self, raw: &str) -> Option<String> {
        self.stages.iter().find_map(|stage| stage.apply(raw))
    }
}

/// Widths and offsets: bracket, variable, global keyword, pixels.
pub const LENGTH: Normalizer =
    Normalizer::new(&[Stage::Bracket, Stage::CssVar, Stage::Global, Stage::Px]);

/// Opacity slots: bracket, percent, variable.
pub const OPACITY: Normalizer = Normalizer::new(&[Stage::Bracket, Stage::Percent, Stage::CssVar]);

/// `will-change` values: bracket, property list, `auto`, global keyword.
pub const PROPERTY_LIST: Normalizer = Normalizer::new(&[
    Stage::Bracket,
    Stage::Properties,
    Stage::Auto,
    Stage::Global,
]);

/// `$name` or `$name,fallback` → `var(--name)` / `var(--name, fallback)`.
pub fn cssvar(raw: &str) -> Option<String> {
    let body = raw.strip_prefix('$')?;
    let (name, fallback) = match body.split_once(',') {
        Some((name, fallback)) => (name, Some(fallback)),
        None => (body, None),
    };

    let valid_name = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_name {
        return None;
    }

    match fallback.filter(|fallback| !fallback.is_empty()) {
        Some(fallback) => Some(format!("var(--{name}, {})", fallback.replace('_', " "))),
        None => Some(format!("var(--{name})")),
    }
}

/// Global keywords pass through unchanged.
pub fn global(raw: &str) -> Option<String> {
    GlobalKeyword::from_css(raw).map(|keyword| keyword.as_str().to_string())
}

/// `auto` passes through unchanged.
pub fn auto(raw: &str) -> Option<String> {
    (raw == "auto").then(|| raw.to_string())
}

/// Numbers become pixel lengths; zero needs no unit.
pub fn px(raw: &str) -> Option<String> {
    let (number, unit) = split_number(raw)?;
    let number = number_text(number);

    if unit.is_empty() {
        if number == "0" {
            Some(number)
        } else {
            Some(format!("{number}px"))
        }
    } else if LENGTH_UNITS.contains(&unit) {
        Some(format!("{number}{unit}"))
    } else {
        None
    }
}

/// Numbers become percentages.
pub fn percent(raw: &str) -> Option<String> {
    let body = raw.strip_suffix('%').unwrap_or(raw);
    let (number, unit) = split_number(body)?;
    if !unit.is_empty() {
        return None;
    }
    Some(format!("{}%", number_text(number)))
}

/// Comma-separated known property names pass through.
pub fn properties(raw: &str) -> Option<String> {
    raw.split(',')
        .all(is_css_property)
        .then(|| raw.to_string())
}

/// Format a number without a trailing `.0`; negative zero prints as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Validated decimal text as written, with a leading zero before a bare
/// `.` and every zero spelled `0`.
fn number_text(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };

    if digits.bytes().all(|b| b == b'0' || b == b'.') {
        "0".to_string()
    } else if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        number.to_string()
    }
}

/// Split `-12.5rem` into (`-12.5`, `rem`).
///
/// Only plain decimal notation is accepted, so text like `inf`, `NaN` or
/// `1e3` is never treated as a number.
fn split_number(raw: &str) -> Option<(&str, &str)> {
    let bytes = raw.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut seen_digit = false;
    let mut seen_dot = false;

    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit || bytes[end - 1] == b'.' {
        return None;
    }
    Some((&raw[..end], &raw[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_appends_unit_except_zero() {
        assert_eq!(px("4").as_deref(), Some("4px"));
        assert_eq!(px("1.5").as_deref(), Some("1.5px"));
        assert_eq!(px(".5").as_deref(), Some("0.5px"));
        assert_eq!(px("-.5").as_deref(), Some("-0.5px"));
        assert_eq!(px("-2").as_deref(), Some("-2px"));
        assert_eq!(px("0").as_deref(), Some("0"));
        assert_eq!(px("0.0").as_deref(), Some("0"));
        assert_eq!(px("-0").as_deref(), Some("0"));
    }

    #[test]
    fn px_keeps_explicit_length_units() {
        assert_eq!(px("2rem").as_deref(), Some("2rem"));
        assert_eq!(px("10vh").as_deref(), Some("10vh"));
        assert_eq!(px("2deg"), None);
    }

    #[test]
    fn px_rejects_non_numbers() {
        for raw in ["", "-", ".", "4.", "red", "inf", "NaN", "1e3", "4..2", "--4"] {
            assert_eq!(px(raw), None, "{raw:?} should not normalize");
        }
    }

    #[test]
    fn long_numbers_keep_their_digits() {
        let nines = "9".repeat(400);
        assert_eq!(px(&nines), Some(format!("{nines}px")));
        assert_eq!(percent(&nines), Some(format!("{nines}%")));
        assert_eq!(
            px("12345678901234567890").as_deref(),
            Some("12345678901234567890px")
        );
    }

    #[test]
    fn percent_suffix() {
        assert_eq!(percent("50").as_deref(), Some("50%"));
        assert_eq!(percent("12.5%").as_deref(), Some("12.5%"));
        assert_eq!(percent("50px"), None);
        assert_eq!(percent("half"), None);
    }

    #[test]
    fn cssvar_with_fallback() {
        assert_eq!(cssvar("$brand").as_deref(), Some("var(--brand)"));
        assert_eq!(
            cssvar("$ring,2px_solid").as_deref(),
            Some("var(--ring, 2px solid)")
        );
        assert_eq!(cssvar("$").as_deref(), None);
        assert_eq!(cssvar("$a;b"), None);
        assert_eq!(cssvar("brand"), None);
    }

    #[test]
    fn stage_order_decides() {
        // Bracket runs first, so numeric text inside brackets is literal.
        assert_eq!(LENGTH.apply("[4]").as_deref(), Some("4"));
        assert_eq!(OPACITY.apply("[0.35]").as_deref(), Some("0.35"));
        assert_eq!(OPACITY.apply("$op").as_deref(), Some("var(--op)"));
        assert_eq!(OPACITY.apply("inherit"), None);
    }

    #[test]
    fn property_lists() {
        assert_eq!(PROPERTY_LIST.apply("transform,opacity").as_deref(), Some("transform,opacity"));
        assert_eq!(PROPERTY_LIST.apply("auto").as_deref(), Some("auto"));
        assert_eq!(PROPERTY_LIST.apply("transform,bogus"), None);
    }
}
