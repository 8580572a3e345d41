//! Color resolution for color-valued utilities.
//!
//! A color body is `<color>[/<opacity>]`. The color part may be a theme key
//! (`red`, `red-500`, `light-blue-300`), `hex-<digits>`, a bracket literal,
//! a `$variable`, `transparent`, `current`/`currentColor` or a global keyword.
//!
//! Colors with known channels are emitted as `rgb(r g b / alpha)`. Without
//! an explicit opacity the alpha reads from the role's opacity variable, so
//! `*-op-*` utilities can adjust it later.

mod parse;

pub use parse::Rgba;

use crate::declaration::{Declaration, HandlerResult};
use crate::property::Vars;
use crate::resolve::ResolveContext;
use crate::rules::Captures;
use crate::theme::Theme;
use crate::value::{
    GlobalKeyword, OPACITY, TypeHint, cssvar, format_number, is_global_keyword, parse_bracket,
};

/// Color functions accepted inside an untyped bracket literal.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "light-dark", "var",
];

/// A resolved color body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    /// CSS color text.
    pub color: String,
    /// Normalized opacity modifier, if one was written.
    pub alpha: Option<String>,
    /// Channels, when the color is concrete.
    pub rgba: Option<Rgba>,
}

/// Parse a color body against the theme.
pub fn parse_color(body: &str, theme: &Theme) -> Option<ParsedColor> {
    let (main, opacity) = split_opacity(body);

    let alpha = match opacity {
        Some(opacity) => Some(OPACITY.apply(opacity)?),
        None => None,
    };

    let color = resolve_main(main, theme)?;
    if alpha.is_some() && is_global_keyword(&color) {
        return None;
    }

    let rgba = Rgba::parse(&color);
    Some(ParsedColor { color, alpha, rgba })
}

/// Resolve a color body into declarations for `property`.
///
/// `opacity_var` is the custom property the alpha channel reads from when the
/// body carries no explicit opacity.
pub fn resolve_color(
    body: &str,
    theme: &Theme,
    property: &str,
    opacity_var: &str,
) -> HandlerResult {
    let parsed = parse_color(body, theme)?;

    let declaration = match (parsed.rgba, parsed.alpha) {
        (Some(rgba), None) => Declaration::map([
            (opacity_var.to_string(), rgba.alpha_css()),
            (
                property.to_string(),
                rgba.to_css_with_alpha(&format!("var({opacity_var})")),
            ),
        ]),
        (Some(rgba), Some(alpha)) => {
            Declaration::map([(property.to_string(), rgba.to_css_with_alpha(&alpha))])
        }
        (None, Some(alpha)) => Declaration::map([(
            property.to_string(),
            format!(
                "color-mix(in srgb, {} {}, transparent)",
                parsed.color,
                alpha_percentage(&alpha)
            ),
        )]),
        (None, None) => Declaration::map([(property.to_string(), parsed.color)]),
    };

    Some(vec![declaration])
}

/// Build a handler resolving the first capture as a color for `property`,
/// with the opacity variable of `role`.
pub fn color_resolver(
    vars: &Vars,
    property: &str,
    role: &str,
) -> impl Fn(&Captures<'_>, &ResolveContext<'_>) -> HandlerResult + Send + Sync + 'static {
    let property = property.to_string();
    let opacity_var = vars.opacity(role);

    move |caps: &Captures<'_>, ctx: &ResolveContext<'_>| {
        resolve_color(caps.first?, ctx.theme, &property, &opacity_var)
    }
}

/// Split `<color>/<opacity>` at the last `/` outside brackets and parentheses.
fn split_opacity(body: &str) -> (&str, Option<&str>) {
    let mut depth = 0i32;
    let mut split = None;

    for (index, c) in body.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            '/' if depth == 0 => split = Some(index),
            _ => {}
        }
    }

    match split {
        Some(index) => (&body[..index], Some(&body[index + 1..])),
        None => (body, None),
    }
}

fn resolve_main(main: &str, theme: &Theme) -> Option<String> {
    if main.is_empty() {
        return None;
    }

    if main.starts_with('[') {
        return bracket_color(main);
    }
    if main.starts_with('$') {
        return cssvar(main);
    }
    if let Some(keyword) = GlobalKeyword::from_css(main) {
        return Some(keyword.as_str().to_string());
    }

    match main {
        "transparent" => return Some("transparent".to_string()),
        "current" | "currentColor" => return Some("currentColor".to_string()),
        _ => {}
    }

    if let Some(hex) = main.strip_prefix("hex-") {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return Rgba::from_hex(hex).map(|_| format!("#{hex}"));
    }

    theme.color(main).map(str::to_string)
}

fn bracket_color(main: &str) -> Option<String> {
    let parsed = parse_bracket(main)?;
    match parsed.hint {
        Some(TypeHint::Color) => Some(parsed.value),
        Some(_) => None,
        None => looks_like_color(&parsed.value).then_some(parsed.value),
    }
}

fn looks_like_color(value: &str) -> bool {
    if Rgba::parse(value).is_some() || value.starts_with('#') {
        return true;
    }

    if let Some((name, _)) = value.split_once('(') {
        return COLOR_FUNCTIONS
            .iter()
            .any(|function| name.eq_ignore_ascii_case(function));
    }

    value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') && !value.is_empty()
}

/// Alpha as a percentage for `color-mix()`.
fn alpha_percentage(alpha: &str) -> String {
    if alpha.ends_with('%') {
        return alpha.to_string();
    }
    match alpha.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}%", format_number(value * 100.0)),
        _ => format!("calc({alpha} * 100%)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAR: &str = "--hl-outline-color-opacity";

    fn resolve(body: &str) -> Option<Declaration> {
        resolve_color(body, &Theme::default(), "outline-color", VAR)
            .map(|mut declarations| declarations.remove(0))
    }

    #[test]
    fn theme_color_sets_opacity_variable() {
        let decl = resolve("red").unwrap();
        assert_eq!(decl.get(VAR), Some("1"));
        assert_eq!(
            decl.get("outline-color"),
            Some("rgb(248 113 113 / var(--hl-outline-color-opacity))")
        );
        assert_eq!(decl.entries()[0].0, VAR);
    }

    #[test]
    fn explicit_opacity_is_inlined() {
        let decl = resolve("red-500/50").unwrap();
        assert_eq!(decl.get(VAR), None);
        assert_eq!(decl.get("outline-color"), Some("rgb(239 68 68 / 50%)"));

        let decl = resolve("blue/[0.35]").unwrap();
        assert_eq!(decl.get("outline-color"), Some("rgb(96 165 250 / 0.35)"));
    }

    #[test]
    fn own_alpha_feeds_the_variable() {
        let decl = resolve("hex-00000080").unwrap();
        assert_eq!(decl.get(VAR), Some("0.502"));
    }

    #[test]
    fn unparsed_colors_pass_through() {
        assert_eq!(
            resolve("$brand").unwrap().get("outline-color"),
            Some("var(--brand)")
        );
        assert_eq!(
            resolve("current").unwrap().get("outline-color"),
            Some("currentColor")
        );
        assert_eq!(
            resolve("inherit").unwrap().get("outline-color"),
            Some("inherit")
        );
        assert_eq!(
            resolve("[oklch(0.7_0.1_200)]").unwrap().get("outline-color"),
            Some("oklch(0.7 0.1 200)")
        );
    }

    #[test]
    fn unparsed_color_with_opacity_mixes() {
        assert_eq!(
            resolve("$brand/50").unwrap().get("outline-color"),
            Some("color-mix(in srgb, var(--brand) 50%, transparent)")
        );
        assert_eq!(
            resolve("transparent/[0.25]").unwrap().get("outline-color"),
            Some("color-mix(in srgb, transparent 25%, transparent)")
        );
    }

    #[test]
    fn brackets_need_color_shape() {
        assert!(resolve("[#0f0]").is_some());
        assert!(resolve("[rgb(1,2,3)]").is_some());
        assert!(resolve("[color:var(--x)]").is_some());
        assert!(resolve("[3px]").is_none());
        assert!(resolve("[length:red]").is_none());
        assert!(resolve("[calc(100%-4px)]").is_none());
    }

    #[test]
    fn non_colors_soft_reject() {
        for body in [
            "",
            "4",
            "123",
            "bogus",
            "red-501",
            "hex-12345",
            "hex-#fff",
            "hex-#0f0/50",
            "inherit/50",
            "red/bad",
        ] {
            assert!(resolve(body).is_none(), "{body:?}");
        }
    }

    #[test]
    fn opacity_split_ignores_nested_slashes() {
        assert_eq!(split_opacity("[url(a/b)]"), ("[url(a/b)]", None));
        assert_eq!(split_opacity("[rgb(1_2_3_/_50%)]/25"), ("[rgb(1_2_3_/_50%)]", Some("25")));
    }
}
