//! Outline utilities: width, style, color, offset and opacity.

use super::colors::opacity_rule;
use super::{Captures, Rule};
use crate::color::resolve_color;
use crate::declaration::{Declaration, HandlerResult};
use crate::property::{PropertyOptions, Vars, define_property};
use crate::resolve::ResolveContext;
use crate::value::{GlobalKeyword, LENGTH, bracket, is_css_math_fn};
use crate::Result;

/// Outline style keywords, in addition to the global keywords.
pub const OUTLINE_STYLES: &[&str] = &[
    "none", "auto", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Width from the theme's line widths, falling back to a length.
fn line_width(raw: &str, ctx: &ResolveContext<'_>) -> Option<String> {
    ctx.theme
        .line_width(raw)
        .map(str::to_string)
        .or_else(|| LENGTH.apply(raw))
}

#[derive(Debug, Clone)]
struct OutlineVars {
    style: String,
    color_opacity: String,
}

impl OutlineVars {
    fn new(vars: &Vars) -> Self {
        Self {
            style: vars.name("outline-style"),
            color_opacity: vars.opacity("outline-color"),
        }
    }

    fn style_registration(&self) -> Declaration {
        define_property(&self.style, PropertyOptions::initial("solid"))
    }

    fn width(&self, raw: &str, ctx: &ResolveContext<'_>) -> HandlerResult {
        let width = line_width(raw, ctx)?;
        Some(vec![
            Declaration::map([
                ("outline-width".to_string(), width),
                ("outline-style".to_string(), format!("var({})", self.style)),
            ]),
            self.style_registration(),
        ])
    }

    fn color_or_width(&self, raw: &str, ctx: &ResolveContext<'_>) -> HandlerResult {
        if bracket(raw).is_some_and(|value| is_css_math_fn(&value)) {
            return self.width(raw, ctx);
        }
        resolve_color(raw, ctx.theme, "outline-color", &self.color_opacity)
    }
}

/// Outline rules, in match order.
pub fn rules(vars: &Vars) -> Result<Vec<Rule>> {
    let outline = OutlineVars::new(vars);
    let mut rules = Vec::new();

    rules.push(
        Rule::pattern(
            "outline-offset-(.+)",
            |caps: &Captures<'_>, ctx: &ResolveContext<'_>| {
                let offset = line_width(caps.first?, ctx)?;
                Some(vec![Declaration::map([("outline-offset", offset)])])
            },
        )?
        .with_autocomplete(["outline-(offset)-<num>"]),
    );

    rules.push(
        opacity_rule("outline", &outline.color_opacity)?
            .with_autocomplete(["outline-(op|opacity)-<percent>"]),
    );

    rules.push(
        Rule::exact(
            "outline",
            vec![
                Declaration::map([
                    ("outline-width".to_string(), "1px".to_string()),
                    ("outline-style".to_string(), format!("var({})", outline.style)),
                ]),
                outline.style_registration(),
            ],
        )
        .with_doc("1px outline in the current outline style"),
    );

    rules.push(
        Rule::exact(
            "outline-hidden",
            vec![
                Declaration::map([("outline-style", "none")]),
                Declaration::scoped(
                    "@media (forced-colors: active)",
                    Declaration::map([
                        ("outline", "2px solid transparent"),
                        ("outline-offset", "2px"),
                    ]),
                ),
            ],
        )
        .with_doc("Hide the outline, keeping a transparent one in forced-colors mode"),
    );

    let keywords = OUTLINE_STYLES
        .iter()
        .copied()
        .chain(GlobalKeyword::ALL.into_iter().map(|keyword| keyword.as_str()));
    for keyword in keywords {
        rules.push(
            Rule::exact(
                format!("outline-{keyword}"),
                vec![Declaration::map([
                    (outline.style.as_str(), keyword),
                    ("outline-style", keyword),
                ])],
            )
            .with_autocomplete([format!("outline-{keyword}")]),
        );
    }

    let color = outline.clone();
    rules.push(
        Rule::pattern(
            "outline-(?:color-)?(.+)",
            move |caps: &Captures<'_>, ctx: &ResolveContext<'_>| {
                color.color_or_width(caps.first?, ctx)
            },
        )?
        .with_autocomplete(["outline-$colors"]),
    );

    let width = outline;
    rules.push(
        Rule::pattern(
            "outline-(?:width-|size-)?(.+)",
            move |caps: &Captures<'_>, ctx: &ResolveContext<'_>| width.width(caps.first?, ctx),
        )?
        .with_autocomplete(["outline-(width|size)-<num>"]),
    );

    Ok(rules)
}
