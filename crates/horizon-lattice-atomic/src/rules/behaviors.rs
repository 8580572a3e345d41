//! Static behavior utilities: appearance, will-change, image rendering,
//! overscroll and scroll behavior.

use super::globals::make_global_static_rules;
use super::{Captures, Rule};
use crate::declaration::Declaration;
use crate::resolve::ResolveContext;
use crate::value::PROPERTY_LIST;
use crate::Result;

/// `<prefix>-<keyword>` → `{property: keyword}` for each keyword.
fn keyword_rules(prefix: &str, property: &str, keywords: &[&str]) -> Vec<Rule> {
    keywords
        .iter()
        .map(|keyword| {
            Rule::exact(
                format!("{prefix}-{keyword}"),
                vec![Declaration::map([(property, *keyword)])],
            )
        })
        .collect()
}

/// `appearance-auto`, `appearance-none`.
pub fn appearance_rules() -> Vec<Rule> {
    ["auto", "none"]
        .into_iter()
        .map(|value| {
            Rule::exact(
                format!("appearance-{value}"),
                vec![Declaration::map([
                    ("-webkit-appearance", value),
                    ("appearance", value),
                ])],
            )
        })
        .collect()
}

fn will_change_value(raw: &str) -> Option<String> {
    PROPERTY_LIST.apply(raw).or_else(|| match raw {
        "contents" => Some("contents".to_string()),
        "scroll" => Some("scroll-position".to_string()),
        _ => None,
    })
}

/// `will-change-<properties>`.
pub fn will_change_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::pattern(
            "will-change-(.+)",
            |caps: &Captures<'_>, _ctx: &ResolveContext<'_>| {
                let value = will_change_value(caps.first?)?;
                Some(vec![Declaration::map([("will-change", value)])])
            },
        )?
        .with_autocomplete(["will-change-<property>"]),
    ])
}

/// `image-render-*`.
pub fn image_rendering_rules() -> Vec<Rule> {
    vec![
        Rule::exact(
            "image-render-auto",
            vec![Declaration::map([("image-rendering", "auto")])],
        ),
        Rule::exact(
            "image-render-edge",
            vec![Declaration::map([("image-rendering", "crisp-edges")])],
        ),
        Rule::exact(
            "image-render-pixel",
            vec![Declaration::pairs([
                ("-ms-interpolation-mode", "nearest-neighbor"),
                ("image-rendering", "-webkit-optimize-contrast"),
                ("image-rendering", "-moz-crisp-edges"),
                ("image-rendering", "-o-pixelated"),
                ("image-rendering", "pixelated"),
            ])],
        )
        .with_doc("Nearest-neighbour scaling with vendor fallbacks"),
    ]
}

const OVERSCROLL_VALUES: &[&str] = &["auto", "contain", "none"];

/// `overscroll-*`, `overscroll-x-*`, `overscroll-y-*`.
pub fn overscroll_rules() -> Vec<Rule> {
    let mut rules = Vec::new();
    for (prefix, property) in [
        ("overscroll", "overscroll-behavior"),
        ("overscroll-x", "overscroll-behavior-x"),
        ("overscroll-y", "overscroll-behavior-y"),
    ] {
        rules.extend(keyword_rules(prefix, property, OVERSCROLL_VALUES));
        rules.extend(make_global_static_rules(prefix, property));
    }
    rules
}

/// `scroll-auto`, `scroll-smooth` and global keywords.
pub fn scroll_behavior_rules() -> Vec<Rule> {
    let mut rules = keyword_rules("scroll", "scroll-behavior", &["auto", "smooth"]);
    rules.extend(make_global_static_rules("scroll", "scroll-behavior"));
    rules
}
