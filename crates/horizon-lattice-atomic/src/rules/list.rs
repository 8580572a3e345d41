//! List style utilities.

use super::globals::make_global_static_rules;
use super::{Captures, Rule};
use crate::declaration::Declaration;
use crate::resolve::ResolveContext;
use crate::value::bracket;
use crate::Result;

/// Token alias → `list-style-type` value.
pub const LIST_STYLES: &[(&str, &str)] = &[
    ("disc", "disc"),
    ("circle", "circle"),
    ("square", "square"),
    ("decimal", "decimal"),
    ("zero-decimal", "decimal-leading-zero"),
    ("greek", "lower-greek"),
    ("roman", "lower-roman"),
    ("upper-roman", "upper-roman"),
    ("alpha", "lower-alpha"),
    ("upper-alpha", "upper-alpha"),
    ("latin", "lower-latin"),
    ("upper-latin", "upper-latin"),
];

fn list_style(alias: &str) -> Option<&'static str> {
    LIST_STYLES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, style)| *style)
}

/// List rules, in match order.
pub fn rules() -> Result<Vec<Rule>> {
    let mut rules = vec![
        Rule::exact(
            "list-outside",
            vec![Declaration::map([("list-style-position", "outside")])],
        ),
        Rule::exact(
            "list-inside",
            vec![Declaration::map([("list-style-position", "inside")])],
        ),
        Rule::exact(
            "list-none",
            vec![Declaration::map([("list-style-type", "none")])],
        ),
        Rule::exact(
            "list-image-none",
            vec![Declaration::map([("list-style-image", "none")])],
        ),
        Rule::pattern(
            r"list-image-(\[url\(.+\)\])",
            |caps: &Captures<'_>, _ctx: &ResolveContext<'_>| {
                let image = bracket(caps.first?)?;
                Some(vec![Declaration::map([("list-style-image", image)])])
            },
        )?
        .with_autocomplete(["list-image-[url(...)]"]),
        Rule::pattern(
            "list-(.+?)(?:-(outside|inside))?",
            |caps: &Captures<'_>, _ctx: &ResolveContext<'_>| {
                let style = list_style(caps.first?)?;
                let mut declaration = Vec::with_capacity(2);
                if let Some(position) = caps.second {
                    declaration.push(("list-style-position", position));
                }
                declaration.push(("list-style-type", style));
                Some(vec![Declaration::map(declaration)])
            },
        )?
        .with_autocomplete(
            LIST_STYLES
                .iter()
                .map(|(alias, _)| format!("list-{alias}-(outside|inside)")),
        ),
    ];

    rules.extend(make_global_static_rules("list", "list-style-type"));
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::HandlerResult;
    use crate::theme::Theme;

    fn resolve(token: &str) -> HandlerResult {
        let theme = Theme::default();
        let ctx = ResolveContext::new(&theme, token);
        rules()
            .unwrap()
            .iter()
            .find_map(|rule| rule.apply(token, &ctx))
    }

    #[test]
    fn alias_with_position() {
        let out = resolve("list-decimal-outside").unwrap();
        assert_eq!(
            out[0].entries(),
            [
                ("list-style-position".to_string(), "outside".to_string()),
                ("list-style-type".to_string(), "decimal".to_string()),
            ]
        );
    }

    #[test]
    fn aliases() {
        assert_eq!(resolve("list-roman").unwrap()[0].get("list-style-type"), Some("lower-roman"));
        assert_eq!(
            resolve("list-zero-decimal-inside").unwrap()[0].get("list-style-type"),
            Some("decimal-leading-zero")
        );
        assert_eq!(resolve("list-upper-alpha").unwrap()[0].get("list-style-position"), None);
    }

    #[test]
    fn unknown_alias_is_unresolved() {
        assert!(resolve("list-bogus").is_none());
        assert!(resolve("list-bogus-outside").is_none());
        assert!(resolve("list-image-foo").is_none());
    }

    #[test]
    fn exact_and_global_rules() {
        assert_eq!(resolve("list-inside").unwrap()[0].get("list-style-position"), Some("inside"));
        assert_eq!(resolve("list-none").unwrap()[0].get("list-style-type"), Some("none"));
        assert_eq!(resolve("list-unset").unwrap()[0].get("list-style-type"), Some("unset"));
    }

    #[test]
    fn image() {
        assert_eq!(
            resolve("list-image-[url(/img/dot.svg)]").unwrap()[0].get("list-style-image"),
            Some("url(/img/dot.svg)")
        );
        assert_eq!(resolve("list-image-none").unwrap()[0].get("list-style-image"), Some("none"));
    }
}
