//! Accent and caret colors, plus the shared `*-op-*` opacity rule.

use super::{Captures, Rule};
use crate::color::color_resolver;
use crate::declaration::Declaration;
use crate::property::Vars;
use crate::resolve::ResolveContext;
use crate::value::OPACITY;
use crate::Result;

/// `<prefix>-op-<n>` / `<prefix>-opacity-<n>` setting `opacity_var`.
pub fn opacity_rule(prefix: &str, opacity_var: &str) -> Result<Rule> {
    let opacity_var = opacity_var.to_string();
    Rule::pattern(
        &format!("{prefix}-op(?:acity)?-?(.+)"),
        move |caps: &Captures<'_>, _ctx: &ResolveContext<'_>| {
            let opacity = OPACITY.apply(caps.first?)?;
            Some(vec![Declaration::map([(opacity_var.as_str(), opacity)])])
        },
    )
}

/// Opacity and color rules for one color utility family.
fn color_family(vars: &Vars, prefix: &str, property: &str) -> Result<Vec<Rule>> {
    Ok(vec![
        opacity_rule(prefix, &vars.opacity(prefix))?
            .with_autocomplete([format!("{prefix}-(op|opacity)-<percent>")]),
        Rule::pattern(&format!("{prefix}-(.+)"), color_resolver(vars, property, prefix))?
            .with_autocomplete([format!("{prefix}-$colors")]),
    ])
}

/// `accent-*` rules.
pub fn accent_rules(vars: &Vars) -> Result<Vec<Rule>> {
    color_family(vars, "accent", "accent-color")
}

/// `caret-*` rules.
pub fn caret_rules(vars: &Vars) -> Result<Vec<Rule>> {
    color_family(vars, "caret", "caret-color")
}
