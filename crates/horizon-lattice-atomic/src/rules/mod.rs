//! Rules and the ordered rule table.

mod behaviors;
mod colors;
mod globals;
mod list;
mod outline;
mod rule;

pub use behaviors::{
    appearance_rules, image_rendering_rules, overscroll_rules, scroll_behavior_rules,
    will_change_rules,
};
pub use colors::{accent_rules, caret_rules, opacity_rule};
pub use globals::make_global_static_rules;
pub use list::LIST_STYLES;
pub use outline::OUTLINE_STYLES;
pub use rule::{Captures, Handler, HandlerFn, Matcher, Rule, RuleMeta};

use crate::property::Vars;
use crate::Result;

/// Rules in match order. The first rule whose handler produces declarations
/// wins.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table.
    pub fn builtin(vars: &Vars) -> Result<Self> {
        let mut table = Self::new();
        table.extend(outline::rules(vars)?);
        table.extend(appearance_rules());
        table.extend(will_change_rules()?);
        table.extend(list::rules()?);
        table.extend(accent_rules(vars)?);
        table.extend(caret_rules(vars)?);
        table.extend(image_rendering_rules());
        table.extend(overscroll_rules());
        table.extend(scroll_behavior_rules());
        Ok(table)
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append rules.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
    }

    /// Rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The same rules with all metadata removed.
    pub fn without_metadata(&self) -> Self {
        Self {
            rules: self.rules.iter().cloned().map(Rule::without_meta).collect(),
        }
    }

    /// Autocomplete hints of all rules, in table order.
    pub fn autocomplete(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter_map(|rule| rule.meta.as_ref())
            .flat_map(|meta| meta.autocomplete.iter().map(String::as_str))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
