//! Global keyword rules.

use super::Rule;
use crate::declaration::Declaration;
use crate::value::GlobalKeyword;

/// One exact rule per global keyword: `<prefix>-<keyword>` → `{property: keyword}`.
pub fn make_global_static_rules(prefix: &str, property: &str) -> Vec<Rule> {
    GlobalKeyword::ALL
        .iter()
        .map(|keyword| {
            Rule::exact(
                format!("{prefix}-{}", keyword.as_str()),
                vec![Declaration::map([(property, keyword.as_str())])],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Matcher;

    #[test]
    fn one_rule_per_keyword() {
        let rules = make_global_static_rules("scroll", "scroll-behavior");
        let tokens: Vec<&str> = rules.iter().map(|rule| rule.matcher.as_str()).collect();

        assert_eq!(
            tokens,
            [
                "scroll-inherit",
                "scroll-initial",
                "scroll-revert",
                "scroll-revert-layer",
                "scroll-unset",
            ]
        );
        assert!(rules.iter().all(|rule| matches!(rule.matcher, Matcher::Exact(_))));
    }
}
