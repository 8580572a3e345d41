//! Collection of resolved declarations across tokens.

use serde::Deserialize;

use crate::declaration::Declaration;
use crate::logging::targets;
use crate::property::registered_property;

/// Which `@property` registration to keep when several tokens register the
/// same custom property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyPolicy {
    /// Keep the first registration.
    #[default]
    FirstWins,
    /// Keep the last registration, at the position of the first.
    LastWins,
}

/// Gathers declarations from many tokens, de-duplicating `@property`
/// registrations.
///
/// Registrations are kept apart from ordinary declarations and emitted after
/// them.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    policy: PropertyPolicy,
    declarations: Vec<Declaration>,
    registrations: Vec<Declaration>,
}

impl Collector {
    /// Create a collector with a registration policy.
    pub fn new(policy: PropertyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The registration policy.
    pub fn policy(&self) -> PropertyPolicy {
        self.policy
    }

    /// Add the declarations of one token.
    pub fn push(&mut self, declarations: impl IntoIterator<Item = Declaration>) {
        for declaration in declarations {
            match registered_property(&declaration) {
                Some(name) => {
                    let name = name.to_string();
                    self.register(&name, declaration);
                }
                None => self.declarations.push(declaration),
            }
        }
    }

    fn register(&mut self, name: &str, declaration: Declaration) {
        let existing = self
            .registrations
            .iter_mut()
            .find(|registered| registered_property(registered) == Some(name));

        let Some(existing) = existing else {
            self.registrations.push(declaration);
            return;
        };

        if *existing != declaration {
            tracing::debug!(
                target: targets::COLLECT,
                property = name,
                policy = ?self.policy,
                "conflicting property registration"
            );
        }
        if self.policy == PropertyPolicy::LastWins {
            *existing = declaration;
        }
    }

    /// Ordinary declarations, in insertion order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// `@property` registrations, one per custom property.
    pub fn registrations(&self) -> &[Declaration] {
        &self.registrations
    }

    /// All declarations followed by the registrations.
    pub fn finish(self) -> Vec<Declaration> {
        let mut out = self.declarations;
        out.extend(self.registrations);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyOptions, define_property};

    fn registration(initial: &str) -> Declaration {
        define_property("--hl-outline-style", PropertyOptions::initial(initial))
    }

    #[test]
    fn first_wins_keeps_one_registration() {
        let mut collector = Collector::default();
        collector.push([Declaration::map([("a", "1")]), registration("solid")]);
        collector.push([Declaration::map([("b", "2")]), registration("dashed")]);

        assert_eq!(collector.declarations().len(), 2);
        assert_eq!(collector.registrations().len(), 1);
        assert_eq!(collector.registrations()[0].get("initial-value"), Some("solid"));
    }

    #[test]
    fn last_wins_replaces() {
        let mut collector = Collector::new(PropertyPolicy::LastWins);
        collector.push([registration("solid")]);
        collector.push([registration("dashed")]);

        let out = collector.finish();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("initial-value"), Some("dashed"));
    }

    #[test]
    fn registrations_come_last() {
        let mut collector = Collector::default();
        collector.push([registration("solid"), Declaration::map([("a", "1")])]);

        let out = collector.finish();
        assert_eq!(out[0].get("a"), Some("1"));
        assert!(registered_property(&out[1]).is_some());
    }
}
