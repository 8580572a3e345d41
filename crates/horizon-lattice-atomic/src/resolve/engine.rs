//! Token resolution driver.

use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::declaration::HandlerResult;
use crate::logging::targets;
use crate::property::Vars;
use crate::rules::RuleTable;
use crate::theme::{Theme, ThemeStore};
use crate::Result;

/// Read-only data available to handlers while resolving one token.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Theme snapshot for this resolution.
    pub theme: &'a Theme,
    /// The token being resolved.
    pub token: &'a str,
}

impl<'a> ResolveContext<'a> {
    /// Create a context.
    pub fn new(theme: &'a Theme, token: &'a str) -> Self {
        Self { theme, token }
    }
}

/// Resolves tokens against a rule table.
///
/// Rules are tried in table order. A rule whose handler returns `None` is
/// skipped and scanning continues; the first rule producing declarations
/// wins.
///
/// # Example
///
/// ```
/// use horizon_lattice_atomic::prelude::*;
///
/// let resolver = Resolver::builtin()?;
/// let theme = Theme::default();
///
/// let out = resolver.resolve("outline-offset-4", &theme).unwrap();
/// assert_eq!(out[0].to_string(), "outline-offset: 4px;");
///
/// assert!(resolver.resolve("outline-bogus", &theme).is_none());
/// # Ok::<(), horizon_lattice_atomic::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    table: RuleTable,
}

impl Resolver {
    /// Create a resolver over a rule table.
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Resolver over the built-in table with the default prefix.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(RuleTable::builtin(&Vars::default())?))
    }

    /// Resolver over the built-in table with the configured prefix.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(RuleTable::builtin(&config.vars()?)?))
    }

    /// The rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Resolve one token.
    pub fn resolve(&self, token: &str, theme: &Theme) -> HandlerResult {
        let ctx = ResolveContext::new(theme, token);

        for (index, rule) in self.table.iter().enumerate() {
            if let Some(declarations) = rule.apply(token, &ctx) {
                tracing::debug!(
                    target: targets::RESOLVE,
                    token,
                    rule = index,
                    count = declarations.len(),
                    "resolved"
                );
                return Some(declarations);
            }

            tracing::trace!(
                target: targets::RESOLVE,
                token,
                rule = index,
                matcher = rule.matcher.as_str(),
                "rule skipped"
            );
        }

        tracing::debug!(target: targets::RESOLVE, token, "unresolved");
        None
    }

    /// Resolve one token against the store's current theme.
    pub fn resolve_with(&self, token: &str, store: &ThemeStore) -> HandlerResult {
        let theme = store.snapshot();
        self.resolve(token, &theme)
    }

    /// Resolve tokens in parallel. Results are in input order.
    pub fn resolve_many<S>(&self, tokens: &[S], theme: &Theme) -> Vec<HandlerResult>
    where
        S: AsRef<str> + Sync,
    {
        tokens
            .par_iter()
            .map(|token| self.resolve(token.as_ref(), theme))
            .collect()
    }
}
