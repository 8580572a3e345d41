//! Single rule definition.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::declaration::{Declaration, HandlerResult};
use crate::resolve::ResolveContext;
use crate::{Error, Result};

/// Decides whether a rule applies to a token.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The token must equal this string.
    Exact(String),
    /// The pattern must match the whole token.
    Pattern(Regex),
}

impl Matcher {
    /// Create an exact matcher.
    pub fn exact(token: impl Into<String>) -> Self {
        Self::Exact(token.into())
    }

    /// Compile a pattern matcher. The pattern is anchored to the whole token.
    pub fn pattern(source: &str) -> Result<Self> {
        Regex::new(&format!("^(?:{source})$"))
            .map(Self::Pattern)
            .map_err(|e| Error::invalid_pattern(source, e))
    }

    /// Match a token, returning its captures.
    pub fn captures<'t>(&self, token: &'t str) -> Option<Captures<'t>> {
        match self {
            Self::Exact(exact) => (exact == token).then_some(Captures {
                token,
                first: None,
                second: None,
            }),
            Self::Pattern(regex) => {
                let caps = regex.captures(token)?;
                Some(Captures {
                    token,
                    first: caps.get(1).map(|m| m.as_str()),
                    second: caps.get(2).map(|m| m.as_str()),
                })
            }
        }
    }

    /// The exact token or pattern source, for diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(exact) => exact,
            Self::Pattern(regex) => regex.as_str(),
        }
    }
}

/// Text captured from a matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'t> {
    /// The whole token.
    pub token: &'t str,
    /// First capture group, if it participated.
    pub first: Option<&'t str>,
    /// Second capture group, if it participated.
    pub second: Option<&'t str>,
}

/// Handler function signature.
pub type HandlerFn = dyn Fn(&Captures<'_>, &ResolveContext<'_>) -> HandlerResult + Send + Sync;

/// Produces declarations for a matched token.
#[derive(Clone)]
pub enum Handler {
    /// Fixed declarations, cloned on every match.
    Static(Vec<Declaration>),
    /// Declarations computed from the captures and context.
    Dynamic(Arc<HandlerFn>),
}

impl Handler {
    /// Wrap a handler function.
    pub fn dynamic(
        f: impl Fn(&Captures<'_>, &ResolveContext<'_>) -> HandlerResult + Send + Sync + 'static,
    ) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Run the handler. An empty declaration list counts as no match.
    pub fn call(&self, captures: &Captures<'_>, ctx: &ResolveContext<'_>) -> HandlerResult {
        let declarations = match self {
            Self::Static(declarations) => Some(declarations.clone()),
            Self::Dynamic(f) => f(captures, ctx),
        };
        declarations.filter(|declarations| !declarations.is_empty())
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(declarations) => f.debug_tuple("Static").field(declarations).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Documentation and autocomplete hints. Never consulted during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMeta {
    /// Short description.
    pub doc: Option<String>,
    /// Token templates for editor completion, e.g. `outline-<num>`.
    pub autocomplete: Vec<String>,
}

/// A rule: matcher, handler and optional metadata.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Token matcher.
    pub matcher: Matcher,
    /// Declaration producer.
    pub handler: Handler,
    /// Documentation metadata.
    pub meta: Option<RuleMeta>,
}

impl Rule {
    /// Create a rule.
    pub fn new(matcher: Matcher, handler: Handler) -> Self {
        Self {
            matcher,
            handler,
            meta: None,
        }
    }

    /// Exact token producing fixed declarations.
    pub fn exact(token: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self::new(Matcher::exact(token), Handler::Static(declarations))
    }

    /// Pattern with a handler function.
    pub fn pattern(
        source: &str,
        f: impl Fn(&Captures<'_>, &ResolveContext<'_>) -> HandlerResult + Send + Sync + 'static,
    ) -> Result<Self> {
        Ok(Self::new(Matcher::pattern(source)?, Handler::dynamic(f)))
    }

    /// Add autocomplete hints.
    pub fn with_autocomplete<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta
            .get_or_insert_with(RuleMeta::default)
            .autocomplete
            .extend(hints.into_iter().map(Into::into));
        self
    }

    /// Add a description.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(RuleMeta::default).doc = Some(doc.into());
        self
    }

    /// This rule without metadata.
    pub fn without_meta(mut self) -> Self {
        self.meta = None;
        self
    }

    /// Try this rule against a token.
    pub fn apply(&self, token: &str, ctx: &ResolveContext<'_>) -> HandlerResult {
        let captures = self.matcher.captures(token)?;
        self.handler.call(&captures, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn exact_matcher() {
        let matcher = Matcher::exact("list-none");
        let caps = matcher.captures("list-none").unwrap();
        assert_eq!(caps.token, "list-none");
        assert_eq!(caps.first, None);
        assert!(matcher.captures("list-none-x").is_none());
    }

    #[test]
    fn pattern_is_anchored() {
        let matcher = Matcher::pattern("outline-(.+)").unwrap();
        assert!(matcher.captures("x-outline-4").is_none());

        let caps = matcher.captures("outline-4").unwrap();
        assert_eq!(caps.first, Some("4"));
        assert_eq!(caps.second, None);
    }

    #[test]
    fn optional_second_group() {
        let matcher = Matcher::pattern("list-(.+?)(?:-(outside|inside))?").unwrap();

        let caps = matcher.captures("list-decimal-outside").unwrap();
        assert_eq!(caps.first, Some("decimal"));
        assert_eq!(caps.second, Some("outside"));

        let caps = matcher.captures("list-zero-decimal").unwrap();
        assert_eq!(caps.first, Some("zero-decimal"));
        assert_eq!(caps.second, None);
    }

    #[test]
    fn invalid_pattern() {
        let err = Matcher::pattern("outline-(").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn empty_result_is_no_match() {
        let theme = Theme::default();
        let ctx = ResolveContext::new(&theme, "a");

        let rule = Rule::exact("a", vec![]);
        assert_eq!(rule.apply("a", &ctx), None);

        let rule = Rule::pattern("(a)", |_caps: &Captures<'_>, _ctx: &ResolveContext<'_>| {
            Some(vec![])
        })
        .unwrap();
        assert_eq!(rule.apply("a", &ctx), None);
    }

    #[test]
    fn metadata_builders() {
        let rule = Rule::exact("a", vec![Declaration::map([("x", "y")])])
            .with_doc("test rule")
            .with_autocomplete(["a"]);
        let meta = rule.meta.as_ref().unwrap();
        assert_eq!(meta.doc.as_deref(), Some("test rule"));
        assert_eq!(meta.autocomplete, vec!["a".to_string()]);

        assert!(rule.without_meta().meta.is_none());
    }
}
