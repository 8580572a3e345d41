//! Bracket literals: `[...]` arbitrary values inside a token.
//!
//! Tokens cannot contain spaces, so `_` stands for a space inside brackets
//! (`\_` is a literal underscore). Underscores inside `url(...)` are kept
//! as written.

use super::math::MATH_FUNCTIONS;

/// Type hint written as `[hint:value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// `[color:...]`
    Color,
    /// `[length:...]`
    Length,
    /// `[size:...]`
    Size,
    /// `[position:...]`
    Position,
    /// `[image:...]`
    Image,
    /// `[url:...]`
    Url,
    /// `[number:...]`
    Number,
    /// `[string:...]` / `[quoted:...]`
    String,
}

impl TypeHint {
    /// Parse a hint name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "color" => Some(Self::Color),
            "length" => Some(Self::Length),
            "size" => Some(Self::Size),
            "position" => Some(Self::Position),
            "image" => Some(Self::Image),
            "url" => Some(Self::Url),
            "number" => Some(Self::Number),
            "string" | "quoted" => Some(Self::String),
            _ => None,
        }
    }
}

/// A parsed bracket literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketValue {
    /// Explicit type hint, if any.
    pub hint: Option<TypeHint>,
    /// The literal CSS value.
    pub value: String,
}

/// Parse a bracket literal with its optional type hint.
pub fn parse_bracket(raw: &str) -> Option<BracketValue> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;

    let (hint, body) = match inner.split_once(':') {
        Some((name, rest)) => match TypeHint::from_name(name) {
            Some(hint) => (Some(hint), rest),
            None => (None, inner),
        },
        None => (None, inner),
    };

    if body.is_empty() || !is_balanced(body) {
        return None;
    }

    let mut value = unescape_spaces(body);
    if value.starts_with("--") {
        value = format!("var({value})");
    }
    if contains_math_function(&value) {
        value = space_math_operators(&value);
    }

    Some(BracketValue { hint, value })
}

/// Bracket literal value, regardless of type hint.
pub fn bracket(raw: &str) -> Option<String> {
    parse_bracket(raw).map(|parsed| parsed.value)
}

/// Bracket literal value, only if it carries the given type hint.
pub fn bracket_of_type(raw: &str, hint: TypeHint) -> Option<String> {
    parse_bracket(raw)
        .filter(|parsed| parsed.hint == Some(hint))
        .map(|parsed| parsed.value)
}

fn is_balanced(body: &str) -> bool {
    let mut squares = 0i32;
    let mut parens = 0i32;
    for c in body.chars() {
        match c {
            '[' => squares += 1,
            ']' => squares -= 1,
            '(' => parens += 1,
            ')' => parens -= 1,
            _ => {}
        }
        if squares < 0 || parens < 0 {
            return false;
        }
    }
    squares == 0 && parens == 0
}

fn unescape_spaces(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            'u' if body[index..].starts_with("url") && is_call_at(body, index, 3) => {
                let end = body[index..]
                    .find(')')
                    .map_or(body.len(), |offset| index + offset + 1);
                out.push_str(&body[index..end]);
                while chars.peek().is_some_and(|&(next, _)| next < end) {
                    chars.next();
                }
            }
            '\\' if chars.peek().is_some_and(|&(_, next)| next == '_') => {
                chars.next();
                out.push('_');
            }
            '_' => out.push(' '),
            _ => out.push(c),
        }
    }

    out
}

fn contains_math_function(value: &str) -> bool {
    MATH_FUNCTIONS.iter().any(|name| {
        value
            .match_indices(name)
            .any(|(index, _)| is_call_at(value, index, name.len()))
    })
}

fn is_call_at(value: &str, index: usize, len: usize) -> bool {
    let starts_word = value[..index]
        .chars()
        .next_back()
        .is_none_or(|prev| !prev.is_ascii_alphanumeric() && prev != '-');
    starts_word && value[index + len..].starts_with('(')
}

/// Put spaces around binary operators: `calc(100%-4px)` → `calc(100% - 4px)`.
///
/// An operator only counts when it follows a number (with optional unit) or
/// a closing parenthesis, so `var(--a-b)` and leading signs are untouched.
fn space_math_operators(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 8);
    let mut in_number = false;
    let mut in_word = false;

    for (index, &c) in chars.iter().enumerate() {
        let prev = index.checked_sub(1).map(|i| chars[i]);
        let next = chars.get(index + 1).copied();

        let is_operator = matches!(c, '+' | '-' | '*' | '/')
            && (in_number || prev == Some(')'))
            && next.is_some_and(|n| n.is_ascii_alphanumeric() || matches!(n, '.' | '(' | '-' | '$'));

        if is_operator {
            out.push(' ');
            out.push(c);
            out.push(' ');
            in_number = false;
            in_word = false;
            continue;
        }

        match c {
            '0'..='9' | '.' => {
                if !in_word {
                    in_number = true;
                }
            }
            'a'..='z' | 'A'..='Z' | '%' => {
                if !in_number {
                    in_word = true;
                }
            }
            '-' | '_' => {
                if in_number {
                    in_number = false;
                    in_word = true;
                }
            }
            _ => {
                in_number = false;
                in_word = false;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_plain_literal() {
        assert_eq!(bracket("[3px]").as_deref(), Some("3px"));
        assert_eq!(bracket("3px"), None);
        assert_eq!(bracket("[]"), None);
    }

    #[test]
    fn underscores_become_spaces() {
        assert_eq!(bracket("[1px_solid_red]").as_deref(), Some("1px solid red"));
        assert_eq!(bracket(r"[a\_b]").as_deref(), Some("a_b"));
        assert_eq!(
            bracket("[url(/img/my_icon.png)]").as_deref(),
            Some("url(/img/my_icon.png)")
        );
    }

    #[test]
    fn url_must_start_a_word() {
        assert_eq!(bracket("[surl(a_b)]").as_deref(), Some("surl(a b)"));
        assert_eq!(bracket("[x_url(a_b)]").as_deref(), Some("x url(a_b)"));
    }

    #[test]
    fn custom_property_becomes_var() {
        assert_eq!(bracket("[--ring-width]").as_deref(), Some("var(--ring-width)"));
    }

    #[test]
    fn math_operators_are_spaced() {
        assert_eq!(
            bracket("[calc(100%-4px)]").as_deref(),
            Some("calc(100% - 4px)")
        );
        assert_eq!(
            bracket("[calc(var(--a-b)+2rem)]").as_deref(),
            Some("calc(var(--a-b) + 2rem)")
        );
        assert_eq!(bracket("[min(10px,-2rem)]").as_deref(), Some("min(10px,-2rem)"));
        assert_eq!(bracket("[calc(100%/3)]").as_deref(), Some("calc(100% / 3)"));
    }

    #[test]
    fn rejects_unbalanced() {
        assert_eq!(bracket("[calc(1px]"), None);
        assert_eq!(bracket("[a]b]"), None);
    }

    #[test]
    fn type_hints() {
        let parsed = parse_bracket("[color:var(--brand)]").unwrap();
        assert_eq!(parsed.hint, Some(TypeHint::Color));
        assert_eq!(parsed.value, "var(--brand)");

        assert_eq!(bracket_of_type("[length:2px]", TypeHint::Length).as_deref(), Some("2px"));
        assert_eq!(bracket_of_type("[length:2px]", TypeHint::Color), None);
        assert_eq!(bracket_of_type("[2px]", TypeHint::Length), None);

        // Unknown prefixes are part of the value.
        assert_eq!(
            bracket("[url(https://x.test/a.png)]").as_deref(),
            Some("url(https://x.test/a.png)")
        );
    }
}
