//! CSS math function detection.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// CSS math functions (`calc()` and friends).
pub const MATH_FUNCTIONS: &[&str] = &[
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign", "sin", "cos", "tan",
    "asin", "acos", "atan", "atan2", "pow", "sqrt", "hypot", "log", "exp",
];

/// Check if a value is a single CSS math function call, e.g. `calc(100% - 4px)`.
///
/// The value is tokenized with `cssparser`; the call must span the whole
/// value, so `calc(1px) red` is not a math function.
pub fn is_css_math_fn(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let is_math_call = match parser.next() {
        Ok(Token::Function(name)) => MATH_FUNCTIONS
            .iter()
            .any(|candidate| name.eq_ignore_ascii_case(candidate)),
        _ => false,
    };
    if !is_math_call {
        return false;
    }

    let arguments = parser.parse_nested_block(|block| {
        while block.next().is_ok() {}
        Ok::<_, CssParseError<'_, ()>>(())
    });

    arguments.is_ok() && parser.is_exhausted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_math_calls() {
        assert!(is_css_math_fn("calc(100% - 4px)"));
        assert!(is_css_math_fn("min(1px, 2rem)"));
        assert!(is_css_math_fn("CLAMP(1px, 2vw, 3px)"));
    }

    #[test]
    fn rejects_other_values() {
        assert!(!is_css_math_fn("4px"));
        assert!(!is_css_math_fn("#fff"));
        assert!(!is_css_math_fn("rgb(1 2 3)"));
        assert!(!is_css_math_fn("var(--x)"));
        assert!(!is_css_math_fn("calc(1px) red"));
        assert!(!is_css_math_fn(""));
    }
}
