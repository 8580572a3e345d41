//! Concrete color parsing using the `cssparser` tokenizer.
//!
//! Only colors whose channels can be split out are parsed here: hex,
//! `rgb()`/`rgba()`, `hsl()`/`hsla()` and a few named colors. Everything else
//! (variables, `currentColor`, `oklch()`...) is emitted as written by the
//! resolver.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use crate::value::format_number;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha in 0.0-1.0.
    pub alpha: f32,
}

impl Rgba {
    /// Create a color from channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse a hex color (`#` optional) with 3, 4, 6 or 8 digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        let short = |index: usize| channel(index..index + 1).map(|v| v * 17);

        match hex.len() {
            3 => Some(Self::new(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::new(
                short(0)?,
                short(1)?,
                short(2)?,
                f32::from(short(3)?) / 255.0,
            )),
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                f32::from(channel(6..8)?) / 255.0,
            )),
            _ => None,
        }
    }

    /// Parse CSS color text. Returns `None` for anything that is not a
    /// complete, concrete color.
    pub fn parse(text: &str) -> Option<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let color = parse_color(&mut parser).ok()?;
        parser.expect_exhausted().ok()?;
        Some(color)
    }

    /// `rgb(r g b / alpha)` with the given alpha expression.
    pub fn to_css_with_alpha(&self, alpha: &str) -> String {
        format!("rgb({} {} {} / {alpha})", self.red, self.green, self.blue)
    }

    /// The color's own alpha as CSS text, rounded to three decimals.
    pub fn alpha_css(&self) -> String {
        format_number((f64::from(self.alpha) * 1000.0).round() / 1000.0)
    }
}

fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, CssParseError<'i, ()>> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Rgba::from_hex(&hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => named_color(&name).ok_or_else(|| parser.new_custom_error(())),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|block| parse_rgb_arguments(block))
        }
        Token::Function(name)
            if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
        {
            parser.parse_nested_block(|block| parse_hsl_arguments(block))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        _ => return None,
    };
    Some(Rgba::new(rgb.0, rgb.1, rgb.2, 1.0))
}

/// `r, g, b[, a]` or `r g b[ / a]`.
fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, CssParseError<'i, ()>> {
    let red = parse_channel(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let green = parse_channel(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let blue = parse_channel(parser)?;
    let alpha = parse_optional_alpha(parser, legacy)?;
    Ok(Rgba::new(red, green, blue, alpha))
}

/// `h, s%, l%[, a]` or `h s% l%[ / a]`.
fn parse_hsl_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, CssParseError<'i, ()>> {
    let hue = parse_hue(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parse_fraction(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let lightness = parse_fraction(parser)?;
    let alpha = parse_optional_alpha(parser, legacy)?;

    let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
    Ok(Rgba::new(red, green, blue, alpha))
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, CssParseError<'i, ()>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(to_channel(value)),
        Token::Percentage { unit_value, .. } => Ok(to_channel(unit_value * 255.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, CssParseError<'i, ()>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension { value, unit, .. } => {
            if unit.eq_ignore_ascii_case("deg") {
                Ok(value)
            } else if unit.eq_ignore_ascii_case("turn") {
                Ok(value * 360.0)
            } else if unit.eq_ignore_ascii_case("rad") {
                Ok(value.to_degrees())
            } else if unit.eq_ignore_ascii_case("grad") {
                Ok(value * 0.9)
            } else {
                Err(parser.new_custom_error(()))
            }
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_fraction<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, CssParseError<'i, ()>> {
    let token = parser.next()?.clone();
    match token {
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        Token::Number { value, .. } => Ok((value / 100.0).clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_optional_alpha<'i>(
    parser: &mut Parser<'i, '_>,
    legacy: bool,
) -> Result<f32, CssParseError<'i, ()>> {
    let separated = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    if !separated {
        return Ok(1.0);
    }

    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let gray = to_channel(lightness * 255.0);
        return (gray, gray, gray);
    }

    let hue = hue.rem_euclid(360.0) / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |offset: f32| {
        let mut t = hue + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        to_channel(v * 255.0)
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lengths() {
        assert_eq!(Rgba::from_hex("#f00"), Some(Rgba::new(255, 0, 0, 1.0)));
        assert_eq!(Rgba::from_hex("ef4444"), Some(Rgba::new(239, 68, 68, 1.0)));
        assert_eq!(Rgba::from_hex("#0000"), Some(Rgba::new(0, 0, 0, 0.0)));
        assert_eq!(Rgba::from_hex("#00000080").map(|c| c.alpha_css()).as_deref(), Some("0.502"));
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#ggg"), None);
    }

    #[test]
    fn parse_formats() {
        assert_eq!(Rgba::parse("#3b82f6"), Some(Rgba::new(59, 130, 246, 1.0)));
        assert_eq!(Rgba::parse("rgb(1, 2, 3)"), Some(Rgba::new(1, 2, 3, 1.0)));
        assert_eq!(Rgba::parse("rgba(1,2,3,0.5)"), Some(Rgba::new(1, 2, 3, 0.5)));
        assert_eq!(Rgba::parse("rgb(1 2 3 / 25%)"), Some(Rgba::new(1, 2, 3, 0.25)));
        assert_eq!(Rgba::parse("hsl(0, 100%, 50%)"), Some(Rgba::new(255, 0, 0, 1.0)));
        assert_eq!(Rgba::parse("hsl(120deg 100% 25%)"), Some(Rgba::new(0, 128, 0, 1.0)));
        assert_eq!(Rgba::parse("White"), Some(Rgba::new(255, 255, 255, 1.0)));
    }

    #[test]
    fn parse_rejects_non_colors() {
        for text in ["", "3px", "var(--x)", "currentColor", "oklch(0.7 0.1 200)", "#fff red"] {
            assert_eq!(Rgba::parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn css_output() {
        let color = Rgba::new(248, 113, 113, 1.0);
        assert_eq!(color.to_css_with_alpha("0.5"), "rgb(248 113 113 / 0.5)");
        assert_eq!(color.alpha_css(), "1");
    }
}
