//! Color token values.
//!
//! A color token maps a name to either a concrete CSS color literal or a
//! reference to a token the generator resolves from its builtin palette
//! (`colors.sky.500`). The source text of every value is preserved exactly,
//! so the generator emits what the author wrote.

use std::fmt;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// An RGBA color decoded from a configuration literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component, 255 = opaque.
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex literal: `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional. Short forms expand per CSS rules, so
    /// `#222` decodes to the same color as `#222222`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 | 4 => {
                let r = nibble(0)?;
                let g = nibble(1)?;
                let b = nibble(2)?;
                let a = if hex.len() == 4 { nibble(3)? } else { 0xF };
                Some(Self::from_rgba8(r * 17, g * 17, b * 17, a * 17))
            }
            6 | 8 => {
                let r = pair(0)?;
                let g = pair(2)?;
                let b = pair(4)?;
                let a = if hex.len() == 8 { pair(6)? } else { 255 };
                Some(Self::from_rgba8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as a hex literal (`#rrggbb`, or `#rrggbbaa` when translucent).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    pub const YELLOW: Self = Self::from_rgb8(255, 255, 0);
    pub const CYAN: Self = Self::from_rgb8(0, 255, 255);
    pub const MAGENTA: Self = Self::from_rgb8(255, 0, 255);
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
}

/// A color token value with its source text preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// A concrete CSS color literal.
    Literal {
        /// The exact text as authored.
        raw: String,
        /// The decoded color.
        color: Color,
    },
    /// A dotted reference to a token the generator resolves, e.g.
    /// `colors.sky.500`.
    Reference(String),
}

impl ColorValue {
    /// Parse a configuration color value.
    ///
    /// Literals may be hex (`#222`, `#e5e7eb`, `#00ff0080`), a CSS named
    /// color, or an `rgb()`/`rgba()` function. Anything else is accepted
    /// only in dotted reference form.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if let Some(color) = parse_literal(value) {
            return Some(Self::Literal {
                raw: value.to_string(),
                color,
            });
        }

        if is_reference(value) {
            return Some(Self::Reference(value.to_string()));
        }

        None
    }

    /// The exact source text of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal { raw, .. } => raw,
            Self::Reference(path) => path,
        }
    }

    /// The decoded color, when the value is a literal.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Literal { color, .. } => Some(*color),
            Self::Reference(_) => None,
        }
    }

    /// Whether the value refers to a token resolved by the generator.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a standalone color literal, requiring the input to be fully
/// consumed.
fn parse_literal(value: &str) -> Option<Color> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let color = parse_color(&mut parser)?;
    parser.skip_whitespace();
    if parser.is_exhausted() {
        Some(color)
    } else {
        None
    }
}

/// Parse a color token: hash, named color, or rgb()/rgba() function.
fn parse_color(parser: &mut Parser<'_, '_>) -> Option<Color> {
    parser.skip_whitespace();

    let token = match parser.next() {
        Ok(t) => t.clone(),
        Err(_) => return None,
    };

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => Color::from_hex(hash.as_ref()),
        Token::Ident(name) => match name.as_ref().to_lowercase().as_str() {
            "transparent" => Some(Color::TRANSPARENT),
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "blue" => Some(Color::BLUE),
            "yellow" => Some(Color::YELLOW),
            "cyan" => Some(Color::CYAN),
            "magenta" => Some(Color::MAGENTA),
            "gray" | "grey" => Some(Color::GRAY),
            _ => None,
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser
                .parse_nested_block(|p| {
                    let r = parse_color_component(p)?;
                    p.expect_comma()?;
                    let g = parse_color_component(p)?;
                    p.expect_comma()?;
                    let b = parse_color_component(p)?;
                    let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                        parse_alpha_component(p)?
                    } else {
                        255
                    };
                    Ok::<_, CssParseError<'_, ()>>(Color::from_rgba8(r, g, b, a))
                })
                .ok()
        }
        _ => None,
    }
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<u8, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => Ok((unit_value.clamp(0.0, 1.0) * 255.0).round() as u8),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<u8, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok((value.clamp(0.0, 1.0) * 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => Ok((unit_value.clamp(0.0, 1.0) * 255.0).round() as u8),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Check the dotted reference form: two or more non-empty segments of
/// alphanumerics, `-`, or `_`, separated by `.`.
fn is_reference(value: &str) -> bool {
    let mut segments = 0;
    for segment in value.split('.') {
        if segment.is_empty()
            || !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}
