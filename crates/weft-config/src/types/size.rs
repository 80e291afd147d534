//! Unit-bearing size literals.
//!
//! # Example
//!
//! ```
//! use weft_config::{Length, SizeLiteral};
//!
//! let padding = SizeLiteral::parse("1rem").unwrap();
//! assert_eq!(padding.as_str(), "1rem");
//! assert_eq!(padding.length(), Length::Rem(1.0));
//! assert_eq!(padding.to_px(16.0), Some(16.0));
//!
//! let width = SizeLiteral::parse("1125px").unwrap();
//! assert_eq!(width.to_px(16.0), Some(1125.0));
//! ```

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

/// A CSS length decoded from a configuration literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Relative to the root font size.
    Rem(f32),
    /// Relative to the element font size.
    Em(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Zero, written without a unit.
    Zero,
}

impl Length {
    /// Resolve to pixels where possible.
    ///
    /// `rem_base` is the root font size. `Em` resolves against the same
    /// base, since a configuration carries no element context, and
    /// `Percent` has no absolute resolution here.
    pub fn to_px(&self, rem_base: f32) -> Option<f32> {
        match self {
            Length::Px(v) => Some(*v),
            Length::Rem(v) | Length::Em(v) => Some(v * rem_base),
            Length::Percent(_) => None,
            Length::Zero => Some(0.0),
        }
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Length::Zero => true,
            Length::Px(v) | Length::Rem(v) | Length::Em(v) | Length::Percent(v) => *v == 0.0,
        }
    }
}

/// A size value with its source text preserved (`1rem`, `1125px`).
///
/// The generator emits the literal exactly as authored; the decoded
/// [`Length`] exists for validation and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLiteral {
    raw: String,
    length: Length,
}

impl SizeLiteral {
    /// Parse a size literal.
    ///
    /// Recognized units are `px`, `rem`, `em`, and `%`. A bare `0` is
    /// accepted; any other unitless or unknown-unit value is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);

        let length = parse_length(&mut parser)?;
        parser.skip_whitespace();
        if !parser.is_exhausted() {
            return None;
        }

        Some(Self {
            raw: value.to_string(),
            length,
        })
    }

    /// The exact source text of the literal.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The decoded length.
    pub fn length(&self) -> Length {
        self.length
    }

    /// Resolve to pixels where possible. See [`Length::to_px`].
    pub fn to_px(&self, rem_base: f32) -> Option<f32> {
        self.length.to_px(rem_base)
    }
}

impl fmt::Display for SizeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a length token.
fn parse_length(parser: &mut Parser<'_, '_>) -> Option<Length> {
    parser.skip_whitespace();

    let token = match parser.next() {
        Ok(t) => t.clone(),
        Err(_) => return None,
    };

    match token {
        Token::Number { value, .. } if value == 0.0 => Some(Length::Zero),
        Token::Dimension { value, unit, .. } => match unit.as_ref() {
            "px" => Some(Length::Px(value)),
            "rem" => Some(Length::Rem(value)),
            "em" => Some(Length::Em(value)),
            _ => None,
        },
        Token::Percentage { unit_value, .. } => Some(Length::Percent(unit_value * 100.0)),
        _ => None,
    }
}
