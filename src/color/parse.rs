use crate::foundation::core::Rgb8;
use crate::foundation::error::{MaskPaintError, MaskPaintResult};

/// A color token after parsing, before a fallback has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    /// Empty, whitespace-only, or the literal `none`.
    Empty,
    /// `#RRGGBB`.
    Hex(Rgb8),
    /// Entry of the named-color table.
    Named(Rgb8),
}

impl ColorToken {
    /// Resolved color, or `fallback` for [`ColorToken::Empty`].
    pub fn rgb(self, fallback: Rgb8) -> Rgb8 {
        match self {
            Self::Empty => fallback,
            Self::Hex(c) | Self::Named(c) => c,
        }
    }
}

const NAMED_COLORS: &[(&str, Rgb8)] = &[
    ("black", Rgb8::new(0, 0, 0)),
    ("white", Rgb8::new(255, 255, 255)),
    ("red", Rgb8::new(255, 0, 0)),
    ("lime", Rgb8::new(0, 255, 0)),
    ("green", Rgb8::new(0, 128, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("yellow", Rgb8::new(255, 255, 0)),
    ("cyan", Rgb8::new(0, 255, 255)),
    ("aqua", Rgb8::new(0, 255, 255)),
    ("magenta", Rgb8::new(255, 0, 255)),
    ("fuchsia", Rgb8::new(255, 0, 255)),
    ("purple", Rgb8::new(128, 0, 128)),
    ("orange", Rgb8::new(255, 165, 0)),
    ("gray", Rgb8::new(128, 128, 128)),
    ("grey", Rgb8::new(128, 128, 128)),
    ("silver", Rgb8::new(192, 192, 192)),
    ("maroon", Rgb8::new(128, 0, 0)),
    ("olive", Rgb8::new(128, 128, 0)),
    ("teal", Rgb8::new(0, 128, 128)),
    ("navy", Rgb8::new(0, 0, 128)),
];

pub fn parse_token(s: &str) -> MaskPaintResult<ColorToken> {
    let t = s.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("none") {
        return Ok(ColorToken::Empty);
    }
    if let Some(digits) = t.strip_prefix('#') {
        return parse_hex_digits(digits)
            .map(ColorToken::Hex)
            .ok_or_else(|| MaskPaintError::invalid_color(s));
    }
    lookup_named(t)
        .map(ColorToken::Named)
        .ok_or_else(|| MaskPaintError::invalid_color(s))
}

/// Parse one token to a color; empty tokens resolve to white.
pub fn parse_color(s: &str) -> MaskPaintResult<Rgb8> {
    parse_token(s).map(|t| t.rgb(Rgb8::WHITE))
}

fn parse_hex_digits(digits: &str) -> Option<Rgb8> {
    // `from_str_radix` tolerates a leading `+`, so check the digits explicitly.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
}

fn lookup_named(name: &str) -> Option<Rgb8> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
