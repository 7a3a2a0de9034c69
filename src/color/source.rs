use std::str::FromStr;

use crate::color::palette::palette_color;
use crate::color::parse::{ColorToken, parse_token};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{MaskPaintError, MaskPaintResult};

/// Where mask colors come from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorSource {
    /// [`PRESET_PALETTE`](crate::PRESET_PALETTE), by mask index.
    #[default]
    Palette,
    /// Caller-supplied tokens, by mask index.
    List(Vec<ColorToken>),
}

impl ColorSource {
    /// Parse a comma-separated token list. Every token is validated up front.
    pub fn parse_list(s: &str) -> MaskPaintResult<Self> {
        let tokens = s
            .split(',')
            .map(parse_token)
            .collect::<MaskPaintResult<Vec<_>>>()?;
        Ok(Self::List(tokens))
    }

    pub fn color_for(&self, i: usize, fallback: Rgb8) -> Rgb8 {
        match self {
            Self::Palette => palette_color(i, fallback),
            Self::List(tokens) => tokens.get(i).map_or(fallback, |t| t.rgb(fallback)),
        }
    }

    /// Colors for masks `0..n`, in order.
    pub fn resolve(&self, n: usize, fallback: Rgb8) -> Vec<Rgb8> {
        (0..n).map(|i| self.color_for(i, fallback)).collect()
    }
}

impl FromStr for ColorSource {
    type Err = MaskPaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("palette") {
            return Ok(Self::Palette);
        }
        Self::parse_list(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/source.rs"]
mod tests;
