use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::parse::{ColorToken, parse_token};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{MaskPaintError, MaskPaintResult};

/// Output representation for [`pick_color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Hex,
    Dec,
}

impl FromStr for ColorMode {
    type Err = MaskPaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "dec" => Ok(Self::Dec),
            other => Err(MaskPaintError::validation(format!(
                "unknown color mode \"{other}\" (expected hex or dec)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickedColor {
    Hex(String),
    Dec(Rgb8),
}

impl Serialize for PickedColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Hex(s) => serializer.serialize_str(s),
            Self::Dec(c) => c.channels().serialize(serializer),
        }
    }
}

impl std::fmt::Display for PickedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex(s) => f.write_str(s),
            Self::Dec(c) => write!(f, "{c}"),
        }
    }
}

/// Validate one token and return it unchanged (`Hex`) or decoded (`Dec`).
///
/// Empty and `none` tokens pick white.
pub fn pick_color(token: &str, mode: ColorMode) -> MaskPaintResult<PickedColor> {
    let parsed = parse_token(token)?;
    Ok(match (mode, parsed) {
        (ColorMode::Hex, ColorToken::Empty) => PickedColor::Hex(Rgb8::WHITE.to_hex()),
        (ColorMode::Hex, _) => PickedColor::Hex(token.to_owned()),
        (ColorMode::Dec, t) => PickedColor::Dec(t.rgb(Rgb8::WHITE)),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/color/picker.rs"]
mod tests;
