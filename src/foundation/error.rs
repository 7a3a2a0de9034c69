pub type MaskPaintResult<T> = Result<T, MaskPaintError>;

#[derive(thiserror::Error, Debug)]
pub enum MaskPaintError {
    #[error("invalid color format: \"{token}\" (expected #RRGGBB or a color name)")]
    InvalidColorFormat { token: String },

    #[error("shape mismatch: mask {index} has {actual}, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskPaintError {
    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            token: token.into(),
        }
    }

    pub fn shape_mismatch(
        index: usize,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::ShapeMismatch {
            index,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
