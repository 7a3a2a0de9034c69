use image::RgbaImage;

use crate::foundation::core::{MaskDims, Rgb8};
use crate::foundation::error::{MaskPaintError, MaskPaintResult};
use crate::foundation::math::scale_unit_to_u8;

/// One mask rendered as a straight-alpha RGBA image.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    image: RgbaImage,
}

impl Layer {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dims(&self) -> MaskDims {
        MaskDims::new(self.image.width(), self.image.height())
    }

    /// `true` when every pixel has zero alpha.
    pub fn is_transparent(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }
}

/// Tint one intensity plane with `color`.
///
/// Alpha is the intensity scaled to 8 bits. Pixels whose alpha rounds to 0 stay
/// transparent black; every other pixel carries `color`.
pub fn colorize(plane: &[f32], dims: MaskDims, color: Rgb8) -> MaskPaintResult<Layer> {
    dims.rgba_len()?;
    let expected = dims.pixel_count()?;
    if plane.len() != expected {
        return Err(MaskPaintError::shape_mismatch(
            0,
            format!("{expected} values ({dims})"),
            format!("{} values", plane.len()),
        ));
    }

    let mut image = RgbaImage::new(dims.width, dims.height);
    for (px, &v) in image.pixels_mut().zip(plane) {
        let alpha = scale_unit_to_u8(v);
        if alpha > 0 {
            *px = color.to_rgba(alpha);
        }
    }
    Ok(Layer { image })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/colorize.rs"]
mod tests;
