use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::effects::colorize::Layer;
use crate::foundation::core::{MaskDims, Rgb8};
use crate::foundation::error::{MaskPaintError, MaskPaintResult};
use crate::foundation::math::{scale_unit_to_u8, unit_from_u8};

/// Straight-alpha source-over.
///
/// `out_a = sa + da * (1 - sa)` and `out_c = (sc * sa + dc * da * (1 - sa)) / out_a`.
/// Over an opaque `dst` this reduces to `sc * sa + dc * (1 - sa)` with alpha staying 255.
pub fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = unit_from_u8(src[3]);
    let da = unit_from_u8(dst[3]);
    let dst_weight = da * (1.0 - sa);
    let out_a = sa + dst_weight;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (unit_from_u8(src[i]) * sa + unit_from_u8(dst[i]) * dst_weight) / out_a;
        out[i] = scale_unit_to_u8(c);
    }
    out[3] = scale_unit_to_u8(out_a);
    Rgba(out)
}

/// Accumulating composite, opaque from the start.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
    layers: usize,
}

impl Canvas {
    pub fn new(dims: MaskDims, background: Rgb8) -> MaskPaintResult<Self> {
        dims.rgba_len()?;
        Ok(Self {
            image: RgbaImage::from_pixel(dims.width, dims.height, background.to_rgba(255)),
            layers: 0,
        })
    }

    pub fn dims(&self) -> MaskDims {
        MaskDims::new(self.image.width(), self.image.height())
    }

    /// Number of layers composited so far.
    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Draw `layer` on top of everything composited so far.
    pub fn composite(&mut self, layer: &Layer) -> MaskPaintResult<()> {
        if layer.dims() != self.dims() {
            return Err(MaskPaintError::shape_mismatch(
                self.layers,
                self.dims(),
                layer.dims(),
            ));
        }
        for (d, s) in self.image.pixels_mut().zip(layer.image().pixels()) {
            *d = over(*d, *s);
        }
        self.layers += 1;
        Ok(())
    }

    /// Drop the alpha channel.
    pub fn into_rgb(self) -> RgbImage {
        DynamicImage::ImageRgba8(self.image).to_rgb8()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
