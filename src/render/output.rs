use image::{DynamicImage, RgbImage};
use serde::Serialize;

use crate::foundation::math::scale_unit_to_u8;

/// Float RGB image shaped `[1, height, width, 3]`, channel values in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageBatch {
    width: u32,
    height: u32,
    /// Row-major `HWC` samples for the single batch item.
    data: Vec<f32>,
}

impl ImageBatch {
    /// Normalize an opaque 8-bit canvas.
    pub fn from_rgb8(rgb: RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        let data = DynamicImage::ImageRgb8(rgb).into_rgb32f().into_raw();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major `HWC` samples, `height * width * 3` values.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// `[batch, height, width, channels]`.
    pub fn shape(&self) -> [usize; 4] {
        [1, self.height as usize, self.width as usize, 3]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Re-quantize to 8 bits, mainly for inspection and tests.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
            image::Rgb([
                scale_unit_to_u8(self.data[i]),
                scale_unit_to_u8(self.data[i + 1]),
                scale_unit_to_u8(self.data[i + 2]),
            ])
        })
    }
}
