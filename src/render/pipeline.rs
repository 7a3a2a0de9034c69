use serde::Deserialize;

use crate::color::source::ColorSource;
use crate::effects::colorize::colorize;
use crate::effects::composite::Canvas;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{MaskPaintError, MaskPaintResult};
use crate::mask::batch::MaskBatch;
use crate::render::output::ImageBatch;

/// Compositing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeOpts {
    /// Opaque fill under every layer.
    pub background: Rgb8,
    /// Color for masks the color source has no entry for.
    pub fallback: Rgb8,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self {
            background: Rgb8::BLACK,
            fallback: Rgb8::WHITE,
        }
    }
}

impl CompositeOpts {
    pub fn from_json_str(s: &str) -> MaskPaintResult<Self> {
        serde_json::from_str(s).map_err(|e| MaskPaintError::serde(e.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Per-call counters.
pub struct RenderStats {
    /// Layers composited onto the canvas.
    pub layers: u64,
    /// Layers that had no visible pixel.
    pub transparent_layers: u64,
}

/// Tint every mask and composite them, in index order, over `background`.
///
/// Masks past the end of `colors` take white.
pub fn masks_to_image(
    masks: &MaskBatch,
    colors: &ColorSource,
    background: Rgb8,
) -> MaskPaintResult<ImageBatch> {
    let opts = CompositeOpts {
        background,
        ..CompositeOpts::default()
    };
    masks_to_image_with_opts(masks, colors, &opts)
}

pub fn masks_to_image_with_opts(
    masks: &MaskBatch,
    colors: &ColorSource,
    opts: &CompositeOpts,
) -> MaskPaintResult<ImageBatch> {
    masks_to_image_with_stats(masks, colors, opts).map(|(image, _)| image)
}

/// Same as [`masks_to_image_with_opts`], also returning [`RenderStats`].
///
/// Layers are built and composited one at a time so only one is alive at once.
#[tracing::instrument(
    skip(masks, colors, opts),
    fields(masks = masks.len(), width = masks.dims().width, height = masks.dims().height)
)]
pub fn masks_to_image_with_stats(
    masks: &MaskBatch,
    colors: &ColorSource,
    opts: &CompositeOpts,
) -> MaskPaintResult<(ImageBatch, RenderStats)> {
    let dims = masks.dims();
    let palette = colors.resolve(masks.len(), opts.fallback);
    let mut canvas = Canvas::new(dims, opts.background)?;
    let mut stats = RenderStats::default();

    for (i, (plane, &color)) in masks.planes().zip(&palette).enumerate() {
        let layer = colorize(plane, dims, color)?;
        if layer.is_transparent() {
            stats.transparent_layers += 1;
            tracing::trace!(mask = i, "fully transparent layer");
        } else {
            tracing::trace!(mask = i, color = %color.to_hex(), "compositing layer");
        }
        canvas.composite(&layer)?;
        stats.layers += 1;
    }

    tracing::debug!(
        layers = stats.layers,
        transparent = stats.transparent_layers,
        "composited mask batch"
    );
    Ok((ImageBatch::from_rgb8(canvas.into_rgb()), stats))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
