//! Maskpaint turns a batch of occupancy masks into one color-tinted image.
//!
//! # Pipeline overview
//!
//! 1. **Resolve colors**: one [`Rgb8`] per mask from the [`PRESET_PALETTE`] or a
//!    caller-supplied [`ColorSource::List`], with a fallback past the end.
//! 2. **Colorize**: each mask plane becomes a straight-alpha RGBA [`Layer`] whose alpha is
//!    the intensity scaled to 8 bits.
//! 3. **Composite**: layers are drawn in index order onto an opaque [`Canvas`] with
//!    source-over blending, so later masks cover earlier ones.
//! 4. **Normalize**: the canvas drops its alpha and becomes a `[1, H, W, 3]` float
//!    [`ImageBatch`].
//!
//! Everything is synchronous and deterministic. Validation (color tokens, mask shapes,
//! intensity range) happens before the first layer is drawn.
#![forbid(unsafe_code)]

mod color;
mod effects;
mod foundation;
mod mask;
mod render;

/// Host registration records.
pub mod node;

pub use color::palette::{PRESET_PALETTE, palette_color};
pub use color::parse::{ColorToken, parse_color, parse_token};
pub use color::picker::{ColorMode, PickedColor, pick_color};
pub use color::source::ColorSource;
pub use effects::colorize::{Layer, colorize};
pub use effects::composite::{Canvas, over};
pub use foundation::core::{MaskDims, Rgb8};
pub use foundation::error::{MaskPaintError, MaskPaintResult};
pub use mask::batch::MaskBatch;
pub use render::output::ImageBatch;
pub use render::pipeline::{
    CompositeOpts, RenderStats, masks_to_image, masks_to_image_with_opts,
    masks_to_image_with_stats,
};
