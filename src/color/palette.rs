use crate::foundation::core::Rgb8;

/// Ten maximally distinct preset hues, assigned to masks by index.
pub const PRESET_PALETTE: [Rgb8; 10] = [
    Rgb8::new(255, 0, 0),     // red
    Rgb8::new(0, 255, 0),     // green
    Rgb8::new(0, 0, 255),     // blue
    Rgb8::new(255, 255, 0),   // yellow
    Rgb8::new(255, 0, 255),   // magenta
    Rgb8::new(0, 255, 255),   // cyan
    Rgb8::new(128, 0, 128),   // purple
    Rgb8::new(255, 165, 0),   // orange
    Rgb8::new(0, 128, 0),     // dark green
    Rgb8::new(128, 128, 128), // gray
];

/// Palette entry `i`, or `fallback` past the end. Indices never wrap.
pub fn palette_color(i: usize, fallback: Rgb8) -> Rgb8 {
    PRESET_PALETTE.get(i).copied().unwrap_or(fallback)
}
