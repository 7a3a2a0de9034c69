use super::*;

#[test]
fn alpha_follows_scaled_intensity() {
    let layer = colorize(
        &[0.0, 0.5, 1.0, 0.25],
        MaskDims::new(2, 2),
        Rgb8::new(10, 20, 30),
    )
    .unwrap();
    let img = layer.image();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30, 128]);
    assert_eq!(img.get_pixel(0, 1).0, [10, 20, 30, 255]);
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 64]);
}

#[test]
fn intensity_rounding_to_zero_is_transparent() {
    let layer = colorize(&[0.001, 0.0], MaskDims::new(2, 1), Rgb8::WHITE).unwrap();
    assert!(layer.is_transparent());
}

#[test]
fn black_color_is_not_treated_as_transparent() {
    let layer = colorize(&[1.0], MaskDims::new(1, 1), Rgb8::BLACK).unwrap();
    assert!(!layer.is_transparent());
    assert_eq!(layer.image().get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn plane_length_must_match_dims() {
    let err = colorize(&[1.0; 3], MaskDims::new(2, 2), Rgb8::WHITE).unwrap_err();
    assert!(matches!(err, MaskPaintError::ShapeMismatch { .. }));
}

#[test]
fn oversized_dims_are_rejected() {
    let err = colorize(&[], MaskDims::new(u32::MAX, u32::MAX), Rgb8::WHITE).unwrap_err();
    assert!(matches!(err, MaskPaintError::Validation(_)));
}
