use super::*;
use crate::foundation::core::MaskDims;
use serde_json::json;

#[test]
fn opts_default_to_black_background_and_white_fallback() {
    let opts = CompositeOpts::default();
    assert_eq!(opts.background, Rgb8::BLACK);
    assert_eq!(opts.fallback, Rgb8::WHITE);
}

#[test]
fn opts_parse_from_partial_json() {
    let opts = CompositeOpts::from_json_str(r##"{ "background": "#102030" }"##).unwrap();
    assert_eq!(opts.background, Rgb8::new(16, 32, 48));
    assert_eq!(opts.fallback, Rgb8::WHITE);

    let opts: CompositeOpts =
        serde_json::from_value(json!({ "fallback": [1, 2, 3] })).unwrap();
    assert_eq!(opts.fallback, Rgb8::new(1, 2, 3));
}

#[test]
fn opts_reject_unknown_fields_and_bad_colors() {
    let err = CompositeOpts::from_json_str(r#"{ "bg": "red" }"#).unwrap_err();
    assert!(matches!(err, MaskPaintError::Serde(_)));
    let err = CompositeOpts::from_json_str(r##"{ "background": "#zz0000" }"##).unwrap_err();
    assert!(err.to_string().contains("invalid color format"));
}

#[test]
fn stats_count_transparent_layers() {
    let masks = MaskBatch::from_planes(
        MaskDims::new(2, 1),
        vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.001]],
    )
    .unwrap();
    let (_, stats) =
        masks_to_image_with_stats(&masks, &ColorSource::Palette, &CompositeOpts::default())
            .unwrap();
    assert_eq!(
        stats,
        RenderStats {
            layers: 3,
            transparent_layers: 2
        }
    );
}

#[test]
fn configured_fallback_applies_past_the_palette() {
    let dims = MaskDims::new(1, 1);
    let mut planes = vec![vec![0.0]; 10];
    planes.push(vec![1.0]);
    let masks = MaskBatch::from_planes(dims, planes).unwrap();
    let opts = CompositeOpts {
        background: Rgb8::BLACK,
        fallback: Rgb8::new(7, 8, 9),
    };
    let out = masks_to_image_with_opts(&masks, &ColorSource::Palette, &opts).unwrap();
    assert_eq!(out.to_rgb8().get_pixel(0, 0).0, [7, 8, 9]);
}
