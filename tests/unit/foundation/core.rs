use super::*;
use serde_json::json;

#[test]
fn hex_rendering_is_upper_case() {
    assert_eq!(Rgb8::new(161, 178, 195).to_hex(), "#A1B2C3");
    assert_eq!(Rgb8::BLACK.to_hex(), "#000000");
}

#[test]
fn deserializes_from_token_or_array() {
    let c: Rgb8 = serde_json::from_value(json!("#ff8000")).unwrap();
    assert_eq!(c, Rgb8::new(255, 128, 0));

    let c: Rgb8 = serde_json::from_value(json!("navy")).unwrap();
    assert_eq!(c, Rgb8::new(0, 0, 128));

    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
}

#[test]
fn deserialize_rejects_malformed_token() {
    let err = serde_json::from_value::<Rgb8>(json!("#12345")).unwrap_err();
    assert!(err.to_string().contains("invalid color format"));
}

#[test]
fn serializes_as_hex() {
    assert_eq!(
        serde_json::to_value(Rgb8::new(0, 255, 16)).unwrap(),
        json!("#00FF10")
    );
}

#[test]
fn pixel_count_multiplies_dims() {
    assert_eq!(MaskDims::new(4, 3).pixel_count().unwrap(), 12);
    assert_eq!(MaskDims::new(0, 3).pixel_count().unwrap(), 0);
}

#[test]
fn rgba_len_checks_the_channel_multiply() {
    assert_eq!(MaskDims::new(4, 3).rgba_len().unwrap(), 48);
    assert!(MaskDims::new(u32::MAX, u32::MAX).rgba_len().is_err());
}
