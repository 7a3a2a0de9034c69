use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MaskPaintError::invalid_color("#12")
            .to_string()
            .contains("invalid color format:")
    );
    assert!(
        MaskPaintError::shape_mismatch(1, "4x4", "4x3")
            .to_string()
            .contains("shape mismatch:")
    );
    assert!(
        MaskPaintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MaskPaintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn shape_mismatch_names_the_offending_mask() {
    let msg = MaskPaintError::shape_mismatch(2, "8 values", "6 values").to_string();
    assert!(msg.contains("mask 2"));
    assert!(msg.contains("6 values"));
    assert!(msg.contains("expected 8 values"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MaskPaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
