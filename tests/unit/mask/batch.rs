use super::*;

fn dims(w: u32, h: u32) -> MaskDims {
    MaskDims::new(w, h)
}

#[test]
fn new_slices_planes_in_order() {
    let b = MaskBatch::new(2, dims(2, 1), vec![0.0, 0.25, 0.5, 1.0]).unwrap();
    assert_eq!(b.len(), 2);
    assert_eq!(b.plane(0), &[0.0, 0.25]);
    assert_eq!(b.plane(1), &[0.5, 1.0]);
    assert_eq!(b.planes().count(), 2);
}

#[test]
fn new_rejects_wrong_buffer_length() {
    let err = MaskBatch::new(2, dims(2, 2), vec![0.0; 6]).unwrap_err();
    assert!(matches!(err, MaskPaintError::ShapeMismatch { index: 1, .. }));
}

#[test]
fn empty_batch_keeps_dims() {
    let b = MaskBatch::new(0, dims(3, 2), vec![]).unwrap();
    assert!(b.is_empty());
    assert_eq!(b.dims(), dims(3, 2));
    assert_eq!(b.planes().count(), 0);
}

#[test]
fn from_planes_reports_first_mismatch() {
    let err =
        MaskBatch::from_planes(dims(2, 2), vec![vec![0.0; 4], vec![0.0; 4], vec![0.0; 3]])
            .unwrap_err();
    assert!(matches!(err, MaskPaintError::ShapeMismatch { index: 2, .. }));
}

#[test]
fn from_nested_infers_dims() {
    let b = MaskBatch::from_nested(vec![
        vec![vec![0.0, 1.0, 0.0], vec![1.0, 1.0, 1.0]],
        vec![vec![0.5, 0.5, 0.5], vec![0.0, 0.0, 0.0]],
    ])
    .unwrap();
    assert_eq!(b.dims(), dims(3, 2));
    assert_eq!(b.plane(1), &[0.5, 0.5, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn from_nested_rejects_ragged_masks() {
    let err = MaskBatch::from_nested(vec![
        vec![vec![0.0, 1.0], vec![1.0, 1.0]],
        vec![vec![0.0, 1.0]],
    ])
    .unwrap_err();
    assert!(matches!(err, MaskPaintError::ShapeMismatch { index: 1, .. }));

    let err = MaskBatch::from_nested(vec![vec![vec![0.0, 1.0], vec![1.0]]]).unwrap_err();
    assert!(matches!(err, MaskPaintError::ShapeMismatch { index: 0, .. }));
}

#[test]
fn from_nested_needs_at_least_one_mask() {
    let err = MaskBatch::from_nested(vec![]).unwrap_err();
    assert!(matches!(err, MaskPaintError::Validation(_)));
}

#[test]
fn out_of_range_intensities_are_rejected() {
    for bad in [1.5, -0.1, f32::NAN, f32::INFINITY] {
        let err = MaskBatch::new(1, dims(2, 1), vec![0.0, bad]).unwrap_err();
        assert!(matches!(err, MaskPaintError::Validation(_)), "{bad}");
    }
}
