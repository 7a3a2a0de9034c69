use crate::foundation::core::MaskDims;
use crate::foundation::error::{MaskPaintError, MaskPaintResult};

/// `N` single-channel intensity maps in `[0, 1]`, stored row-major as `(N, H, W)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskBatch {
    len: usize,
    dims: MaskDims,
    data: Vec<f32>,
}

impl MaskBatch {
    /// Wrap a flat `(N, H, W)` buffer.
    pub fn new(len: usize, dims: MaskDims, data: Vec<f32>) -> MaskPaintResult<Self> {
        let plane = dims.pixel_count()?;
        let expected = plane
            .checked_mul(len)
            .ok_or_else(|| MaskPaintError::validation("mask batch size overflows usize"))?;
        if data.len() != expected {
            // Report the first mask that the buffer cannot fill completely.
            let index = if plane == 0 { 0 } else { data.len() / plane };
            return Err(MaskPaintError::shape_mismatch(
                index.min(len),
                format!("{len} masks of {dims} ({expected} values)"),
                format!("{} values", data.len()),
            ));
        }
        validate_intensities(&data, plane)?;
        Ok(Self { len, dims, data })
    }

    /// Concatenate per-mask planes; every plane must hold exactly `width * height` values.
    pub fn from_planes(dims: MaskDims, planes: Vec<Vec<f32>>) -> MaskPaintResult<Self> {
        let plane = dims.pixel_count()?;
        for (index, p) in planes.iter().enumerate() {
            if p.len() != plane {
                return Err(MaskPaintError::shape_mismatch(
                    index,
                    format!("{plane} values"),
                    format!("{} values", p.len()),
                ));
            }
        }
        let len = planes.len();
        let data = planes.into_iter().flatten().collect();
        Self::new(len, dims, data)
    }

    /// Build from nested `[mask][row][col]` values. Dimensions come from the first mask.
    pub fn from_nested(masks: Vec<Vec<Vec<f32>>>) -> MaskPaintResult<Self> {
        let first = masks.first().ok_or_else(|| {
            MaskPaintError::validation("nested mask batch is empty; pass explicit dimensions")
        })?;
        let height = first.len();
        let width = first.first().map_or(0, Vec::len);
        let dims = MaskDims::new(dim_u32(width)?, dim_u32(height)?);

        for (index, rows) in masks.iter().enumerate() {
            if rows.len() != height {
                return Err(MaskPaintError::shape_mismatch(
                    index,
                    format!("{height} rows"),
                    format!("{} rows", rows.len()),
                ));
            }
            if let Some(row) = rows.iter().find(|r| r.len() != width) {
                return Err(MaskPaintError::shape_mismatch(
                    index,
                    format!("rows of {width} values"),
                    format!("a row of {} values", row.len()),
                ));
            }
        }

        let len = masks.len();
        let data = masks.into_iter().flatten().flatten().collect();
        Self::new(len, dims, data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn dims(&self) -> MaskDims {
        self.dims
    }

    /// Intensities of mask `i`, row-major. Panics if `i >= len()`.
    pub fn plane(&self, i: usize) -> &[f32] {
        let n = self.dims.width as usize * self.dims.height as usize;
        &self.data[i * n..(i + 1) * n]
    }

    /// Mask planes in batch order.
    pub fn planes(&self) -> impl Iterator<Item = &[f32]> + '_ {
        (0..self.len).map(move |i| self.plane(i))
    }
}

fn dim_u32(v: usize) -> MaskPaintResult<u32> {
    u32::try_from(v).map_err(|_| MaskPaintError::validation("mask dimension exceeds u32"))
}

fn validate_intensities(data: &[f32], plane: usize) -> MaskPaintResult<()> {
    if let Some(pos) = data
        .iter()
        .position(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
    {
        return Err(MaskPaintError::validation(format!(
            "mask {} holds intensity {} outside [0, 1]",
            pos / plane.max(1),
            data[pos]
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mask/batch.rs"]
mod tests;
