/// Map a unit intensity to 8 bits, rounding half away from zero (0.5 -> 128).
pub(crate) fn scale_unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn unit_from_u8(c: u8) -> f32 {
    f32::from(c) / 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
