//! Intensity falloff shared by every moving object

/// Exponent of the intensity curve
pub const FALLOFF: f32 = 2.0;

/// Intensity (0-255) of a cell `distance` away from an object's center
///
/// `((half_width - distance) / half_width) ^ FALLOFF * 255`, truncated.
/// Anything further than `half_width` gets nothing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn intensity(distance: f32, half_width: f32) -> u8 {
    if half_width <= 0.0 || distance > half_width {
        return 0;
    }
    let ratio = (half_width - distance.max(0.0)) / half_width;
    (libm::powf(ratio, FALLOFF) * 255.0) as u8
}
