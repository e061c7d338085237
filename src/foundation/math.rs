/// `far / (far + depth)`: maps a depth into a 2D size/position factor.
pub(crate) fn perspective_scale(far_plane: f64, depth: f64) -> f64 {
    far_plane / (far_plane + depth)
}

/// Velocity after a bounds check on one axis.
///
/// The sign only flips while the entity is outside `[0, max]` and still heading away, so an
/// entity stranded outside by a shrinking surface turns back instead of jittering in place.
pub(crate) fn reflect_velocity(pos: f64, vel: f64, max: f64) -> f64 {
    if (pos < 0.0 && vel < 0.0) || (pos > max && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

/// Linear falloff: 1 at distance 0, 0 at (and past) `threshold`.
pub(crate) fn linear_falloff(distance: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 || !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
