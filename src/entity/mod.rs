//! Per-frame animated entities. Each owns its own position and visual state and reads the
//! surface bounds it lives in on every update, so surfaces may be resized between frames.

use rand::Rng;

pub mod bar_value;
pub mod particle;
pub mod pulse_car;
pub mod tracking_dot;
pub mod vehicle;

/// Uniform coordinate in `[0, max)`, or 0 for a degenerate axis.
pub(crate) fn random_coord<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
