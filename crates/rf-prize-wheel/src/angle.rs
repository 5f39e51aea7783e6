//! Angle math: normalization and spin counts

use rand::Rng;

use crate::error::{WheelError, WheelResult};

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Normalize an angle into `[0, 360)`.
///
/// Uses the double-modulo form rather than `rem_euclid`, which can round a
/// tiny negative input up to exactly 360.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Uniform spin count in `[min, max]` from the thread-local RNG
pub fn random_spin_count(min: u32, max: u32) -> WheelResult<u32> {
    random_spin_count_with(&mut rand::rng(), min, max)
}

/// Uniform spin count in `[min, max]` from the given RNG
pub fn random_spin_count_with<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> WheelResult<u32> {
    if min > max {
        return Err(WheelError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}
