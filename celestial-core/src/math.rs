//! Small numeric helpers shared by the angle code.

/// Floating-point remainder with the sign of `x`, like C's `fmod`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}
