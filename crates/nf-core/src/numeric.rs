/// Floating point type used throughout system
pub type Real = f64;

/// Magnitudes below this are reported as exactly zero.
pub const ZERO_CLAMP: Real = 1e-8;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Snap values within [`ZERO_CLAMP`] of zero to `0.0` (also folds `-0.0`).
pub fn clamp_small(v: Real) -> Real {
    if v.abs() < ZERO_CLAMP { 0.0 } else { v }
}

/// Round half away from zero to a fixed number of decimals.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10_f64.powi(decimals as i32);
    (v * scale).round() / scale
}
