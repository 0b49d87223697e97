//! Closed-form perfect-gas relations for steady supersonic flow.

use crate::error::{GasError, GasResult};

fn check_gamma(gamma: f64) -> GasResult<f64> {
    if !gamma.is_finite() || gamma <= 1.0 {
        return Err(GasError::NonPhysical {
            what: "specific heat ratio",
            value: gamma,
        });
    }
    Ok(gamma)
}

fn check_mach(mach: f64) -> GasResult<f64> {
    if !mach.is_finite() || mach < 1.0 {
        return Err(GasError::NonPhysical {
            what: "Mach number (must be >= 1)",
            value: mach,
        });
    }
    Ok(mach)
}

/// Mach angle μ = asin(1/M) [rad].
pub fn mach_angle(mach: f64) -> GasResult<f64> {
    let mach = check_mach(mach)?;
    Ok((1.0 / mach).asin())
}

/// Prandtl-Meyer function ν(M) [rad] for a calorically perfect gas.
///
/// ```text
/// ν(M) = √((γ+1)/(γ-1)) · atan(√((γ-1)/(γ+1) · (M²-1))) - atan(√(M²-1))
/// ```
pub fn prandtl_meyer(gamma: f64, mach: f64) -> GasResult<f64> {
    let gamma = check_gamma(gamma)?;
    let mach = check_mach(mach)?;

    let k = ((gamma + 1.0) / (gamma - 1.0)).sqrt();
    let beta = (mach * mach - 1.0).sqrt();
    Ok(k * (beta / k).atan() - beta.atan())
}
