//! Throat expansion fan.

use crate::error::{MocError, MocResult};
use crate::params::DesignParameters;
use crate::point::{Point, PointKind, Position, RiemannInvariants};
use nf_gas::FlowProperties;

/// Ascending invariant of every throat point; the centerline reference state.
pub const THROAT_ASCENDING_INVARIANT: f64 = 0.0;

/// Maximum wall angle at the throat corner, θ_max = ν(M_exit) / 2.
pub fn throat_angle(table: &dyn FlowProperties, exit_mach: f64) -> MocResult<f64> {
    let entry = table.lookup_by_mach(exit_mach).ok_or_else(|| {
        let (min, max) = table.mach_range();
        MocError::MachNotRepresentable {
            mach: exit_mach,
            min,
            max,
        }
    })?;
    Ok(entry.prandtl_meyer / 2.0)
}

/// `n` evenly spaced angles covering `[theta_min, theta_max]` inclusive.
///
/// The last angle is exactly `theta_max`.
pub fn fan_angles(theta_min: f64, theta_max: f64, n: usize) -> MocResult<Vec<f64>> {
    if n < 2 {
        return Err(MocError::InvalidDesign {
            what: format!("throat fan needs at least 2 characteristics (got {n})"),
        });
    }
    if theta_max <= theta_min {
        return Err(MocError::InvalidDesign {
            what: format!(
                "minimum throat angle {theta_min} rad must be below the throat angle {theta_max} rad"
            ),
        });
    }

    let delta = (theta_max - theta_min) / (n - 1) as f64;
    let mut angles: Vec<f64> = (0..n).map(|i| theta_min + i as f64 * delta).collect();
    angles[n - 1] = theta_max;
    Ok(angles)
}

/// Build the throat fan: one point at (0, 1) per fan angle, ascending.
///
/// At the corner the flow has expanded through its own turning angle, so
/// ν = θ and the invariants are (0, 2θ).
pub fn seed_throat(params: &DesignParameters, table: &dyn FlowProperties) -> MocResult<Vec<Point>> {
    let theta_max = throat_angle(table, params.exit_mach)?;
    let angles = fan_angles(params.theta_min, theta_max, params.characteristics)?;

    angles
        .into_iter()
        .map(|theta| {
            let entry = table.lookup_by_prandtl_meyer(theta).ok_or(
                MocError::PrandtlMeyerNotRepresentable {
                    nu: theta,
                    context: "throat point",
                },
            )?;
            Ok(Point {
                riemann: RiemannInvariants::new(THROAT_ASCENDING_INVARIANT, 2.0 * theta),
                mach_number: entry.mach_number,
                mach_angle: entry.mach_angle,
                flow_angle: theta,
                prandtl_meyer: theta,
                position: Position::new(0.0, 1.0),
                kind: PointKind::Throat,
            })
        })
        .collect()
}
