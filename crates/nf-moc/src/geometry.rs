//! Straight-line characteristic geometry.

use crate::error::{MocError, MocResult};
use crate::point::Position;
use nalgebra::{Matrix2, Vector2};

/// Slopes closer than this are treated as parallel.
const MIN_SLOPE_SEPARATION: f64 = 1e-12;

/// Intersection of two lines, each given by a point and an inclination [rad].
///
/// Solves
/// ```text
/// y - tan(a)·x = y_a - tan(a)·x_a
/// y - tan(b)·x = y_b - tan(b)·x_b
/// ```
/// Parallel (or numerically coincident) slopes, and intersections too far
/// away to represent, are reported as [`MocError::DegenerateGeometry`]
/// tagged with `context`.
pub fn intersect(
    a: Position,
    angle_a: f64,
    b: Position,
    angle_b: f64,
    context: &'static str,
) -> MocResult<Position> {
    let tan_a = angle_a.tan();
    let tan_b = angle_b.tan();
    if !tan_a.is_finite() || !tan_b.is_finite() {
        return Err(MocError::DegenerateGeometry { context });
    }
    if (tan_a - tan_b).abs() < MIN_SLOPE_SEPARATION {
        return Err(MocError::DegenerateGeometry { context });
    }

    let lhs = Matrix2::new(-tan_a, 1.0, -tan_b, 1.0);
    let rhs = Vector2::new(a.y - tan_a * a.x, b.y - tan_b * b.x);
    let sol = lhs
        .lu()
        .solve(&rhs)
        .ok_or(MocError::DegenerateGeometry { context })?;

    let (x, y) = (sol[0], sol[1]);
    if !x.is_finite() || !y.is_finite() {
        return Err(MocError::DegenerateGeometry { context });
    }
    Ok(Position::new(x, y))
}
