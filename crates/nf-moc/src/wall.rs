//! Wall closure for minimum-length contours.

use crate::error::MocResult;
use crate::geometry::intersect;
use crate::point::{Point, PointKind, RiemannInvariants};

/// Descending invariant assigned to wall points.
pub const WALL_DESCENDING_INVARIANT: f64 = 0.0;

/// Wall point where the C+ characteristic through flow point `a` meets the
/// wall segment leaving the previous wall point `b`.
///
/// The wall is a streamline, so the new point takes the flow state of `a`.
/// The characteristic keeps its own inclination θ+μ at `a`; the wall
/// segment is inclined at the mean flow angle of `a` and `b`.
pub fn wall_point(a: &Point, b: &Point) -> MocResult<Point> {
    let position = intersect(
        a.position,
        a.ascending_angle(),
        b.position,
        (a.flow_angle + b.flow_angle) / 2.0,
        "wall segment is parallel to the closing characteristic",
    )?;

    Ok(Point {
        riemann: RiemannInvariants::new(a.riemann.minus, WALL_DESCENDING_INVARIANT),
        position,
        kind: PointKind::Wall,
        ..*a
    })
}
