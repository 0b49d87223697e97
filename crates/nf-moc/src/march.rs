//! Characteristic marching across the shrinking nozzle mesh.

use std::ops::Range;

use crate::error::{MocError, MocResult};
use crate::params::DesignParameters;
use crate::point::{Point, PointKind};
use crate::throat::seed_throat;
use crate::unit_process::fold_line;
use crate::wall::wall_point;
use nf_gas::{FlowProperties, FlowTable};
use tracing::{debug, info};

/// Marched solution: the throat fan followed by every characteristic line in
/// generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Nozzle {
    pub points: Vec<Point>,
    /// Number of leading throat points in `points`.
    pub throat_count: usize,
    /// Index range of each marched line in `points`; the last index of each
    /// range is that line's wall point.
    pub lines: Vec<Range<usize>>,
}

impl Nozzle {
    pub fn throat_points(&self) -> &[Point] {
        self.points.get(..self.throat_count).unwrap_or(&[])
    }

    /// Wall contour in marching order, excluding the throat corner.
    pub fn wall_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.kind == PointKind::Wall)
    }

    /// Corner turning angle θ_max [rad]; `None` without a throat fan.
    pub fn throat_angle(&self) -> Option<f64> {
        self.throat_points().last().map(|p| p.flow_angle)
    }

    /// Last wall point, at the nozzle exit.
    pub fn exit(&self) -> Option<&Point> {
        self.wall_points().last()
    }

    pub fn line(&self, i: usize) -> Option<&[Point]> {
        self.lines.get(i).map(|r| &self.points[r.clone()])
    }
}

/// Total points for an `n`-line fan: n throat points plus lines of length
/// n+1, n, …, 2.
pub fn expected_point_count(n: usize) -> usize {
    n * (n + 5) / 2
}

/// March one characteristic line.
///
/// `working` is the previous line's interior (centerline point first); its
/// first point is mirrored across the centerline to seed the unit-process
/// fold, and the last new interior point is closed against `prev_wall`.
/// Returns the new line with its wall point last.
pub fn advance_line(
    table: &dyn FlowProperties,
    working: &[Point],
    prev_wall: &Point,
) -> MocResult<Vec<Point>> {
    let first = working.first().ok_or_else(|| MocError::InvalidDesign {
        what: "cannot advance an empty characteristic line".to_string(),
    })?;

    let mut line = fold_line(table, &first.mirrored(), working)?;
    let last = *line.last().ok_or_else(|| MocError::InvalidDesign {
        what: "characteristic line produced no interior points".to_string(),
    })?;
    line.push(wall_point(&last, prev_wall)?);
    Ok(line)
}

/// Sweep the whole mesh starting from a throat fan.
///
/// Each new line drops its centerline and wall points to form the next
/// working set, so every line is one point shorter than the one before.
/// Marching stops once the working set is exhausted.
pub fn march(table: &dyn FlowProperties, fan: &[Point]) -> MocResult<Nozzle> {
    let n = fan.len();
    if n < 2 {
        return Err(MocError::InvalidDesign {
            what: format!("throat fan needs at least 2 points (got {n})"),
        });
    }

    let mut points = Vec::with_capacity(expected_point_count(n));
    points.extend_from_slice(fan);

    let mut lines = Vec::with_capacity(n);
    let mut working = 0..n;
    let mut prev_wall = n - 1;

    while !working.is_empty() {
        let line = advance_line(table, &points[working.clone()], &points[prev_wall])?;
        let start = points.len();
        points.extend(line);
        let end = points.len();

        let wall = &points[end - 1];
        debug!(
            line = lines.len(),
            points = end - start,
            x = wall.position.x,
            y = wall.position.y,
            mach = wall.mach_number,
            "closed characteristic line"
        );

        lines.push(start..end);
        working = (start + 1)..(end - 1);
        prev_wall = end - 1;
    }

    info!(
        characteristics = n,
        lines = lines.len(),
        points = points.len(),
        "marched nozzle"
    );

    Ok(Nozzle {
        points,
        throat_count: n,
        lines,
    })
}

/// Seed and march a design against an existing property source.
pub fn design_nozzle_with_table(
    params: &DesignParameters,
    table: &dyn FlowProperties,
) -> MocResult<Nozzle> {
    params.validate()?;
    if table.gamma() != params.gamma {
        return Err(MocError::InvalidDesign {
            what: format!(
                "flow table was built for gamma {} but the design uses {}",
                table.gamma(),
                params.gamma
            ),
        });
    }
    let fan = seed_throat(params, table)?;
    march(table, &fan)
}

/// Build the flow table for `params`, then seed and march.
pub fn design_nozzle(params: &DesignParameters) -> MocResult<Nozzle> {
    params.validate()?;
    let table = FlowTable::build(params.gamma, params.table)?;
    debug!(rows = table.len(), sampling = %params.table, "built flow table");
    design_nozzle_with_table(params, &table)
}
