//! Interior-point unit process.

use crate::error::{MocError, MocResult};
use crate::geometry::intersect;
use crate::point::{Point, PointKind, RiemannInvariants};
use nf_gas::FlowProperties;

/// New point at the intersection of the C+ characteristic through `a` and
/// the C- characteristic through `b`.
///
/// State comes from the compatibility relations: `a` carries its ascending
/// invariant forward and `b` its descending one. Each characteristic is a
/// straight segment inclined at the mean of its end-point angles (single
/// pass, no corrector).
pub fn flow_point(table: &dyn FlowProperties, a: &Point, b: &Point) -> MocResult<Point> {
    let riemann = RiemannInvariants::new(a.riemann.minus, b.riemann.plus);
    let nu = riemann.prandtl_meyer();
    let theta = riemann.flow_angle();

    let entry = table
        .lookup_by_prandtl_meyer(nu)
        .ok_or(MocError::PrandtlMeyerNotRepresentable {
            nu,
            context: "flow point",
        })?;
    let mu = entry.mach_angle;

    let ascending = (a.ascending_angle() + (theta + mu)) / 2.0;
    let descending = (b.descending_angle() + (theta - mu)) / 2.0;
    let position = intersect(
        a.position,
        ascending,
        b.position,
        descending,
        "flow point characteristics are parallel",
    )?;

    Ok(Point {
        riemann,
        mach_number: entry.mach_number,
        mach_angle: mu,
        flow_angle: theta,
        prandtl_meyer: nu,
        position,
        kind: PointKind::Flow,
    })
}

/// Running fold of [`flow_point`] along one characteristic line.
///
/// `seed` is the first C+ origin; each result becomes the C+ origin of the
/// next step while `upstream` supplies the C- origins in order. The seed is
/// not part of the output, which has one point per upstream point.
pub fn fold_line(
    table: &dyn FlowProperties,
    seed: &Point,
    upstream: &[Point],
) -> MocResult<Vec<Point>> {
    let mut line = Vec::with_capacity(upstream.len() + 1);
    let mut acc = *seed;
    for b in upstream {
        acc = flow_point(table, &acc, b)?;
        line.push(acc);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Position;
    use nf_gas::{FlowTable, MachSampling};

    fn air() -> FlowTable {
        FlowTable::build(1.4, MachSampling::new(1.0, 0.0005, 4.0).unwrap()).unwrap()
    }

    fn throat(table: &FlowTable, theta: f64) -> Point {
        let e = table.lookup_by_prandtl_meyer(theta).unwrap();
        Point {
            riemann: RiemannInvariants::new(0.0, 2.0 * theta),
            mach_number: e.mach_number,
            mach_angle: e.mach_angle,
            flow_angle: theta,
            prandtl_meyer: theta,
            position: Position::new(0.0, 1.0),
            kind: PointKind::Throat,
        }
    }

    #[test]
    fn mirrored_seed_lands_on_centerline() {
        let table = air();
        let t = throat(&table, 0.05);
        let p = flow_point(&table, &t.mirrored(), &t).unwrap();

        assert_eq!(p.kind, PointKind::Flow);
        assert_eq!(p.flow_angle, 0.0);
        assert!((p.prandtl_meyer - 0.1).abs() < 1e-15);
        assert!(p.position.y.abs() < 1e-12);
        assert!(p.position.x > 0.0);
    }

    #[test]
    fn inherits_one_invariant_from_each_parent() {
        let table = air();
        let a = throat(&table, 0.05);
        let b = throat(&table, 0.15);
        let center = flow_point(&table, &a.mirrored(), &a).unwrap();
        let p = flow_point(&table, &center, &b).unwrap();

        assert_eq!(p.riemann.minus, center.riemann.minus);
        assert_eq!(p.riemann.plus, b.riemann.plus);
        assert!((p.flow_angle - (p.riemann.plus - p.riemann.minus) / 2.0).abs() < 1e-15);
        assert!((p.prandtl_meyer - (p.riemann.plus + p.riemann.minus) / 2.0).abs() < 1e-15);
        let e = table.lookup_by_prandtl_meyer(p.prandtl_meyer).unwrap();
        assert_eq!(p.mach_number, e.mach_number);
        assert_eq!(p.mach_angle, e.mach_angle);
        // Downstream of and below the throat corner
        assert!(p.position.x > center.position.x);
        assert!(p.position.y > 0.0 && p.position.y < 1.0);
    }

    #[test]
    fn unrepresentable_state_is_fatal() {
        let table = air();
        let mut a = throat(&table, 0.05);
        a.riemann = RiemannInvariants::new(5.0, 5.0);
        let err = flow_point(&table, &a, &a).unwrap_err();
        assert!(matches!(
            err,
            MocError::PrandtlMeyerNotRepresentable { context: "flow point", .. }
        ));
    }

    #[test]
    fn fold_drops_seed_and_chains_results() {
        let table = air();
        let fan: Vec<Point> = [0.02, 0.08, 0.14].iter().map(|&t| throat(&table, t)).collect();
        let line = fold_line(&table, &fan[0].mirrored(), &fan).unwrap();

        assert_eq!(line.len(), fan.len());
        let expected_first = flow_point(&table, &fan[0].mirrored(), &fan[0]).unwrap();
        assert_eq!(line[0], expected_first);
        assert_eq!(line[1], flow_point(&table, &line[0], &fan[1]).unwrap());
        assert_eq!(line[2], flow_point(&table, &line[1], &fan[2]).unwrap());
        assert!(line.iter().all(|p| p.riemann.minus == line[0].riemann.minus));
    }
}
