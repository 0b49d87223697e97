//! Integration tests: full minimum-length nozzle designs.
//!
//! Checks the marched field against the compatibility relations, the
//! closed-form point count, wall-contour shape, and the isentropic area
//! ratio the exit height should approach.

use nf_core::{Tolerances, nearly_equal};
use nf_gas::{FlowProperties, FlowTable, MachEntry, MachSampling, PrandtlMeyerEntry};
use nf_moc::{
    DesignParameters, MocError, PointKind, design_nozzle, design_nozzle_with_table,
    expected_point_count,
};

fn design(gamma: f64, exit_mach: f64, theta_min: f64, n: usize) -> DesignParameters {
    DesignParameters::new(
        gamma,
        exit_mach,
        MachSampling::new(1.0, 0.0001, 10.0).unwrap(),
        theta_min,
        n,
    )
    .unwrap()
}

/// Two-dimensional isentropic area ratio A/A*.
fn area_ratio(gamma: f64, mach: f64) -> f64 {
    let base = (2.0 / (gamma + 1.0)) * (1.0 + (gamma - 1.0) / 2.0 * mach * mach);
    base.powf((gamma + 1.0) / (2.0 * (gamma - 1.0))) / mach
}

#[test]
fn mach_two_air_reference_design() {
    let nozzle = design_nozzle(&design(1.4, 2.0, 0.01, 3)).unwrap();

    let kinds: Vec<PointKind> = nozzle.points.iter().map(|p| p.kind).collect();
    use PointKind::{Flow as F, Throat as T, Wall as W};
    assert_eq!(kinds, vec![T, T, T, F, F, F, W, F, F, W, F, W]);

    let exit = nozzle.exit().unwrap();
    assert!(exit.flow_angle.abs() < 1e-9);
    assert!((exit.mach_number - 2.0).abs() < 1e-6);
    assert!(exit.position.x > 4.0 && exit.position.x < 6.0);
    assert!((exit.position.y - area_ratio(1.4, 2.0)).abs() < 0.02);
}

#[test]
fn point_count_follows_closed_form() {
    for n in 2..=6 {
        let nozzle = design_nozzle(&design(1.4, 2.0, 0.01, n)).unwrap();
        assert_eq!(nozzle.points.len(), expected_point_count(n), "n = {n}");
        assert_eq!(nozzle.throat_count, n);
        assert_eq!(nozzle.lines.len(), n);

        let lines_total: usize = nozzle.lines.iter().map(|r| r.len()).sum();
        assert_eq!(n + lines_total, nozzle.points.len());
    }
}

#[test]
fn every_marched_point_satisfies_compatibility() {
    let nozzle = design_nozzle(&design(1.3, 2.5, 0.005, 8)).unwrap();
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    };

    for p in nozzle.points.iter().filter(|p| p.kind == PointKind::Flow) {
        let r = p.riemann;
        assert!(nearly_equal(p.flow_angle, (r.plus - r.minus) / 2.0, tol));
        assert!(nearly_equal(p.prandtl_meyer, (r.plus + r.minus) / 2.0, tol));
        assert!(p.mach_number >= 1.0);
        assert!((p.mach_angle - (1.0 / p.mach_number).asin()).abs() < 1e-12);
    }
}

#[test]
fn wall_points_inherit_from_their_flow_point() {
    let nozzle = design_nozzle(&design(1.4, 2.0, 0.01, 6)).unwrap();

    for range in &nozzle.lines {
        let line = &nozzle.points[range.clone()];
        let wall = line[line.len() - 1];
        let feeder = line[line.len() - 2];
        assert_eq!(wall.kind, PointKind::Wall);
        assert_eq!(wall.riemann.minus, feeder.riemann.minus);
        assert_eq!(wall.riemann.plus, 0.0);
        assert_eq!(wall.flow_angle, feeder.flow_angle);
        assert_eq!(wall.mach_number, feeder.mach_number);
    }
}

#[test]
fn wall_contour_expands_monotonically() {
    for params in [
        design(1.4, 2.0, 0.01, 7),
        design(1.4, 3.0, 0.01, 10),
        design(1.3, 2.5, 0.005, 8),
        design(1.67, 1.8, 0.02, 6),
    ] {
        let nozzle = design_nozzle(&params).unwrap();
        let corner = nozzle.throat_points().last().unwrap().position;
        let mut previous = corner;
        for wall in nozzle.wall_points() {
            assert!(wall.position.x >= previous.x, "{params:?}");
            assert!(wall.position.y >= previous.y, "{params:?}");
            previous = wall.position;
        }

        let exit = nozzle.exit().unwrap();
        assert!(exit.flow_angle.abs() < 1e-9);
        assert!((exit.mach_number - params.exit_mach).abs() < 1e-6);
    }
}

#[test]
fn exit_height_approaches_area_ratio() {
    let nozzle = design_nozzle(&design(1.4, 3.0, 0.01, 10)).unwrap();
    let exit = nozzle.exit().unwrap();
    let expected = area_ratio(1.4, 3.0);
    assert!(((exit.position.y - expected) / expected).abs() < 0.01);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let params = design(1.4, 2.4, 0.02, 9);
    let first = design_nozzle(&params).unwrap();
    let second = design_nozzle(&params).unwrap();
    assert_eq!(first.points.len(), second.points.len());
    for (a, b) in first.points.iter().zip(&second.points) {
        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.mach_number.to_bits(), b.mach_number.to_bits());
        assert_eq!(a.riemann, b.riemann);
    }
}

#[test]
fn exit_mach_beyond_table_is_reported() {
    let params = DesignParameters::new(
        1.4,
        3.5,
        MachSampling::new(1.0, 0.001, 3.0).unwrap(),
        0.01,
        4,
    )
    .unwrap();
    let err = design_nozzle(&params).unwrap_err();
    assert!(matches!(err, MocError::MachNotRepresentable { mach, .. } if mach == 3.5));
}

/// Table wrapper that refuses Prandtl-Meyer values above a cap.
struct Capped {
    inner: FlowTable,
    nu_cap: f64,
}

impl FlowProperties for Capped {
    fn gamma(&self) -> f64 {
        self.inner.gamma()
    }

    fn lookup_by_mach(&self, mach: f64) -> Option<MachEntry> {
        self.inner.lookup_by_mach(mach)
    }

    fn lookup_by_prandtl_meyer(&self, nu: f64) -> Option<PrandtlMeyerEntry> {
        if nu > self.nu_cap {
            None
        } else {
            self.inner.lookup_by_prandtl_meyer(nu)
        }
    }

    fn mach_range(&self) -> (f64, f64) {
        self.inner.mach_range()
    }
}

#[test]
fn unrepresentable_interior_state_aborts_the_march() {
    let params = design(1.4, 2.0, 0.01, 5);
    let inner = FlowTable::build(params.gamma, params.table).unwrap();
    let theta_max = inner.lookup_by_mach(2.0).unwrap().prandtl_meyer / 2.0;
    // Throat fan fits, but the centerline points downstream exceed the cap
    let capped = Capped {
        inner,
        nu_cap: theta_max * 1.2,
    };

    let err = design_nozzle_with_table(&params, &capped).unwrap_err();
    assert!(matches!(
        err,
        MocError::PrandtlMeyerNotRepresentable {
            context: "flow point",
            ..
        }
    ));
}
