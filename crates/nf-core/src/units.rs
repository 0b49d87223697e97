// nf-core/src/units.rs

use uom::si::f64::Angle as UomAngle;

// Canonical angle type (SI, f64)
pub type Angle = UomAngle;

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// Radians to degrees through the uom angle type.
#[inline]
pub fn rad_to_deg(v: f64) -> f64 {
    use uom::si::angle::degree;
    rad(v).get::<degree>()
}

/// Degrees to radians through the uom angle type.
#[inline]
pub fn deg_to_rad(v: f64) -> f64 {
    use uom::si::angle::radian;
    deg(v).get::<radian>()
}
