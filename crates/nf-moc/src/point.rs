//! Flow-field point model.

use std::fmt;

/// Riemann invariants carried by a point.
///
/// `minus = θ - ν` is constant along the ascending (C+) characteristic
/// through the point; `plus = θ + ν` is constant along the descending (C-)
/// characteristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannInvariants {
    pub minus: f64,
    pub plus: f64,
}

impl RiemannInvariants {
    pub fn new(minus: f64, plus: f64) -> Self {
        Self { minus, plus }
    }

    /// θ = (plus - minus) / 2
    pub fn flow_angle(&self) -> f64 {
        (self.plus - self.minus) / 2.0
    }

    /// ν = (plus + minus) / 2
    pub fn prandtl_meyer(&self) -> f64 {
        (self.plus + self.minus) / 2.0
    }

    pub fn swapped(self) -> Self {
        Self {
            minus: self.plus,
            plus: self.minus,
        }
    }
}

/// Provenance tag. Has no effect on the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    Throat,
    Flow,
    Wall,
}

impl PointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Throat => "throat",
            Self::Flow => "flow",
            Self::Wall => "wall",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical position, normalised by the throat half-height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single flow-field sample. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub riemann: RiemannInvariants,
    pub mach_number: f64,
    pub mach_angle: f64,
    pub flow_angle: f64,
    pub prandtl_meyer: f64,
    pub position: Position,
    pub kind: PointKind,
}

impl Point {
    /// Reflection across the centerline.
    ///
    /// Swaps the invariants and negates θ and y; applying it twice gives the
    /// original point back.
    pub fn mirrored(&self) -> Self {
        Self {
            riemann: self.riemann.swapped(),
            flow_angle: -self.flow_angle,
            position: Position::new(self.position.x, -self.position.y),
            ..*self
        }
    }

    /// Inclination of the C+ characteristic through the point, θ + μ.
    pub fn ascending_angle(&self) -> f64 {
        self.flow_angle + self.mach_angle
    }

    /// Inclination of the C- characteristic through the point, θ - μ.
    pub fn descending_angle(&self) -> f64 {
        self.flow_angle - self.mach_angle
    }

    pub fn is_wall(&self) -> bool {
        self.kind == PointKind::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Point {
        Point {
            riemann: RiemannInvariants::new(0.1, 0.5),
            mach_number: 1.8,
            mach_angle: (1.0_f64 / 1.8).asin(),
            flow_angle: 0.2,
            prandtl_meyer: 0.3,
            position: Position::new(1.5, 0.75),
            kind: PointKind::Flow,
        }
    }

    #[test]
    fn invariants_recover_state() {
        let r = RiemannInvariants::new(-0.1, 0.5);
        assert!((r.flow_angle() - 0.3).abs() < 1e-15);
        assert!((r.prandtl_meyer() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn mirror_reflects_across_centerline() {
        let p = sample();
        let m = p.mirrored();
        assert_eq!(m.riemann, RiemannInvariants::new(0.5, 0.1));
        assert_eq!(m.flow_angle, -0.2);
        assert_eq!(m.position, Position::new(1.5, -0.75));
        assert_eq!(m.mach_number, p.mach_number);
        assert_eq!(m.prandtl_meyer, p.prandtl_meyer);
        assert_eq!(m.kind, p.kind);
    }

    #[test]
    fn characteristic_angles() {
        let p = sample();
        assert!((p.ascending_angle() - (0.2 + p.mach_angle)).abs() < 1e-15);
        assert!((p.descending_angle() - (0.2 - p.mach_angle)).abs() < 1e-15);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(PointKind::Throat.to_string(), "throat");
        assert_eq!(PointKind::Wall.as_str(), "wall");
        assert!(!sample().is_wall());
    }
}
