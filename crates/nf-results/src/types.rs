//! Result data types.

use nf_moc::{Point, PointKind, Position, RiemannInvariants};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub design_id: String,
    pub design_name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub point_count: usize,
    pub throat_count: usize,
    pub line_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Throat,
    Flow,
    Wall,
}

impl From<PointKind> for RecordKind {
    fn from(kind: PointKind) -> Self {
        match kind {
            PointKind::Throat => Self::Throat,
            PointKind::Flow => Self::Flow,
            PointKind::Wall => Self::Wall,
        }
    }
}

impl From<RecordKind> for PointKind {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Throat => Self::Throat,
            RecordKind::Flow => Self::Flow,
            RecordKind::Wall => Self::Wall,
        }
    }
}

/// One line of `points.jsonl`. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub kind: RecordKind,
    pub minus: f64,
    pub plus: f64,
    pub mach_number: f64,
    pub mach_angle: f64,
    pub flow_angle: f64,
    pub prandtl_meyer: f64,
    pub x: f64,
    pub y: f64,
}

impl From<&Point> for PointRecord {
    fn from(p: &Point) -> Self {
        Self {
            kind: p.kind.into(),
            minus: p.riemann.minus,
            plus: p.riemann.plus,
            mach_number: p.mach_number,
            mach_angle: p.mach_angle,
            flow_angle: p.flow_angle,
            prandtl_meyer: p.prandtl_meyer,
            x: p.position.x,
            y: p.position.y,
        }
    }
}

impl From<&PointRecord> for Point {
    fn from(r: &PointRecord) -> Self {
        Point {
            riemann: RiemannInvariants::new(r.minus, r.plus),
            mach_number: r.mach_number,
            mach_angle: r.mach_angle,
            flow_angle: r.flow_angle,
            prandtl_meyer: r.prandtl_meyer,
            position: Position::new(r.x, r.y),
            kind: r.kind.into(),
        }
    }
}

pub fn to_records(points: &[Point]) -> Vec<PointRecord> {
    points.iter().map(PointRecord::from).collect()
}

pub fn to_points(records: &[PointRecord]) -> Vec<Point> {
    records.iter().map(Point::from).collect()
}
