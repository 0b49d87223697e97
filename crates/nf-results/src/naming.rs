//! Human-facing point labels.
//!
//! Each kind is numbered from 1 in generation order: `T1..Tn` for the throat
//! fan, `F<k>` for interior points and `W<k>` for wall points.

use nf_core::PointId;
use nf_moc::{Point, PointKind};

pub fn point_label(kind: PointKind, id: PointId) -> String {
    let prefix = match kind {
        PointKind::Throat => 'T',
        PointKind::Flow => 'F',
        PointKind::Wall => 'W',
    };
    format!("{prefix}{id}")
}

pub fn point_names(points: &[Point]) -> Vec<String> {
    let mut counts = [0_u32; 3];
    points
        .iter()
        .map(|p| {
            let slot = match p.kind {
                PointKind::Throat => 0,
                PointKind::Flow => 1,
                PointKind::Wall => 2,
            };
            let id = PointId::from_index(counts[slot]);
            counts[slot] += 1;
            point_label(p.kind, id)
        })
        .collect()
}
