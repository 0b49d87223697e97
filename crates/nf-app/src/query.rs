//! Query helpers for loaded runs.

use nf_core::rad_to_deg;
use nf_moc::{Point, PointKind};
use nf_results::{CsvOptions, render_csv};

use crate::error::{AppError, AppResult};

pub use nf_results::wall_contour;

/// Headline numbers of a marched nozzle. Lengths are in throat half-heights.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub point_count: usize,
    pub throat_count: usize,
    pub flow_count: usize,
    pub wall_count: usize,
    /// Corner turning angle θ_max [deg]
    pub throat_angle_deg: f64,
    pub exit_mach: f64,
    pub exit_flow_angle_deg: f64,
    /// Nozzle length
    pub exit_x: f64,
    /// Exit half-height, equal to the exit-to-throat area ratio
    pub exit_y: f64,
}

impl RunSummary {
    pub fn length_to_height(&self) -> f64 {
        self.exit_x / self.exit_y
    }
}

pub fn get_run_summary(points: &[Point]) -> AppResult<RunSummary> {
    if points.is_empty() {
        return Err(AppError::InvalidInput("No points in run".to_string()));
    }

    let count = |kind: PointKind| points.iter().filter(|p| p.kind == kind).count();
    let throat_angle = points
        .iter()
        .filter(|p| p.kind == PointKind::Throat)
        .map(|p| p.flow_angle)
        .fold(0.0_f64, f64::max);
    let exit = points
        .iter()
        .rev()
        .find(|p| p.is_wall())
        .ok_or_else(|| AppError::InvalidInput("Run has no wall points".to_string()))?;

    Ok(RunSummary {
        point_count: points.len(),
        throat_count: count(PointKind::Throat),
        flow_count: count(PointKind::Flow),
        wall_count: count(PointKind::Wall),
        throat_angle_deg: rad_to_deg(throat_angle),
        exit_mach: exit.mach_number,
        exit_flow_angle_deg: rad_to_deg(exit.flow_angle),
        exit_x: exit.position.x,
        exit_y: exit.position.y,
    })
}

pub fn export_csv(points: &[Point], options: CsvOptions) -> String {
    render_csv(points, options)
}
