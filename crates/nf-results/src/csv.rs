//! CSV rendering of marched points.
//!
//! Angles are reported in degrees. Values within 1e-8 of zero are written as
//! exactly zero, everything else is rounded to six decimals.

use nf_core::{clamp_small, rad_to_deg, round_to};
use nf_moc::Point;

use crate::naming::point_names;

pub const CSV_DECIMALS: u32 = 6;

pub const CSV_COLUMNS: [&str; 10] = [
    "minus",
    "plus",
    "theta_deg",
    "nu_deg",
    "mach",
    "mu_deg",
    "theta_plus_mu_deg",
    "theta_minus_mu_deg",
    "x",
    "y",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    /// Prefix every row with its `T`/`F`/`W` label.
    pub names: bool,
    pub walls_only: bool,
}

/// Ten clamped and rounded fields, in [`CSV_COLUMNS`] order.
pub fn format_row(point: &Point) -> [f64; 10] {
    let theta = point.flow_angle;
    let mu = point.mach_angle;
    [
        point.riemann.minus,
        point.riemann.plus,
        rad_to_deg(theta),
        rad_to_deg(point.prandtl_meyer),
        point.mach_number,
        rad_to_deg(mu),
        rad_to_deg(theta + mu),
        rad_to_deg(theta - mu),
        point.position.x,
        point.position.y,
    ]
    .map(tidy)
}

fn tidy(v: f64) -> f64 {
    let r = round_to(clamp_small(v), CSV_DECIMALS);
    // -0.000000 reads badly
    if r == 0.0 { 0.0 } else { r }
}

pub fn render_csv(points: &[Point], options: CsvOptions) -> String {
    let names = point_names(points);
    let mut out = String::new();

    if options.names {
        out.push_str("name,");
    }
    out.push_str(&CSV_COLUMNS.join(","));
    out.push('\n');

    for (point, name) in points.iter().zip(&names) {
        if options.walls_only && !point.is_wall() {
            continue;
        }
        if options.names {
            out.push_str(name);
            out.push(',');
        }
        let row = format_row(point)
            .iter()
            .map(|v| format!("{:.*}", CSV_DECIMALS as usize, v))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    out
}
