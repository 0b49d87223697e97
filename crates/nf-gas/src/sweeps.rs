//! Mach-number sampling for flow tables.

use crate::error::{GasError, GasResult};
use std::fmt;

/// Upper bound on sampled rows; keeps a mistyped step from exhausting memory.
pub const MAX_ROWS: usize = 20_000_000;

/// Uniform Mach-number sampling `[min, max]` with a fixed step.
///
/// The last sample is pinned to `max` even when the step does not divide the
/// interval evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachSampling {
    pub min_mach: f64,
    pub step: f64,
    pub max_mach: f64,
}

impl MachSampling {
    pub fn new(min_mach: f64, step: f64, max_mach: f64) -> GasResult<Self> {
        if !min_mach.is_finite() || min_mach < 1.0 {
            return Err(GasError::NonPhysical {
                what: "minimum table Mach number (must be >= 1)",
                value: min_mach,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "table Mach step (must be > 0)",
                value: step,
            });
        }
        if !max_mach.is_finite() || max_mach <= min_mach {
            return Err(GasError::NonPhysical {
                what: "maximum table Mach number (must exceed minimum)",
                value: max_mach,
            });
        }

        let sampling = Self {
            min_mach,
            step,
            max_mach,
        };
        let rows = sampling.num_points();
        if rows > MAX_ROWS {
            return Err(GasError::TooLarge {
                rows,
                limit: MAX_ROWS,
            });
        }
        Ok(sampling)
    }

    fn whole_steps(&self) -> usize {
        // Small slack so 1.0 + k*0.1 style intervals don't lose their last step
        ((self.max_mach - self.min_mach) / self.step + 1e-9).floor() as usize
    }

    /// Number of samples [`generate_points`](Self::generate_points) yields.
    pub fn num_points(&self) -> usize {
        let steps = self.whole_steps();
        let last = self.min_mach + steps as f64 * self.step;
        if self.max_mach - last > self.step * 1e-9 {
            steps + 2
        } else {
            steps + 1
        }
    }

    /// Generate all sample Mach numbers, ascending.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points();
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            points.push(self.min_mach + i as f64 * self.step);
        }

        // Ensure exact endpoint
        points[n - 1] = self.max_mach;
        points
    }
}

impl fmt::Display for MachSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mach {} to {} step {} ({} points)",
            self.min_mach,
            self.max_mach,
            self.step,
            self.num_points()
        )
    }
}
