//! Design parameters for a minimum-length nozzle.

use crate::error::{MocError, MocResult};
use nf_gas::MachSampling;

/// Largest supported fan; the marched point count grows as n²/2.
pub const MAX_CHARACTERISTICS: usize = 5_000;

/// Immutable configuration for one nozzle design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignParameters {
    /// Specific heat ratio γ
    pub gamma: f64,
    /// Design exit Mach number
    pub exit_mach: f64,
    /// Flow-table sampling
    pub table: MachSampling,
    /// Smallest throat expansion angle [rad], must be > 0
    pub theta_min: f64,
    /// Number of characteristics in the throat fan, n >= 2
    pub characteristics: usize,
}

impl DesignParameters {
    /// Validate and assemble a design.
    pub fn new(
        gamma: f64,
        exit_mach: f64,
        table: MachSampling,
        theta_min: f64,
        characteristics: usize,
    ) -> MocResult<Self> {
        let params = Self {
            gamma,
            exit_mach,
            table,
            theta_min,
            characteristics,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field; `table` is validated on construction.
    pub fn validate(&self) -> MocResult<()> {
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(invalid(format!(
                "specific heat ratio must be finite and > 1 (got {})",
                self.gamma
            )));
        }
        if !self.exit_mach.is_finite() || self.exit_mach <= 1.0 {
            return Err(invalid(format!(
                "exit Mach number must be finite and > 1 (got {})",
                self.exit_mach
            )));
        }
        if !self.theta_min.is_finite() || self.theta_min <= 0.0 {
            return Err(invalid(format!(
                "minimum throat angle must be finite and > 0 (got {})",
                self.theta_min
            )));
        }
        if self.characteristics < 2 {
            return Err(invalid(format!(
                "at least 2 characteristics are required (got {})",
                self.characteristics
            )));
        }
        if self.characteristics > MAX_CHARACTERISTICS {
            return Err(invalid(format!(
                "at most {MAX_CHARACTERISTICS} characteristics are supported (got {})",
                self.characteristics
            )));
        }
        Ok(())
    }
}

fn invalid(what: String) -> MocError {
    MocError::InvalidDesign { what }
}
