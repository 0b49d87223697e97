//! Project schema definitions.

use crate::ProjectError;
use nf_gas::MachSampling;
use nf_moc::DesignParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub designs: Vec<DesignDef>,
}

impl Project {
    pub fn design(&self, id: &str) -> Option<&DesignDef> {
        self.designs.iter().find(|d| d.id == id)
    }
}

/// One nozzle to design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDef {
    pub id: String,
    pub name: String,
    pub gas: GasDef,
    #[serde(default)]
    pub table: TableDef,
    pub exit_mach: f64,
    pub throat: ThroatDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub gamma: f64,
}

/// Mach-number sampling of the flow property table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    #[serde(default = "default_min_mach")]
    pub min_mach: f64,
    #[serde(default = "default_mach_step")]
    pub mach_step: f64,
    #[serde(default = "default_max_mach")]
    pub max_mach: f64,
}

impl Default for TableDef {
    fn default() -> Self {
        Self {
            min_mach: default_min_mach(),
            mach_step: default_mach_step(),
            max_mach: default_max_mach(),
        }
    }
}

fn default_min_mach() -> f64 {
    1.0
}

fn default_mach_step() -> f64 {
    1e-4
}

fn default_max_mach() -> f64 {
    10.0
}

/// Throat fan. Exactly one of `theta_min_deg` / `theta_min_rad` is set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThroatDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta_min_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta_min_rad: Option<f64>,
    pub characteristics: usize,
}

impl ThroatDef {
    /// Smallest fan angle in radians, if exactly one form is given.
    pub fn theta_min(&self) -> Option<f64> {
        match (self.theta_min_deg, self.theta_min_rad) {
            (Some(deg), None) => Some(nf_core::deg_to_rad(deg)),
            (None, Some(rad)) => Some(rad),
            _ => None,
        }
    }
}

impl DesignDef {
    pub fn sampling(&self) -> Result<MachSampling, ProjectError> {
        let table = MachSampling::new(self.table.min_mach, self.table.mach_step, self.table.max_mach)
            .map_err(nf_moc::MocError::from)?;
        Ok(table)
    }

    /// Convert into validated solver parameters.
    pub fn to_parameters(&self) -> Result<DesignParameters, ProjectError> {
        let theta_min = self.throat.theta_min().ok_or_else(|| {
            crate::ValidationError::InvalidValue {
                field: format!("design '{}' throat", self.id),
                value: format!(
                    "theta_min_deg={:?}, theta_min_rad={:?}",
                    self.throat.theta_min_deg, self.throat.theta_min_rad
                ),
                reason: "exactly one of theta_min_deg or theta_min_rad is required".to_string(),
            }
        })?;
        let params = DesignParameters::new(
            self.gas.gamma,
            self.exit_mach,
            self.sampling()?,
            theta_min,
            self.throat.characteristics,
        )?;
        Ok(params)
    }
}
