//! Project validation logic.

use crate::LATEST_VERSION;
use crate::schema::{DesignDef, Project};
use nf_moc::MAX_CHARACTERISTICS;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut design_ids = HashSet::new();
    for design in &project.designs {
        if !design_ids.insert(&design.id) {
            return Err(ValidationError::DuplicateId {
                id: design.id.clone(),
                context: "designs".to_string(),
            });
        }
        validate_design(design)?;
    }

    Ok(())
}

pub fn validate_design(design: &DesignDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("design '{}' {}", design.id, name);

    if design.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "design id".to_string(),
            value: format!("{:?}", design.id),
            reason: "must not be empty".to_string(),
        });
    }

    let gamma = design.gas.gamma;
    if !gamma.is_finite() || gamma <= 1.0 {
        return Err(invalid(field("gas.gamma"), gamma, "must be finite and > 1"));
    }

    let table = &design.table;
    if !table.min_mach.is_finite() || table.min_mach < 1.0 {
        return Err(invalid(
            field("table.min_mach"),
            table.min_mach,
            "must be finite and >= 1",
        ));
    }
    if !table.mach_step.is_finite() || table.mach_step <= 0.0 {
        return Err(invalid(
            field("table.mach_step"),
            table.mach_step,
            "must be positive and finite",
        ));
    }
    if !table.max_mach.is_finite() || table.max_mach <= table.min_mach {
        return Err(invalid(
            field("table.max_mach"),
            table.max_mach,
            "must be finite and greater than table.min_mach",
        ));
    }

    let exit = design.exit_mach;
    if !exit.is_finite() || exit <= 1.0 {
        return Err(invalid(field("exit_mach"), exit, "must be finite and > 1"));
    }
    if exit < table.min_mach || exit > table.max_mach {
        return Err(ValidationError::InvalidValue {
            field: field("exit_mach"),
            value: exit.to_string(),
            reason: format!(
                "outside table range [{}, {}]",
                table.min_mach, table.max_mach
            ),
        });
    }

    let throat = &design.throat;
    match (throat.theta_min_deg, throat.theta_min_rad) {
        (Some(_), Some(_)) | (None, None) => {
            return Err(ValidationError::InvalidValue {
                field: field("throat"),
                value: format!(
                    "theta_min_deg={:?}, theta_min_rad={:?}",
                    throat.theta_min_deg, throat.theta_min_rad
                ),
                reason: "exactly one of theta_min_deg or theta_min_rad is required".to_string(),
            });
        }
        (Some(v), None) if !v.is_finite() || v <= 0.0 => {
            return Err(invalid(field("throat.theta_min_deg"), v, "must be positive and finite"));
        }
        (None, Some(v)) if !v.is_finite() || v <= 0.0 => {
            return Err(invalid(field("throat.theta_min_rad"), v, "must be positive and finite"));
        }
        _ => {}
    }

    if throat.characteristics < 2 || throat.characteristics > MAX_CHARACTERISTICS {
        return Err(ValidationError::InvalidValue {
            field: field("throat.characteristics"),
            value: throat.characteristics.to_string(),
            reason: format!("must be between 2 and {MAX_CHARACTERISTICS}"),
        });
    }

    Ok(())
}

fn invalid(field: String, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
