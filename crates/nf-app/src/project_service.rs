//! Project loading, saving, validation, and introspection.

use std::path::Path;

use nf_moc::expected_point_count;
use nf_project::{DesignDef, Project};

use crate::error::{AppError, AppResult};

/// Summary of a design for listing.
#[derive(Debug, Clone)]
pub struct DesignSummary {
    pub id: String,
    pub name: String,
    pub gamma: f64,
    pub exit_mach: f64,
    pub characteristics: usize,
    pub expected_points: usize,
}

/// Load and validate a project; `.json` files are read as JSON, others as YAML.
pub fn load_project(path: &Path) -> AppResult<Project> {
    Ok(nf_project::load(path)?)
}

/// Save project to a YAML or JSON file depending on its extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let saved = if is_json {
        nf_project::save_json(path, project)
    } else {
        nf_project::save_yaml(path, project)
    };

    match saved {
        Err(nf_project::ProjectError::Io(source)) => Err(AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            source,
        }),
        other => Ok(other?),
    }
}

/// Validate project structure and every design's parameters.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.designs.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one design".to_string(),
        ));
    }
    nf_project::validate_project(project)?;
    for design in &project.designs {
        design.to_parameters()?;
    }
    Ok(())
}

/// List all designs in the project with summaries.
pub fn list_designs(project: &Project) -> Vec<DesignSummary> {
    project
        .designs
        .iter()
        .map(|design| DesignSummary {
            id: design.id.clone(),
            name: design.name.clone(),
            gamma: design.gas.gamma,
            exit_mach: design.exit_mach,
            characteristics: design.throat.characteristics,
            expected_points: expected_point_count(design.throat.characteristics),
        })
        .collect()
}

/// Get a specific design by ID.
pub fn get_design<'a>(project: &'a Project, design_id: &str) -> AppResult<&'a DesignDef> {
    project
        .design(design_id)
        .ok_or_else(|| AppError::DesignNotFound(design_id.to_string()))
}
