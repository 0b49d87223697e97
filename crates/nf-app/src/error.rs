//! Error types for the nf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to write project file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Design not found: {0}")]
    DesignNotFound(String),

    #[error("Flow table error: {0}")]
    Table(String),

    #[error("Characteristic march failed: {0}")]
    March(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for nf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<nf_project::ProjectError> for AppError {
    fn from(err: nf_project::ProjectError) -> Self {
        match err {
            nf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            nf_project::ProjectError::DesignNotFound { id } => AppError::DesignNotFound(id),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<nf_project::ValidationError> for AppError {
    fn from(err: nf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<nf_gas::GasError> for AppError {
    fn from(err: nf_gas::GasError) -> Self {
        AppError::Table(err.to_string())
    }
}

impl From<nf_moc::MocError> for AppError {
    fn from(err: nf_moc::MocError) -> Self {
        AppError::March(err.to_string())
    }
}

impl From<nf_results::ResultsError> for AppError {
    fn from(err: nf_results::ResultsError) -> Self {
        match err {
            nf_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
