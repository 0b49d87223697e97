//! Shared application service layer for nozzleflow.
//!
//! Centralizes project management, run execution with caching, and result
//! queries so the CLI stays a thin shell.

pub mod error;
pub mod progress;
pub mod project_service;
pub mod query;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use project_service::{
    DesignSummary, get_design, list_designs, load_project, save_project, validate_project,
};
pub use query::{RunSummary, export_csv, get_run_summary, wall_contour};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, RunTimingSummary, SOLVER_VERSION, ensure_run,
    ensure_run_with_progress, list_runs, load_run,
};
