//! nf-results: presentation of marched points and the run cache.

pub mod contour;
pub mod csv;
pub mod hash;
pub mod naming;
pub mod store;
pub mod types;

pub use contour::wall_contour;
pub use csv::{CSV_COLUMNS, CsvOptions, format_row, render_csv};
pub use hash::compute_run_id;
pub use naming::{point_label, point_names};
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
