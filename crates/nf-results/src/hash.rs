//! Content-based hashing for run IDs.

use nf_project::DesignDef;
use sha2::{Digest, Sha256};

/// Identical designs solved by the same solver share a run id.
pub fn compute_run_id(design: &DesignDef, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let design_json = serde_json::to_string(design).unwrap_or_default();
    hasher.update(design_json.as_bytes());
    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
