//! Gas property errors.

use nf_core::NfError;
use thiserror::Error;

/// Result type for gas property operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur while building or evaluating flow properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Non-physical values (γ ≤ 1, subsonic Mach number, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Sampling would produce an unreasonable number of rows.
    #[error("Table too large: {rows} rows (limit {limit})")]
    TooLarge { rows: usize, limit: usize },
}

impl From<GasError> for NfError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::NonPhysical { what, .. } => NfError::InvalidArg { what },
            GasError::TooLarge { .. } => NfError::InvalidArg {
                what: "flow table sampling",
            },
        }
    }
}
