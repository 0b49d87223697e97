//! Error types for characteristic marching.

use nf_core::error::NfError;
use nf_gas::GasError;
use thiserror::Error;

/// Errors that can occur while designing a nozzle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MocError {
    #[error("Mach number {mach} is not representable in the flow table (range {min}..={max})")]
    MachNotRepresentable { mach: f64, min: f64, max: f64 },

    #[error("Prandtl-Meyer value {nu} rad is not representable in the flow table ({context})")]
    PrandtlMeyerNotRepresentable { nu: f64, context: &'static str },

    #[error("Degenerate geometry: {context}")]
    DegenerateGeometry { context: &'static str },

    #[error("Invalid design: {what}")]
    InvalidDesign { what: String },

    #[error("Gas error: {0}")]
    Gas(#[from] GasError),
}

pub type MocResult<T> = Result<T, MocError>;

impl From<MocError> for NfError {
    fn from(e: MocError) -> Self {
        match e {
            MocError::MachNotRepresentable { .. } => NfError::InvalidArg {
                what: "exit Mach number",
            },
            MocError::PrandtlMeyerNotRepresentable { .. } => NfError::InvalidArg {
                what: "Prandtl-Meyer value",
            },
            MocError::DegenerateGeometry { .. } => NfError::Invariant {
                what: "characteristic geometry",
            },
            MocError::InvalidDesign { .. } => NfError::InvalidArg { what: "design" },
            MocError::Gas(err) => err.into(),
        }
    }
}
