//! nf-gas: isentropic flow properties for nozzleflow.
//!
//! Provides:
//! - Closed-form perfect-gas relations (Mach angle, Prandtl-Meyer function)
//! - Mach-number sampling definitions
//! - A sampled [`FlowTable`] queryable by Mach number or Prandtl-Meyer value
//! - The [`FlowProperties`] trait the characteristic solver consumes
//!
//! # Example
//!
//! ```
//! use nf_gas::{FlowProperties, FlowTable, MachSampling};
//!
//! let table = FlowTable::build(1.4, MachSampling::new(1.0, 0.001, 5.0).unwrap()).unwrap();
//! let exit = table.lookup_by_mach(2.0).unwrap();
//! assert!((exit.prandtl_meyer.to_degrees() - 26.38).abs() < 0.01);
//! ```

pub mod error;
pub mod isentropic;
pub mod model;
pub mod sweeps;
pub mod table;

// Re-exports for ergonomics
pub use error::{GasError, GasResult};
pub use isentropic::{mach_angle, prandtl_meyer};
pub use model::{FlowProperties, MachEntry, PrandtlMeyerEntry};
pub use sweeps::MachSampling;
pub use table::FlowTable;
