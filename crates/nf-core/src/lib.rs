//! nf-core: stable foundation for nozzleflow.
//!
//! Contains:
//! - units (uom angle types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact point identifiers)
//! - error (shared error types)
//! - timing (wall-clock stage timers)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{NfError, NfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
