//! Flow property lookup trait consumed by the characteristic solver.

/// Properties returned by a Mach-number lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachEntry {
    /// Mach angle μ [rad]
    pub mach_angle: f64,
    /// Prandtl-Meyer function ν [rad]
    pub prandtl_meyer: f64,
}

/// Properties returned by a Prandtl-Meyer lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrandtlMeyerEntry {
    pub mach_number: f64,
    /// Mach angle μ [rad]
    pub mach_angle: f64,
}

/// Source of isentropic flow properties.
///
/// Lookups return `None` when the query lies outside what the source can
/// represent; callers decide whether that is fatal. Implementations must be
/// thread-safe (Send + Sync) so a single table can back many runs.
pub trait FlowProperties: Send + Sync {
    /// Specific heat ratio the properties were generated for.
    fn gamma(&self) -> f64;

    /// Mach angle and Prandtl-Meyer value at Mach number `mach`.
    fn lookup_by_mach(&self, mach: f64) -> Option<MachEntry>;

    /// Mach number and Mach angle at Prandtl-Meyer value `nu` [rad].
    fn lookup_by_prandtl_meyer(&self, nu: f64) -> Option<PrandtlMeyerEntry>;

    /// Representable Mach-number interval (inclusive).
    fn mach_range(&self) -> (f64, f64);
}
