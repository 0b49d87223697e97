//! Sampled isentropic flow table.

use crate::error::{GasError, GasResult};
use crate::isentropic::{mach_angle, prandtl_meyer};
use crate::model::{FlowProperties, MachEntry, PrandtlMeyerEntry};
use crate::sweeps::MachSampling;
use rayon::prelude::*;

/// Mach number → {μ, ν} table sampled on a uniform Mach grid.
///
/// Both columns are strictly increasing (ν) or decreasing (μ) in Mach number,
/// so either can be searched. Queries between samples are linearly
/// interpolated; queries outside the sampled range return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTable {
    gamma: f64,
    sampling: MachSampling,
    mach: Vec<f64>,
    mach_angle: Vec<f64>,
    prandtl_meyer: Vec<f64>,
}

impl FlowTable {
    /// Sample the perfect-gas relations for `gamma` over `sampling`.
    ///
    /// Rows are evaluated in parallel and collected in Mach order, so the
    /// result does not depend on scheduling.
    pub fn build(gamma: f64, sampling: MachSampling) -> GasResult<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(GasError::NonPhysical {
                what: "specific heat ratio",
                value: gamma,
            });
        }

        let mach = sampling.generate_points();
        let rows: Vec<(f64, f64)> = mach
            .par_iter()
            .map(|&m| Ok((mach_angle(m)?, prandtl_meyer(gamma, m)?)))
            .collect::<GasResult<_>>()?;
        let (mach_angle, prandtl_meyer): (Vec<f64>, Vec<f64>) = rows.into_iter().unzip();

        Ok(Self {
            gamma,
            sampling,
            mach,
            mach_angle,
            prandtl_meyer,
        })
    }

    pub fn len(&self) -> usize {
        self.mach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }

    /// Row `i` as `(M, μ, ν)`.
    pub fn row(&self, i: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.mach.get(i)?,
            *self.mach_angle.get(i)?,
            *self.prandtl_meyer.get(i)?,
        ))
    }

    /// Representable Prandtl-Meyer interval (inclusive) [rad].
    pub fn prandtl_meyer_range(&self) -> (f64, f64) {
        (self.prandtl_meyer[0], self.prandtl_meyer[self.len() - 1])
    }
}

/// Linear interpolation of `ys` at `x` over ascending `xs`.
///
/// `None` when `x` is non-finite or outside `[xs[0], xs[last]]`.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    let (first, last) = (*xs.first()?, *xs.last()?);
    if !x.is_finite() || x < first || x > last {
        return None;
    }

    let hi = xs.partition_point(|&v| v < x);
    if hi == 0 {
        return Some(ys[0]);
    }
    let lo = hi - 1;
    let span = xs[hi] - xs[lo];
    if span <= 0.0 {
        return Some(ys[hi]);
    }
    let t = (x - xs[lo]) / span;
    Some(ys[lo] + t * (ys[hi] - ys[lo]))
}

impl FlowProperties for FlowTable {
    fn gamma(&self) -> f64 {
        self.gamma
    }

    fn lookup_by_mach(&self, mach: f64) -> Option<MachEntry> {
        let prandtl_meyer = interpolate(&self.mach, &self.prandtl_meyer, mach)?;
        Some(MachEntry {
            mach_angle: (1.0 / mach).asin(),
            prandtl_meyer,
        })
    }

    fn lookup_by_prandtl_meyer(&self, nu: f64) -> Option<PrandtlMeyerEntry> {
        let mach_number = interpolate(&self.prandtl_meyer, &self.mach, nu)?;
        Some(PrandtlMeyerEntry {
            mach_number,
            mach_angle: (1.0 / mach_number).asin(),
        })
    }

    fn mach_range(&self) -> (f64, f64) {
        (self.sampling.min_mach, self.sampling.max_mach)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolated_mach_is_bracketed(nu in 0.0_f64..1.0_f64) {
            let table = FlowTable::build(1.4, MachSampling::new(1.0, 0.01, 6.0).unwrap()).unwrap();
            let entry = table.lookup_by_prandtl_meyer(nu).unwrap();
            prop_assert!(entry.mach_number >= 1.0 && entry.mach_number <= 6.0);
            let exact = prandtl_meyer(1.4, entry.mach_number).unwrap();
            prop_assert!((exact - nu).abs() < 5e-4);
        }
    }
}
