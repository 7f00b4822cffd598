//! Bin edge building strategies
//!
//! Both strategies produce edges in descending order so that index 0 is
//! always the largest-size bin.

use crate::config::BinMethod;
use crate::traits::EdgeBuilder;
use vesicle_core::{utils::min_max, Error, Result};

/// Relative padding applied to the linear range so the extreme values fall
/// inside the outer edges under right-inclusive assignment
pub const LINEAR_PADDING: f64 = 1e-7;

/// Decade fraction between consecutive geometric edges
pub const GEOMETRIC_STEP: f64 = 0.1;

/// Equal-width edges from just above the maximum to just below the minimum
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearEdges;

impl EdgeBuilder for LinearEdges {
    fn edges(&self, sample: &[f64], nbins: usize) -> Result<Vec<f64>> {
        let (min, max) = min_max(sample).ok_or_else(Error::empty_input)?;
        let start = max * (1.0 + LINEAR_PADDING);
        let stop = min * (1.0 - LINEAR_PADDING);
        Ok(linspace(start, stop, nbins + 1))
    }
}

/// Edges at `max * 10^(-0.1 i)`
///
/// The spacing ignores the sample minimum, so small measurements can fall
/// below the last edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricEdges;

impl EdgeBuilder for GeometricEdges {
    fn edges(&self, sample: &[f64], nbins: usize) -> Result<Vec<f64>> {
        let (_, max) = min_max(sample).ok_or_else(Error::empty_input)?;
        Ok((0..=nbins)
            .map(|i| max * 10f64.powf(-GEOMETRIC_STEP * i as f64))
            .collect())
    }

    fn covers_sample(&self) -> bool {
        false
    }
}

impl BinMethod {
    /// Build edges with the strategy this method names
    pub fn build_edges(&self, sample: &[f64], nbins: usize) -> Result<Vec<f64>> {
        match self {
            Self::Linear => LinearEdges.edges(sample, nbins),
            Self::Geometric => GeometricEdges.edges(sample, nbins),
        }
    }
}

/// `num` evenly spaced points from `start` to `stop`, both included
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num == 1 {
        return vec![start];
    }
    let step = (stop - start) / (num - 1) as f64;
    let mut points: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
    points[num - 1] = stop;
    points
}
