//! Measurement-to-bin assignment and per-bin densities

use serde::{Deserialize, Serialize};
use vesicle_core::{ensure_positive, Result};

/// Right-inclusive digitization over descending edges
///
/// Returns the bin `i` with `edges[i] >= value > edges[i + 1]`. A value equal
/// to `edges[0]` maps to 0, and anything at or below the last edge maps to
/// `edges.len() - 1`, one past the final bin.
pub fn digitize(value: f64, edges: &[f64]) -> usize {
    match edges.split_first() {
        Some((_, lower)) => lower.partition_point(|&edge| edge >= value),
        None => 0,
    }
}

/// Bin index of every measurement plus the per-bin member counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinAssignment {
    indices: Vec<usize>,
    counts: Vec<usize>,
}

impl BinAssignment {
    /// Tally `indices` into `nbins` bins; indices `>= nbins` are kept but not counted
    pub fn new(indices: Vec<usize>, nbins: usize) -> Self {
        let mut counts = vec![0; nbins];
        for &index in &indices {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
        Self { indices, counts }
    }

    /// One index per measurement, in input order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn nbins(&self) -> usize {
        self.counts.len()
    }

    /// Measurements that landed in a bin
    pub fn in_range(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Measurements below the smallest edge
    pub fn out_of_range(&self) -> usize {
        self.indices.len() - self.in_range()
    }

    /// Members of `bin`, taken from `values` in input order
    pub fn members(&self, values: &[f64], bin: usize) -> Vec<f64> {
        self.indices
            .iter()
            .zip(values)
            .filter(|(index, _)| **index == bin)
            .map(|(_, &value)| value)
            .collect()
    }

    /// Number of sections per unit area in each bin (`na`)
    pub fn area_density(&self, reference_area: f64) -> Result<Vec<f64>> {
        let area = ensure_positive("reference area", reference_area)?;
        Ok(self.per_unit(area))
    }

    /// Uncorrected number per unit volume in each bin
    pub fn volume_density(&self, reference_volume: f64) -> Result<Vec<f64>> {
        let volume = ensure_positive("reference volume", reference_volume)?;
        Ok(self.per_unit(volume))
    }

    fn per_unit(&self, reference: f64) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64 / reference).collect()
    }
}
