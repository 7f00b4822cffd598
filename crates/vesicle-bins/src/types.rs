//! Core types for bin set representation

use crate::assignment::{digitize, BinAssignment};
use crate::config::BinConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use vesicle_core::{ensure_measurements, utils::min_max, Advisories, Advisory, Error, Result};

/// A single bin of a descending bin set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Upper edge (inclusive)
    pub upper: f64,
    /// Lower edge (exclusive)
    pub lower: f64,
}

impl Bin {
    pub fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    pub fn width(&self) -> f64 {
        (self.upper - self.lower).abs()
    }

    /// Upper edge minus half the width
    pub fn center(&self) -> f64 {
        self.upper - self.width() / 2.0
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value <= self.upper && value > self.lower
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}]", self.lower, self.upper)
    }
}

/// An ordered set of bins over a measurement set
///
/// Edges are strictly descending: `edges[0] > edges[1] > ... > edges[n]`,
/// so bin 0 holds the largest measurements. When the configuration is
/// normalized, measurements and edges are stored divided by [`Bins::norm`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    config: BinConfig,
    norm: f64,
    values: Vec<f64>,
    edges: Vec<f64>,
    widths: Vec<f64>,
    centers: Vec<f64>,
}

impl Bins {
    /// Build the bin set for `measurements`
    pub fn new(measurements: &[f64], config: BinConfig) -> Result<Self> {
        config.validate()?;
        ensure_measurements(measurements)?;

        let (norm, values) = if config.normalized {
            let (_, max) = min_max(measurements).ok_or_else(Error::empty_input)?;
            (max, measurements.iter().map(|v| v / max).collect())
        } else {
            (1.0, measurements.to_vec())
        };

        let edges = config.bin_method.build_edges(&values, config.nbins)?;
        if edges.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(Error::Computation(
                "bin edges are not strictly descending".to_string(),
            ));
        }

        let widths: Vec<f64> = edges.windows(2).map(|e| (e[0] - e[1]).abs()).collect();
        let centers = edges
            .iter()
            .zip(&widths)
            .map(|(edge, width)| edge - width / 2.0)
            .collect();

        debug!(
            method = %config.bin_method,
            nbins = config.nbins,
            norm,
            "built bin edges"
        );

        Ok(Self {
            config,
            norm,
            values,
            edges,
            widths,
            centers,
        })
    }

    pub fn config(&self) -> &BinConfig {
        &self.config
    }

    /// Maximum raw measurement when normalized, otherwise 1
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Measurements in bin units (divided by `norm` when normalized)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The `n + 1` descending edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Always false: a validated configuration has at least one bin
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn bin(&self, index: usize) -> Option<Bin> {
        (index < self.len()).then(|| Bin::new(self.edges[index], self.edges[index + 1]))
    }

    pub fn bins(&self) -> Vec<Bin> {
        self.edges.windows(2).map(|e| Bin::new(e[0], e[1])).collect()
    }

    /// Edges in the caller's original units
    pub fn denormalized_edges(&self) -> Vec<f64> {
        self.edges.iter().map(|e| e * self.norm).collect()
    }

    /// Widths in the caller's original units
    pub fn denormalized_widths(&self) -> Vec<f64> {
        self.widths.iter().map(|w| w * self.norm).collect()
    }

    /// Centers in the caller's original units
    pub fn denormalized_centers(&self) -> Vec<f64> {
        self.centers.iter().map(|c| c * self.norm).collect()
    }

    /// Assign every measurement to a bin index
    ///
    /// Indices equal to [`Bins::len`] mark measurements at or below the last
    /// edge. Their count is recorded as an [`Advisory::OutOfRange`].
    pub fn bin_data(&self, advisories: &mut Advisories) -> BinAssignment {
        let indices: Vec<usize> = self.values.iter().map(|&v| digitize(v, &self.edges)).collect();
        let assignment = BinAssignment::new(indices, self.len());

        let out_of_range = assignment.out_of_range();
        if out_of_range > 0 {
            advisories.push(Advisory::OutOfRange {
                count: out_of_range,
            });
        }
        debug!(
            in_range = assignment.in_range(),
            out_of_range, "assigned measurements to bins"
        );
        assignment
    }

    /// Characteristic size of every bin
    ///
    /// Uses the configured [`HbarMethod`](crate::HbarMethod). Bins without
    /// members fall back to their center and record an
    /// [`Advisory::EmptyBin`]; the bin-center method never does.
    pub fn characteristic_sizes(
        &self,
        assignment: &BinAssignment,
        advisories: &mut Advisories,
    ) -> Vec<f64> {
        let method = self.config.hbar_method;
        if method == crate::HbarMethod::BinCenter {
            return self.centers.clone();
        }

        (0..self.len())
            .map(|i| {
                let members = assignment.members(&self.values, i);
                match method.aggregate(&members) {
                    Some(size) => size,
                    None => {
                        advisories.push(Advisory::EmptyBin { index: i });
                        self.centers[i]
                    }
                }
            })
            .collect()
    }
}

impl fmt::Display for Bins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bins({} {} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.config.bin_method,
            self.values.len(),
            self.edges[self.len()] * self.norm,
            self.edges[0] * self.norm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BinMethod, HbarMethod};
    use approx::assert_relative_eq;

    #[test]
    fn test_bin() {
        let bin = Bin::new(3.0, 1.0);
        assert_eq!(bin.width(), 2.0);
        assert_eq!(bin.center(), 2.0);
        assert!(bin.contains(3.0)); // Upper edge is inclusive
        assert!(!bin.contains(1.0));
        assert!(bin.contains(1.5));
    }

    #[test]
    fn test_linear_bins() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = Bins::new(&data, BinConfig::linear(2)).unwrap();

        assert_eq!(bins.len(), 2);
        assert_eq!(bins.edges().len(), 3);
        assert_eq!(bins.norm(), 1.0);
        let total: f64 = bins.widths().iter().sum();
        assert_relative_eq!(total, 5.0000005 - 0.9999999, epsilon = 1e-12);
        assert_relative_eq!(bins.centers()[0], bins.edges()[0] - bins.widths()[0] / 2.0);
        assert_eq!(bins.bins()[1], bins.bin(1).unwrap());
        assert!(bins.bin(2).is_none());
    }

    #[test]
    fn test_bin_data_counts() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = Bins::new(&data, BinConfig::linear(2)).unwrap();
        let mut advisories = Advisories::new();
        let assignment = bins.bin_data(&mut advisories);

        assert_eq!(assignment.indices(), &[1, 1, 1, 0, 0]);
        assert_eq!(assignment.counts(), &[2, 3]);
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_geometric_out_of_range() {
        // 10^-0.2 * 10 ~= 6.31, so 1.0 and 2.0 fall below the last edge
        let data = [1.0, 2.0, 7.0, 8.0, 10.0];
        let bins = Bins::new(&data, BinConfig::geometric(2)).unwrap();
        let mut advisories = Advisories::new();
        let assignment = bins.bin_data(&mut advisories);

        assert_eq!(assignment.indices(), &[2, 2, 1, 0, 0]);
        assert_eq!(assignment.out_of_range(), 2);
        assert_eq!(advisories.out_of_range(), 2);
    }

    #[test]
    fn test_characteristic_sizes() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut advisories = Advisories::new();

        let bins = Bins::new(&data, BinConfig::linear(2).with_hbar(HbarMethod::Mean)).unwrap();
        let assignment = bins.bin_data(&mut advisories);
        let hbar = bins.characteristic_sizes(&assignment, &mut advisories);
        assert_relative_eq!(hbar[0], 4.5);
        assert_relative_eq!(hbar[1], 2.0);

        let bins = Bins::new(&data, BinConfig::linear(2)).unwrap();
        let hbar = bins.characteristic_sizes(&assignment, &mut advisories);
        assert_eq!(hbar, bins.centers());
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_empty_bin_falls_back_to_center() {
        let data = [1.0, 1.1, 9.9, 10.0];
        let bins = Bins::new(
            &data,
            BinConfig::new(BinMethod::Linear, HbarMethod::Median, 3),
        )
        .unwrap();
        let mut advisories = Advisories::new();
        let assignment = bins.bin_data(&mut advisories);
        let hbar = bins.characteristic_sizes(&assignment, &mut advisories);

        assert_eq!(assignment.counts(), &[2, 0, 2]);
        assert_eq!(hbar[1], bins.centers()[1]);
        assert_eq!(advisories.empty_bins(), vec![1]);
    }

    #[test]
    fn test_normalized_bins() {
        let data = [2.0, 4.0, 8.0];
        let plain = Bins::new(&data, BinConfig::linear(4)).unwrap();
        let normed = Bins::new(&data, BinConfig::linear(4).normalized(true)).unwrap();

        assert_eq!(normed.norm(), 8.0);
        assert_eq!(normed.values(), &[0.25, 0.5, 1.0]);
        for (a, b) in plain.centers().iter().zip(normed.denormalized_centers()) {
            assert_relative_eq!(*a, b, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(Bins::new(&[], BinConfig::linear(2)).is_err());
        assert!(Bins::new(&[1.0, -2.0], BinConfig::linear(2)).is_err());
        assert!(Bins::new(&[1.0, 2.0], BinConfig::linear(0)).is_err());
    }
}
