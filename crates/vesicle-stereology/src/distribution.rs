//! Size distribution pipeline
//!
//! A [`Distribution`] moves through a fixed sequence of stages, each a
//! type-state marker, so a stage can only be reached once and only in order:
//!
//! ```text
//! BinsBuilt -> DensitiesComputed -> VolumeCorrected -> LogTransformed
//!     \______________ direct_density ______/
//! ```
//!
//! Advisories may be recorded at any stage; they never change it.

use crate::traits::VolumeCorrection;
use crate::types::CorrectionResult;
use std::marker::PhantomData;
use tracing::debug;
use vesicle_bins::{BinAssignment, BinConfig, Bins};
use vesicle_core::{Advisories, LengthType, Result};

/// Scale applied to volume densities before the log transform
pub const NUMBER_DENSITY_SCALE: f64 = 1e9;

/// Scale applied to bin widths before the log transform
pub const WIDTH_SCALE: f64 = 1e-3;

/// Type-state markers for the pipeline
pub mod state {
    /// Bins built and measurements assigned
    pub struct BinsBuilt;

    /// Area density and characteristic sizes available
    pub struct DensitiesComputed;

    /// Volume density available
    pub struct VolumeCorrected;

    /// Number density and its logarithm available; terminal
    pub struct LogTransformed;
}

pub use state::{BinsBuilt, DensitiesComputed, LogTransformed, VolumeCorrected};

/// Pipeline stage trait
pub trait PipelineState {}

impl PipelineState for BinsBuilt {}
impl PipelineState for DensitiesComputed {}
impl PipelineState for VolumeCorrected {}
impl PipelineState for LogTransformed {}

/// A binned measurement set and everything derived from it so far
pub struct Distribution<S: PipelineState> {
    bins: Bins,
    assignment: BinAssignment,
    length_type: LengthType,
    method: Option<&'static str>,
    na: Vec<f64>,
    hbar: Vec<f64>,
    nv: Vec<f64>,
    n: Vec<f64>,
    lnn: Vec<f64>,
    advisories: Advisories,
    _state: PhantomData<S>,
}

impl<S: PipelineState> Distribution<S> {
    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    pub fn assignment(&self) -> &BinAssignment {
        &self.assignment
    }

    pub fn length_type(&self) -> LengthType {
        self.length_type
    }

    pub fn advisories(&self) -> &Advisories {
        &self.advisories
    }

    fn advance<T: PipelineState>(self) -> Distribution<T> {
        Distribution {
            bins: self.bins,
            assignment: self.assignment,
            length_type: self.length_type,
            method: self.method,
            na: self.na,
            hbar: self.hbar,
            nv: self.nv,
            n: self.n,
            lnn: self.lnn,
            advisories: self.advisories,
            _state: PhantomData,
        }
    }
}

impl Distribution<BinsBuilt> {
    /// Build bins over `measurements` and assign every measurement
    pub fn new(measurements: &[f64], config: BinConfig, length_type: LengthType) -> Result<Self> {
        Self::with_advisories(measurements, config, length_type, Advisories::new())
    }

    /// Like [`Distribution::new`], continuing an existing advisory list
    pub fn with_advisories(
        measurements: &[f64],
        config: BinConfig,
        length_type: LengthType,
        mut advisories: Advisories,
    ) -> Result<Self> {
        let bins = Bins::new(measurements, config)?;
        let assignment = bins.bin_data(&mut advisories);
        Ok(Self {
            bins,
            assignment,
            length_type,
            method: None,
            na: Vec::new(),
            hbar: Vec::new(),
            nv: Vec::new(),
            n: Vec::new(),
            lnn: Vec::new(),
            advisories,
            _state: PhantomData,
        })
    }

    /// Compute area density against `reference_area` and the characteristic sizes
    pub fn compute_densities(mut self, reference_area: f64) -> Result<Distribution<DensitiesComputed>> {
        self.na = self.assignment.area_density(reference_area)?;
        self.hbar = self
            .bins
            .characteristic_sizes(&self.assignment, &mut self.advisories);
        debug!(reference_area, "computed area densities");
        Ok(self.advance())
    }

    /// Uncorrected volume density: members per unit `reference_volume`
    ///
    /// For measurements that are already volumetric. No area density exists
    /// on this path, so `na` stays empty.
    pub fn direct_density(mut self, reference_volume: f64) -> Result<Distribution<VolumeCorrected>> {
        self.nv = self.assignment.volume_density(reference_volume)?;
        self.hbar = self
            .bins
            .characteristic_sizes(&self.assignment, &mut self.advisories);
        debug!(reference_volume, "computed direct volume densities");
        Ok(self.advance())
    }
}

impl Distribution<DensitiesComputed> {
    /// Number of sections per unit area, per bin
    pub fn na(&self) -> &[f64] {
        &self.na
    }

    /// Characteristic size per bin
    pub fn hbar(&self) -> &[f64] {
        &self.hbar
    }

    /// Apply a stereological correction to obtain `nv`
    pub fn correct<C: VolumeCorrection + ?Sized>(mut self, correction: &C) -> Distribution<VolumeCorrected> {
        self.nv = correction.to_nv(&self.na, &self.hbar, self.bins.edges());
        self.method = Some(correction.name());
        debug!(method = correction.name(), "applied volume correction");
        self.advance()
    }
}

impl Distribution<VolumeCorrected> {
    /// Number per unit volume, per bin
    pub fn nv(&self) -> &[f64] {
        &self.nv
    }

    /// Per-bin number density and its natural logarithm
    ///
    /// `n[i] = nv[i] * 1e9 / (width[i] * 1e-3 * norm * factor)` where
    /// `factor` is 2 for radii. Empty or negative bins give `-inf` or NaN.
    pub fn to_log_number_density(mut self) -> Distribution<LogTransformed> {
        let norm = self.bins.norm();
        let length_type = self.length_type;
        self.n = self
            .nv
            .iter()
            .zip(self.bins.widths())
            .map(|(&nv, &width)| number_density(nv, width, norm, length_type))
            .collect();
        self.lnn = self.n.iter().map(|n| n.ln()).collect();
        self.advance()
    }
}

impl Distribution<LogTransformed> {
    pub fn nv(&self) -> &[f64] {
        &self.nv
    }

    /// Number density per unit size, per bin
    pub fn n(&self) -> &[f64] {
        &self.n
    }

    /// Natural logarithm of [`Distribution::n`]
    pub fn lnn(&self) -> &[f64] {
        &self.lnn
    }

    /// Freeze the outputs in the caller's units
    ///
    /// Lengths are multiplied back by `norm` and `nv` divided by it. With a
    /// normalized configuration `n` and `lnn` are then recomputed from the
    /// reported `nv` and `widths`, so [`nv_from_lnn`] inverts the result's
    /// own fields.
    pub fn into_result(self) -> CorrectionResult {
        let norm = self.bins.norm();
        let length_type = self.length_type;
        let hbar = self.hbar.iter().map(|h| h * norm).collect();
        let widths = self.bins.denormalized_widths();
        let nv: Vec<f64> = self.nv.iter().map(|v| v / norm).collect();

        let (n, lnn) = if self.bins.config().normalized {
            let n: Vec<f64> = nv
                .iter()
                .zip(&widths)
                .map(|(&nv, &width)| number_density(nv, width, norm, length_type))
                .collect();
            let lnn = n.iter().map(|n| n.ln()).collect();
            (n, lnn)
        } else {
            (self.n, self.lnn)
        };

        CorrectionResult {
            method: self.method.map(str::to_string),
            length_type,
            config: *self.bins.config(),
            norm,
            edges: self.bins.denormalized_edges(),
            centers: self.bins.denormalized_centers(),
            widths,
            counts: self.assignment.counts().to_vec(),
            out_of_range: self.assignment.out_of_range(),
            na: self.na,
            hbar,
            nv,
            n,
            lnn,
            advisories: self.advisories,
        }
    }
}

/// Number density per unit size for one bin
///
/// `nv * 1e9 / (width * 1e-3 * norm * factor)` where `factor` is 2 for radii.
pub fn number_density(nv: f64, width: f64, norm: f64, length_type: LengthType) -> f64 {
    nv * NUMBER_DENSITY_SCALE / (width * WIDTH_SCALE * norm * length_type.diameter_factor())
}

/// Recover `nv` from a log number density; inverse of [`number_density`]
pub fn nv_from_lnn(lnn: f64, width: f64, norm: f64, length_type: LengthType) -> f64 {
    lnn.exp() * width * WIDTH_SCALE * norm * length_type.diameter_factor() / NUMBER_DENSITY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrections::ChengLemlich;
    use approx::assert_relative_eq;
    use vesicle_bins::HbarMethod;

    #[test]
    fn test_pipeline_stages() {
        let radii = [1.0, 2.0, 3.0, 4.0, 5.0];
        let built = Distribution::new(&radii, ChengLemlich.bin_config(2), LengthType::Radius).unwrap();
        assert_eq!(built.assignment().counts(), &[2, 3]);

        let densities = built.compute_densities(100.0).unwrap();
        assert_eq!(densities.na(), &[0.02, 0.03]);
        assert_eq!(densities.hbar(), &[4.5, 2.0]);

        let corrected = densities.correct(&ChengLemlich);
        assert_relative_eq!(corrected.nv()[0], 0.02 / 4.5);
        assert_relative_eq!(corrected.nv()[1], 0.03 / 2.0);

        let logged = corrected.to_log_number_density();
        let widths = logged.bins().widths().to_vec();
        for i in 0..2 {
            let expected = logged.nv()[i] * 1e9 / (widths[i] * 1e-3 * 1.0 * 2.0);
            assert_relative_eq!(logged.n()[i], expected, max_relative = 1e-15);
            assert_relative_eq!(logged.lnn()[i], expected.ln(), max_relative = 1e-15);
        }
    }

    #[test]
    fn test_direct_density() {
        let diameters = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let config = BinConfig::linear(3).with_hbar(HbarMethod::Median);
        let result = Distribution::new(&diameters, config, LengthType::Diameter)
            .unwrap()
            .direct_density(10.0)
            .unwrap()
            .to_log_number_density()
            .into_result();

        assert_eq!(result.nv, vec![0.2, 0.2, 0.2]);
        assert!(result.na.is_empty());
        assert_eq!(result.hbar, vec![5.5, 3.5, 1.5]);
        assert_eq!(result.method, None);
    }

    #[test]
    fn test_log_round_trip() {
        let radii = [0.5, 0.7, 1.1, 1.2, 2.9, 3.3, 4.0];
        let logged = Distribution::new(&radii, ChengLemlich.bin_config(3), LengthType::Radius)
            .unwrap()
            .compute_densities(12.5)
            .unwrap()
            .correct(&ChengLemlich)
            .to_log_number_density();

        for i in 0..3 {
            let width = logged.bins().widths()[i];
            let recovered = nv_from_lnn(logged.lnn()[i], width, 1.0, LengthType::Radius);
            assert_relative_eq!(recovered, logged.nv()[i], max_relative = 1e-9);
        }
    }

    #[test]
    fn test_normalized_result_inverts() {
        let radii = [1.0, 2.0, 3.0, 4.0, 5.0];
        let config = ChengLemlich.bin_config(2).normalized(true);
        let result = Distribution::new(&radii, config, LengthType::Radius)
            .unwrap()
            .compute_densities(100.0)
            .unwrap()
            .correct(&ChengLemlich)
            .to_log_number_density()
            .into_result();

        assert_eq!(result.norm, 5.0);
        assert_relative_eq!(result.nv[0], 0.02 / 4.5, max_relative = 1e-12);
        for i in 0..2 {
            let recovered = nv_from_lnn(result.lnn[i], result.widths[i], result.norm, result.length_type);
            assert_relative_eq!(recovered, result.nv[i], max_relative = 1e-9);
            assert_relative_eq!(
                result.n[i],
                number_density(result.nv[i], result.widths[i], result.norm, result.length_type),
                max_relative = 1e-15
            );
        }
    }

    #[test]
    fn test_rejects_bad_reference() {
        let built = Distribution::new(&[1.0, 2.0], BinConfig::linear(1), LengthType::Diameter).unwrap();
        assert!(built.compute_densities(0.0).is_err());
        let built = Distribution::new(&[1.0, 2.0], BinConfig::linear(1), LengthType::Diameter).unwrap();
        assert!(built.direct_density(-5.0).is_err());
    }
}
