//! Core trait for stereological corrections

use vesicle_bins::{BinConfig, BinMethod, HbarMethod};
use vesicle_core::LengthType;

/// Conversion from per-bin area density to per-bin volume density
///
/// Implementations are plain values: they fix the binning they were
/// calibrated for and turn `na` into `nv` without keeping any state, so one
/// value can correct any number of samples.
pub trait VolumeCorrection {
    /// Name reported in advisories and used by the registry
    fn name(&self) -> &'static str;

    /// Measurement convention the method was published for
    fn length_type(&self) -> LengthType;

    /// Edge spacing the method requires
    fn bin_method(&self) -> BinMethod;

    /// Characteristic size the method divides by
    fn hbar_method(&self) -> HbarMethod;

    /// Bin configuration for `nbins` bins, unnormalized
    fn bin_config(&self, nbins: usize) -> BinConfig {
        BinConfig::new(self.bin_method(), self.hbar_method(), nbins)
    }

    /// Compute `nv` from `na`, `hbar` and the descending bin edges
    ///
    /// `na` and `hbar` have one entry per bin; `edges` has one more.
    /// Mismatched lengths are a caller bug and trip a debug assertion.
    fn to_nv(&self, na: &[f64], hbar: &[f64], edges: &[f64]) -> Vec<f64>;
}
