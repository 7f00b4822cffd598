//! Saltykov (1967) fixed-kernel unfolding over linear bins

use crate::traits::VolumeCorrection;
use vesicle_bins::{BinMethod, HbarMethod};
use vesicle_core::LengthType;

/// Published unfolding coefficients, lag 0 first
///
/// Calibrated for a particular linear bin width; applied unchanged to
/// whatever width the caller configures.
pub const SALTIKOV_COEFFICIENTS: [f64; 12] = [
    1.6461, -0.4561, -0.1162, -0.0415, -0.0173, -0.0079, -0.0038, -0.0018, -0.0010, -0.0003,
    -0.0002, -0.0002,
];

/// Convolves the area densities of larger classes with a fixed kernel
///
/// Lags past the end of the kernel contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Saltikov;

impl VolumeCorrection for Saltikov {
    fn name(&self) -> &'static str {
        "Saltikov"
    }

    fn length_type(&self) -> LengthType {
        LengthType::Diameter
    }

    fn bin_method(&self) -> BinMethod {
        BinMethod::Linear
    }

    fn hbar_method(&self) -> HbarMethod {
        HbarMethod::Mean
    }

    fn to_nv(&self, na: &[f64], hbar: &[f64], _edges: &[f64]) -> Vec<f64> {
        debug_assert_eq!(na.len(), hbar.len());
        (0..na.len())
            .map(|i| {
                let na_sum: f64 = SALTIKOV_COEFFICIENTS
                    .iter()
                    .take(i + 1)
                    .enumerate()
                    .map(|(k, c)| c * na[i - k])
                    .sum();
                na_sum / hbar[i]
            })
            .collect()
    }
}
