//! Cheng & Lemlich (1983) area-to-volume conversion

use crate::traits::VolumeCorrection;
use vesicle_bins::{BinMethod, HbarMethod};
use vesicle_core::LengthType;

/// Divides each bin's area density by its mean section radius
///
/// Bins are independent: no density moves between size classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChengLemlich;

impl VolumeCorrection for ChengLemlich {
    fn name(&self) -> &'static str {
        "ChengLemlich"
    }

    fn length_type(&self) -> LengthType {
        LengthType::Radius
    }

    fn bin_method(&self) -> BinMethod {
        BinMethod::Linear
    }

    fn hbar_method(&self) -> HbarMethod {
        HbarMethod::Mean
    }

    fn to_nv(&self, na: &[f64], hbar: &[f64], _edges: &[f64]) -> Vec<f64> {
        debug_assert_eq!(na.len(), hbar.len());
        na.iter().zip(hbar).map(|(a, h)| a / h).collect()
    }
}
