//! Sahagian & Proussevitch (1998) recursive unfolding over geometric bins

use crate::traits::VolumeCorrection;
use vesicle_bins::{BinMethod, HbarMethod};
use vesicle_core::LengthType;

/// Recursive unfolding from the largest size class down
///
/// Sections of a sphere of the largest diameter spread over every smaller
/// class with the probabilities from [`intersection_probabilities`]. Each
/// class's volume density is what remains of its area density after the
/// contributions of all larger classes are removed, so classes must be
/// solved in index order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SahagianProussevitch;

/// Probability that a random plane cuts a sphere of diameter `edges[0]`
/// with a section falling in each bin
///
/// Valid for geometric bins only, where every class has the same shape
/// relative to its upper edge.
pub fn intersection_probabilities(edges: &[f64]) -> Vec<f64> {
    let Some(&top) = edges.first() else {
        return Vec::new();
    };
    let top_sq = top * top;
    edges
        .windows(2)
        .map(|e| (1.0 / top) * ((top_sq - e[1] * e[1]).sqrt() - (top_sq - e[0] * e[0]).sqrt()))
        .collect()
}

impl VolumeCorrection for SahagianProussevitch {
    fn name(&self) -> &'static str {
        "SahagianProussevitch"
    }

    fn length_type(&self) -> LengthType {
        LengthType::Diameter
    }

    fn bin_method(&self) -> BinMethod {
        BinMethod::Geometric
    }

    fn hbar_method(&self) -> HbarMethod {
        HbarMethod::BinCenter
    }

    fn to_nv(&self, na: &[f64], hbar: &[f64], edges: &[f64]) -> Vec<f64> {
        debug_assert_eq!(na.len(), hbar.len());
        debug_assert_eq!(edges.len(), na.len() + 1);

        // A lone bin receives every section. Dividing by P[0] as well, as the
        // published recursion does, would scale it by the lower-edge chord.
        if na.len() == 1 {
            return vec![na[0] / hbar[0]];
        }

        let probabilities = intersection_probabilities(edges);
        let mut nv = vec![0.0; na.len()];
        for i in 0..na.len() {
            let previous: f64 = (0..i)
                .map(|j| probabilities[j + 1] * hbar[j + 1] * nv[i - j - 1])
                .sum();
            nv[i] = (na[i] - previous) / (probabilities[0] * hbar[i]);
        }
        nv
    }
}
