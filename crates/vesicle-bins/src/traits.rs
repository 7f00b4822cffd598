//! Core traits for bin edge construction

use vesicle_core::Result;

/// Trait for building descending bin edges from sample data
pub trait EdgeBuilder {
    /// Build `nbins + 1` strictly descending edges for the given sample
    ///
    /// The sample is non-empty, finite and positive; `nbins` is positive.
    fn edges(&self, sample: &[f64], nbins: usize) -> Result<Vec<f64>>;

    /// Whether every sample value is guaranteed to land inside the edges
    fn covers_sample(&self) -> bool {
        true
    }
}
