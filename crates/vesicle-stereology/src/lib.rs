//! Stereological corrections for vesicle size distributions
//!
//! Measurements taken on planar sections under-represent small vesicles and
//! smear large ones across every smaller size class. This crate turns such
//! measurements into per-volume number densities using one of three
//! published corrections:
//!
//! | Method | Convention | Bins | Characteristic size |
//! |--------|-----------|------|---------------------|
//! | [`ChengLemlich`] | radius | linear | mean |
//! | [`SahagianProussevitch`] | diameter | geometric | bin center |
//! | [`Saltikov`] | diameter | linear | mean |
//!
//! Every correction runs the same [`Distribution`] pipeline: build bins,
//! compute area densities, correct to volume densities, then take the log
//! of the number density per unit size. Problems that do not stop the
//! computation (values below the last edge, empty bins, a convention the
//! method was not published for) come back as [`Advisories`] on the
//! [`CorrectionResult`].
//!
//! # Example
//!
//! ```rust
//! use vesicle_stereology::{CorrectionMethod, CorrectionRequest, OutputField};
//! use vesicle_core::LengthType;
//!
//! let radii = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let request = CorrectionRequest::new(&radii, 100.0, LengthType::Radius, 2);
//! let result = CorrectionMethod::ChengLemlich.apply(&request).unwrap();
//!
//! assert_eq!(result.na, vec![0.02, 0.03]);
//! assert_eq!(result.series(OutputField::Hbar), &[4.5, 2.0]);
//! assert!(result.advisories.is_empty());
//! ```
//!
//! Methods can also be chosen by name:
//!
//! ```rust
//! use vesicle_stereology::{correct, CorrectionRequest};
//! use vesicle_core::LengthType;
//!
//! let diameters = [0.8, 1.1, 1.9, 2.4, 3.0];
//! let request = CorrectionRequest::new(&diameters, 40.0, LengthType::Diameter, 3);
//! let result = correct("saltikov", &request).unwrap();
//! assert_eq!(result.nv.len(), 3);
//! assert!(correct("wicksell", &request).is_err());
//! ```

pub mod corrections;
pub mod distribution;
pub mod registry;
pub mod sample;
pub mod traits;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod test_data;

pub use corrections::{
    intersection_probabilities, ChengLemlich, SahagianProussevitch, Saltikov, SALTIKOV_COEFFICIENTS,
};
pub use distribution::{
    number_density, nv_from_lnn, BinsBuilt, DensitiesComputed, Distribution, LogTransformed, PipelineState,
    VolumeCorrected, NUMBER_DENSITY_SCALE, WIDTH_SCALE,
};
pub use registry::{correct, run, CorrectionMethod, CorrectionRequest};
pub use sample::{Sample, Section};
pub use traits::VolumeCorrection;
pub use types::{CorrectionResult, OutputField, PlotSeries};

pub use vesicle_core::Result;
