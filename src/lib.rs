//! Vesicle size distribution toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`vesicle_core`]: errors, advisories and the radius/diameter convention
//! - [`vesicle_bins`]: descending bin construction and assignment
//! - [`vesicle_stereology`]: the correction pipeline, registry and sample
//!   aggregation
//!
//! # Example
//!
//! ```rust
//! use vesicle_stats::prelude::*;
//!
//! let mut sample = Sample::new("scoria-3");
//! sample.add_section(
//!     Section::from_lengths("a", &[0.4, 0.7, 1.2, 1.5, 2.1], LengthType::Radius, 25.0).unwrap(),
//! );
//! let result = sample
//!     .apply_correction("cl", CorrectionMethod::ChengLemlich, LengthType::Radius, 3)
//!     .unwrap();
//! assert_eq!(result.len(), 3);
//! ```

pub use vesicle_bins;
pub use vesicle_core;
pub use vesicle_stereology;

pub mod prelude {
    pub use vesicle_bins::{BinConfig, BinMethod, Bins, HbarMethod};
    pub use vesicle_core::{Advisories, Advisory, Error, LengthType, Result};
    pub use vesicle_stereology::{
        correct, ChengLemlich, CorrectionMethod, CorrectionRequest, CorrectionResult,
        Distribution, OutputField, SahagianProussevitch, Saltikov, Sample, Section,
        VolumeCorrection,
    };
}
