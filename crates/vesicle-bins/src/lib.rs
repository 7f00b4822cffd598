//! Descending bin sets for vesicle size distributions
//!
//! This crate partitions a set of positive lengths into an ordered set of
//! bins and derives the per-bin quantities the stereological corrections
//! consume. Bins are always ordered largest first: edge 0 is the upper edge
//! of the largest-size bin.
//!
//! # Key Features
//!
//! - **Two edge strategies**: padded linear spacing, or decade-spaced
//!   geometric edges anchored at the largest measurement
//! - **Right-inclusive assignment**: a value belongs to bin `i` when
//!   `edge[i] >= value > edge[i + 1]`
//! - **Out-of-range tracking**: measurements below the last edge keep an
//!   index of `n` and are excluded from every per-bin aggregate
//! - **Normalization**: optional division by the maximum measurement
//!
//! # Example
//!
//! ```rust
//! use vesicle_bins::{BinConfig, Bins, HbarMethod};
//! use vesicle_core::Advisories;
//!
//! let radii = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let config = BinConfig::linear(2).with_hbar(HbarMethod::Mean);
//! let bins = Bins::new(&radii, config).unwrap();
//!
//! let mut advisories = Advisories::new();
//! let assignment = bins.bin_data(&mut advisories);
//! let na = assignment.area_density(100.0).unwrap();
//! let hbar = bins.characteristic_sizes(&assignment, &mut advisories);
//!
//! assert_eq!(na, vec![0.02, 0.03]);
//! assert_eq!(hbar, vec![4.5, 2.0]);
//! assert!(advisories.is_empty());
//! ```

pub mod assignment;
pub mod builders;
pub mod config;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use assignment::{digitize, BinAssignment};
pub use builders::{GeometricEdges, LinearEdges, GEOMETRIC_STEP, LINEAR_PADDING};
pub use config::{BinConfig, BinMethod, HbarMethod};
pub use traits::EdgeBuilder;
pub use types::{Bin, Bins};

pub use vesicle_core::Result;
