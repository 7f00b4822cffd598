//! Core types for vesicle size distribution analysis
//!
//! This crate provides the pieces every other vesicle-stats crate shares:
//!
//! - [`Error`] / [`Result`]: fatal configuration and input errors
//! - [`Advisory`] / [`Advisories`]: non-fatal diagnostics returned with results
//! - [`LengthType`]: whether measurements are radii or diameters
//! - [`utils`]: small slice statistics (mean, median, extrema)
//!
//! # Example
//!
//! ```rust
//! use vesicle_core::{ensure_positive, LengthType, Advisories, Advisory};
//!
//! let area = ensure_positive("roi area", 250.0).unwrap();
//! assert_eq!(area, 250.0);
//!
//! let convention: LengthType = "diameter".parse().unwrap();
//! assert_eq!(convention.diameter_factor(), 1.0);
//!
//! let mut advisories = Advisories::new();
//! advisories.push(Advisory::OutOfRange { count: 2 });
//! assert_eq!(advisories.out_of_range(), 2);
//! ```

pub mod advisory;
pub mod error;
pub mod length;
pub mod utils;

pub use advisory::{Advisories, Advisory};
pub use error::{ensure_measurements, ensure_positive, Error, Result};
pub use length::LengthType;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
