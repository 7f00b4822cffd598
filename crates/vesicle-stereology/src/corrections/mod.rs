//! The three published corrections

pub mod cheng_lemlich;
pub mod sahagian_proussevitch;
pub mod saltikov;

pub use cheng_lemlich::ChengLemlich;
pub use sahagian_proussevitch::{intersection_probabilities, SahagianProussevitch};
pub use saltikov::{Saltikov, SALTIKOV_COEFFICIENTS};
