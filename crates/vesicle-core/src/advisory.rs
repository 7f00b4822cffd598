//! Non-fatal diagnostics attached to computed results
//!
//! Advisories never abort a computation. They are collected alongside the
//! arrays they describe and mirrored to `tracing` at `WARN` level when
//! recorded.

use crate::length::LengthType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition met while binning or correcting a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The supplied measurement convention differs from the one a correction expects
    ConventionMismatch {
        method: String,
        expected: LengthType,
        supplied: LengthType,
    },
    /// Measurements smaller than the smallest bin edge, excluded from every bin
    OutOfRange { count: usize },
    /// A bin without members fell back to its geometric center
    EmptyBin { index: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConventionMismatch {
                method,
                expected,
                supplied,
            } => write!(
                f,
                "Input length for {method} correction should be {expected}, got {supplied}"
            ),
            Self::OutOfRange { count } => {
                write!(f, "{count} vesicles are smaller than any bin edge")
            }
            Self::EmptyBin { index } => {
                write!(f, "Bin {index} does not contain vesicles, using bin center")
            }
        }
    }
}

/// Ordered collection of advisories raised during one computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Advisories {
    items: Vec<Advisory>,
}

impl Advisories {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory and emit it as a warning event
    pub fn push(&mut self, advisory: Advisory) {
        tracing::warn!(%advisory, "advisory recorded");
        self.items.push(advisory);
    }

    /// Append every advisory of `other`, preserving order
    pub fn extend(&mut self, other: Advisories) {
        self.items.extend(other.items);
    }

    pub fn as_slice(&self) -> &[Advisory] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Advisory> {
        self.items.iter()
    }

    /// Total number of measurements reported out of range
    pub fn out_of_range(&self) -> usize {
        self.items
            .iter()
            .map(|a| match a {
                Advisory::OutOfRange { count } => *count,
                _ => 0,
            })
            .sum()
    }

    /// Indices of bins that fell back to their center
    pub fn empty_bins(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|a| match a {
                Advisory::EmptyBin { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn has_convention_mismatch(&self) -> bool {
        self.items
            .iter()
            .any(|a| matches!(a, Advisory::ConventionMismatch { .. }))
    }

    pub fn into_vec(self) -> Vec<Advisory> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Advisories {
    type Item = &'a Advisory;
    type IntoIter = std::slice::Iter<'a, Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
