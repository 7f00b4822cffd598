//! Measurement conventions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a length is a radius or a diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthType {
    Radius,
    Diameter,
}

impl LengthType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Diameter => "diameter",
        }
    }

    /// Multiplier that turns this length into a diameter-equivalent one
    pub fn diameter_factor(&self) -> f64 {
        match self {
            Self::Radius => 2.0,
            Self::Diameter => 1.0,
        }
    }
}

impl fmt::Display for LengthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radius" => Ok(Self::Radius),
            "diameter" => Ok(Self::Diameter),
            _ => Err(Error::unknown_method("length type", s)),
        }
    }
}
