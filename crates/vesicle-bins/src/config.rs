//! Configuration types for bin construction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vesicle_core::{Error, Result};

/// How bin edges are spaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinMethod {
    /// Equal-width bins spanning the sample range
    Linear,
    /// Edges at `max * 10^(-0.1 i)`, independent of the sample minimum
    Geometric,
}

impl BinMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Geometric => "geometric",
        }
    }
}

impl fmt::Display for BinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "geometric" => Ok(Self::Geometric),
            _ => Err(Error::unknown_method("bin method", s)),
        }
    }
}

/// How the characteristic size (hbar) of each bin is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HbarMethod {
    /// Geometric center of the bin
    #[default]
    BinCenter,
    /// Mean of the member measurements
    Mean,
    /// Median of the member measurements
    Median,
}

impl HbarMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BinCenter => "bin_center",
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }

    /// Aggregate the members of one bin
    ///
    /// `None` for [`HbarMethod::BinCenter`] and for empty bins; callers fall
    /// back to the bin center in both cases.
    pub fn aggregate(&self, members: &[f64]) -> Option<f64> {
        if members.is_empty() {
            return None;
        }
        match self {
            Self::BinCenter => None,
            Self::Mean => Some(vesicle_core::utils::mean(members)),
            Self::Median => Some(vesicle_core::utils::median(members)),
        }
    }
}

impl fmt::Display for HbarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HbarMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bin_center" | "bin-center" | "center" => Ok(Self::BinCenter),
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            _ => Err(Error::unknown_method("characteristic size method", s)),
        }
    }
}

/// Immutable bin configuration
///
/// Built once, validated, and passed by value into [`Bins::new`](crate::Bins::new).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinConfig {
    pub bin_method: BinMethod,
    pub hbar_method: HbarMethod,
    pub nbins: usize,
    pub normalized: bool,
}

impl BinConfig {
    /// Create an unnormalized configuration
    pub fn new(bin_method: BinMethod, hbar_method: HbarMethod, nbins: usize) -> Self {
        Self {
            bin_method,
            hbar_method,
            nbins,
            normalized: false,
        }
    }

    /// Equal-width bins with bin-center sizes
    pub fn linear(nbins: usize) -> Self {
        Self::new(BinMethod::Linear, HbarMethod::BinCenter, nbins)
    }

    /// Decade-spaced bins with bin-center sizes
    pub fn geometric(nbins: usize) -> Self {
        Self::new(BinMethod::Geometric, HbarMethod::BinCenter, nbins)
    }

    /// Set the characteristic size method
    pub fn with_hbar(mut self, hbar_method: HbarMethod) -> Self {
        self.hbar_method = hbar_method;
        self
    }

    /// Divide measurements by their maximum before binning
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Reject configurations no bin set can be built from
    pub fn validate(&self) -> Result<()> {
        if self.nbins == 0 {
            return Err(Error::InvalidParameter(
                "Number of bins must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("linear".parse::<BinMethod>().unwrap(), BinMethod::Linear);
        assert_eq!("Geometric".parse::<BinMethod>().unwrap(), BinMethod::Geometric);
        assert!("log".parse::<BinMethod>().unwrap_err().is_unknown_method());

        assert_eq!("bin_center".parse::<HbarMethod>().unwrap(), HbarMethod::BinCenter);
        assert_eq!("mean".parse::<HbarMethod>().unwrap(), HbarMethod::Mean);
        assert_eq!("median".parse::<HbarMethod>().unwrap(), HbarMethod::Median);
        assert!("mode".parse::<HbarMethod>().unwrap_err().is_unknown_method());
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(HbarMethod::Mean.aggregate(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(HbarMethod::Median.aggregate(&[1.0, 2.0, 6.0]), Some(2.0));
        assert_eq!(HbarMethod::BinCenter.aggregate(&[1.0]), None);
        assert_eq!(HbarMethod::Mean.aggregate(&[]), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(BinConfig::linear(10).validate().is_ok());
        assert!(matches!(
            BinConfig::geometric(0).validate(),
            Err(Error::InvalidParameter(_))
        ));

        let config = BinConfig::linear(4).with_hbar(HbarMethod::Median).normalized(true);
        assert_eq!(config.hbar_method, HbarMethod::Median);
        assert!(config.normalized);
        assert_eq!(config.nbins, 4);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BinConfig::geometric(3)).unwrap();
        assert_eq!(
            json,
            r#"{"bin_method":"geometric","hbar_method":"bin_center","nbins":3,"normalized":false}"#
        );
    }
}
