//! Result types returned to the caller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vesicle_bins::BinConfig;
use vesicle_core::{Advisories, Error, LengthType, Result};

/// Outputs of one correction, index-aligned and largest bin first
///
/// Every field is in the caller's units, normalized or not, and `n`/`lnn`
/// are the number-density transform of the reported `nv` and `widths`.
///
/// Empty or negative bins make `n` and `lnn` non-finite. These serialize as
/// `null` and read back as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Correction name, `None` for a direct (uncorrected) estimate
    pub method: Option<String>,
    pub length_type: LengthType,
    pub config: BinConfig,
    /// Maximum measurement when normalized, otherwise 1
    pub norm: f64,
    pub edges: Vec<f64>,
    pub centers: Vec<f64>,
    pub widths: Vec<f64>,
    /// Members per bin
    pub counts: Vec<usize>,
    /// Measurements below the smallest edge
    pub out_of_range: usize,
    /// Area density; empty for a direct estimate
    pub na: Vec<f64>,
    pub hbar: Vec<f64>,
    pub nv: Vec<f64>,
    #[serde(with = "non_finite_as_null")]
    pub n: Vec<f64>,
    #[serde(with = "non_finite_as_null")]
    pub lnn: Vec<f64>,
    pub advisories: Advisories,
}

impl CorrectionResult {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// The per-bin array named by `field`
    pub fn series(&self, field: OutputField) -> &[f64] {
        match field {
            OutputField::Na => &self.na,
            OutputField::Hbar => &self.hbar,
            OutputField::Nv => &self.nv,
            OutputField::N => &self.n,
            OutputField::Lnn => &self.lnn,
        }
    }

    /// Bin centers as diameters, for plotting
    pub fn plot_x(&self) -> Vec<f64> {
        let factor = self.length_type.diameter_factor();
        self.centers.iter().map(|c| c * factor).collect()
    }

    /// Diameter-equivalent bin centers paired with one output array
    pub fn plot_series(&self, field: OutputField) -> PlotSeries {
        PlotSeries {
            field,
            x: self.plot_x(),
            y: self.series(field).to_vec(),
        }
    }
}

impl fmt::Display for CorrectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CorrectionResult({}, {} {} bins, {} advisories)",
            self.method.as_deref().unwrap_or("direct"),
            self.len(),
            self.config.bin_method,
            self.advisories.len()
        )
    }
}

/// JSON has no NaN or infinity, so non-finite entries travel as `null`
mod non_finite_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        values
            .iter()
            .map(|v| v.is_finite().then_some(*v))
            .collect::<Vec<Option<f64>>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}

/// A named per-bin output array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    Na,
    Hbar,
    Nv,
    N,
    Lnn,
}

impl OutputField {
    pub const ALL: [OutputField; 5] = [Self::Na, Self::Hbar, Self::Nv, Self::N, Self::Lnn];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Na => "na",
            Self::Hbar => "hbar",
            Self::Nv => "nv",
            Self::N => "n",
            Self::Lnn => "lnn",
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == key)
            .ok_or_else(|| Error::unknown_method("output field", s))
    }
}

/// x/y pairs ready for a plotting layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub field: OutputField,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotSeries {
    /// Points whose y value is finite, dropping empty or negative log bins
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.y)
            .filter(|(_, y)| y.is_finite())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}
