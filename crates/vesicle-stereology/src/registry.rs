//! Named corrections and the request that drives them

use crate::corrections::{ChengLemlich, SahagianProussevitch, Saltikov};
use crate::distribution::Distribution;
use crate::traits::VolumeCorrection;
use crate::types::CorrectionResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};
use vesicle_core::{ensure_measurements, ensure_positive, Advisories, Advisory, Error, LengthType, Result};

/// The registered corrections, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectionMethod {
    ChengLemlich,
    SahagianProussevitch,
    Saltikov,
}

impl CorrectionMethod {
    pub const ALL: [CorrectionMethod; 3] = [
        Self::ChengLemlich,
        Self::SahagianProussevitch,
        Self::Saltikov,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ChengLemlich => "ChengLemlich",
            Self::SahagianProussevitch => "SahagianProussevitch",
            Self::Saltikov => "Saltikov",
        }
    }

    /// Measurement convention the method expects
    pub fn length_type(&self) -> LengthType {
        match self {
            Self::ChengLemlich => ChengLemlich.length_type(),
            Self::SahagianProussevitch => SahagianProussevitch.length_type(),
            Self::Saltikov => Saltikov.length_type(),
        }
    }

    /// Run this correction over `request`
    pub fn apply(&self, request: &CorrectionRequest<'_>) -> Result<CorrectionResult> {
        match self {
            Self::ChengLemlich => run(&ChengLemlich, request),
            Self::SahagianProussevitch => run(&SahagianProussevitch, request),
            Self::Saltikov => run(&Saltikov, request),
        }
    }
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorrectionMethod {
    type Err = Error;

    /// Accepts the class-style names (`"SahagianProussevitch"`) as well as
    /// snake, kebab and spaced spellings (`"sahagian_proussevitch"`)
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "chenglemlich" => Ok(Self::ChengLemlich),
            "sahagianproussevitch" => Ok(Self::SahagianProussevitch),
            "saltikov" | "saltykov" => Ok(Self::Saltikov),
            _ => Err(Error::unknown_method("correction method", s)),
        }
    }
}

/// Inputs for one correction, as supplied by the aggregation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionRequest<'a> {
    pub measurements: &'a [f64],
    pub reference_area: f64,
    pub length_type: LengthType,
    pub nbins: usize,
    pub normalized: bool,
}

impl<'a> CorrectionRequest<'a> {
    /// Create an unnormalized request
    pub fn new(
        measurements: &'a [f64],
        reference_area: f64,
        length_type: LengthType,
        nbins: usize,
    ) -> Self {
        Self {
            measurements,
            reference_area,
            length_type,
            nbins,
            normalized: false,
        }
    }

    /// Divide measurements by their maximum before binning
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Every fatal check, run before any bin is built
    pub fn validate(&self) -> Result<()> {
        ensure_measurements(self.measurements)?;
        ensure_positive("reference area", self.reference_area)?;
        if self.nbins == 0 {
            return Err(Error::InvalidParameter(
                "Number of bins must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Run `correction` through the full pipeline
///
/// A convention mismatch is recorded as an advisory and the computation
/// proceeds on the supplied data.
#[instrument(skip(correction, request), fields(method = correction.name(), nbins = request.nbins))]
pub fn run<C: VolumeCorrection + ?Sized>(
    correction: &C,
    request: &CorrectionRequest<'_>,
) -> Result<CorrectionResult> {
    request.validate()?;

    let mut advisories = Advisories::new();
    if request.length_type != correction.length_type() {
        advisories.push(Advisory::ConventionMismatch {
            method: correction.name().to_string(),
            expected: correction.length_type(),
            supplied: request.length_type,
        });
    }

    let config = correction.bin_config(request.nbins).normalized(request.normalized);
    let result = Distribution::with_advisories(
        request.measurements,
        config,
        request.length_type,
        advisories,
    )?
    .compute_densities(request.reference_area)?
    .correct(correction)
    .to_log_number_density()
    .into_result();

    debug!(advisories = result.advisories.len(), "correction complete");
    Ok(result)
}

/// Look up `method` by name and run it
pub fn correct(method: &str, request: &CorrectionRequest<'_>) -> Result<CorrectionResult> {
    method.parse::<CorrectionMethod>()?.apply(request)
}
