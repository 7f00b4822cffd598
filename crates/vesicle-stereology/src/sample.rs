//! In-memory aggregation of imaged sections into a sample
//!
//! Parsing instrument exports is left to the caller; this module starts from
//! the per-object areas those exports contain.

use crate::registry::{CorrectionMethod, CorrectionRequest};
use crate::types::CorrectionResult;
use std::f64::consts::PI;
use tracing::{debug, instrument};
use vesicle_core::{ensure_positive, Error, LengthType, Result};

/// One planar section with its equivalent-circle sizes
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: String,
    roi_area: f64,
    areas: Vec<f64>,
    radius: Vec<f64>,
    diameter: Vec<f64>,
}

impl Section {
    /// Section from object areas in pixels
    ///
    /// Equivalent radii are `sqrt(area / pi)`. Areas are scaled by
    /// `pixel_size^2` and lengths by `pixel_size`, then objects whose
    /// diameter is not strictly greater than `min_diameter` are dropped.
    pub fn from_pixel_areas(
        id: impl Into<String>,
        pixel_areas: &[f64],
        pixel_size: f64,
        roi_area: f64,
        min_diameter: f64,
    ) -> Result<Self> {
        let pixel_size = ensure_positive("pixel size", pixel_size)?;
        let roi_area = ensure_positive("roi area", roi_area)?;
        if !min_diameter.is_finite() || min_diameter < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "minimum diameter must be finite and non-negative, got {min_diameter}"
            )));
        }
        if pixel_areas.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return Err(Error::InvalidInput(
                "object areas must be finite and non-negative".to_string(),
            ));
        }

        let mut section = Self {
            id: id.into(),
            roi_area,
            areas: Vec::with_capacity(pixel_areas.len()),
            radius: Vec::with_capacity(pixel_areas.len()),
            diameter: Vec::with_capacity(pixel_areas.len()),
        };
        for &area in pixel_areas {
            let radius = (area / PI).sqrt() * pixel_size;
            let diameter = radius * 2.0;
            if diameter > min_diameter {
                section.areas.push(area * pixel_size * pixel_size);
                section.radius.push(radius);
                section.diameter.push(diameter);
            }
        }
        debug!(
            id = %section.id,
            kept = section.len(),
            dropped = pixel_areas.len() - section.len(),
            "thresholded section"
        );
        Ok(section)
    }

    /// Section from lengths already in physical units
    pub fn from_lengths(
        id: impl Into<String>,
        lengths: &[f64],
        length_type: LengthType,
        roi_area: f64,
    ) -> Result<Self> {
        let roi_area = ensure_positive("roi area", roi_area)?;
        if lengths.iter().any(|l| !l.is_finite() || *l <= 0.0) {
            return Err(Error::InvalidInput(
                "section lengths must be finite and positive".to_string(),
            ));
        }
        let radius: Vec<f64> = match length_type {
            LengthType::Radius => lengths.to_vec(),
            LengthType::Diameter => lengths.iter().map(|d| d / 2.0).collect(),
        };
        let diameter = radius.iter().map(|r| r * 2.0).collect();
        let areas = radius.iter().map(|r| PI * r * r).collect();
        Ok(Self {
            id: id.into(),
            roi_area,
            areas,
            radius,
            diameter,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn roi_area(&self) -> f64 {
        self.roi_area
    }

    /// Object areas in physical units
    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    pub fn lengths(&self, length_type: LengthType) -> &[f64] {
        match length_type {
            LengthType::Radius => &self.radius,
            LengthType::Diameter => &self.diameter,
        }
    }

    /// Number of objects kept
    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }
}

/// A named rock sample built from one or more sections
#[derive(Debug, Clone, Default)]
pub struct Sample {
    name: String,
    sections: Vec<Section>,
    corrections: Vec<(String, CorrectionResult)>,
}

impl Sample {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a section; its area joins the sample's reference area
    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Sum of the section areas
    pub fn roi_area(&self) -> f64 {
        self.sections.iter().map(Section::roi_area).sum()
    }

    /// All section lengths of one convention, in section order
    pub fn measurements(&self, length_type: LengthType) -> Vec<f64> {
        self.sections
            .iter()
            .flat_map(|s| s.lengths(length_type).iter().copied())
            .collect()
    }

    /// Correct the pooled sections and store the result under `key`
    ///
    /// Reusing a key replaces the earlier result.
    #[instrument(skip(self), fields(sample = %self.name))]
    pub fn apply_correction(
        &mut self,
        key: &str,
        method: CorrectionMethod,
        length_type: LengthType,
        nbins: usize,
    ) -> Result<&CorrectionResult> {
        let measurements = self.measurements(length_type);
        let request = CorrectionRequest::new(&measurements, self.roi_area(), length_type, nbins);
        let result = method.apply(&request)?;

        let index = match self.corrections.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.corrections[index].1 = result;
                index
            }
            None => {
                self.corrections.push((key.to_string(), result));
                self.corrections.len() - 1
            }
        };
        Ok(&self.corrections[index].1)
    }

    pub fn correction(&self, key: &str) -> Option<&CorrectionResult> {
        self.corrections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, result)| result)
    }

    /// Stored results in insertion order
    pub fn corrections(&self) -> impl Iterator<Item = (&str, &CorrectionResult)> {
        self.corrections.iter().map(|(k, r)| (k.as_str(), r))
    }
}
