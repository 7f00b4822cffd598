//! Error types for vesicle size analysis
//!
//! Fatal configuration and input errors shared by every vesicle-stats crate.
//! Recoverable conditions are reported as [`Advisory`](crate::Advisory)
//! values instead.

use thiserror::Error;

/// Core error type for vesicle size operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A method, convention or field name that has no registered meaning
    #[error("Unknown {kind} '{name}'")]
    UnknownMethod { kind: &'static str, name: String },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty measurement set
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a quantity that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive and finite, got {value}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for an unrecognized name
    pub fn unknown_method(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownMethod {
            kind,
            name: name.into(),
        }
    }

    /// Whether this error came from a name lookup
    pub fn is_unknown_method(&self) -> bool {
        matches!(self, Self::UnknownMethod { .. })
    }
}

/// Check that a scalar such as a reference area is finite and strictly positive
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::non_positive(name, value))
    }
}

/// Check that a measurement set is non-empty, finite and strictly positive
pub fn ensure_measurements(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("measurements"));
    }
    if let Some(bad) = values.iter().find(|&&v| v <= 0.0) {
        return Err(Error::InvalidInput(format!(
            "measurements must be positive lengths, got {bad}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("nbins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: nbins must be positive");

        let err = Error::InsufficientData { expected: 1, actual: 0 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 1 samples, got 0");

        assert!(matches!(
            Error::empty_input(),
            Error::InsufficientData { expected: 1, actual: 0 }
        ));

        let err = Error::unknown_method("correction method", "Wicksell");
        assert_eq!(err.to_string(), "Unknown correction method 'Wicksell'");
        assert!(err.is_unknown_method());
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("roi area", 2.5).unwrap(), 2.5);
        assert!(ensure_positive("roi area", 0.0).is_err());
        assert!(ensure_positive("roi area", -1.0).is_err());
        assert!(ensure_positive("roi area", f64::NAN).is_err());
        assert!(ensure_positive("roi area", f64::INFINITY).is_err());

        let err = ensure_positive("roi area", -3.0).unwrap_err();
        assert!(err.to_string().contains("roi area"));
        assert!(!err.is_unknown_method());
    }

    #[test]
    fn test_ensure_measurements() {
        assert!(ensure_measurements(&[1.0, 2.0]).is_ok());
        assert!(matches!(
            ensure_measurements(&[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
        assert!(matches!(
            ensure_measurements(&[1.0, f64::NAN]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            ensure_measurements(&[1.0, 0.0]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
