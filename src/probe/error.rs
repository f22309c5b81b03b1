//! Error types for probe construction and manipulation.

use thiserror::Error;

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors that can occur while building or combining probes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProbeError {
    /// Contact shape tag is not one of `circle`, `square`, `rect`.
    #[error("Unsupported contact shape: '{tag}' (expected circle, square or rect)")]
    UnsupportedShape {
        /// The rejected tag.
        tag: String,
    },

    /// Outline type is not one of `tip`, `rect`.
    #[error("Unsupported probe type: '{tag}' (expected tip or rect)")]
    UnsupportedProbeType {
        /// The rejected tag.
        tag: String,
    },

    /// A shape parameter is zero, negative or not finite.
    #[error("Invalid shape parameter '{name}': {value}")]
    InvalidShapeParameter {
        /// Parameter name (radius, width, height).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A parameter required by the shape tag was not supplied.
    #[error("Missing shape parameter '{name}' for {tag} contacts")]
    MissingShapeParameter {
        /// Shape tag.
        tag: &'static str,
        /// Parameter name.
        name: &'static str,
    },

    /// Two sequences that must line up have different lengths.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// What was being checked.
        what: String,
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Operation needs at least one contact.
    #[error("Probe has no contacts")]
    EmptyProbe,

    /// `combine_probes` was given nothing to combine.
    #[error("No probes to combine")]
    EmptyProbeList,

    /// Probes cannot be merged or grouped together.
    #[error("Incompatible probes: {message}")]
    IncompatibleProbes {
        /// Description of the incompatibility.
        message: String,
    },
}

impl ProbeError {
    /// Creates an unsupported shape error.
    pub fn unsupported_shape(tag: impl Into<String>) -> Self {
        Self::UnsupportedShape { tag: tag.into() }
    }

    /// Creates an unsupported probe type error.
    pub fn unsupported_probe_type(tag: impl Into<String>) -> Self {
        Self::UnsupportedProbeType { tag: tag.into() }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates an incompatible probes error.
    pub fn incompatible(message: impl Into<String>) -> Self {
        Self::IncompatibleProbes {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProbeError::unsupported_shape("triangle");
        assert_eq!(
            err.to_string(),
            "Unsupported contact shape: 'triangle' (expected circle, square or rect)"
        );
    }

    #[test]
    fn length_mismatch_display() {
        let err = ProbeError::length_mismatch("num_contact_per_column", 3, 2);
        assert_eq!(
            err.to_string(),
            "Length mismatch for num_contact_per_column: expected 3, got 2"
        );
    }
}
