//! Error types for SFBridge

use thiserror::Error;

/// SFBridge error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (configuration loading only)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (configuration loading only)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Family name not present in the registry
    #[error("unknown distribution family: {0:?}")]
    UnknownFamily(String),

    /// A required parameter was not supplied
    #[error("{family}: missing required parameter {name:?}")]
    MissingParameter {
        /// Family being constructed.
        family: &'static str,
        /// Parameter name.
        name: &'static str,
    },

    /// The same parameter name appeared more than once
    #[error("{family}: parameter {name:?} given more than once")]
    DuplicateParameter {
        /// Family being constructed.
        family: &'static str,
        /// Parameter name as supplied by the caller.
        name: String,
    },

    /// A parameter name the family does not declare
    #[error("{family}: unexpected parameter {name:?}")]
    UnexpectedParameter {
        /// Family being constructed.
        family: &'static str,
        /// Parameter name as supplied by the caller.
        name: String,
    },

    /// A parameter value outside its declared domain
    #[error("{family}: parameter {name:?} must be {expected}, got {value}")]
    InvalidParameter {
        /// Family being constructed.
        family: &'static str,
        /// Parameter name.
        name: &'static str,
        /// Offending value (widened to f64).
        value: f64,
        /// Human-readable domain, e.g. "finite and > 0".
        expected: &'static str,
    },

    /// Validation error raised by an adapter constructor
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let e = Error::InvalidParameter {
            family: "gamma",
            name: "theta",
            value: -1.0,
            expected: "finite and > 0",
        };
        assert_eq!(e.to_string(), "gamma: parameter \"theta\" must be finite and > 0, got -1");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let e: Error = parse.unwrap_err().into();
        assert!(matches!(e, Error::Json(_)));
    }
}
