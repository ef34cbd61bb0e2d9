//! Configuration for the dispatch layer and the adapters' numeric solvers.
//!
//! All fields have defaults, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Settings for the bracketing/bisection quantile solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of bisection steps after bracketing.
    pub max_iter: usize,
    /// Stop once `(hi - lo) <= rel_tol * max(|lo|, |hi|)`; `0.0` bisects to adjacent floats.
    pub rel_tol: f64,
    /// Maximum number of doublings while searching for a bracket on an unbounded side.
    pub max_bracket_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iter: 400, rel_tol: 4.0 * f64::EPSILON, max_bracket_steps: 1100 }
    }
}

/// Configuration for `construct`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Solver handed to every adapter built under this configuration.
    pub solver: SolverConfig,
    /// Fail construction when a parameter name is not declared by the family.
    pub reject_unknown_parameters: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { solver: SolverConfig::default(), reject_unknown_parameters: true }
    }
}

impl DispatchConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject settings the solver cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.solver.max_iter == 0 {
            return Err(Error::Validation("solver.max_iter must be > 0".into()));
        }
        if !self.solver.rel_tol.is_finite() || self.solver.rel_tol < 0.0 {
            return Err(Error::Validation(format!(
                "solver.rel_tol must be finite and >= 0, got {}",
                self.solver.rel_tol
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let cfg = DispatchConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, DispatchConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = DispatchConfig::from_json_str(
            r#"{"solver": {"max_iter": 64}, "reject_unknown_parameters": false}"#,
        )
        .unwrap();
        assert_eq!(cfg.solver.max_iter, 64);
        assert_eq!(cfg.solver.max_bracket_steps, SolverConfig::default().max_bracket_steps);
        assert!(!cfg.reject_unknown_parameters);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(DispatchConfig::from_json_str(r#"{"solver": {"max_iter": 0}}"#).is_err());
        assert!(DispatchConfig::from_json_str(r#"{"solver": {"rel_tol": -1.0}}"#).is_err());
        assert!(matches!(DispatchConfig::from_json_str("[1, 2"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = DispatchConfig::from_path("/nonexistent/sfbridge.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
