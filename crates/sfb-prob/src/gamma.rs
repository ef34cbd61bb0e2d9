//! Gamma distribution adapter.

use sfb_core::{ContinuousUnivariate, Error, Result, SolverConfig};

use crate::math::{digamma, ln_gamma, ln_reg_gamma_upper, reg_gamma_lower, reg_gamma_upper};
use crate::solver;

/// Gamma distribution with `shape` (k) and `scale` (theta).
///
/// Parameterization:
/// - `shape > 0`
/// - `scale > 0`
/// Support: `x >= 0`.
#[derive(Debug, Clone, Copy)]
pub struct Gamma {
    shape: f64,
    scale: f64,
    ln_norm: f64,
    solver: SolverConfig,
}

impl Gamma {
    /// Create a Gamma(`shape`, `scale`) adapter.
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(Error::Validation(format!(
                "shape must be finite and > 0, got {}",
                shape
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::Validation(format!(
                "scale must be finite and > 0, got {}",
                scale
            )));
        }
        let ln_norm = -(ln_gamma(shape) + shape * scale.ln());
        Ok(Self { shape, scale, ln_norm, solver: SolverConfig::default() })
    }

    /// Replace the quantile solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Shape `k`.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale `theta`.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousUnivariate for Gamma {
    fn family(&self) -> &'static str {
        "gamma"
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        if x == 0.0 {
            if self.shape < 1.0 {
                return f64::INFINITY;
            }
            if self.shape > 1.0 {
                return f64::NEG_INFINITY;
            }
            // shape == 1 => exponential with rate 1/scale
            return -self.scale.ln();
        }
        if x == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        self.ln_norm + (self.shape - 1.0) * x.ln() - x / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        reg_gamma_lower(self.shape, x / self.scale)
    }

    fn sf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        reg_gamma_upper(self.shape, x / self.scale)
    }

    fn ln_sf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        ln_reg_gamma_upper(self.shape, x / self.scale)
    }

    fn quantile(&self, p: f64) -> f64 {
        solver::quantile(|x| self.cdf(x), p, self.support(), &self.solver)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        solver::quantile_complement(|x| self.sf(x), q, self.support(), &self.solver)
    }

    fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    fn mode(&self) -> f64 {
        if self.shape < 1.0 {
            return f64::NAN;
        }
        (self.shape - 1.0) * self.scale
    }

    fn skewness(&self) -> f64 {
        2.0 / self.shape.sqrt()
    }

    fn kurtosis_excess(&self) -> f64 {
        6.0 / self.shape
    }

    fn entropy(&self) -> f64 {
        let k = self.shape;
        k + self.scale.ln() + ln_gamma(k) + (1.0 - k) * digamma(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential::Exponential;
    use crate::math::EULER_GAMMA;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_one_matches_exponential() {
        let g = Gamma::new(1.0, 1.0 / 2.3).unwrap();
        let e = Exponential::new(2.3).unwrap();
        for x in [0.0, 0.7, 3.0] {
            assert_relative_eq!(g.pdf(x), e.pdf(x), max_relative = 1e-12);
            assert_relative_eq!(g.cdf(x), e.cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_values_k2() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        assert_relative_eq!(g.pdf(1.0), (-1.0f64).exp(), epsilon = 1e-14);
        assert_relative_eq!(g.cdf(1.0), 1.0 - 2.0 * (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(g.mean(), 2.0);
        assert_relative_eq!(g.variance(), 2.0);
        assert_relative_eq!(g.mode(), 1.0);
        assert_relative_eq!(g.entropy(), 1.0 + EULER_GAMMA, epsilon = 1e-12);
    }

    #[test]
    fn test_median_roundtrip() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        let m = g.quantile(0.5);
        assert_relative_eq!(g.cdf(m), 0.5, epsilon = 1e-12);
        assert_relative_eq!(g.median(), m);
        let u = g.quantile_complement(0.05);
        assert_relative_eq!(g.sf(u), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_hazard_deep_in_tail() {
        // Gamma(2, 1): h(x) = x / (1 + x), finite where pdf and sf underflow.
        let g = Gamma::new(2.0, 1.0).unwrap();
        for x in [3.0, 50.0, 800.0] {
            assert_relative_eq!(g.hazard(x), x / (1.0 + x), max_relative = 1e-10);
        }
        assert_relative_eq!(g.cumulative_hazard(800.0), 800.0 - 801f64.ln(), max_relative = 1e-12);
        let g = Gamma::new(3.0, 0.5).unwrap();
        assert_relative_eq!(g.hazard(2000.0), 2.0, max_relative = 1e-3);
        assert!(g.hazard(-1.0).is_nan());
    }

    #[test]
    fn test_small_shape_quantiles() {
        let g = Gamma::new(1e-3, 1.0).unwrap();
        let m = g.quantile(0.5);
        assert!(m > 0.0 && m < 1e-200, "median={}", m);
        assert_relative_eq!(g.cdf(m), 0.5, epsilon = 1e-9);
        let g = Gamma::new(2.0, 1.0).unwrap();
        let x = g.quantile(1e-300);
        assert_relative_eq!(x, (2e-300f64).sqrt(), max_relative = 1e-9);
        assert_relative_eq!(g.cdf(x), 1e-300, max_relative = 1e-9);
    }

    #[test]
    fn test_boundary_density() {
        assert_eq!(Gamma::new(0.5, 1.0).unwrap().pdf(0.0), f64::INFINITY);
        assert_eq!(Gamma::new(3.0, 1.0).unwrap().pdf(0.0), 0.0);
        assert_relative_eq!(Gamma::new(1.0, 4.0).unwrap().pdf(0.0), 0.25);
        assert_eq!(Gamma::new(2.0, 1.0).unwrap().pdf(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_out_of_support_is_nan() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        assert!(g.pdf(-0.1).is_nan());
        assert!(g.cdf(-0.1).is_nan());
        assert!(g.quantile(1.5).is_nan());
        assert!(Gamma::new(0.5, 1.0).unwrap().mode().is_nan());
    }

    #[test]
    fn test_invalid_params() {
        assert!(Gamma::new(0.0, 1.0).is_err());
        assert!(Gamma::new(1.0, 0.0).is_err());
        assert!(Gamma::new(1.0, -2.0).is_err());
        assert!(Gamma::new(f64::NAN, 1.0).is_err());
        assert!(Gamma::new(1.0, f64::INFINITY).is_err());
    }
}
