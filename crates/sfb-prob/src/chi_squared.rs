//! Chi-squared distribution adapter: `Gamma(v/2, 2)`.

use sfb_core::{ContinuousUnivariate, Error, Result, SolverConfig};

use crate::gamma::Gamma;

/// Chi-squared distribution with `dof` degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared {
    dof: f64,
    inner: Gamma,
}

impl ChiSquared {
    /// Create a chi-squared adapter with `dof > 0`.
    pub fn new(dof: f64) -> Result<Self> {
        if !dof.is_finite() || dof <= 0.0 {
            return Err(Error::Validation(format!("dof must be finite and > 0, got {}", dof)));
        }
        Ok(Self { dof, inner: Gamma::new(0.5 * dof, 2.0)? })
    }

    /// Replace the quantile solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.inner = self.inner.with_solver(solver);
        self
    }

    /// Degrees of freedom.
    pub fn dof(&self) -> f64 {
        self.dof
    }
}

impl ContinuousUnivariate for ChiSquared {
    fn family(&self) -> &'static str {
        "chi_squared"
    }

    fn support(&self) -> (f64, f64) {
        self.inner.support()
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        self.inner.ln_pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.inner.sf(x)
    }

    fn ln_sf(&self, x: f64) -> f64 {
        self.inner.ln_sf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.inner.quantile(p)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        self.inner.quantile_complement(q)
    }

    fn mean(&self) -> f64 {
        self.dof
    }

    fn variance(&self) -> f64 {
        2.0 * self.dof
    }

    // Unbounded density at zero for dof < 2: NaN, as for the gamma shape < 1.
    fn mode(&self) -> f64 {
        self.inner.mode()
    }

    fn skewness(&self) -> f64 {
        self.inner.skewness()
    }

    fn kurtosis_excess(&self) -> f64 {
        12.0 / self.dof
    }

    fn entropy(&self) -> f64 {
        self.inner.entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_dof_is_exponential_half() {
        let c = ChiSquared::new(2.0).unwrap();
        assert_relative_eq!(c.cdf(2.0), 1.0 - (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(c.pdf(2.0), 0.5 * (-1.0f64).exp(), epsilon = 1e-14);
        assert_relative_eq!(c.mean(), 2.0);
        assert_relative_eq!(c.variance(), 4.0);
    }

    #[test]
    fn test_critical_value() {
        // 95th percentile of chi2(1) is 1.959964^2.
        let c = ChiSquared::new(1.0).unwrap();
        let q = c.quantile(0.95);
        assert_relative_eq!(q, 1.959_963_984_540_054f64.powi(2), max_relative = 1e-9);
        assert_relative_eq!(c.quantile_complement(0.05), q, max_relative = 1e-9);
    }

    #[test]
    fn test_mode_matches_gamma() {
        assert!(ChiSquared::new(1.0).unwrap().mode().is_nan());
        assert_eq!(ChiSquared::new(2.0).unwrap().mode(), 0.0);
        assert_relative_eq!(ChiSquared::new(5.0).unwrap().mode(), 3.0);
        for dof in [0.5, 1.0, 2.0, 7.0] {
            let c = ChiSquared::new(dof).unwrap();
            let g = Gamma::new(0.5 * dof, 2.0).unwrap();
            assert_eq!(c.mode().is_nan(), g.mode().is_nan());
        }
    }

    #[test]
    fn test_hazard_tends_to_half() {
        // Gamma(v/2, 2) hazard tends to 1/2.
        let c = ChiSquared::new(4.0).unwrap();
        assert_relative_eq!(c.hazard(3000.0), 0.5, max_relative = 1e-3);
        assert!(c.hazard(3000.0).is_finite());
    }

    #[test]
    fn test_invalid_params() {
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
    }
}
