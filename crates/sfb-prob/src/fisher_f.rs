//! Fisher F (Snedecor) distribution adapter.

use sfb_core::{ContinuousUnivariate, Error, Result, SolverConfig};

use crate::math::{ln_beta, reg_beta};
use crate::solver;

/// F distribution with numerator `df1` and denominator `df2` degrees of freedom.
///
/// No entropy: the registry leaves that slot absent for this family.
#[derive(Debug, Clone, Copy)]
pub struct FisherF {
    df1: f64,
    df2: f64,
    ln_norm: f64,
    solver: SolverConfig,
}

impl FisherF {
    /// Create an F(`df1`, `df2`) adapter.
    pub fn new(df1: f64, df2: f64) -> Result<Self> {
        for (name, v) in [("df1", df1), ("df2", df2)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::Validation(format!(
                    "{} must be finite and > 0, got {}",
                    name, v
                )));
            }
            // Shapes of the incomplete beta are df/2.
            if 0.5 * v == 0.0 {
                return Err(Error::Validation(format!("{} too small to halve, got {:e}", name, v)));
            }
        }
        let ln_norm = 0.5 * df1 * (df1 / df2).ln() - ln_beta(0.5 * df1, 0.5 * df2);
        Ok(Self { df1, df2, ln_norm, solver: SolverConfig::default() })
    }

    /// Replace the quantile solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

impl ContinuousUnivariate for FisherF {
    fn family(&self) -> &'static str {
        "fisher_f"
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
        let (d1, d2) = (self.df1, self.df2);
        if x == 0.0 {
            if d1 < 2.0 {
                return f64::INFINITY;
            }
            if d1 > 2.0 {
                return f64::NEG_INFINITY;
            }
            return self.ln_norm;
        }
        if x == f64::INFINITY {
            return f64::NEG_INFINITY;
        }
        self.ln_norm + (0.5 * d1 - 1.0) * x.ln() - 0.5 * (d1 + d2) * (d1 * x / d2).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        let y = self.df1 * x;
        reg_beta(0.5 * self.df1, 0.5 * self.df2, y / (y + self.df2))
    }

    fn sf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        let y = self.df1 * x;
        let w = y / (y + self.df2);
        if w < 0.5 {
            1.0 - reg_beta(0.5 * self.df1, 0.5 * self.df2, w)
        } else {
            reg_beta(0.5 * self.df2, 0.5 * self.df1, self.df2 / (self.df2 + y))
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        solver::quantile(|x| self.cdf(x), p, self.support(), &self.solver)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        solver::quantile_complement(|x| self.sf(x), q, self.support(), &self.solver)
    }

    fn mean(&self) -> f64 {
        let d2 = self.df2;
        if d2 > 2.0 { d2 / (d2 - 2.0) } else { f64::NAN }
    }

    fn variance(&self) -> f64 {
        let (d1, d2) = (self.df1, self.df2);
        if d2 <= 2.0 {
            return f64::NAN;
        }
        if d2 <= 4.0 {
            return f64::INFINITY;
        }
        2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0).powi(2) * (d2 - 4.0))
    }

    fn mode(&self) -> f64 {
        let (d1, d2) = (self.df1, self.df2);
        if d1 <= 2.0 {
            return f64::NAN;
        }
        d2 * (d1 - 2.0) / (d1 * (d2 + 2.0))
    }

    fn skewness(&self) -> f64 {
        let (d1, d2) = (self.df1, self.df2);
        if d2 <= 6.0 {
            return f64::NAN;
        }
        (2.0 * d1 + d2 - 2.0) * (8.0 * (d2 - 4.0)).sqrt()
            / ((d2 - 6.0) * (d1 * (d1 + d2 - 2.0)).sqrt())
    }

    fn kurtosis_excess(&self) -> f64 {
        let (d1, d2) = (self.df1, self.df2);
        if d2 <= 8.0 {
            return f64::NAN;
        }
        let num = d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0) + (d2 - 4.0) * (d2 - 2.0).powi(2);
        12.0 * num / (d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0))
    }
}
