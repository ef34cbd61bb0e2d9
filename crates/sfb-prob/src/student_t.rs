//! Student-t distribution adapter.

use sfb_core::{ContinuousUnivariate, Error, Result, SolverConfig};

use crate::math::{
    LN_PI, LN_SQRT_2PI, digamma, ln_beta, ln_gamma, reg_beta, std_normal_cdf, std_normal_pdf,
};
use crate::solver;

/// Above this many degrees of freedom the incomplete beta loses accuracy to
/// cancellation between `ln Γ` terms near `v/2`, and the `1/v` normal
/// expansion is exact to well below `1e-12`.
const NORMAL_LIMIT_DOF: f64 = 1e6;

/// Above this the density constant uses the asymptotic `ln Γ` ratio.
const ASYMPTOTIC_NORM_DOF: f64 = 1e4;

/// Standard Student-t distribution with `dof` (v) degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    dof: f64,
    ln_norm: f64,
    solver: SolverConfig,
}

impl StudentT {
    /// Create a Student-t adapter with `dof > 0`.
    pub fn new(dof: f64) -> Result<Self> {
        if !dof.is_finite() || dof <= 0.0 {
            return Err(Error::Validation(format!("dof must be finite and > 0, got {}", dof)));
        }
        // The incomplete beta is taken at shape v/2, which must not round to zero.
        if 0.5 * dof == 0.0 {
            return Err(Error::Validation(format!("dof too small to halve, got {:e}", dof)));
        }
        let ln_norm = if dof > ASYMPTOTIC_NORM_DOF {
            // ln Γ(h + 1/2) - ln Γ(h) = ln(h)/2 - 1/(8h) + 1/(192h³) + O(h⁻⁵), h = v/2.
            -LN_SQRT_2PI - 0.25 / dof + 1.0 / (24.0 * dof * dof * dof)
        } else {
            ln_gamma(0.5 * (dof + 1.0)) - ln_gamma(0.5 * dof) - 0.5 * (dof.ln() + LN_PI)
        };
        Ok(Self { dof, ln_norm, solver: SolverConfig::default() })
    }

    /// Replace the quantile solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Degrees of freedom.
    pub fn dof(&self) -> f64 {
        self.dof
    }

    /// `F(x) = Φ(x) - φ(x)(x³ + x) / (4v) + O(v⁻²)`, evaluated on the lower tail.
    fn normal_limit_cdf(&self, x: f64) -> f64 {
        let t = -x.abs();
        let tail = std_normal_cdf(t) - std_normal_pdf(t) * (t * t * t + t) / (4.0 * self.dof);
        if x < 0.0 { tail } else { 1.0 - tail }
    }

    /// `x >= 0` with `sf(x) = q`, for `q` in `(0, 0.5]`.
    fn upper_tail_point(&self, q: f64) -> f64 {
        solver::invert_increasing(|x| -self.sf(x), -q, 0.0, f64::INFINITY, &self.solver)
    }
}

impl ContinuousUnivariate for StudentT {
    fn family(&self) -> &'static str {
        "student_t"
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x.is_infinite() {
            return f64::NEG_INFINITY;
        }
        self.ln_norm - 0.5 * (self.dof + 1.0) * (x * x / self.dof).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x == 0.0 {
            return 0.5;
        }
        if x.is_infinite() {
            return if x < 0.0 { 0.0 } else { 1.0 };
        }
        let v = self.dof;
        if v > NORMAL_LIMIT_DOF {
            return self.normal_limit_cdf(x);
        }
        let x2 = x * x;
        if x2 < v {
            // Central mass P(|T| < |x|) / 2; accurate near the centre.
            let half = 0.5 * reg_beta(0.5, 0.5 * v, x2 / (v + x2));
            if x < 0.0 { 0.5 - half } else { 0.5 + half }
        } else {
            // Tail mass P(T > |x|); accurate far out.
            let tail = 0.5 * reg_beta(0.5 * v, 0.5, v / (v + x2));
            if x < 0.0 { tail } else { 1.0 - tail }
        }
    }

    fn sf(&self, x: f64) -> f64 {
        self.cdf(-x)
    }

    fn quantile(&self, p: f64) -> f64 {
        if !crate::math::is_probability(p) {
            return f64::NAN;
        }
        if p == 0.0 {
            return f64::NEG_INFINITY;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }
        if p == 0.5 {
            return 0.0;
        }
        if p < 0.5 {
            -self.upper_tail_point(p)
        } else {
            // 1 - p is exact for p in [0.5, 1].
            self.upper_tail_point(1.0 - p)
        }
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        let x = self.quantile(q);
        if x == 0.0 { 0.0 } else { -x }
    }

    fn mean(&self) -> f64 {
        if self.dof > 1.0 { 0.0 } else { f64::NAN }
    }

    fn variance(&self) -> f64 {
        let v = self.dof;
        if v > 2.0 {
            v / (v - 2.0)
        } else if v > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        0.0
    }

    fn skewness(&self) -> f64 {
        if self.dof > 3.0 { 0.0 } else { f64::NAN }
    }

    fn kurtosis_excess(&self) -> f64 {
        let v = self.dof;
        if v > 4.0 {
            6.0 / (v - 4.0)
        } else if v > 2.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn entropy(&self) -> f64 {
        let v = self.dof;
        let h = 0.5 * (v + 1.0);
        h * (digamma(h) - digamma(0.5 * v)) + 0.5 * v.ln() + ln_beta(0.5 * v, 0.5)
    }
}
