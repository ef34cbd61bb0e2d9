//! Exponential distribution adapter.

use std::f64::consts::LN_2;

use sfb_core::{ContinuousUnivariate, Error, Result};

use crate::math::is_probability;

/// Exponential distribution with rate `lambda`.
///
/// Support: `x >= 0`.
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create an Exponential(`rate`) adapter.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::Validation(format!(
                "rate must be finite and > 0, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// Create an adapter from an optional rate, defaulting to 1.
    pub fn with_defaults(rate: Option<f64>) -> Result<Self> {
        Self::new(rate.unwrap_or(1.0))
    }
}

impl ContinuousUnivariate for Exponential {
    fn family(&self) -> &'static str {
        "exponential"
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn pdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        self.rate * (-self.rate * x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        self.rate.ln() - self.rate * x
    }

    fn cdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        -(-self.rate * x).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        (-self.rate * x).exp()
    }

    // Memoryless: constant hazard, no 0/0 far in the tail.
    fn hazard(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        self.rate
    }

    fn cumulative_hazard(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        self.rate * x
    }

    fn quantile(&self, p: f64) -> f64 {
        if !is_probability(p) {
            return f64::NAN;
        }
        -(-p).ln_1p() / self.rate
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        if !is_probability(q) {
            return f64::NAN;
        }
        if q == 1.0 {
            return 0.0;
        }
        -q.ln() / self.rate
    }

    fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        LN_2 / self.rate
    }

    fn skewness(&self) -> f64 {
        2.0
    }

    fn kurtosis_excess(&self) -> f64 {
        6.0
    }

    fn entropy(&self) -> f64 {
        1.0 - self.rate.ln()
    }
}
