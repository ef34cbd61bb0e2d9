//! Normal distribution adapter.

use std::f64::consts::SQRT_2;

use sfb_core::{ContinuousUnivariate, Error, Result};

use crate::math::{
    LN_SQRT_2PI, erfc_inv, is_probability, ln_std_normal_sf, std_normal_cdf, std_normal_sf,
};

/// Normal distribution `N(mean, sd)`.
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    mean: f64,
    sd: f64,
}

impl Normal {
    /// Create a Normal(`mean`, `sd`) adapter.
    pub fn new(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::Validation(format!("mean must be finite, got {}", mean)));
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(Error::Validation(format!("sd must be finite and > 0, got {}", sd)));
        }
        Ok(Self { mean, sd })
    }

    /// Create an adapter from optional parameters, defaulting to `N(0, 1)`.
    pub fn with_defaults(mean: Option<f64>, sd: Option<f64>) -> Result<Self> {
        Self::new(mean.unwrap_or(0.0), sd.unwrap_or(1.0))
    }

    #[inline]
    fn z(&self, x: f64) -> f64 {
        (x - self.mean) / self.sd
    }
}

impl ContinuousUnivariate for Normal {
    fn family(&self) -> &'static str {
        "normal"
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// `log p(x) = -0.5 * ((x-mean)/sd)^2 - ln(sd) - ln(sqrt(2π))`
    fn ln_pdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        -0.5 * z * z - self.sd.ln() - LN_SQRT_2PI
    }

    fn cdf(&self, x: f64) -> f64 {
        std_normal_cdf(self.z(x))
    }

    fn sf(&self, x: f64) -> f64 {
        std_normal_sf(self.z(x))
    }

    fn ln_sf(&self, x: f64) -> f64 {
        ln_std_normal_sf(self.z(x))
    }

    fn quantile(&self, p: f64) -> f64 {
        if !is_probability(p) {
            return f64::NAN;
        }
        if p == 0.0 {
            return f64::NEG_INFINITY;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }
        self.mean - self.sd * SQRT_2 * erfc_inv(2.0 * p)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        if !is_probability(q) {
            return f64::NAN;
        }
        if q == 0.0 {
            return f64::INFINITY;
        }
        if q == 1.0 {
            return f64::NEG_INFINITY;
        }
        self.mean + self.sd * SQRT_2 * erfc_inv(2.0 * q)
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.sd * self.sd
    }

    fn std_dev(&self) -> f64 {
        self.sd
    }

    fn mode(&self) -> f64 {
        self.mean
    }

    fn median(&self) -> f64 {
        self.mean
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis_excess(&self) -> f64 {
        0.0
    }

    fn entropy(&self) -> f64 {
        0.5 + LN_SQRT_2PI + self.sd.ln()
    }
}
