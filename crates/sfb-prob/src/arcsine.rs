//! Arcsine distribution adapter.
//!
//! Closed-form everywhere, including the quantile:
//! `F(x) = (2/π) asin(sqrt((x - a) / (b - a)))`.

use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, PI};

use sfb_core::{ContinuousUnivariate, Error, Result};

use crate::math::{LN_PI, is_probability};

/// Arcsine distribution on `[x_min, x_max]`.
///
/// Bimodal (density diverges at both ends), so there is no mode.
#[derive(Debug, Clone, Copy)]
pub struct Arcsine {
    x_min: f64,
    x_max: f64,
}

impl Arcsine {
    /// Default lower bound when `x_min` is not supplied.
    pub const DEFAULT_X_MIN: f64 = 0.0;
    /// Default upper bound when `x_max` is not supplied.
    pub const DEFAULT_X_MAX: f64 = 1.0;

    /// Create an arcsine adapter on `[x_min, x_max]`.
    pub fn new(x_min: f64, x_max: f64) -> Result<Self> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(Error::Validation(format!(
                "x_min and x_max must be finite, got [{}, {}]",
                x_min, x_max
            )));
        }
        if x_min >= x_max {
            return Err(Error::Validation(format!(
                "x_min must be < x_max, got [{}, {}]",
                x_min, x_max
            )));
        }
        Ok(Self { x_min, x_max })
    }

    /// Create an adapter from optional bounds, defaulting to `[0, 1]`.
    pub fn with_defaults(x_min: Option<f64>, x_max: Option<f64>) -> Result<Self> {
        Self::new(x_min.unwrap_or(Self::DEFAULT_X_MIN), x_max.unwrap_or(Self::DEFAULT_X_MAX))
    }

    fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl ContinuousUnivariate for Arcsine {
    fn family(&self) -> &'static str {
        "arcsine"
    }

    fn support(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    fn pdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        if x == self.x_min || x == self.x_max {
            return f64::INFINITY;
        }
        1.0 / (PI * ((x - self.x_min) * (self.x_max - x)).sqrt())
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        -LN_PI - 0.5 * ((x - self.x_min).ln() + (self.x_max - x).ln())
    }

    fn cdf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        FRAC_2_PI * ((x - self.x_min) / self.width()).sqrt().asin()
    }

    fn sf(&self, x: f64) -> f64 {
        if !self.in_support(x) {
            return f64::NAN;
        }
        FRAC_2_PI * ((self.x_max - x) / self.width()).sqrt().asin()
    }

    fn quantile(&self, p: f64) -> f64 {
        if !is_probability(p) {
            return f64::NAN;
        }
        if p == 1.0 {
            return self.x_max;
        }
        let s = (FRAC_PI_2 * p).sin();
        self.x_min + self.width() * s * s
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        if !is_probability(q) {
            return f64::NAN;
        }
        if q == 1.0 {
            return self.x_min;
        }
        let s = (FRAC_PI_2 * q).sin();
        self.x_max - self.width() * s * s
    }

    fn mean(&self) -> f64 {
        0.5 * (self.x_min + self.x_max)
    }

    fn variance(&self) -> f64 {
        self.width() * self.width() / 8.0
    }

    fn median(&self) -> f64 {
        self.mean()
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis_excess(&self) -> f64 {
        -1.5
    }

    fn entropy(&self) -> f64 {
        (PI * self.width() / 4.0).ln()
    }
}
