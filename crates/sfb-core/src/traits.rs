//! Core traits for SFBridge
//!
//! [`ContinuousUnivariate`] is the contract between the dispatch layer and the
//! per-family backend adapters: the dispatch layer only ever holds adapters as
//! `Box<dyn ContinuousUnivariate>`, and never depends on a concrete family.

use std::fmt;

/// A univariate continuous distribution evaluated in `f64`.
///
/// Every method is a pure function of the adapter's immutable parameters.
/// Domain errors are reported as NaN (probability outside `[0, 1]`, argument
/// outside the closed support, moments that do not exist for the current
/// parameters); diverging moments are `+inf`.
pub trait ContinuousUnivariate: Send + Sync + fmt::Debug {
    /// Registry name of the family, e.g. `"gamma"`.
    fn family(&self) -> &'static str;

    /// Closed support `(lower, upper)`; either bound may be infinite.
    fn support(&self) -> (f64, f64);

    /// `true` if `x` lies in the closed support (NaN never does).
    fn in_support(&self, x: f64) -> bool {
        let (lo, hi) = self.support();
        x >= lo && x <= hi
    }

    /// Probability density.
    fn pdf(&self, x: f64) -> f64;

    /// Log density.
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative probability `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival probability `P(X > x)`.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Log survival probability.
    ///
    /// Override where `sf` underflows well inside the support.
    fn ln_sf(&self, x: f64) -> f64 {
        self.sf(x).ln()
    }

    /// Hazard `pdf / sf`, evaluated as `exp(ln_pdf - ln_sf)`.
    fn hazard(&self, x: f64) -> f64 {
        (self.ln_pdf(x) - self.ln_sf(x)).exp()
    }

    /// Cumulative hazard `-ln(sf)`.
    fn cumulative_hazard(&self, x: f64) -> f64 {
        -self.ln_sf(x)
    }

    /// Inverse of [`cdf`](Self::cdf).
    fn quantile(&self, p: f64) -> f64;

    /// Inverse of [`sf`](Self::sf).
    fn quantile_complement(&self, q: f64) -> f64;

    /// Mean.
    fn mean(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// Standard deviation.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Mode (NaN when not unique or undefined).
    fn mode(&self) -> f64 {
        f64::NAN
    }

    /// Median.
    fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Skewness.
    fn skewness(&self) -> f64;

    /// Kurtosis (not excess).
    fn kurtosis(&self) -> f64 {
        self.kurtosis_excess() + 3.0
    }

    /// Excess kurtosis.
    fn kurtosis_excess(&self) -> f64;

    /// Differential entropy in nats.
    fn entropy(&self) -> f64 {
        f64::NAN
    }
}
