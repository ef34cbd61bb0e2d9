//! Guarded special functions.
//!
//! `statrs` panics on arguments outside its documented domain (e.g. `x <= 0`
//! for the incomplete gamma, `x` outside `[0, 1]` for the incomplete beta, a
//! non-positive shape for either). The adapters evaluate at support boundaries
//! and at infinity routinely, so every call goes through these wrappers, which
//! resolve the boundary cases analytically, return NaN for invalid shapes and
//! only forward interior points through the `checked_*` entry points.

use statrs::function::beta::{checked_beta_reg, checked_ln_beta};
use statrs::function::erf::erfc;
use statrs::function::gamma::{checked_gamma_lr, checked_gamma_ur};

pub use statrs::function::erf::erfc_inv;
pub use statrs::function::gamma::{digamma, ln_gamma};

/// Natural log of π.
pub const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Natural log of `sqrt(2π)`.
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Euler–Mascheroni constant.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Below this `x` the lower incomplete gamma is summed here: `statrs` rounds
/// `x < 1e-15` to zero and underflows its prefactor for tiny shapes.
const GAMMA_SERIES_MAX_X: f64 = 1.0;

/// Above this `z` the normal upper tail is taken from its asymptotic series.
const NORMAL_ASYMPTOTIC_Z: f64 = 30.0;

const LENTZ_TINY: f64 = 1e-300;

#[inline]
fn valid_shape(a: f64) -> bool {
    a.is_finite() && a > 0.0
}

/// `ln B(a, b)`; NaN unless both shapes are finite and positive.
#[inline]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    if !valid_shape(a) || !valid_shape(b) {
        return f64::NAN;
    }
    checked_ln_beta(a, b).unwrap_or(f64::NAN)
}

/// Series `P(a, x) = x^a e^-x / Γ(a+1) · Σ x^n / ((a+1)…(a+n))`, in log space.
fn ln_gamma_lower_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut r = a;
    for _ in 0..200 {
        r += 1.0;
        term *= x / r;
        sum += term;
        if term <= sum * f64::EPSILON {
            break;
        }
    }
    a * x.ln() - x - ln_gamma(a + 1.0) + sum.ln()
}

/// Lentz continued fraction for `ln Q(a, x)`, valid for `x > a + 1`.
fn ln_gamma_upper_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / LENTZ_TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..400 {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = b + an / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() <= 4.0 * f64::EPSILON {
            break;
        }
    }
    a * x.ln() - x - ln_gamma(a) + h.ln()
}

/// Regularized lower incomplete gamma `P(a, x)`; NaN unless `a > 0`.
#[inline]
pub fn reg_gamma_lower(a: f64, x: f64) -> f64 {
    if x.is_nan() || !valid_shape(a) {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else if x < GAMMA_SERIES_MAX_X {
        ln_gamma_lower_series(a, x).exp().min(1.0)
    } else {
        checked_gamma_lr(a, x).unwrap_or(f64::NAN)
    }
}

/// Regularized upper incomplete gamma `Q(a, x)`; NaN unless `a > 0`.
#[inline]
pub fn reg_gamma_upper(a: f64, x: f64) -> f64 {
    if x.is_nan() || !valid_shape(a) {
        f64::NAN
    } else if x <= 0.0 {
        1.0
    } else if x == f64::INFINITY {
        0.0
    } else if x < GAMMA_SERIES_MAX_X {
        (-ln_gamma_lower_series(a, x).exp_m1()).max(0.0)
    } else {
        checked_gamma_ur(a, x).unwrap_or(f64::NAN)
    }
}

/// `ln Q(a, x)`, finite far into the tail where `Q` itself underflows.
pub fn ln_reg_gamma_upper(a: f64, x: f64) -> f64 {
    if x.is_nan() || !valid_shape(a) {
        f64::NAN
    } else if x > a + 1.0 && x.is_finite() {
        ln_gamma_upper_fraction(a, x)
    } else {
        reg_gamma_upper(a, x).ln()
    }
}

/// Regularized incomplete beta `I_x(a, b)`; NaN unless `a, b > 0`.
#[inline]
pub fn reg_beta(a: f64, b: f64, x: f64) -> f64 {
    if x.is_nan() || !valid_shape(a) || !valid_shape(b) {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
    }
}

/// Standard normal lower tail `Φ(z)`.
#[inline]
pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Standard normal upper tail `1 - Φ(z)` without cancellation.
#[inline]
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// Standard normal density `φ(z)`.
#[inline]
pub fn std_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z - LN_SQRT_2PI).exp()
}

/// `ln(1 - Φ(z))`, using the asymptotic tail series where `erfc` underflows.
pub fn ln_std_normal_sf(z: f64) -> f64 {
    if z.is_nan() || z < NORMAL_ASYMPTOTIC_Z {
        return std_normal_sf(z).ln();
    }
    let r = 1.0 / (z * z);
    let series = 1.0 - r * (1.0 - 3.0 * r * (1.0 - 5.0 * r * (1.0 - 7.0 * r)));
    -0.5 * z * z - z.ln() - LN_SQRT_2PI + series.ln()
}

/// `true` if `p` is a probability (`NaN` is not).
#[inline]
pub fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
