//! Quantile solver for families without a closed-form inverse.
//!
//! Bracket expansion from the support bounds followed by bisection.
//! Bisection only needs monotonicity, so it stays correct at support edges
//! and in tails where a Newton step would overshoot. Brackets spanning many
//! orders of magnitude on one side of zero are split geometrically, so a
//! quantile near a zero lower bound resolves down to subnormals.

use sfb_core::SolverConfig;

use crate::math::is_probability;

/// Solve `f(x) = target` for non-decreasing `f` on `[lower, upper]`.
///
/// Unbounded sides are bracketed by doubling; if a bracket runs off to
/// infinity that infinity is returned.
pub fn invert_increasing<F>(f: F, target: f64, lower: f64, upper: f64, cfg: &SolverConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    if target.is_nan() || lower.is_nan() || upper.is_nan() {
        return f64::NAN;
    }

    let mut lo = if lower.is_finite() { lower } else { upper.min(0.0) - 1.0 };
    let mut hi = if upper.is_finite() { upper } else { lo.max(0.0) + 1.0 };

    let mut steps = 0usize;
    if !lower.is_finite() {
        let mut width = hi - lo;
        while f(lo) > target && steps < cfg.max_bracket_steps {
            hi = lo;
            width *= 2.0;
            lo = hi - width;
            steps += 1;
        }
    }
    if !upper.is_finite() {
        let mut width = hi - lo;
        while f(hi) < target && steps < cfg.max_bracket_steps {
            lo = hi;
            width *= 2.0;
            hi = lo + width;
            steps += 1;
        }
    }
    if !lo.is_finite() {
        return lo;
    }
    if !hi.is_finite() {
        return hi;
    }

    if lo == 0.0 && hi > 0.0 {
        // Smallest positive float: below it only zero remains.
        let tiny = f64::from_bits(1);
        if f(tiny) >= target {
            return tiny;
        }
        lo = tiny;
    }

    for _ in 0..cfg.max_iter {
        let mid = split(lo, hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if f(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= cfg.rel_tol * lo.abs().max(hi.abs()) {
            break;
        }
    }
    split(lo, hi)
}

/// Bisection point of `[lo, hi]`: geometric when both ends share a sign and
/// differ by more than a factor of four, arithmetic otherwise.
#[inline]
fn split(lo: f64, hi: f64) -> f64 {
    if lo > 0.0 && hi > 4.0 * lo {
        lo.sqrt() * hi.sqrt()
    } else if hi < 0.0 && lo < 4.0 * hi {
        -((-lo).sqrt() * (-hi).sqrt())
    } else {
        0.5 * lo + 0.5 * hi
    }
}

/// Quantile of a distribution with the given `cdf` and closed support.
///
/// NaN for `p` outside `[0, 1]`; the support bounds for `p = 0` and `p = 1`.
pub fn quantile<F>(cdf: F, p: f64, support: (f64, f64), cfg: &SolverConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    if !is_probability(p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return support.0;
    }
    if p == 1.0 {
        return support.1;
    }
    invert_increasing(cdf, p, support.0, support.1, cfg)
}

/// Complementary quantile: `x` with `sf(x) = q`.
pub fn quantile_complement<F>(sf: F, q: f64, support: (f64, f64), cfg: &SolverConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    if !is_probability(q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return support.1;
    }
    if q == 1.0 {
        return support.0;
    }
    invert_increasing(|x| -sf(x), -q, support.0, support.1, cfg)
}
