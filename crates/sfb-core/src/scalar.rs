//! [`Real`] trait: abstraction over the floating-point widths a capability
//! table can carry (`f32`, `f64`).
//!
//! Adapters always evaluate in `f64`; `Real` is only the conversion seam at the
//! edge of the dispatch layer, so the registry and validation logic are written
//! once and reused for every precision.

use std::fmt::{Debug, Display};

/// A floating-point value type carried through a capability table.
pub trait Real: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Not-a-number in this width (domain-error sentinel).
    const NAN: Self;

    /// Narrow (or pass through) an `f64` result.
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64` for evaluation.
    fn to_f64(self) -> f64;

    /// `true` if the value is NaN.
    fn is_nan(self) -> bool;
}

// --- f32 implementation ---

impl Real for f32 {
    const NAN: Self = f32::NAN;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

// --- f64 implementation ---

impl Real for f64 {
    const NAN: Self = f64::NAN;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}
