//! `#[repr(C)]` types shared with C callers.
//!
//! The table layout is the same for every family and every precision: a
//! context pointer followed by nineteen nullable function pointers in slot
//! order. A null slot means the family does not provide that operation.

use std::ffi::{c_char, c_void};
use std::ptr;

/// One named construction parameter.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfbParam<T> {
    /// NUL-terminated parameter name.
    pub name: *const c_char,
    /// Parameter value.
    pub value: T,
}

/// Closed support interval returned by the `support` slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SfbRange<T> {
    /// Lower bound (may be `-inf`).
    pub lower: T,
    /// Upper bound (may be `+inf`).
    pub upper: T,
}

/// Pointwise query: `(context, x) -> value`.
pub type PointwiseFn<T> = unsafe extern "C" fn(*const c_void, T) -> T;
/// Descriptive query: `(context) -> value`.
pub type DescribeFn<T> = unsafe extern "C" fn(*const c_void) -> T;
/// Support query: `(context) -> range`.
pub type SupportFn<T> = unsafe extern "C" fn(*const c_void) -> SfbRange<T>;
/// Destroys the context.
pub type ReleaseFn = unsafe extern "C" fn(*mut c_void);

/// Capability table handed to C.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfbTable<T> {
    /// Opaque adapter state; pass it as the first argument of every slot.
    pub context: *mut c_void,
    /// Probability density.
    pub density: Option<PointwiseFn<T>>,
    /// Log-density.
    pub ln_density: Option<PointwiseFn<T>>,
    /// Cumulative probability.
    pub cdf: Option<PointwiseFn<T>>,
    /// Survival probability.
    pub survival: Option<PointwiseFn<T>>,
    /// Hazard.
    pub hazard: Option<PointwiseFn<T>>,
    /// Cumulative hazard.
    pub cumulative_hazard: Option<PointwiseFn<T>>,
    /// Quantile.
    pub quantile: Option<PointwiseFn<T>>,
    /// Complementary quantile.
    pub quantile_complement: Option<PointwiseFn<T>>,
    /// Support range.
    pub support: Option<SupportFn<T>>,
    /// Mean.
    pub mean: Option<DescribeFn<T>>,
    /// Variance.
    pub variance: Option<DescribeFn<T>>,
    /// Standard deviation.
    pub std_dev: Option<DescribeFn<T>>,
    /// Mode.
    pub mode: Option<DescribeFn<T>>,
    /// Median.
    pub median: Option<DescribeFn<T>>,
    /// Skewness.
    pub skewness: Option<DescribeFn<T>>,
    /// Kurtosis.
    pub kurtosis: Option<DescribeFn<T>>,
    /// Excess kurtosis.
    pub kurtosis_excess: Option<DescribeFn<T>>,
    /// Entropy.
    pub entropy: Option<DescribeFn<T>>,
    /// Destroys `context`. Call at most once, then discard the table.
    pub release: Option<ReleaseFn>,
}

impl<T> SfbTable<T> {
    /// The empty table: null context, every slot null.
    pub const EMPTY: SfbTable<T> = SfbTable {
        context: ptr::null_mut(),
        density: None,
        ln_density: None,
        cdf: None,
        survival: None,
        hazard: None,
        cumulative_hazard: None,
        quantile: None,
        quantile_complement: None,
        support: None,
        mean: None,
        variance: None,
        std_dev: None,
        mode: None,
        median: None,
        skewness: None,
        kurtosis: None,
        kurtosis_excess: None,
        entropy: None,
        release: None,
    };

    /// `true` if the table holds no context and no slot.
    pub fn is_empty(&self) -> bool {
        self.context.is_null()
            && self.density.is_none()
            && self.ln_density.is_none()
            && self.cdf.is_none()
            && self.survival.is_none()
            && self.hazard.is_none()
            && self.cumulative_hazard.is_none()
            && self.quantile.is_none()
            && self.quantile_complement.is_none()
            && self.support.is_none()
            && self.mean.is_none()
            && self.variance.is_none()
            && self.std_dev.is_none()
            && self.mode.is_none()
            && self.median.is_none()
            && self.skewness.is_none()
            && self.kurtosis.is_none()
            && self.kurtosis_excess.is_none()
            && self.entropy.is_none()
            && self.release.is_none()
    }
}

/// `float` parameter.
pub type SfbParamF32 = SfbParam<f32>;
/// `double` parameter.
pub type SfbParamF64 = SfbParam<f64>;
/// Extended-precision parameter, carried as `double`.
pub type SfbParamExt = SfbParam<f64>;

/// `float` table.
pub type SfbTableF32 = SfbTable<f32>;
/// `double` table.
pub type SfbTableF64 = SfbTable<f64>;
/// Extended-precision table, carried as `double`.
pub type SfbTableExt = SfbTable<f64>;
