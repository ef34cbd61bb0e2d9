//! Function-pointer trampolines behind the C table slots.
//!
//! The context pointer of a C table is a leaked `Box<CapabilityTable<P>>`.
//! Every trampoline is monomorphized per precision and per slot, and forwards
//! to the corresponding [`CapabilityTable`] accessor. A panic cannot unwind
//! through `extern "C"`, so each query is run under `catch_unwind` and a
//! caught panic reads as NaN.

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

use sfb_core::{Precision, Real};
use sfb_dispatch::{CapabilityTable, Slot};

use crate::layout::{DescribeFn, PointwiseFn, ReleaseFn, SfbRange, SfbTable, SupportFn};

/// # Safety
/// `ctx` must be a live context produced by [`into_c_table`] for precision `P`.
unsafe fn table_ref<'a, P: Precision>(ctx: *const c_void) -> &'a CapabilityTable<P> {
    unsafe { &*(ctx as *const CapabilityTable<P>) }
}

/// Run a query, logging and absorbing a panic as `None`.
fn guarded<T>(slot: Slot, query: impl FnOnce() -> Option<T>) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(query)) {
        Ok(value) => value,
        Err(_) => {
            log::error!("panic in {} slot; returning NaN", slot);
            None
        }
    }
}

unsafe extern "C" fn pointwise<P: Precision, const SLOT: usize>(
    ctx: *const c_void,
    x: P::Value,
) -> P::Value {
    let table = unsafe { table_ref::<P>(ctx) };
    let slot = Slot::ALL[SLOT];
    guarded(slot, || table.call(slot, x)).unwrap_or(P::Value::NAN)
}

unsafe extern "C" fn describe<P: Precision, const SLOT: usize>(ctx: *const c_void) -> P::Value {
    let table = unsafe { table_ref::<P>(ctx) };
    let slot = Slot::ALL[SLOT];
    guarded(slot, || table.describe(slot)).unwrap_or(P::Value::NAN)
}

unsafe extern "C" fn support<P: Precision>(ctx: *const c_void) -> SfbRange<P::Value> {
    let table = unsafe { table_ref::<P>(ctx) };
    let (lower, upper) =
        guarded(Slot::Support, || table.support()).unwrap_or((P::Value::NAN, P::Value::NAN));
    SfbRange { lower, upper }
}

unsafe extern "C" fn release<P: Precision>(ctx: *mut c_void) {
    if ctx.is_null() {
        return;
    }
    let table = unsafe { Box::from_raw(ctx as *mut CapabilityTable<P>) };
    let _ = guarded(Slot::Release, || {
        table.release();
        Some(())
    });
}

fn slot_if<F>(present: bool, f: F) -> Option<F> {
    if present { Some(f) } else { None }
}

/// Move `table` behind a C table, filling exactly the slots the family provides.
pub(crate) fn into_c_table<P: Precision>(table: CapabilityTable<P>) -> SfbTable<P::Value> {
    let slots = table.slots();
    let q = |s: Slot, f: PointwiseFn<P::Value>| slot_if(slots.has(s), f);
    let d = |s: Slot, f: DescribeFn<P::Value>| slot_if(slots.has(s), f);

    SfbTable {
        density: q(Slot::Density, pointwise::<P, { Slot::Density.index() }>),
        ln_density: q(Slot::LnDensity, pointwise::<P, { Slot::LnDensity.index() }>),
        cdf: q(Slot::Cdf, pointwise::<P, { Slot::Cdf.index() }>),
        survival: q(Slot::Survival, pointwise::<P, { Slot::Survival.index() }>),
        hazard: q(Slot::Hazard, pointwise::<P, { Slot::Hazard.index() }>),
        cumulative_hazard: q(
            Slot::CumulativeHazard,
            pointwise::<P, { Slot::CumulativeHazard.index() }>,
        ),
        quantile: q(Slot::Quantile, pointwise::<P, { Slot::Quantile.index() }>),
        quantile_complement: q(
            Slot::QuantileComplement,
            pointwise::<P, { Slot::QuantileComplement.index() }>,
        ),
        support: slot_if(slots.has(Slot::Support), support::<P> as SupportFn<P::Value>),
        mean: d(Slot::Mean, describe::<P, { Slot::Mean.index() }>),
        variance: d(Slot::Variance, describe::<P, { Slot::Variance.index() }>),
        std_dev: d(Slot::StdDev, describe::<P, { Slot::StdDev.index() }>),
        mode: d(Slot::Mode, describe::<P, { Slot::Mode.index() }>),
        median: d(Slot::Median, describe::<P, { Slot::Median.index() }>),
        skewness: d(Slot::Skewness, describe::<P, { Slot::Skewness.index() }>),
        kurtosis: d(Slot::Kurtosis, describe::<P, { Slot::Kurtosis.index() }>),
        kurtosis_excess: d(Slot::KurtosisExcess, describe::<P, { Slot::KurtosisExcess.index() }>),
        entropy: d(Slot::Entropy, describe::<P, { Slot::Entropy.index() }>),
        release: slot_if(slots.has(Slot::Release), release::<P> as ReleaseFn),
        context: Box::into_raw(Box::new(table)) as *mut c_void,
    }
}
