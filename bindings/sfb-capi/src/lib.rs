//! # sfb-capi
//!
//! C ABI for SFBridge.
//!
//! ```c
//! SfbParamF64 params[] = {{"k", 2.0}, {"theta", 1.0}};
//! SfbTableF64 t;
//! if (sfb_construct_f64("gamma", params, 2, &t)) {
//!     double m = t.quantile(t.context, 0.5);
//!     sfb_table_release_f64(&t);
//! }
//! ```
//!
//! Construction never lets an error or a panic cross the boundary: on failure
//! the output table is left empty (null context, every slot null) and `false`
//! is returned. The reason is logged at `debug` through the `log` facade.
//!
//! Extended-precision entry points carry values as `double`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// `#[repr(C)]` parameter, range and table types.
pub mod layout;
mod slots;

use std::ffi::{CStr, CString, c_char};
use std::panic;
use std::slice;
use std::sync::OnceLock;

use sfb_core::{Extended, NamedParam, Precision, Reduced, Standard};

pub use layout::{
    SfbParam, SfbParamExt, SfbParamF32, SfbParamF64, SfbRange, SfbTable, SfbTableExt,
    SfbTableF32, SfbTableF64,
};

/// # Safety
/// Same contract as the exported `sfb_construct_*` functions.
unsafe fn construct_into<P: Precision>(
    name: *const c_char,
    params: *const SfbParam<P::Value>,
    n_params: usize,
    out: *mut SfbTable<P::Value>,
) -> bool {
    if out.is_null() {
        return false;
    }
    unsafe { out.write(SfbTable::EMPTY) };

    if name.is_null() || (params.is_null() && n_params > 0) {
        log::debug!("sfb_construct ({}): null argument", P::KIND);
        return false;
    }
    let Ok(name) = unsafe { CStr::from_ptr(name) }.to_str() else {
        log::debug!("sfb_construct ({}): family name is not UTF-8", P::KIND);
        return false;
    };

    let raw: &[SfbParam<P::Value>] =
        if n_params == 0 { &[] } else { unsafe { slice::from_raw_parts(params, n_params) } };
    let mut named = Vec::with_capacity(raw.len());
    for p in raw {
        if p.name.is_null() {
            log::debug!("sfb_construct {:?} ({}): null parameter name", name, P::KIND);
            return false;
        }
        let Ok(pname) = unsafe { CStr::from_ptr(p.name) }.to_str() else {
            log::debug!("sfb_construct {:?} ({}): parameter name is not UTF-8", name, P::KIND);
            return false;
        };
        named.push(NamedParam::new(pname, p.value));
    }

    let attempt = panic::AssertUnwindSafe(|| sfb_dispatch::construct::<P>(name, &named));
    match panic::catch_unwind(attempt) {
        Ok(Ok(table)) => {
            unsafe { out.write(slots::into_c_table(table)) };
            true
        }
        // Already logged by the factory.
        Ok(Err(_)) => false,
        Err(_) => {
            log::error!("sfb_construct {:?} ({}): panic during construction", name, P::KIND);
            false
        }
    }
}

/// # Safety
/// Same contract as the exported `sfb_table_release_*` functions.
unsafe fn release_table<T>(table: *mut SfbTable<T>) {
    if table.is_null() {
        return;
    }
    let t = unsafe { table.read() };
    if let Some(release) = t.release {
        unsafe { release(t.context) };
    }
    unsafe { table.write(SfbTable::EMPTY) };
}

/// Construct a `float` table for `name`.
///
/// Returns `true` and fills `out` on success; returns `false` and writes the
/// empty table on any failure (unknown family, bad parameters, null pointers).
///
/// # Safety
///
/// - `name` must be null or a valid NUL-terminated string.
/// - `params` must point to `n_params` readable elements (or be null when
///   `n_params == 0`); each element's `name` must be null or NUL-terminated.
/// - `out` must be null or valid for writes. Any table previously stored in
///   `out` is overwritten without being released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_construct_f32(
    name: *const c_char,
    params: *const SfbParamF32,
    n_params: usize,
    out: *mut SfbTableF32,
) -> bool {
    unsafe { construct_into::<Reduced>(name, params, n_params, out) }
}

/// Construct a `double` table for `name`.
///
/// # Safety
///
/// See [`sfb_construct_f32`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_construct_f64(
    name: *const c_char,
    params: *const SfbParamF64,
    n_params: usize,
    out: *mut SfbTableF64,
) -> bool {
    unsafe { construct_into::<Standard>(name, params, n_params, out) }
}

/// Construct an extended-precision table for `name`.
///
/// # Safety
///
/// See [`sfb_construct_f32`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_construct_ext(
    name: *const c_char,
    params: *const SfbParamExt,
    n_params: usize,
    out: *mut SfbTableExt,
) -> bool {
    unsafe { construct_into::<Extended>(name, params, n_params, out) }
}

/// Release a `float` table and reset it to the empty state.
///
/// Releasing an empty table is a no-op.
///
/// # Safety
///
/// `table` must be null or point to a table filled by [`sfb_construct_f32`]
/// (or to the empty table). Copies of the table must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_table_release_f32(table: *mut SfbTableF32) {
    unsafe { release_table(table) }
}

/// Release a `double` table and reset it to the empty state.
///
/// # Safety
///
/// See [`sfb_table_release_f32`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_table_release_f64(table: *mut SfbTableF64) {
    unsafe { release_table(table) }
}

/// Release an extended-precision table and reset it to the empty state.
///
/// # Safety
///
/// See [`sfb_table_release_f32`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sfb_table_release_ext(table: *mut SfbTableExt) {
    unsafe { release_table(table) }
}

fn family_names() -> &'static [CString] {
    static NAMES: OnceLock<Vec<CString>> = OnceLock::new();
    NAMES.get_or_init(|| {
        sfb_dispatch::families().iter().filter_map(|f| CString::new(f.name).ok()).collect()
    })
}

/// Number of registered families.
#[unsafe(no_mangle)]
pub extern "C" fn sfb_family_count() -> usize {
    family_names().len()
}

/// NUL-terminated name of family `index`, or null if out of range.
///
/// The string is static; do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn sfb_family_name(index: usize) -> *const c_char {
    family_names().get(index).map_or(std::ptr::null(), |s| s.as_ptr())
}
