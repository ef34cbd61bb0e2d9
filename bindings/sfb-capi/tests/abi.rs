//! Drives the exported C entry points the way a C caller would.

use std::ffi::{CStr, CString};
use std::ptr;

use approx::assert_relative_eq;
use sfbridge::*;

fn params_f64(pairs: &[(&CStr, f64)]) -> Vec<SfbParamF64> {
    pairs.iter().map(|(n, v)| SfbParamF64 { name: n.as_ptr(), value: *v }).collect()
}

fn construct_f64(name: &CStr, params: &[SfbParamF64]) -> (bool, SfbTableF64) {
    let mut table = SfbTableF64::EMPTY;
    let ok = unsafe { sfb_construct_f64(name.as_ptr(), params.as_ptr(), params.len(), &mut table) };
    (ok, table)
}

#[test]
fn gamma_round_trip_and_release() {
    let params = params_f64(&[(c"k", 2.0), (c"theta", 1.0)]);
    let (ok, mut t) = construct_f64(c"gamma", &params);
    assert!(ok);
    assert!(!t.context.is_null());

    let quantile = t.quantile.unwrap();
    let cdf = t.cdf.unwrap();
    let x = unsafe { quantile(t.context, 0.5) };
    assert!((unsafe { cdf(t.context, x) } - 0.5).abs() < 1e-9);

    let range = unsafe { (t.support.unwrap())(t.context) };
    assert_eq!(range, SfbRange { lower: 0.0, upper: f64::INFINITY });

    unsafe { sfb_table_release_f64(&mut t) };
    assert!(t.is_empty());

    // Releasing the empty table again is harmless.
    unsafe { sfb_table_release_f64(&mut t) };
    assert!(t.is_empty());
}

#[test]
fn unknown_family_leaves_table_empty() {
    let params = params_f64(&[(c"k", 2.0), (c"theta", 1.0)]);
    let mut t = SfbTableF64::EMPTY;
    t.context = 0x1 as *mut _;
    let ok = unsafe {
        sfb_construct_f64(c"not_a_distribution".as_ptr(), params.as_ptr(), params.len(), &mut t)
    };
    assert!(!ok);
    assert!(t.is_empty());
}

#[test]
fn invalid_parameters_fail() {
    let (ok, t) = construct_f64(c"gamma", &params_f64(&[(c"k", 2.0)]));
    assert!(!ok && t.is_empty());

    let (ok, t) = construct_f64(c"gamma", &params_f64(&[(c"k", 2.0), (c"theta", 0.0)]));
    assert!(!ok && t.is_empty());

    let (ok, t) = construct_f64(c"gamma", &params_f64(&[(c"k", 2.0), (c"theta", -3.0)]));
    assert!(!ok && t.is_empty());
}

#[test]
fn null_arguments_fail() {
    let mut t = SfbTableF64::EMPTY;
    assert!(!unsafe { sfb_construct_f64(ptr::null(), ptr::null(), 0, &mut t) });
    assert!(t.is_empty());
    assert!(!unsafe { sfb_construct_f64(c"gamma".as_ptr(), ptr::null(), 2, &mut t) });
    assert!(!unsafe { sfb_construct_f64(c"arcsine".as_ptr(), ptr::null(), 0, ptr::null_mut()) });

    let bad = [SfbParamF64 { name: ptr::null(), value: 1.0 }];
    assert!(!unsafe { sfb_construct_f64(c"student_t".as_ptr(), bad.as_ptr(), 1, &mut t) });
    assert!(t.is_empty());

    unsafe { sfb_table_release_f64(ptr::null_mut()) };
}

#[test]
fn absent_slots_are_null() {
    let (ok, mut t) = construct_f64(c"fisher_f", &params_f64(&[(c"df1", 3.0), (c"df2", 9.0)]));
    assert!(ok);
    assert!(t.entropy.is_none());
    assert!(t.mean.is_some());
    unsafe { sfb_table_release_f64(&mut t) };

    let (ok, mut t) = construct_f64(c"arcsine", &[]);
    assert!(ok);
    assert!(t.mode.is_none());
    assert_relative_eq!(unsafe { (t.mean.unwrap())(t.context) }, 0.5);
    unsafe { sfb_table_release_f64(&mut t) };
}

#[test]
fn student_t_five() {
    let (ok, mut t) = construct_f64(c"student_t", &params_f64(&[(c"v", 5.0)]));
    assert!(ok);
    assert_eq!(unsafe { (t.mean.unwrap())(t.context) }, 0.0);
    assert_eq!(unsafe { (t.quantile.unwrap())(t.context, 0.5) }, 0.0);
    unsafe { sfb_table_release_f64(&mut t) };
}

#[test]
fn density_is_repeatable() {
    let (ok, mut t) = construct_f64(c"beta", &params_f64(&[(c"alpha", 2.0), (c"beta", 5.0)]));
    assert!(ok);
    let density = t.density.unwrap();
    let first = unsafe { density(t.context, 0.25) };
    for _ in 0..100 {
        assert_eq!(unsafe { density(t.context, 0.25) }.to_bits(), first.to_bits());
    }
    unsafe { sfb_table_release_f64(&mut t) };
}

#[test]
fn reduced_agrees_with_standard() {
    let p32 = [
        SfbParamF32 { name: c"k".as_ptr(), value: 2.0 },
        SfbParamF32 { name: c"theta".as_ptr(), value: 1.0 },
    ];
    let mut t32 = SfbTableF32::EMPTY;
    assert!(unsafe { sfb_construct_f32(c"gamma".as_ptr(), p32.as_ptr(), 2, &mut t32) });
    let (ok, mut t64) = construct_f64(c"gamma", &params_f64(&[(c"k", 2.0), (c"theta", 1.0)]));
    assert!(ok);

    for x in [0.1f32, 0.5, 1.0, 2.5, 7.0] {
        let a = unsafe { (t32.cdf.unwrap())(t32.context, x) };
        let b = unsafe { (t64.cdf.unwrap())(t64.context, f64::from(x)) };
        assert_relative_eq!(f64::from(a), b, max_relative = 1e-6);
    }

    unsafe { sfb_table_release_f32(&mut t32) };
    unsafe { sfb_table_release_f64(&mut t64) };
    assert!(t32.is_empty());
}

#[test]
fn extended_entry_points() {
    let params = [SfbParamExt { name: c"v".as_ptr(), value: 4.0 }];
    let mut t = SfbTableExt::EMPTY;
    assert!(unsafe { sfb_construct_ext(c"chi_squared".as_ptr(), params.as_ptr(), 1, &mut t) });
    assert_relative_eq!(unsafe { (t.variance.unwrap())(t.context) }, 8.0);
    unsafe { sfb_table_release_ext(&mut t) };
    assert!(t.is_empty());
}

#[test]
fn subnormal_degrees_of_freedom() {
    // Positive, but halving rounds to zero: rejected at construction.
    let (ok, t) = construct_f64(c"student_t", &params_f64(&[(c"v", 5e-324)]));
    assert!(!ok && t.is_empty());
    let (ok, t) = construct_f64(c"fisher_f", &params_f64(&[(c"df1", 5e-324), (c"df2", 3.0)]));
    assert!(!ok && t.is_empty());

    // Still subnormal but halvable: every query returns instead of aborting.
    let (ok, mut t) = construct_f64(c"student_t", &params_f64(&[(c"v", 1e-310)]));
    assert!(ok);
    for x in [-1.0, 0.0, 1.0] {
        assert!(!unsafe { (t.cdf.unwrap())(t.context, x) }.is_nan());
        let _ = unsafe { (t.hazard.unwrap())(t.context, x) };
    }
    let _ = unsafe { (t.quantile.unwrap())(t.context, 0.9) };
    let _ = unsafe { (t.entropy.unwrap())(t.context) };
    unsafe { sfb_table_release_f64(&mut t) };
}

#[test]
fn family_listing() {
    let n = sfb_family_count();
    assert!(n >= 2);
    let names: Vec<String> = (0..n)
        .map(|i| unsafe { CStr::from_ptr(sfb_family_name(i)) }.to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|s| s == "gamma"));
    assert!(names.iter().any(|s| s == "student_t"));
    assert!(sfb_family_name(n).is_null());

    // Owned CStrings work too.
    let owned = CString::new("normal").unwrap();
    let (ok, mut t) = construct_f64(&owned, &[]);
    assert!(ok);
    unsafe { sfb_table_release_f64(&mut t) };
}
