#![no_main]

use libfuzzer_sys::fuzz_target;
use sfb_core::{NamedParam, Standard};
use sfb_dispatch::{Slot, construct, families};

const NAMES: &[&str] =
    &["k", "theta", "v", "df1", "df2", "x_min", "x_max", "mean", "sd", "lambda", "alpha", "beta"];

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the family; an out-of-range index feeds the raw tail as a name.
    let fams = families();
    let idx = data[0] as usize;
    let tail = &data[1..];
    let raw_name = String::from_utf8_lossy(tail).into_owned();
    let name = if idx < fams.len() * 4 { fams[idx % fams.len()].name } else { raw_name.as_str() };

    // Remaining bytes: repeated (name index, f64 little-endian) records.
    let params: Vec<NamedParam<'_, f64>> = tail
        .chunks_exact(9)
        .take(6)
        .map(|c| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&c[1..]);
            NamedParam::new(NAMES[c[0] as usize % NAMES.len()], f64::from_le_bytes(bytes))
        })
        .collect();

    let Ok(table) = construct::<Standard>(name, &params) else {
        return;
    };

    for p in [0.0, 1e-12, 0.25, 0.5, 0.75, 1.0 - 1e-12, 1.0, -0.5, f64::NAN] {
        for slot in [Slot::Cdf, Slot::Survival] {
            if let Some(y) = table.call(slot, p) {
                assert!(y.is_nan() || (0.0..=1.0).contains(&y), "{} {}({}) = {}", name, slot, p, y);
            }
        }
        let _ = table.quantile(p);
        let _ = table.quantile_complement(p);
        let _ = table.density(p);
        let _ = table.hazard(p);
    }
    for slot in Slot::ALL {
        let _ = table.describe(slot);
    }
    table.release();
});
