use criterion::{Criterion, criterion_group, criterion_main};
use sfb_core::{Reduced, Standard, named};
use sfb_dispatch::construct;
use std::hint::black_box;

fn bench_dispatch(c: &mut Criterion) {
    let params = named(&[("k", 2.0), ("theta", 1.0)]);
    c.bench_function("construct_gamma", |b| {
        b.iter(|| black_box(construct::<Standard>(black_box("gamma"), &params).is_ok()))
    });

    let table = construct::<Standard>("gamma", &params).unwrap();
    let direct = sfb_prob::Gamma::new(2.0, 1.0).unwrap();
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 + 1e-3).collect();

    c.bench_function("table_density_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += table.density(x).unwrap_or(0.0);
            }
            black_box(acc)
        })
    });

    c.bench_function("direct_density_10k", |b| {
        use sfb_core::ContinuousUnivariate;
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += direct.pdf(x);
            }
            black_box(acc)
        })
    });

    let reduced = construct::<Reduced>("student_t", &named(&[("v", 5.0f32)])).unwrap();
    let ps: Vec<f32> = (0..1_000).map(|i| ((i as f32) + 0.5) / 1_000.0).collect();
    c.bench_function("reduced_student_t_quantile_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &p in &ps {
                acc += reduced.quantile(p).unwrap_or(0.0);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
