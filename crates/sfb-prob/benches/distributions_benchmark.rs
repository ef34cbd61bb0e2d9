use criterion::{Criterion, criterion_group, criterion_main};
use sfb_core::ContinuousUnivariate;
use std::hint::black_box;

fn bench_adapters(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 + 1e-3).collect();
    let ps: Vec<f64> = (0..1_000).map(|i| ((i as f64) + 0.5) / 1_000.0).collect();

    let gamma = sfb_prob::Gamma::new(2.0, 1.0).unwrap();
    c.bench_function("gamma_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += gamma.pdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("gamma_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += gamma.cdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("gamma_quantile_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &ps {
                acc += gamma.quantile(p);
            }
            black_box(acc)
        })
    });

    let t = sfb_prob::StudentT::new(5.0).unwrap();
    c.bench_function("student_t_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += t.cdf(x - 5.0);
            }
            black_box(acc)
        })
    });

    c.bench_function("student_t_quantile_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &ps {
                acc += t.quantile(p);
            }
            black_box(acc)
        })
    });

    let normal = sfb_prob::Normal::new(0.0, 1.3).unwrap();
    c.bench_function("normal_quantile_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &ps {
                acc += normal.quantile(p);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_adapters);
criterion_main!(benches);
