use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_filter::{ComplexFftEngine, FilterConfig, SpectralFilter};
use std::f64::consts::PI;

/// Two tones plus an offset and a little deterministic jitter
fn test_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            1.5 + 3.0 * (2.0 * PI * 17.0 * t).sin()
                + 0.8 * (2.0 * PI * 61.0 * t).cos()
                + 0.01 * ((i * 7919) % 101) as f64
        })
        .collect()
}

fn bench_single_peak(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_peak");
    let filter = SpectralFilter::default();

    for n in [1024usize, 4096, 16384, 10007] {
        let signal = test_signal(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, s| {
            b.iter(|| filter.filter_single_peak(black_box(s)))
        });
    }
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let filter = SpectralFilter::default();
    let signal = test_signal(8192);

    for k in [1usize, 16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| filter.filter_top_k(black_box(&signal), k))
        });
    }
    group.finish();
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let signal = test_signal(4096);
    let real = SpectralFilter::default();
    let complex = SpectralFilter::with_engine(FilterConfig::default(), ComplexFftEngine);

    group.bench_function("realfft", |b| b.iter(|| real.filter_top_k(black_box(&signal), 8)));
    group.bench_function("rustfft", |b| b.iter(|| complex.filter_top_k(black_box(&signal), 8)));
    group.finish();
}

criterion_group!(benches, bench_single_peak, bench_top_k, bench_engines);
criterion_main!(benches);
