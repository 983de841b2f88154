// ============================================================================
// Decimal Benchmarks
// Parsing, arithmetic, division policy, and aggregate throughput
// ============================================================================

use candec::prelude::*;
use candec::{bulk, stats};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_literal_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_parsing");

    group.bench_function("plain", |b| {
        b.iter(|| black_box("1234.5678").parse::<Deci>().unwrap())
    });
    group.bench_function("grouped", |b| {
        b.iter(|| black_box("1.234.567,89").parse::<Deci>().unwrap())
    });
    group.bench_function("trailing_zeros", |b| {
        b.iter(|| black_box("1.23000000000000").parse::<Deci>().unwrap())
    });

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a: Deci = "12345.6789".parse().unwrap();
    let b_value: Deci = "0.0001234".parse().unwrap();

    group.bench_function("add_chain", |b| {
        b.iter(|| {
            let mut total = Deci::zero();
            for _ in 0..100 {
                total = &total + black_box(&a);
            }
            total
        })
    });
    group.bench_function("mul_chain", |b| {
        b.iter(|| {
            let mut total = Deci::one();
            for _ in 0..20 {
                total = &total * black_box(&b_value);
            }
            total
        })
    });

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");
    let dividend: Deci = "1".parse().unwrap();
    let divisor: Deci = "3".parse().unwrap();

    group.bench_function("policy_default_20_digits", |b| {
        b.iter(|| dividend.checked_div(black_box(&divisor)).unwrap())
    });
    group.bench_function("explicit_scale_5", |b| {
        b.iter(|| {
            dividend
                .divide(black_box(&divisor), 5, RoundingMode::HalfUp)
                .unwrap()
        })
    });

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let two: Deci = "2".parse().unwrap();

    c.bench_function("sqrt_precision_10", |b| {
        b.iter(|| black_box(&two).sqrt(DEFAULT_SQRT_PRECISION).unwrap())
    });
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");
    let values: Vec<Deci> = (1..=1000).map(Deci::from).collect();

    group.bench_function("mean_1000", |b| {
        b.iter(|| stats::mean(black_box(&values)).unwrap())
    });
    group.bench_function("sample_variance_1000", |b| {
        b.iter(|| stats::variance(black_box(&values), VarianceKind::Sample).unwrap())
    });
    group.bench_function("cumulative_sum_1000", |b| {
        b.iter(|| bulk::cumulative_sum(black_box(&values)))
    });
    group.bench_function("moving_average_window_20", |b| {
        b.iter(|| bulk::moving_average(black_box(&values), 20))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_literal_parsing,
    bench_arithmetic,
    bench_division,
    bench_sqrt,
    bench_aggregates
);
criterion_main!(benches);
