// ============================================================================
// Numeric Guard Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Free functions - Type check + guard + division on boundary values
// 2. Calculator - Same operations with event reporting enabled/disabled
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_guard::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn benchmark_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");

    let cases = [
        ("int_int", Value::Int(10), Value::Int(3)),
        ("float_float", Value::Float(7.5), Value::Float(2.5)),
        ("zero_divisor", Value::Int(1), Value::Float(-0.0)),
        ("type_mismatch", Value::from("10"), Value::Int(2)),
    ];

    for (name, a, b) in &cases {
        group.bench_with_input(BenchmarkId::new("free", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(divide(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

fn benchmark_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    let (ten, four, half) = (Value::Int(10), Value::Int(4), Value::Float(0.5));

    for emit in [false, true] {
        let calc = Calculator::new(
            CalculatorConfig::ieee("bench".to_string()).with_events(emit),
            Arc::new(NoOpEventHandler),
        );
        let label = if emit { "events" } else { "silent" };

        group.bench_function(BenchmarkId::new("divide", label), |bench| {
            bench.iter(|| black_box(calc.divide(black_box(&ten), black_box(&four))));
        });

        group.bench_function(BenchmarkId::new("add", label), |bench| {
            bench.iter(|| black_box(calc.add(black_box(&ten), black_box(&half))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_divide, benchmark_calculator);
criterion_main!(benches);
