use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use thiserror::Error;

use expection::{
    catch, install_hook_with, make_failure, success, ErrorPolicy, ExceptionConstructible,
    Exceptions, Expected, ResultShape,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DivideByZero;

#[derive(Debug, Error)]
#[error("Division by Zero")]
struct DivideByZeroException;

impl From<()> for DivideByZero {
    fn from((): ()) -> Self {
        Self
    }
}

impl ExceptionConstructible<()> for DivideByZero {
    type Exception = DivideByZeroException;

    fn exception((): ()) -> DivideByZeroException {
        DivideByZeroException
    }
}

fn divide_by<P: ErrorPolicy>(numerator: i32, denominator: i32) -> ResultShape<f64, DivideByZero, P> {
    if denominator == 0 {
        return make_failure::<f64, DivideByZero, P, _>(());
    }
    success::<f64, DivideByZero, P>(f64::from(numerator) / f64::from(denominator))
}

fn divide_by_hand(numerator: i32, denominator: i32) -> Result<f64, DivideByZero> {
    if denominator == 0 {
        return Err(DivideByZero);
    }
    Ok(f64::from(numerator) / f64::from(denominator))
}

fn bench_success_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_path");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hand_written_result", |b| {
        b.iter(|| divide_by_hand(black_box(1), black_box(2)));
    });
    group.bench_function("expected", |b| {
        b.iter(|| divide_by::<Expected>(black_box(1), black_box(2)));
    });
    group.bench_function("exceptions", |b| {
        b.iter(|| divide_by::<Exceptions>(black_box(1), black_box(2)));
    });

    group.finish();
}

fn bench_failure_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_path");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hand_written_result", |b| {
        b.iter(|| divide_by_hand(black_box(1), black_box(0)));
    });
    group.bench_function("expected", |b| {
        b.iter(|| divide_by::<Expected>(black_box(1), black_box(0)));
    });

    // Silence raised failures while measuring.
    let hook = install_hook_with(|_| {});
    group.bench_function("exceptions_caught", |b| {
        b.iter(|| catch(|| divide_by::<Exceptions>(black_box(1), black_box(0))));
    });
    drop(hook);

    group.finish();
}

criterion_group!(policy_overhead, bench_success_path, bench_failure_path);
criterion_main!(policy_overhead);
