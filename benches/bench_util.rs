#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

pub const INPUT_COUNT: usize = 4096;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f64(state: &mut u64) -> f64 {
    let bits = lcg_next(state) >> 11;
    (bits as f64) / RNG_DENOM
}

pub fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(min + uniform_f64(&mut state) * span);
    }
    values
}

/// `2^e` with `e` uniform in `[min_exp, max_exp)`, mantissa uniform in `[1, 2)`.
pub fn gen_log_range(count: usize, min_exp: f64, max_exp: f64, seed: u64) -> Vec<f64> {
    gen_range(count, min_exp, max_exp, seed)
        .into_iter()
        .map(f64::exp2)
        .collect()
}

pub fn bench_inputs(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f64],
    variants: &[(&str, fn(f64) -> f64)],
) {
    for &(name, f) in variants {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in inputs {
                    acc += f(black_box(x));
                }
                black_box(acc)
            })
        });
    }
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}
