/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use powf32::f_powf;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::powf(i as f32 / 100., i as f32 / 1000.));
            }
        })
    });

    c.bench_function("system: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::powf(i as f32 / 100., i as f32 / 1000.));
            }
        })
    });

    c.bench_function("powf32: f_powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_powf(i as f32 / 100., i as f32 / 1000.));
            }
        })
    });

    c.bench_function("libm::powf integral exponent", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::powf(-(i as f32) / 100., (i % 17) as f32));
            }
        })
    });

    c.bench_function("powf32: f_powf integral exponent", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_powf(-(i as f32) / 100., (i % 17) as f32));
            }
        })
    });

    c.bench_function("powf32: f_powf subnormal base", |b| {
        b.iter(|| {
            for i in 1..1000u32 {
                black_box(f_powf(f32::from_bits(i * 997), 0.25));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
