use std::collections::HashMap;
use std::hint::black_box;

use arraymap::ArrayMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_ints(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn string_keys(n: usize) -> Vec<String> {
    random_ints(n).into_iter().map(|k| format!("key-{k}")).collect()
}

// ─── Append and insert ──────────────────────────────────────────────────────

fn bench_push_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_sequential");

    group.bench_function(BenchmarkId::new("ArrayMap", N), |b| {
        b.iter(|| {
            let mut map = ArrayMap::new();
            for i in 0..N as i64 {
                map.push(i).unwrap();
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..N as i64 {
                vec.push(i);
            }
            vec
        });
    });

    group.finish();
}

fn bench_set_string_keys(c: &mut Criterion) {
    let keys = string_keys(N);
    let mut group = c.benchmark_group("set_string_keys");

    group.bench_function(BenchmarkId::new("ArrayMap", N), |b| {
        b.iter(|| {
            let mut map = ArrayMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.set(key.as_str(), i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.insert(key.clone(), i);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_get_string_keys(c: &mut Criterion) {
    let keys = string_keys(N);

    let mut array_map = ArrayMap::new();
    let mut hash_map = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        array_map.set(key.as_str(), i);
        hash_map.insert(key.clone(), i);
    }

    let mut group = c.benchmark_group("get_string_keys");

    group.bench_function(BenchmarkId::new("ArrayMap", N), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(array_map.get(key.as_str()));
            }
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(hash_map.get(key));
            }
        });
    });

    group.finish();
}

// ─── Iteration and bulk transforms ──────────────────────────────────────────

fn bench_iterate(c: &mut Criterion) {
    let map: ArrayMap<i64> = ArrayMap::from_values(random_ints(N));
    let mut group = c.benchmark_group("iterate");

    group.bench_function(BenchmarkId::new("iter", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for (_, v) in &map {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        });
    });

    group.bench_function(BenchmarkId::new("fold", N), |b| {
        b.iter(|| black_box(map.fold(0i64, |acc, v| acc.wrapping_add(*v))));
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let values = random_ints(N);
    let map: ArrayMap<i64> = ArrayMap::from_values(values);
    let mut group = c.benchmark_group("sort");

    group.bench_function(BenchmarkId::new("sorted", N), |b| {
        b.iter(|| black_box(map.sorted()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_sequential,
    bench_set_string_keys,
    bench_get_string_keys,
    bench_iterate,
    bench_sort
);
criterion_main!(benches);
