// benches/vector_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use secvec::prelude::*;
use std::hint::black_box;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for count in [256usize, 4096, 65536].iter() {
        group.bench_with_input(BenchmarkId::new("from_empty", count), count, |b, &count| {
            b.iter(|| {
                let mut vec = Vector::<u64>::new(0);
                for i in 0..count {
                    vec.push(black_box(i as u64)).unwrap();
                }
                vec
            });
        });

        group.bench_with_input(BenchmarkId::new("presized", count), count, |b, &count| {
            b.iter(|| {
                let mut vec = Vector::<u64>::new(count + 1);
                for i in 0..count {
                    vec.push(black_box(i as u64)).unwrap();
                }
                vec
            });
        });
    }

    group.finish();
}

fn bench_get_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed");

    let mut vec = Vector::<u32>::new(0);
    for i in 0..4096 {
        vec.push(i).unwrap();
    }

    group.bench_function("get", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..4096 {
                sum += u64::from(vec.get(black_box(i)).unwrap_or(0));
            }
            sum
        });
    });

    group.bench_function("put", |b| {
        b.iter(|| {
            for i in 0..4096 {
                vec.put(black_box(i), black_box(i as u32)).unwrap();
            }
        });
    });

    group.bench_function("get_unchecked", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..4096 {
                sum += u64::from(unsafe { vec.get_unchecked(black_box(i)) });
            }
            sum
        });
    });

    group.finish();
}

fn bench_raw_vs_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_vs_typed");

    group.bench_function("typed_push_1024", |b| {
        b.iter(|| {
            let mut vec = Vector::<u32>::new(0);
            for i in 0..1024u32 {
                vec.push(black_box(i)).unwrap();
            }
            vec
        });
    });

    group.bench_function("raw_push_1024", |b| {
        b.iter(|| {
            let mut vec = RawVector::new(4, 0);
            for i in 0..1024u32 {
                vec.push(black_box(&i.to_ne_bytes())).unwrap();
            }
            vec
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_get_put, bench_raw_vs_typed);
criterion_main!(benches);
