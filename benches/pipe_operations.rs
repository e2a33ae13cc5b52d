use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pipes_stream::{from_iter, Pipe, PipeExt};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

fn bench_map_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter");

    for size in [1_000i64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("pull", size), size, |b, &size| {
            b.iter(|| {
                let acc = Arc::new(AtomicI64::new(0));
                let sink = Arc::clone(&acc);
                from_iter(0..size)
                    .map(|x| black_box(x * 2))
                    .filter(|&x| black_box(x % 4 == 0))
                    .run(move |x| {
                        sink.fetch_add(x, Ordering::Relaxed);
                    });
                black_box(acc.load(Ordering::Relaxed))
            });
        });

        group.bench_with_input(BenchmarkId::new("push", size), size, |b, &size| {
            b.iter(|| {
                let acc = Arc::new(AtomicI64::new(0));
                let sink = Arc::clone(&acc);
                Pipe::push(move |mut emit| {
                    for v in 0..size {
                        emit(v);
                    }
                })
                .map(|x| black_box(x * 2))
                .filter(|&x| black_box(x % 4 == 0))
                .run(move |x| {
                    sink.fetch_add(x, Ordering::Relaxed);
                });
                black_box(acc.load(Ordering::Relaxed))
            });
        });
    }

    group.finish();
}

fn bench_flat_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_map");

    for size in [1_000i64, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("push_depth_first", size), size, |b, &size| {
            b.iter(|| {
                let acc = Arc::new(AtomicI64::new(0));
                let sink = Arc::clone(&acc);
                Pipe::push(move |mut emit| {
                    for v in 0..size {
                        emit(v);
                    }
                })
                .flat_map(|x| {
                    Pipe::push(move |mut emit| {
                        emit(x);
                        emit(x + 1);
                    })
                })
                .run(move |x| {
                    sink.fetch_add(x, Ordering::Relaxed);
                });
                black_box(acc.load(Ordering::Relaxed))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map_filter, bench_flat_map);
criterion_main!(benches);
