//! Nonce counter benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use trader_common::counter::Counter;

fn bench_increment(c: &mut Criterion) {
    let counter = Counter::new();
    c.bench_function("counter_increment", |b| {
        b.iter(|| black_box(counter.increment_and_get()));
    });
}

fn bench_increment_contended(c: &mut Criterion) {
    c.bench_function("counter_increment_4_threads", |b| {
        b.iter(|| {
            let counter = Arc::new(Counter::new());
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..1_000 {
                            black_box(counter.increment_and_get());
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_increment, bench_increment_contended);
criterion_main!(benches);
