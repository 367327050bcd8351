// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_alerts::store::{Alert, Severity, Store};
use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn publish_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("publish_and_dismiss_with_listener", |b| {
        let store = Arc::new(Store::default());
        let _guard = store.subscribe(|alerts| {
            black_box(alerts.len());
        });
        b.iter(|| {
            let id = store.publish(Severity::Success, "benchmark");
            black_box(store.dismiss(id));
        });
    });

    group.bench_function("remove_expired_100", |b| {
        b.iter_batched(
            || {
                let store = Store::default();
                let now = Instant::now();
                for i in 0..100u64 {
                    store.push(Alert::created_at(
                        Severity::Info,
                        "sweep",
                        Duration::from_millis(i * 10),
                        now,
                    ));
                }
                (store, now)
            },
            |(store, now)| black_box(store.remove_expired(now + Duration::from_millis(500))),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, publish_benchmark);
criterion_main!(benches);
