use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use basket::{IdStrategy, ItemId, ListStore, StoreConfig};

fn sequential_store() -> ListStore {
    ListStore::with_config(StoreConfig {
        id_strategy: IdStrategy::Sequential {
            namespace: "bench".to_string(),
        },
    })
    .unwrap()
}

fn filled_store(len: usize) -> ListStore {
    let store = sequential_store();
    for i in 0..len {
        store.add_item(&format!("item {i}"));
    }
    store
}

fn add_item_benchmark(c: &mut Criterion) {
    c.bench_function("add_item", |b| {
        b.iter(|| {
            let store = sequential_store();
            store.add_item(black_box("Milk"))
        });
    });
}

fn toggle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_purchased");

    for len in [10, 100, 1000].iter() {
        let store = filled_store(*len);
        let last = ItemId::new(format!("bench-{len}"));

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| {
                black_box(store.toggle_purchased(&last));
            });
        });
    }
    group.finish();
}

fn purchased_count_benchmark(c: &mut Criterion) {
    let store = filled_store(1000);

    c.bench_function("purchased_count", |b| {
        b.iter(|| {
            black_box(store.purchased_count());
        });
    });
}

fn store_subscribe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_subscribe");

    for subscriber_count in [1, 10, 100].iter() {
        let store = filled_store(10);
        let first = ItemId::new("bench-1");

        for _ in 0..*subscriber_count {
            store
                .subscribe(|_| {
                    // Empty subscriber
                })
                .detach();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                b.iter(|| {
                    black_box(store.toggle_purchased(&first));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    add_item_benchmark,
    toggle_benchmark,
    purchased_count_benchmark,
    store_subscribe_benchmark,
);
criterion_main!(benches);
