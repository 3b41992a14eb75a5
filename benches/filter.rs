//! Benchmarks for the view filter engine.
//!
//! These benchmarks measure filtering a realistic cached task list.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::{Fake, Faker};
use taskdeck::filter::{apply, FilterState, StatusFilter};
use taskdeck::remote::{Priority, Task};

fn tasks(count: usize) -> Vec<Task> {
    (0..count).map(|_| Faker.fake::<Task>()).collect()
}

fn bench_no_filter(c: &mut Criterion) {
    let tasks = tasks(1_000);
    let filter = FilterState::default();

    c.bench_function("filter_1000_no_predicates", |b| {
        b.iter(|| apply(black_box(&tasks), black_box(&filter)))
    });
}

fn bench_all_predicates(c: &mut Criterion) {
    let tasks = tasks(1_000);
    let filter = FilterState {
        status: Some(StatusFilter::Pending),
        priority: Some(Priority::High),
        search: "ab".to_string(),
    };

    c.bench_function("filter_1000_all_predicates", |b| {
        b.iter(|| apply(black_box(&tasks), black_box(&filter)))
    });
}

fn bench_search_only(c: &mut Criterion) {
    let tasks = tasks(1_000);
    let filter = FilterState {
        search: "QUI".to_string(),
        ..FilterState::default()
    };

    c.bench_function("filter_1000_search_case_insensitive", |b| {
        b.iter(|| apply(black_box(&tasks), black_box(&filter)))
    });
}

criterion_group!(
    benches,
    bench_no_filter,
    bench_all_predicates,
    bench_search_only
);
criterion_main!(benches);
