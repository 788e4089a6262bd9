//! View projection benchmarks
//!
//! The view is recomputed after every command, so its cost over a large
//! list bounds how responsive the widget stays.
//!
//! Run with: `cargo bench -p todo-widget`

#![allow(missing_docs)] // Benchmarks don't need extensive docs

use composable_todo_core::projection::Projection;
use composable_todo_core::reducer::Reducer;
use composable_todo_testing::{test_clock, SequentialIdGenerator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use todo_widget::{
    Filter, TodoAction, TodoEnvironment, TodoReducer, TodoState, TodoViewProjection,
};

fn env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
}

fn populated(size: usize) -> TodoState {
    let reducer = TodoReducer::new();
    let env = env();
    let mut state = TodoState::new();
    for i in 0..size {
        let _ = reducer.reduce(&mut state, TodoAction::AddItem { text: format!("todo {i}") }, &env);
    }
    let ids: Vec<_> = state.items.iter().step_by(3).map(|item| item.id).collect();
    for id in ids {
        let _ = reducer.reduce(&mut state, TodoAction::ToggleItem { id }, &env);
    }
    state
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_projection");

    for size in [10_usize, 1_000, 10_000] {
        for filter in Filter::ALL {
            let state = TodoState {
                filter,
                ..populated(size)
            };
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(filter.as_str(), size), &state, |b, state| {
                b.iter(|| black_box(TodoViewProjection.project(black_box(state))));
            });
        }
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let reducer = TodoReducer::new();
    let env = env();
    let mut state = populated(1_000);
    let id = state.items[500].id;

    c.bench_function("toggle_in_1000", |b| {
        b.iter(|| {
            let _ = reducer.reduce(&mut state, TodoAction::ToggleItem { id: black_box(id) }, &env);
        });
    });
}

criterion_group!(benches, bench_projection, bench_toggle);
criterion_main!(benches);
