use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sortvis_engine::{Algorithm, Session};
use sortvis_tests::{random_keys, sorter, COMPARISON_SORTS};
use std::hint::black_box;

// ─── Stepping a variant to completion vs. sorting in one call ────────────────

fn stepped_99_bench(c: &mut Criterion) {
    let keys = random_keys(99, 1, 360, 42);
    for alg in COMPARISON_SORTS {
        let mut strategy = sorter(alg);
        c.bench_function(&format!("{} 99 keys stepped", alg.name()), |b| {
            b.iter_batched(
                || keys.clone(),
                |mut work| {
                    let mut session = Session::bind(&mut strategy, &mut work);
                    black_box(session.run(usize::MAX).unwrap())
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn std_sort_99_bench(c: &mut Criterion) {
    let keys = random_keys(99, 1, 360, 42);
    c.bench_function("slice::sort 99 keys", |b| {
        b.iter_batched(
            || keys.clone(),
            |mut work| {
                work.sort();
                black_box(work)
            },
            BatchSize::SmallInput,
        )
    });
}

// ─── Cost of a single step ───────────────────────────────────────────────────

fn single_step_bench(c: &mut Criterion) {
    let mut keys = random_keys(99, 1, 360, 7);
    let mut strategy = sorter(Algorithm::Gnome);
    let mut session = Session::bind(&mut strategy, &mut keys);
    c.bench_function("gnome single step", |b| b.iter(|| black_box(session.step())));
}

criterion_group!(benches, stepped_99_bench, std_sort_99_bench, single_step_bench);
criterion_main!(benches);
