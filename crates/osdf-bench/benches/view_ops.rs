//! Criterion micro-benchmarks for view creation, resynchronisation and
//! view-local sorting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use osdf_bench::{reference_cols, reference_rows, stress_cols};
use osdf_core::{Comparison, SortOrder};
use osdf_frame::{Frame, View};

fn bench_make_view(c: &mut Criterion) {
    let rows = reference_rows(42).unwrap();
    let cols = stress_cols(42).unwrap();

    c.bench_function("make_view_rows_10k", |b| {
        b.iter(|| black_box(rows.make_view()));
    });

    c.bench_function("make_view_cols_100k", |b| {
        b.iter(|| black_box(cols.make_view()));
    });
}

fn bench_resync(c: &mut Criterion) {
    c.bench_function("resync_after_remove_rows_10k", |b| {
        b.iter_batched(
            || {
                let frame = reference_rows(42).unwrap();
                let view = frame.make_view();
                (frame, view)
            },
            |(mut frame, view)| {
                frame.remove_row(0).unwrap();
                black_box(view.row_count())
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("resync_after_remove_cols_10k", |b| {
        b.iter_batched(
            || {
                let frame = reference_cols(42).unwrap();
                let view = frame.make_view();
                (frame, view)
            },
            |(mut frame, view)| {
                frame.remove_row(0).unwrap();
                black_box(view.row_count())
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_view_sort_and_slice(c: &mut Criterion) {
    let cols = reference_cols(42).unwrap();

    c.bench_function("view_sort_temp_cols_10k", |b| {
        b.iter_batched(
            || cols.make_view(),
            |mut view| {
                view.sort_rows("temp", SortOrder::Descending).unwrap();
                black_box(view)
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("view_slice_lat_cols_10k", |b| {
        let view = cols.make_view();
        b.iter(|| {
            let sliced = view.slice_rows("lat", Comparison::GreaterThan, black_box(0.0)).unwrap();
            black_box(sliced.row_count())
        });
    });
}

criterion_group!(benches, bench_make_view, bench_resync, bench_view_sort_and_slice);
criterion_main!(benches);
