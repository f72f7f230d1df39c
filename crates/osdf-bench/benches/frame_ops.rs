//! Criterion micro-benchmarks for table construction, sorting and slicing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use osdf_bench::{load, observations, reference_cols, reference_rows, REFERENCE_ROWS};
use osdf_core::{row, Comparison, SortOrder};
use osdf_frame::{Frame, FrameCols, FrameRows};

fn bench_append_columns(c: &mut Criterion) {
    c.bench_function("append_columns_rows_10k", |b| {
        b.iter_batched(
            || observations(REFERENCE_ROWS, 42),
            |columns| {
                let mut frame = FrameRows::new();
                load(&mut frame, columns).unwrap();
                black_box(frame)
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("append_columns_cols_10k", |b| {
        b.iter_batched(
            || observations(REFERENCE_ROWS, 42),
            |columns| {
                let mut frame = FrameCols::new();
                load(&mut frame, columns).unwrap();
                black_box(frame)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_append_rows(c: &mut Criterion) {
    c.bench_function("append_1k_rows_cols", |b| {
        b.iter_batched(
            || reference_cols(42).unwrap(),
            |mut frame| {
                for i in 0..1000 {
                    frame
                        .append_new_row(row![-73.0, 128.0, "00010", i, -25.6568, 1710460300])
                        .unwrap();
                }
                black_box(frame)
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_sort(c: &mut Criterion) {
    c.bench_function("sort_rows_by_lat_rows_10k", |b| {
        b.iter_batched(
            || reference_rows(42).unwrap(),
            |mut frame| {
                frame.sort_rows("lat", SortOrder::Ascending).unwrap();
                black_box(frame)
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("sort_rows_by_lat_cols_10k", |b| {
        b.iter_batched(
            || reference_cols(42).unwrap(),
            |mut frame| {
                frame.sort_rows("lat", SortOrder::Ascending).unwrap();
                black_box(frame)
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_slice(c: &mut Criterion) {
    let rows = reference_rows(42).unwrap();
    let cols = reference_cols(42).unwrap();

    c.bench_function("slice_channel_rows_10k", |b| {
        b.iter(|| {
            let sliced = rows.slice_rows("channel", Comparison::LessThan, black_box(16)).unwrap();
            black_box(sliced.row_count())
        });
    });

    c.bench_function("slice_channel_cols_10k", |b| {
        b.iter(|| {
            let sliced = cols.slice_rows("channel", Comparison::LessThan, black_box(16)).unwrap();
            black_box(sliced.row_count())
        });
    });

    c.bench_function("get_column_temp_cols_10k", |b| {
        b.iter(|| black_box(cols.get_column::<f64>("temp").unwrap()));
    });
}

criterion_group!(
    benches,
    bench_append_columns,
    bench_append_rows,
    bench_sort,
    bench_slice
);
criterion_main!(benches);
