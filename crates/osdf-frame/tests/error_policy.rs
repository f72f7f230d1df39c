//! Every rejected operation returns its error and leaves the table and
//! its views exactly as they were.

use osdf_core::{row, ColumnMetadatum, Comparison, DataType, FrameError, Permission};
use osdf_frame::{Frame, FrameCols, FrameRows, View};
use osdf_test_utils::{init_tracing, populate};

/// Run `op` against a populated table and check it fails with `expected`
/// without any visible change.
fn rejects<F, Op>(op: Op, expected: FrameError)
where
    F: Frame + Default,
    Op: FnOnce(&mut F) -> Result<(), FrameError>,
{
    let mut frame = F::default();
    populate(&mut frame).unwrap();
    let view = frame.make_view();
    let before = frame.to_string();
    let ids = frame.ids();

    assert_eq!(op(&mut frame), Err(expected));
    assert_eq!(frame.to_string(), before);
    assert_eq!(frame.ids(), ids);
    assert_eq!(view.to_string(), before);
}

macro_rules! both_layouts {
    ($($name:ident: $op:expr => $err:expr;)+) => {
        mod rows {
            use super::*;
            $(#[test] fn $name() { init_tracing(); rejects::<FrameRows, _>($op, $err); })+
        }
        mod cols {
            use super::*;
            $(#[test] fn $name() { init_tracing(); rejects::<FrameCols, _>($op, $err); })+
        }
    };
}

fn not_found(name: &str) -> FrameError {
    FrameError::column_not_found(name)
}

fn mismatch(column: &str, expected: DataType, found: DataType) -> FrameError {
    FrameError::TypeMismatch {
        column: column.into(),
        expected,
        found,
    }
}

both_layouts! {
    append_column_wrong_length: |f| f.append_new_column("pressure", vec![1.0f32; 3])
        => FrameError::ColumnLengthMismatch { name: "pressure".into(), expected: 10, found: 3 };
    append_column_duplicate: |f| f.append_new_column("lat", vec![0.0f64; 10])
        => FrameError::DuplicateColumn { name: "lat".into() };
    append_row_short: |f| f.append_new_row(row![-1.0, 2.0])
        => FrameError::RowArityMismatch { expected: 6, found: 2 };
    append_row_wrong_type: |f| f.append_new_row(row![-1.0, 2.0, 3, 66, -25.0, 1710460300])
        => mismatch("StatId", DataType::String, DataType::Int32);
    append_row_into_read_only: |f| {
        f.set_column_permission("temp", Permission::ReadOnly)?;
        f.append_new_row(row![-1.0, 2.0, "x", 66, -25.0, 1710460300])
    } => FrameError::ReadOnlyColumn { name: "temp".into() };
    get_missing_column: |f| f.get_column::<f64>("pressure").map(drop)
        => not_found("pressure");
    get_column_wrong_type: |f| f.get_column::<f32>("lat").map(drop)
        => mismatch("lat", DataType::Double, DataType::Float);
    set_missing_column: |f| f.set_column("pressure", vec![0i32; 10])
        => not_found("pressure");
    set_column_wrong_type: |f| f.set_column("channel", vec![0i64; 10])
        => mismatch("channel", DataType::Int32, DataType::Int64);
    set_column_wrong_length: |f| f.set_column("channel", vec![0i32; 9])
        => FrameError::ColumnLengthMismatch { name: "channel".into(), expected: 10, found: 9 };
    set_read_only_column: |f| {
        f.set_column_permission("time", Permission::ReadOnly)?;
        f.set_column("time", vec![0i32; 10])
    } => FrameError::ReadOnlyColumn { name: "time".into() };
    permission_on_missing_column: |f| f.set_column_permission("pressure", Permission::ReadOnly)
        => not_found("pressure");
    remove_missing_column: |f| f.remove_column("pressure")
        => not_found("pressure");
    remove_column_past_end: |f| f.remove_column_at(6)
        => FrameError::ColumnIndexOutOfRange { index: 6, len: 6 };
    remove_row_past_end: |f| f.remove_row(10)
        => FrameError::RowIndexOutOfRange { index: 10, len: 10 };
    sort_missing_column: |f| f.sort_rows("pressure", osdf_core::SortOrder::Ascending)
        => not_found("pressure");
    slice_missing_column: |f| f.slice_rows("pressure", Comparison::Equal, 1.0).map(drop)
        => not_found("pressure");
    slice_wrong_threshold_type: |f| f.slice_rows("lat", Comparison::LessThan, 1i32).map(drop)
        => mismatch("lat", DataType::Double, DataType::Int32);
    configure_populated: |f| f.config_columns(vec![ColumnMetadatum::new("x", DataType::Int8)])
        => FrameError::SchemaConflict { rows: 10 };
}

#[test]
fn row_without_columns_rejected() {
    init_tracing();
    let mut rows = FrameRows::new();
    let mut cols = FrameCols::new();
    assert_eq!(rows.append_new_row(row![1]), Err(FrameError::NoColumnsConfigured));
    assert_eq!(cols.append_new_row(row![1]), Err(FrameError::NoColumnsConfigured));
    assert_eq!(rows.row_count(), 0);
    assert_eq!(cols.row_count(), 0);
}

#[test]
fn configured_duplicate_names_rejected() {
    init_tracing();
    let mut cols = FrameCols::new();
    let err = cols
        .config_columns(vec![
            ColumnMetadatum::new("a", DataType::Int8),
            ColumnMetadatum::new("a", DataType::Int16),
        ])
        .unwrap_err();
    assert_eq!(err, FrameError::DuplicateColumn { name: "a".into() });
    assert_eq!(cols.column_count(), 0);
}

#[test]
fn configured_schema_accepts_rows() {
    init_tracing();
    let mut rows = FrameRows::new();
    rows.config_columns(vec![
        ColumnMetadatum::new("station", DataType::String),
        ColumnMetadatum::new("count", DataType::Int16).read_only(),
    ])
    .unwrap();
    assert_eq!(
        rows.append_new_row(row!["a", 3i16]),
        Err(FrameError::ReadOnlyColumn { name: "count".into() })
    );
    rows.set_column_permission("count", Permission::ReadWrite).unwrap();
    rows.append_new_row(row!["a", 3i16]).unwrap();
    assert_eq!(rows.get_column::<i16>("count").unwrap(), [3]);
}

#[test]
fn view_errors_leave_view_intact() {
    init_tracing();
    let mut cols = FrameCols::new();
    populate(&mut cols).unwrap();
    let mut view = cols.make_view();
    let before = view.to_string();

    assert_eq!(view.get_column::<f64>("pressure"), Err(not_found("pressure")));
    assert!(matches!(
        view.slice_rows("channel", Comparison::Equal, 1.0f32),
        Err(FrameError::TypeMismatch { .. })
    ));
    assert_eq!(
        view.sort_rows("pressure", osdf_core::SortOrder::Descending),
        Err(not_found("pressure"))
    );
    assert_eq!(view.to_string(), before);
}
