//! Live views over both table layouts.
//!
//! Walks one observation table through population, view slicing, view
//! sorting, owner modification, clearing and view drop, checking after
//! each stage that the printed tables and views agree where they should.
//! Run with `RUST_LOG=osdf_frame=debug` to see views resynchronise.

use osdf::prelude::*;
use osdf_test_utils::{extra_row, init_tracing, populate};

fn stage(label: &str) {
    print!("{label} - ");
}

fn pass() {
    println!("PASS");
}

fn main() {
    init_tracing();
    println!("=== osdf view demo ===\n");

    let mut frame_cols = FrameCols::new();
    let mut frame_rows = FrameRows::new();
    populate(&mut frame_cols).unwrap();
    populate(&mut frame_rows).unwrap();

    // --- 1. Data population ---
    let mut view_rows1 = frame_rows.make_view();
    let view_cols1 = frame_cols.make_view();

    let text_frame_rows1 = frame_rows.to_string();
    let text_frame_cols1 = frame_cols.to_string();

    stage("1. Data population");
    assert_eq!(text_frame_rows1, text_frame_cols1);
    assert_eq!(text_frame_rows1, view_rows1.to_string());
    assert_eq!(text_frame_rows1, view_cols1.to_string());
    pass();

    // --- 2. Slice of views ---
    let view_rows2 = view_rows1.slice_rows("lat", Comparison::LessThan, -70.0).unwrap();
    let view_cols2 = view_cols1.slice_rows("lat", Comparison::LessThan, -70.0).unwrap();

    stage("2. Slice of ViewRows and ViewCols");
    assert_eq!(frame_rows.to_string(), frame_cols.to_string());
    assert_ne!(frame_rows.to_string(), view_rows2.to_string());
    assert_ne!(frame_cols.to_string(), view_cols2.to_string());
    assert_eq!(view_rows2.to_string(), view_cols2.to_string());
    assert_eq!(view_rows2.row_count(), 5);
    pass();

    // --- 3. Sort of a row view ---
    view_rows1.sort_rows("channel", SortOrder::Ascending).unwrap();
    let text_view_rows3a = view_rows1.to_string();
    view_rows1.sort_rows("channel", SortOrder::Descending).unwrap();
    let text_view_rows3b = view_rows1.to_string();
    view_rows1
        .sort_rows_by("channel", |a, b| a.get::<i32>().cmp(&b.get::<i32>()))
        .unwrap();
    let text_view_rows3c = view_rows1.to_string();

    stage("3. Sort of ViewRows");
    assert_eq!(frame_rows.to_string(), frame_cols.to_string());
    assert_ne!(frame_rows.to_string(), text_view_rows3a);
    assert_eq!(frame_cols.to_string(), view_cols1.to_string());
    assert_ne!(text_view_rows3a, text_view_rows3b);
    assert_eq!(text_view_rows3a, text_view_rows3c);
    pass();

    // --- 4. Owner modification ---
    let view_cols3 = frame_cols.make_view();
    let view_rows3 = frame_rows.make_view();
    let view_cols4 = view_cols3.slice_rows("lat", Comparison::LessThan, -70.0).unwrap();
    let view_rows4 = view_rows3.slice_rows("lat", Comparison::LessThan, -70.0).unwrap();

    frame_cols.append_new_row(extra_row()).unwrap();
    frame_rows.append_new_row(extra_row()).unwrap();
    let station = vec!["3".to_string(); 11];
    frame_cols.set_column("StatId", station.clone()).unwrap();
    frame_rows.set_column("StatId", station).unwrap();

    let text_frame_rows4 = frame_rows.to_string();

    stage("4. Data modification");
    assert_eq!(text_frame_rows4, frame_cols.to_string());
    assert_eq!(text_frame_rows4, view_rows3.to_string());
    assert_eq!(text_frame_rows4, view_cols3.to_string());
    assert_eq!(text_frame_rows4, view_rows4.to_string());
    assert_eq!(text_frame_rows4, view_cols4.to_string());
    pass();

    // --- 5. Clearing the owners ---
    frame_cols.clear();
    frame_rows.clear();

    let text_frame_rows5 = frame_rows.to_string();

    stage("5. Data clearance");
    assert_eq!(text_frame_rows5, frame_cols.to_string());
    for text in [
        view_rows1.to_string(),
        view_cols1.to_string(),
        view_rows3.to_string(),
        view_cols3.to_string(),
        view_rows4.to_string(),
        view_cols4.to_string(),
    ] {
        assert_eq!(text_frame_rows5, text);
    }
    pass();

    // --- 6. Views dropped before repopulation ---
    let before = (frame_rows.live_views(), frame_cols.live_views());
    {
        let _scoped_cols = frame_cols.make_view();
        let _scoped_rows = frame_rows.make_view();
    }
    assert_eq!((frame_rows.live_views(), frame_cols.live_views()), before);

    populate(&mut frame_cols).unwrap();
    populate(&mut frame_rows).unwrap();

    stage("6. View out-of-scope");
    assert_eq!(text_frame_rows1, frame_cols.to_string());
    assert_eq!(frame_rows.to_string(), text_frame_cols1);
    assert_eq!(frame_rows.to_string(), frame_cols.to_string());
    pass();

    tracing::info!(
        rows = frame_rows.row_count(),
        views = frame_rows.live_views(),
        "demo finished"
    );
}
