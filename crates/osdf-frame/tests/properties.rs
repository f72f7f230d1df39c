//! Layout-independent properties over randomly generated tables.

use osdf_core::{Comparison, RowId, SortOrder};
use osdf_frame::{Frame, FrameCols, FrameRows, View};
use osdf_test_utils::strategies::{arb_records, load, Record};
use proptest::prelude::*;

fn both(records: &[Record]) -> (FrameRows, FrameCols) {
    let mut rows = FrameRows::new();
    let mut cols = FrameCols::new();
    load(&mut rows, records).unwrap();
    load(&mut cols, records).unwrap();
    (rows, cols)
}

proptest! {
    #[test]
    fn layouts_agree(records in arb_records(0, 24)) {
        let (rows, cols) = both(&records);
        prop_assert_eq!(rows.ids(), cols.ids());
        prop_assert_eq!(rows.to_string(), cols.to_string());
        prop_assert_eq!(
            rows.get_column::<String>("station").unwrap(),
            cols.get_column::<String>("station").unwrap()
        );
        let ids: Vec<RowId> = (1..=records.len() as i64).map(RowId).collect();
        prop_assert_eq!(rows.ids(), ids);
    }

    #[test]
    fn layouts_agree_after_sort(records in arb_records(1, 24), descending in any::<bool>()) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let (mut rows, mut cols) = both(&records);
        rows.sort_rows("channel", order).unwrap();
        cols.sort_rows("channel", order).unwrap();
        prop_assert_eq!(rows.ids(), cols.ids());
        prop_assert_eq!(rows.to_string(), cols.to_string());
    }

    #[test]
    fn fresh_view_matches_table(records in arb_records(0, 24)) {
        let (rows, cols) = both(&records);
        prop_assert_eq!(rows.make_view().to_string(), rows.to_string());
        prop_assert_eq!(cols.make_view().to_string(), cols.to_string());
    }

    #[test]
    fn tautological_slice_keeps_everything(records in arb_records(2, 24)) {
        let (rows, cols) = both(&records);
        let all_rows = rows.slice_rows("lat", Comparison::GreaterThanOrEqual, -1000.0).unwrap();
        let all_cols = cols.make_view().slice_rows("lat", Comparison::LessThan, 1000.0).unwrap();
        prop_assert_eq!(all_rows.to_string(), rows.to_string());
        prop_assert_eq!(all_cols.to_string(), cols.to_string());
    }

    #[test]
    fn slice_partitions_rows(records in arb_records(2, 24), threshold in 0i32..64) {
        let (rows, cols) = both(&records);
        let low = cols.slice_rows("channel", Comparison::LessThan, threshold).unwrap();
        let high = cols.slice_rows("channel", Comparison::GreaterThanOrEqual, threshold).unwrap();
        prop_assert_eq!(low.row_count() + high.row_count(), cols.row_count());
        let view_low = rows
            .make_view()
            .slice_rows("channel", Comparison::LessThan, threshold)
            .unwrap();
        prop_assert_eq!(view_low.ids(), low.ids());
    }

    #[test]
    fn sort_descending_reverses_ascending_values(records in arb_records(1, 24)) {
        let (mut rows, _) = both(&records);
        rows.sort_rows("lat", SortOrder::Ascending).unwrap();
        let mut ascending = rows.get_column::<f64>("lat").unwrap();
        rows.sort_rows("lat", SortOrder::Descending).unwrap();
        ascending.reverse();
        prop_assert_eq!(rows.get_column::<f64>("lat").unwrap(), ascending);
    }

    #[test]
    fn sorting_twice_is_idempotent(records in arb_records(1, 24)) {
        let (_, mut cols) = both(&records);
        cols.sort_rows("station", SortOrder::Ascending).unwrap();
        let once = cols.to_string();
        cols.sort_rows("station", SortOrder::Ascending).unwrap();
        prop_assert_eq!(cols.to_string(), once);
    }

    #[test]
    fn view_sort_matches_table_sort(records in arb_records(1, 24)) {
        let (rows, mut cols) = both(&records);
        let mut view = rows.make_view();
        view.sort_rows("station", SortOrder::Descending).unwrap();
        cols.sort_rows("station", SortOrder::Descending).unwrap();
        prop_assert_eq!(view.ids(), cols.ids());
        prop_assert_eq!(view.to_string(), cols.to_string());
    }

    #[test]
    fn removed_ids_stay_unique(
        records in arb_records(2, 24),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut rows, mut cols) = both(&records);
        let at = pick.index(records.len());
        rows.remove_row(at).unwrap();
        cols.remove_row(at).unwrap();
        let extra = osdf_core::row![0.0, "00000", 0];
        rows.append_new_row(extra.clone()).unwrap();
        cols.append_new_row(extra).unwrap();
        for ids in [rows.ids(), cols.ids()] {
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), ids.len());
        }
    }
}
