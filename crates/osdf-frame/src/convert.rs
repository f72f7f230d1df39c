//! Conversion between the two table layouts.
//!
//! Both directions copy schema (widths, permissions, display max id), ids,
//! values and print configuration. The result is an independent table
//! with no views attached.

use osdf_core::functions::materialize_row;
use osdf_core::{Column, HasRows, RowId};

use crate::cols::{ColsData, FrameCols};
use crate::rows::{FrameRows, RowsData};

impl From<&FrameCols> for FrameRows {
    fn from(source: &FrameCols) -> Self {
        let data = source.data.borrow();
        let rows = (0..data.row_count())
            .map(|position| materialize_row(&*data, position))
            .collect();
        FrameRows::from_data(RowsData {
            meta: data.meta.clone(),
            rows,
            generation: Default::default(),
            meta_revision: Default::default(),
            config: data.config.clone(),
        })
    }
}

impl From<&FrameRows> for FrameCols {
    fn from(source: &FrameRows) -> Self {
        let data = source.data.borrow();
        let columns = data
            .meta
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let cells = data.rows.iter().map(|row| row.column(index).clone());
                Column::from_datums(column.data_type(), cells).into_handle()
            })
            .collect();
        let ids: Vec<RowId> = data.rows.iter().map(|row| row.id()).collect();
        let max_id = ids.iter().copied().max().unwrap_or(RowId::ZERO);
        FrameCols::from_data(ColsData {
            meta: data.meta.clone(),
            ids,
            columns,
            max_id,
            generation: Default::default(),
            meta_revision: Default::default(),
            config: data.config.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Frame;
    use crate::PrintConfig;
    use osdf_core::{row, Permission, SortOrder};

    fn cols() -> FrameCols {
        let config = PrintConfig {
            id_label: "row".into(),
            ..PrintConfig::default()
        };
        let mut frame = FrameCols::with_config(config).unwrap();
        frame.append_new_column("lat", vec![-65.0, -70.9, -68.6]).unwrap();
        frame
            .append_new_column("statId", vec!["00001".to_string(), "00002".into(), "00001".into()])
            .unwrap();
        frame.append_new_column("channel", vec![10i32, 11, 12]).unwrap();
        frame
    }

    #[test]
    fn cols_to_rows_prints_identically() {
        let mut source = cols();
        source.sort_rows("lat", SortOrder::Descending).unwrap();
        source.set_column_permission("channel", Permission::ReadOnly).unwrap();
        let rows = FrameRows::from(&source);
        assert_eq!(rows.to_string(), source.to_string());
        assert_eq!(rows.ids(), source.ids());
        assert_eq!(rows.config().id_label, "row");
        assert_eq!(rows.column_metadata().permission(2), Permission::ReadOnly);
    }

    #[test]
    fn rows_to_cols_round_trips() {
        let mut rows = FrameRows::from(&cols());
        rows.append_new_row(row![-72.0, "00009", 13]).unwrap();
        let back = FrameCols::from(&rows);
        assert_eq!(back.to_string(), rows.to_string());
        assert_eq!(back.get_column::<i32>("channel").unwrap(), [10, 11, 12, 13]);
        assert_eq!(back.max_id(), RowId(4));
    }

    #[test]
    fn converted_table_is_independent() {
        let source = cols();
        let _view = source.make_view();
        let rows = FrameRows::from(&source);
        assert_eq!(rows.live_views(), 0);
        assert_eq!(source.live_views(), 1);
    }
}
