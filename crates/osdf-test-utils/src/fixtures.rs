//! The observation sample table.
//!
//! Ten observations with six columns of mixed type: latitude and
//! longitude (double), station id (string), channel (int32), temperature
//! (double) and time (int32).

use osdf_core::{row, FrameError, NewRow};
use osdf_frame::{Frame, FrameCols, FrameRows};

/// Column vectors of the sample table.
#[derive(Clone, Debug, PartialEq)]
pub struct Observations {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub stat_ids: Vec<String>,
    pub channels: Vec<i32>,
    pub temps: Vec<f64>,
    pub times: Vec<i32>,
}

impl Observations {
    /// Column names in load order.
    pub const COLUMNS: [&'static str; 6] = ["lat", "lon", "StatId", "channel", "temp", "time"];

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }
}

impl Default for Observations {
    fn default() -> Self {
        Self {
            lats: vec![
                -65.0, -66.6, -67.2, -68.6, -69.1, -70.9, -71.132, -72.56, -73.0, -73.1,
            ],
            lons: vec![
                120.0, 121.1, 122.2, 123.3, 124.4, 125.5, 126.6, 127.7, 128.8, 128.9,
            ],
            stat_ids: [
                "00001", "00001", "00002", "00001", "00004", "00002", "00005", "00005", "00009",
                "00009",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            channels: vec![10, 10, 11, 11, 12, 12, 11, 15, 11, 13],
            temps: vec![
                -10.231, -15.68, -15.54, -14.98, -16.123, -19.11, -22.3324, -22.667, -25.6568,
                -25.63211,
            ],
            times: vec![
                1710460225, 1710460225, 1710460225, 1710460225, 1710460226, 1710460226,
                1710460226, 1710460226, 1710460226, 1710460227,
            ],
        }
    }
}

/// Load the sample table into `frame` column by column.
pub fn populate<F: Frame>(frame: &mut F) -> Result<(), FrameError> {
    let obs = Observations::default();
    let [lat, lon, stat_id, channel, temp, time] = Observations::COLUMNS;
    frame.append_new_column(lat, obs.lats)?;
    frame.append_new_column(lon, obs.lons)?;
    frame.append_new_column(stat_id, obs.stat_ids)?;
    frame.append_new_column(channel, obs.channels)?;
    frame.append_new_column(temp, obs.temps)?;
    frame.append_new_column(time, obs.times)
}

/// The sample table in row-major layout.
pub fn observation_rows() -> FrameRows {
    let mut frame = FrameRows::new();
    populate(&mut frame).expect("sample table loads");
    frame
}

/// The sample table in column-major layout.
pub fn observation_cols() -> FrameCols {
    let mut frame = FrameCols::new();
    populate(&mut frame).expect("sample table loads");
    frame
}

/// An eleventh observation matching the sample schema.
pub fn extra_row() -> NewRow {
    row![-73.0, 128.0, "00010", 66, -25.6568, 1710460300]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_layouts_load_ten_rows() {
        assert_eq!(observation_rows().row_count(), 10);
        assert_eq!(observation_cols().row_count(), 10);
        assert_eq!(Observations::default().len(), 10);
    }

    #[test]
    fn extra_row_fits_schema() {
        let mut frame = observation_cols();
        frame.append_new_row(extra_row()).unwrap();
        assert_eq!(frame.row_count(), 11);
    }
}
