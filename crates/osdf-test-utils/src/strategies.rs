//! Proptest strategies for random tables.
//!
//! Generated tables share one schema: `lat` (double), `station`
//! (string) and `channel` (int32). Latitudes are multiples of 0.01 so
//! they print without exponent notation.

use osdf_core::{row, FrameError};
use osdf_frame::Frame;
use proptest::prelude::*;

/// One generated observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub lat: f64,
    pub station: String,
    pub channel: i32,
}

pub fn arb_lat() -> impl Strategy<Value = f64> {
    (-9000i32..=9000).prop_map(|v| f64::from(v) / 100.0)
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (arb_lat(), "[0-9]{5}", 0i32..64).prop_map(|(lat, station, channel)| Record {
        lat,
        station,
        channel,
    })
}

/// Between `min` and `max` records, inclusive.
pub fn arb_records(min: usize, max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), min..=max)
}

/// Load `records` into an empty `frame`: the first half as columns, the
/// rest as row appends, so both insertion paths are exercised.
pub fn load<F: Frame>(frame: &mut F, records: &[Record]) -> Result<(), FrameError> {
    let split = records.len() / 2;
    let (head, tail) = records.split_at(split);
    frame.append_new_column("lat", head.iter().map(|r| r.lat).collect())?;
    frame.append_new_column("station", head.iter().map(|r| r.station.clone()).collect())?;
    frame.append_new_column("channel", head.iter().map(|r| r.channel).collect())?;
    for r in tail {
        frame.append_new_row(row![r.lat, r.station.clone(), r.channel])?;
    }
    Ok(())
}
