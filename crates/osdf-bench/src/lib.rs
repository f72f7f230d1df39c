//! Benchmark profiles for the osdf data frames.
//!
//! Provides deterministic observation tables for benchmarks:
//!
//! - [`observations`]: seeded column vectors in the sample-table schema
//! - [`reference_rows`] / [`reference_cols`]: 10K-row tables
//! - [`stress_cols`]: 100K-row column-major table

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use osdf_core::FrameError;
use osdf_frame::{Frame, FrameCols, FrameRows};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Row count of the reference profile.
pub const REFERENCE_ROWS: usize = 10_000;

/// Row count of the stress profile.
pub const STRESS_ROWS: usize = 100_000;

/// Generated column vectors, one entry per observation.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationColumns {
    /// Latitudes in `[-90, 90)`.
    pub lats: Vec<f64>,
    /// Longitudes in `[-180, 180)`.
    pub lons: Vec<f64>,
    /// Five-digit station ids drawn from 500 stations.
    pub stat_ids: Vec<String>,
    /// Instrument channels in `[0, 64)`.
    pub channels: Vec<i32>,
    /// Temperatures in `[-40, 40)`.
    pub temps: Vec<f64>,
    /// Observation times, non-decreasing.
    pub times: Vec<i32>,
}

/// Generate `n` observations from `seed`.
pub fn observations(n: usize, seed: u64) -> ObservationColumns {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut columns = ObservationColumns {
        lats: Vec::with_capacity(n),
        lons: Vec::with_capacity(n),
        stat_ids: Vec::with_capacity(n),
        channels: Vec::with_capacity(n),
        temps: Vec::with_capacity(n),
        times: Vec::with_capacity(n),
    };
    let mut time = 1_710_460_225i32;
    for _ in 0..n {
        columns.lats.push(rng.random_range(-90.0..90.0));
        columns.lons.push(rng.random_range(-180.0..180.0));
        columns.stat_ids.push(format!("{:05}", rng.random_range(0..500u32)));
        columns.channels.push(rng.random_range(0..64));
        columns.temps.push(rng.random::<f64>() * 80.0 - 40.0);
        time = time.saturating_add(rng.random_range(0..3));
        columns.times.push(time);
    }
    columns
}

/// Load generated columns into an empty table.
pub fn load<F: Frame>(frame: &mut F, columns: ObservationColumns) -> Result<(), FrameError> {
    frame.append_new_column("lat", columns.lats)?;
    frame.append_new_column("lon", columns.lons)?;
    frame.append_new_column("StatId", columns.stat_ids)?;
    frame.append_new_column("channel", columns.channels)?;
    frame.append_new_column("temp", columns.temps)?;
    frame.append_new_column("time", columns.times)
}

/// 10K-row row-major table.
pub fn reference_rows(seed: u64) -> Result<FrameRows, FrameError> {
    let mut frame = FrameRows::new();
    load(&mut frame, observations(REFERENCE_ROWS, seed))?;
    Ok(frame)
}

/// 10K-row column-major table.
pub fn reference_cols(seed: u64) -> Result<FrameCols, FrameError> {
    let mut frame = FrameCols::new();
    load(&mut frame, observations(REFERENCE_ROWS, seed))?;
    Ok(frame)
}

/// 100K-row column-major table.
pub fn stress_cols(seed: u64) -> Result<FrameCols, FrameError> {
    let mut frame = FrameCols::new();
    load(&mut frame, observations(STRESS_ROWS, seed))?;
    Ok(frame)
}
