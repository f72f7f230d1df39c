//! Test utilities for osdf development.
//!
//! Provides the observation sample table used across the test suites,
//! helpers to load it into either layout, proptest strategies for random
//! tables, and a tracing subscriber for test output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{extra_row, observation_cols, observation_rows, populate, Observations};

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
