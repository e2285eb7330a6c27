//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod socket_guard;

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Airport listing captured from the NFDC display page, reduced to the chart block.
pub const KORD_LISTING: &str = include_str!("../fixtures/kord_listing.html");

/// Gzip-compresses `data`.
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("gzip write");
    encoder.finish().expect("gzip finish")
}
