//! metar-core: Pure decode library for METAR/SPECI aviation weather reports.
//!
//! No async and no network. Decoding is a single left-to-right pass over the
//! report fields; only `config` touches the filesystem. This crate is the
//! shared core used by the `metar` CLI.

pub mod abbrev;
pub mod cloud;
pub mod config;
pub mod cursor;
pub mod decode;
pub mod rvr;
pub mod tables;
pub mod types;
pub mod weather;
pub mod wind;

// Re-export commonly used types at crate root
pub use decode::decode_metar;
pub use rvr::{parse_rvr, parse_rvr_all};
pub use types::*;
