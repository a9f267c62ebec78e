//! `netatmo-weather` library.
//!
//! The binary (`src/main.rs`) is responsible for CLI parsing, logging setup and
//! process exit codes. Decoding of `getmeasure` payloads lives in
//! [`crate::decode`] and is free of I/O; [`crate::client`] wraps it with the
//! HTTP and OAuth plumbing, and [`crate::app`] ties both to the output formats.

pub mod alias;
pub mod app;
pub mod client;
pub mod decode;
pub mod duration;
pub mod measurement;
pub mod metric;
pub mod output;
pub mod response;
pub mod sentinel;
pub mod station;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types at the crate root
pub use alias::{Alias, AliasMap, parse_alias, resolve_name, to_map};
pub use client::{ApiError, Client, Credentials, MeasureWindow, WeatherApi};
pub use decode::{DecodeError, decode_measure, expand_blocks};
pub use measurement::{Measurement, MeasurementSet, MetricValue};
pub use metric::{METRICS, Metric, MetricKind};
pub use output::OutputFormatter;
pub use output::influxdb::InfluxDbFormatter;
pub use output::table::TableFormatter;
pub use station::{Device, Module, StationsData, User};
