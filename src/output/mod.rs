//! Output formatters for Netatmo measurements.
//!
//! This module provides a trait for formatting measurements and implementations
//! for a human-readable table and InfluxDB line protocol. The station listing
//! has its own report writer in [`report`].

pub mod influxdb;
pub mod report;
pub mod table;

use crate::measurement::Measurement;
use chrono::{DateTime, Utc};

/// Trait for formatting measurements into output lines.
pub trait OutputFormatter: Send + Sync {
    /// Line printed once before any measurement, if the format has one.
    fn header(&self) -> Option<String> {
        None
    }

    /// Format a measurement.
    ///
    /// # Arguments
    /// * `measurement` - The measurement data to format (includes timestamp)
    /// * `name` - Display name for the module (alias or module id)
    ///
    /// # Returns
    /// The formatted line, or `None` if the measurement has nothing to output
    fn format(&self, measurement: &Measurement, name: &str) -> Option<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Aligned columns, one row per timestamp
    #[default]
    Table,
    /// InfluxDB line protocol
    Influxdb,
}

/// Render epoch seconds in UTC with the given `strftime` pattern.
pub(crate) fn format_epoch(timestamp: i64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(t) => t.format(pattern).to_string(),
        None => timestamp.to_string(),
    }
}
