//! Core application runner (business logic) for `netatmo-weather`.
//!
//! This module is intentionally decoupled from CLI parsing, authentication and
//! process exit codes so it can be tested deterministically with a fake API.

use crate::alias::{Alias, AliasMap};
use crate::client::{ApiError, Credentials, WeatherApi};
use crate::measurement::Measurement;
use crate::output::influxdb::InfluxDbFormatter;
use crate::output::table::TableFormatter;
use crate::output::{Format, OutputFormatter, report};
use chrono::Utc;
use clap::Parser;
use std::io;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

/// Command-line configuration.
///
/// Without `--device` the station listing is printed. With a device, the
/// newest record is printed, or every record of the last `--ago` window.
#[derive(Parser, Debug, Clone)]
#[command(author, about, version)]
pub struct Options {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Device id (MAC address of the base station)
    #[arg(short = 'd', long = "device")]
    pub device_id: Option<String>,

    /// Module id (MAC address); defaults to the device id
    #[arg(short = 'm', long = "module")]
    pub module_id: Option<String>,

    /// Fetch every record of this window instead of only the newest.
    /// Accepts duration with suffix: 90s, 30m, 2h. Without suffix, minutes.
    #[arg(short = 'a', long, value_parser = crate::duration::parse_duration)]
    pub ago: Option<Duration>,

    /// Output format for measurements
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// The name of the measurement in InfluxDB line protocol.
    #[arg(long, default_value = "netatmo_measurement")]
    pub influxdb_measurement: String,

    /// Specify human-readable alias for a module id.
    /// Format: --alias 02:00:00:00:00:02=Garden
    #[arg(long = "alias", value_parser = crate::alias::parse_alias, value_name = "ALIAS")]
    pub aliases: Vec<Alias>,

    /// Verbose output, log requests and skipped records
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Errors returned by the core run loop.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("look-back window of {0}s is out of range")]
    InvalidRange(u64),
}

fn formatter_for(options: &Options) -> Box<dyn OutputFormatter> {
    match options.format {
        Format::Table => Box::new(TableFormatter::new()),
        Format::Influxdb => Box::new(InfluxDbFormatter::new(
            options.influxdb_measurement.clone(),
        )),
    }
}

fn write_measurements(
    formatter: &dyn OutputFormatter,
    measurements: &[Measurement],
    name: &str,
    verbose: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    if let Some(header) = formatter.header() {
        writeln!(out, "{header}")?;
    }
    for m in measurements {
        match formatter.format(m, name) {
            Some(line) => writeln!(out, "{line}")?,
            None if verbose => writeln!(err, "skipping {}: no values reported", m.timestamp)?,
            None => {}
        }
    }
    Ok(())
}

/// Run one query, writing formatted output to `out` and verbose notes to `err`.
///
/// - Without a device id, writes the station report.
/// - With `options.ago` of at least one second, writes every record in
///   `[now - ago, now]`.
/// - Otherwise writes the newest record, or `No Data` if there is none.
pub async fn run_with_io(
    options: Options,
    api: &dyn WeatherApi,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), RunError> {
    let Some(device_id) = options.device_id.as_deref().filter(|d| !d.is_empty()) else {
        let data = api.stations_data().await?;
        tracing::debug!(devices = data.devices.len(), "fetched stations");
        report::write_stations(&data, out)?;
        return Ok(());
    };
    let module_id = options
        .module_id
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(device_id);

    let aliases: AliasMap = crate::alias::to_map(&options.aliases);
    let name = crate::alias::resolve_name(module_id, &aliases);
    let formatter = formatter_for(&options);

    match options.ago.map(|ago| ago.as_secs()).filter(|&secs| secs > 0) {
        Some(secs) => {
            let end = Utc::now().timestamp();
            let begin = i64::try_from(secs)
                .ok()
                .and_then(|secs| end.checked_sub(secs))
                .ok_or(RunError::InvalidRange(secs))?;

            let set = api.measure_range(device_id, module_id, begin, end).await?;
            tracing::debug!(records = set.len(), begin, end, "fetched measure range");
            write_measurements(
                formatter.as_ref(),
                set.range(),
                name,
                options.verbose,
                out,
                err,
            )?;
        }
        None => match api.measure_newest(device_id, module_id).await? {
            Some(m) => write_measurements(
                formatter.as_ref(),
                std::slice::from_ref(&m),
                name,
                options.verbose,
                out,
                err,
            )?,
            None => writeln!(out, "No Data")?,
        },
    }

    Ok(())
}
