//! The fixed set of metrics requested from `getmeasure`.
//!
//! [`METRICS`] is the single source of truth for column order. The query
//! builder joins it into the `type` parameter and the decoder maps row columns
//! back through it, so the two can never drift apart.

use std::fmt;

/// A measurable quantity reported by a Netatmo station or module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Temperature in °C
    Temperature,
    /// CO2 concentration in ppm
    Co2,
    /// Relative humidity in percent
    Humidity,
    /// Sea-level pressure in mbar
    Pressure,
    /// Noise level in dB
    Noise,
    /// Average wind speed in km/h
    WindStrength,
    /// Wind direction in degrees
    WindAngle,
    /// Gust speed in km/h
    GustStrength,
    /// Gust direction in degrees
    GustAngle,
}

/// Whether a metric carries fractional or integral readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Float,
    Integer,
}

/// Requested metrics, in the column order the API returns them.
pub const METRICS: [Metric; 9] = [
    Metric::Temperature,
    Metric::Co2,
    Metric::Humidity,
    Metric::Pressure,
    Metric::Noise,
    Metric::WindStrength,
    Metric::WindAngle,
    Metric::GustStrength,
    Metric::GustAngle,
];

impl Metric {
    /// Name used by the Netatmo API in the `type` query parameter.
    pub const fn api_name(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Co2 => "CO2",
            Metric::Humidity => "Humidity",
            Metric::Pressure => "Pressure",
            Metric::Noise => "Noise",
            Metric::WindStrength => "WindStrength",
            Metric::WindAngle => "WindAngle",
            Metric::GustStrength => "GustStrength",
            Metric::GustAngle => "GustAngle",
        }
    }

    /// snake_case name for line protocol field keys.
    pub const fn field_name(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Co2 => "co2",
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
            Metric::Noise => "noise",
            Metric::WindStrength => "wind_strength",
            Metric::WindAngle => "wind_angle",
            Metric::GustStrength => "gust_strength",
            Metric::GustAngle => "gust_angle",
        }
    }

    pub const fn kind(self) -> MetricKind {
        match self {
            Metric::Temperature | Metric::Pressure => MetricKind::Float,
            _ => MetricKind::Integer,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// The `type` parameter for a `getmeasure` request, e.g. `Temperature,CO2,...`.
pub fn measure_types() -> String {
    METRICS
        .iter()
        .map(|m| m.api_name())
        .collect::<Vec<_>>()
        .join(",")
}
