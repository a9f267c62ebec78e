//! Wire models for Netatmo API response envelopes.

use crate::station::StationsData;
use serde::{Deserialize, Deserializer};

/// One time-series block of a `getmeasure` response.
///
/// Row `i` of `value` was measured at `beg_time + step_time * i`. Each row has
/// one cell per requested metric, in [`crate::metric::METRICS`] order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasureBlock {
    #[serde(rename = "beg_time")]
    pub begin_time: i64,
    /// Absent when the block holds a single row.
    #[serde(rename = "step_time", default)]
    pub step_time: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: Vec<Vec<Option<f64>>>,
}

/// Envelope of a `getmeasure` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasureResponse {
    /// Required, but `null` is read as no blocks.
    #[serde(deserialize_with = "null_as_empty")]
    pub body: Vec<MeasureBlock>,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "time_exec", default)]
    pub exec_time: f64,
    #[serde(rename = "time_server", default)]
    pub server_time: i64,
}

/// Read a JSON `null` list as an empty one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope of a `getstationsdata` response.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsDataResponse {
    pub body: StationsData,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "time_exec", default)]
    pub exec_time: f64,
    #[serde(rename = "time_server", default)]
    pub server_time: i64,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: i64,
    pub message: String,
}
