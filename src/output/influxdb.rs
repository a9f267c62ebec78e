//! InfluxDB line protocol output formatter.

use crate::measurement::{Measurement, MetricValue};
use crate::output::OutputFormatter;
use std::fmt;

/// Field values for InfluxDB line protocol
#[derive(Debug, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Float(num) => write!(f, "{num}"),
            FieldValue::Integer(num) => write!(f, "{num}i"),
        }
    }
}

impl From<MetricValue> for FieldValue {
    fn from(value: MetricValue) -> Self {
        match value {
            MetricValue::Float(v) => FieldValue::Float(v),
            MetricValue::Integer(v) => FieldValue::Integer(v),
        }
    }
}

/// Data point in InfluxDB line protocol.
///
/// Tags and fields are written in the order given.
#[derive(Debug)]
pub struct DataPoint<'a> {
    pub measurement: &'a str,
    pub tag_set: Vec<(&'static str, &'a str)>,
    pub field_set: Vec<(&'static str, FieldValue)>,
    /// Seconds since the Unix epoch
    pub timestamp: Option<i64>,
}

/// Escape commas, equals signs and spaces in tag values.
fn escape_tag(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | '=' | ' ') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn fmt_tags(data_point: &DataPoint, fmt: &mut fmt::Formatter) -> fmt::Result {
    for (key, value) in data_point.tag_set.iter() {
        write!(fmt, ",{}={}", key, escape_tag(value))?;
    }
    Ok(())
}

fn fmt_fields(data_point: &DataPoint, fmt: &mut fmt::Formatter) -> fmt::Result {
    let mut first = true;
    for (key, value) in data_point.field_set.iter() {
        if first {
            first = false;
        } else {
            write!(fmt, ",")?;
        }
        write!(fmt, "{}={}", key, value)?;
    }
    Ok(())
}

fn fmt_timestamp(data_point: &DataPoint, fmt: &mut fmt::Formatter) -> fmt::Result {
    if let Some(secs) = data_point.timestamp {
        write!(fmt, " {}", i128::from(secs) * 1_000_000_000)?;
    }
    Ok(())
}

impl fmt::Display for DataPoint<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.measurement)?;
        fmt_tags(self, fmt)?;
        write!(fmt, " ")?;
        fmt_fields(self, fmt)?;
        fmt_timestamp(self, fmt)
    }
}

/// InfluxDB line protocol formatter.
///
/// Tags are `device`, `module` and `name`; fields are the present metrics
/// with snake_case keys. Integral metrics are written as integer fields.
pub struct InfluxDbFormatter {
    /// The measurement name in InfluxDB
    measurement_name: String,
}

impl InfluxDbFormatter {
    /// Create a new InfluxDB formatter.
    ///
    /// # Arguments
    /// * `measurement_name` - The measurement name to use in the line protocol
    pub fn new(measurement_name: String) -> Self {
        Self { measurement_name }
    }

    fn to_data_point<'a>(&'a self, m: &'a Measurement, name: &'a str) -> DataPoint<'a> {
        DataPoint {
            measurement: &self.measurement_name,
            tag_set: vec![
                ("device", m.device_id.as_str()),
                ("module", m.module_id.as_str()),
                ("name", name),
            ],
            field_set: m
                .values()
                .map(|(metric, value)| (metric.field_name(), value.into()))
                .collect(),
            timestamp: Some(m.timestamp),
        }
    }
}

impl OutputFormatter for InfluxDbFormatter {
    fn format(&self, measurement: &Measurement, name: &str) -> Option<String> {
        let point = self.to_data_point(measurement, name);
        // Line protocol rejects points without fields.
        if point.field_set.is_empty() {
            return None;
        }
        Some(point.to_string())
    }
}
