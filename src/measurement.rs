//! Decoded Netatmo measurement records.

use crate::metric::{METRICS, Metric, MetricKind};
use crate::sentinel::{resolve_float, resolve_int};
use std::fmt;

/// A single resolved metric reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => write!(f, "{v}"),
            MetricValue::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// One timestamp's worth of readings for a device/module pair.
///
/// Units follow the account's API defaults:
/// - Temperature in °C
/// - CO2 in ppm
/// - Humidity in percent
/// - Pressure in mbar
/// - Noise in dB
/// - Wind and gust strength in km/h, angles in degrees
///
/// A reading of exactly zero is reported as `None`, see [`crate::sentinel`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement {
    pub device_id: String,
    pub module_id: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    pub temperature: Option<f64>,
    pub co2: Option<i64>,
    pub humidity: Option<i64>,
    pub pressure: Option<f64>,
    pub noise: Option<i64>,
    pub wind_strength: Option<i64>,
    pub wind_angle: Option<i64>,
    pub gust_strength: Option<i64>,
    pub gust_angle: Option<i64>,
}

impl Measurement {
    /// Create a record with every metric absent.
    pub fn new(device_id: &str, module_id: &str, timestamp: i64) -> Self {
        Self {
            device_id: device_id.to_owned(),
            module_id: module_id.to_owned(),
            timestamp,
            ..Self::default()
        }
    }

    /// Look up a metric by name.
    pub fn get(&self, metric: Metric) -> Option<MetricValue> {
        let int = |v: Option<i64>| v.map(MetricValue::Integer);
        match metric {
            Metric::Temperature => self.temperature.map(MetricValue::Float),
            Metric::Co2 => int(self.co2),
            Metric::Humidity => int(self.humidity),
            Metric::Pressure => self.pressure.map(MetricValue::Float),
            Metric::Noise => int(self.noise),
            Metric::WindStrength => int(self.wind_strength),
            Metric::WindAngle => int(self.wind_angle),
            Metric::GustStrength => int(self.gust_strength),
            Metric::GustAngle => int(self.gust_angle),
        }
    }

    /// Iterate over present metrics in column order.
    pub fn values(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        METRICS
            .iter()
            .filter_map(move |&m| self.get(m).map(|v| (m, v)))
    }

    /// Store a raw cell for `metric`, applying sentinel resolution for its kind.
    pub(crate) fn set_raw(&mut self, metric: Metric, cell: Option<f64>) {
        match metric.kind() {
            MetricKind::Float => {
                if let Some(slot) = self.float_slot(metric) {
                    *slot = resolve_float(cell);
                }
            }
            MetricKind::Integer => {
                if let Some(slot) = self.int_slot(metric) {
                    *slot = resolve_int(cell);
                }
            }
        }
    }

    fn float_slot(&mut self, metric: Metric) -> Option<&mut Option<f64>> {
        match metric {
            Metric::Temperature => Some(&mut self.temperature),
            Metric::Pressure => Some(&mut self.pressure),
            _ => None,
        }
    }

    fn int_slot(&mut self, metric: Metric) -> Option<&mut Option<i64>> {
        match metric {
            Metric::Co2 => Some(&mut self.co2),
            Metric::Humidity => Some(&mut self.humidity),
            Metric::Noise => Some(&mut self.noise),
            Metric::WindStrength => Some(&mut self.wind_strength),
            Metric::WindAngle => Some(&mut self.wind_angle),
            Metric::GustStrength => Some(&mut self.gust_strength),
            Metric::GustAngle => Some(&mut self.gust_angle),
            Metric::Temperature | Metric::Pressure => None,
        }
    }
}

/// Ordered records decoded from one `getmeasure` response.
///
/// Order is the order blocks and rows appeared in the payload. Nothing is
/// sorted, so [`MeasurementSet::newest`] means "last decoded".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementSet {
    records: Vec<Measurement>,
}

impl MeasurementSet {
    pub(crate) fn from_records(records: Vec<Measurement>) -> Self {
        Self { records }
    }

    /// Every record, in decode order.
    pub fn range(&self) -> &[Measurement] {
        &self.records
    }

    /// The last decoded record, or `None` if the response carried no rows.
    pub fn newest(&self) -> Option<&Measurement> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_newest(mut self) -> Option<Measurement> {
        self.records.pop()
    }
}

impl IntoIterator for MeasurementSet {
    type Item = Measurement;
    type IntoIter = std::vec::IntoIter<Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TEST_DEVICE, TEST_MODULE};

    #[test]
    fn test_set_raw_resolves_by_kind() {
        let mut m = Measurement::new(TEST_DEVICE, TEST_MODULE, 0);
        m.set_raw(Metric::Temperature, Some(21.5));
        m.set_raw(Metric::Humidity, Some(55.7));
        m.set_raw(Metric::WindAngle, Some(0.0));

        assert_eq!(m.temperature, Some(21.5));
        assert_eq!(m.humidity, Some(55));
        assert_eq!(m.wind_angle, None);
    }

    #[test]
    fn test_every_metric_is_stored_with_its_kind() {
        for metric in METRICS {
            let mut m = Measurement::new(TEST_DEVICE, TEST_MODULE, 0);
            m.set_raw(metric, Some(1.5));
            let expected = match metric.kind() {
                MetricKind::Float => MetricValue::Float(1.5),
                MetricKind::Integer => MetricValue::Integer(1),
            };
            assert_eq!(m.get(metric), Some(expected), "{metric}");
        }
    }

    #[test]
    fn test_values_skips_absent_in_column_order() {
        let mut m = Measurement::new(TEST_DEVICE, TEST_MODULE, 0);
        m.pressure = Some(1013.2);
        m.co2 = Some(400);

        let values: Vec<_> = m.values().collect();
        assert_eq!(
            values,
            vec![
                (Metric::Co2, MetricValue::Integer(400)),
                (Metric::Pressure, MetricValue::Float(1013.2)),
            ]
        );
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Float(1012.5).to_string(), "1012.5");
        assert_eq!(MetricValue::Float(1013.0).to_string(), "1013");
        assert_eq!(MetricValue::Integer(400).to_string(), "400");
    }

    #[test]
    fn test_newest_is_last_position_not_latest_timestamp() {
        let set = MeasurementSet::from_records(vec![
            Measurement::new(TEST_DEVICE, TEST_MODULE, 2000),
            Measurement::new(TEST_DEVICE, TEST_MODULE, 1000),
        ]);
        assert_eq!(set.newest().map(|m| m.timestamp), Some(1000));
        assert_eq!(set.range().len(), 2);
    }

    #[test]
    fn test_newest_on_empty_is_none() {
        let set = MeasurementSet::default();
        assert!(set.is_empty());
        assert!(set.newest().is_none());
        assert!(set.into_newest().is_none());
    }
}
