//! Column-aligned text output.

use crate::measurement::Measurement;
use crate::metric::{METRICS, Metric};
use crate::output::{OutputFormatter, format_epoch};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const TIMESTAMP_WIDTH: usize = 19;
const MIN_COLUMN_WIDTH: usize = 6;

/// Table formatter: `Timestamp` followed by one column per metric.
///
/// Absent values are printed as `null`. Times are UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn width(metric: Metric) -> usize {
        metric.api_name().len().max(MIN_COLUMN_WIDTH)
    }

    fn join(first: String, cells: impl Iterator<Item = (Metric, String)>) -> String {
        let mut line = format!("{first:<TIMESTAMP_WIDTH$}");
        for (metric, cell) in cells {
            line.push_str("  ");
            line.push_str(&format!("{cell:<width$}", width = Self::width(metric)));
        }
        line.trim_end().to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn header(&self) -> Option<String> {
        Some(Self::join(
            "Timestamp".to_string(),
            METRICS.iter().map(|&m| (m, m.api_name().to_string())),
        ))
    }

    fn format(&self, measurement: &Measurement, _name: &str) -> Option<String> {
        Some(Self::join(
            format_epoch(measurement.timestamp, TIMESTAMP_FORMAT),
            METRICS.iter().map(|&m| {
                let cell = measurement
                    .get(m)
                    .map_or_else(|| "null".to_string(), |v| v.to_string());
                (m, cell)
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::base_measurement;

    #[test]
    fn test_header_lists_metrics_in_order() {
        let header = TableFormatter::new().header().unwrap();
        let columns: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(
            columns,
            vec![
                "Timestamp",
                "Temperature",
                "CO2",
                "Humidity",
                "Pressure",
                "Noise",
                "WindStrength",
                "WindAngle",
                "GustStrength",
                "GustAngle"
            ]
        );
    }

    #[test]
    fn test_row_prints_null_for_absent() {
        let mut m = base_measurement(1000);
        m.temperature = Some(21.5);
        m.humidity = Some(55);
        m.pressure = Some(1013.0);

        let row = TableFormatter::new().format(&m, "ignored").unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(
            cells,
            vec![
                "1970/01/01",
                "00:16:40",
                "21.5",
                "null",
                "55",
                "1013",
                "null",
                "null",
                "null",
                "null",
                "null"
            ]
        );
    }

    #[test]
    fn test_columns_align_with_header() {
        let formatter = TableFormatter::new();
        let header = formatter.header().unwrap();
        let mut m = base_measurement(1000);
        m.co2 = Some(400);
        let row = formatter.format(&m, "").unwrap();

        let header_co2 = header.find("CO2").unwrap();
        let row_co2 = row.find("400").unwrap();
        assert_eq!(header_co2, row_co2);
    }
}
