//! Human-readable report of stations, modules and account settings.

use crate::output::format_epoch;
use crate::station::{DashboardData, Device, Module, StationsData, User};
use std::fmt::Display;
use std::io::{self, Write};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LABEL_WIDTH: usize = 24;

fn time(timestamp: i64) -> String {
    format_epoch(timestamp, TIME_FORMAT)
}

/// Writes `label: value` lines at a given nesting depth.
struct ReportWriter<'a> {
    out: &'a mut dyn Write,
}

impl ReportWriter<'_> {
    fn heading(&mut self, depth: usize, text: &str) -> io::Result<()> {
        writeln!(self.out, "{:indent$}{text}", "", indent = depth * 2)
    }

    fn field(&mut self, depth: usize, label: &str, value: impl Display) -> io::Result<()> {
        let label = format!("{label}:");
        writeln!(
            self.out,
            "{:indent$}{label:<LABEL_WIDTH$}{value}",
            "",
            indent = depth * 2
        )
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

/// Write the full station listing.
pub fn write_stations(data: &StationsData, out: &mut dyn Write) -> io::Result<()> {
    let mut w = ReportWriter { out };
    write_user(&mut w, &data.user)?;

    let count = data.devices.len();
    for (i, device) in data.devices.iter().enumerate() {
        w.blank()?;
        w.heading(0, &format!("Device {} of {}:", i + 1, count))?;
        write_device(&mut w, device)?;

        let modules = device.modules.len();
        for (j, module) in device.modules.iter().enumerate() {
            w.blank()?;
            w.heading(1, &format!("Module {} of {}:", j + 1, modules))?;
            write_module(&mut w, module)?;
        }
    }
    Ok(())
}

fn write_user(w: &mut ReportWriter<'_>, user: &User) -> io::Result<()> {
    let admin = &user.administrative;
    w.heading(0, "User information:")?;
    w.field(1, "Mail", &user.mail)?;
    w.field(1, "Language", &admin.language)?;
    w.field(1, "Display locale", &admin.display_locale)?;
    w.field(1, "Country", &admin.country)?;
    w.field(1, "Unit", admin.describe_unit())?;
    w.field(1, "Wind unit", admin.describe_wind_unit())?;
    w.field(1, "Pressure unit", admin.describe_pressure_unit())?;
    w.field(1, "Feel like algorithm", admin.describe_feel_like_algorithm())
}

fn write_device(w: &mut ReportWriter<'_>, d: &Device) -> io::Result<()> {
    w.field(1, "Device ID", &d.id)?;
    w.field(1, "Module name", &d.module_name)?;
    w.field(1, "Station name", &d.station_name)?;
    w.field(1, "Type", &d.kind)?;
    w.field(1, "Data types", d.data_types.join(", "))?;
    w.field(1, "Cipher ID", &d.cipher_id)?;
    w.field(1, "Firmware", d.firmware)?;
    w.field(1, "Wi-Fi status", d.wifi_status)?;
    w.field(1, "Reachable", d.reachable)?;
    w.field(1, "CO2 calibrating", d.co2_calibrating)?;
    w.field(1, "Country", &d.place.country)?;
    w.field(1, "City", &d.place.city)?;
    w.field(1, "Time zone", &d.place.timezone)?;
    w.field(1, "Altitude", d.place.altitude)?;
    match (d.place.latitude(), d.place.longitude()) {
        (Some(lat), Some(lon)) => w.field(1, "Location", format!("{lat:.6}, {lon:.6}"))?,
        _ => w.field(1, "Location", "(unknown)")?,
    }
    w.field(1, "Setup time", time(d.setup_time))?;
    w.field(1, "Last setup time", time(d.last_setup_time))?;
    w.field(1, "Last upgrade time", time(d.last_upgrade_time))?;
    w.field(1, "Last status store time", time(d.last_status_store_time))?;
    write_dashboard(w, 1, d.dashboard_data.as_ref(), &|t| d.has_data_type(t))
}

fn write_module(w: &mut ReportWriter<'_>, m: &Module) -> io::Result<()> {
    w.field(2, "Module ID", &m.id)?;
    w.field(2, "Module name", &m.module_name)?;
    w.field(2, "Type", &m.kind)?;
    w.field(2, "Data types", m.data_types.join(", "))?;
    w.field(2, "Firmware", m.firmware)?;
    w.field(2, "RF status", m.rf_status)?;
    w.field(
        2,
        "Battery",
        format!("{} % (vp: {})", m.battery_percent, m.battery_vp),
    )?;
    w.field(2, "Reachable", m.reachable)?;
    w.field(2, "Last setup time", time(m.last_setup_time))?;
    w.field(2, "Last message time", time(m.last_message_time))?;
    w.field(2, "Last seen time", time(m.last_seen_time))?;
    write_dashboard(w, 2, m.dashboard_data.as_ref(), &|t| m.has_data_type(t))
}

/// Format an optional reading, e.g. `22.3 °C`.
fn reading<T: Display>(value: Option<T>, unit: &str) -> Option<String> {
    value.map(|v| format!("{v} {unit}"))
}

fn write_dashboard(
    w: &mut ReportWriter<'_>,
    depth: usize,
    data: Option<&DashboardData>,
    has: &dyn Fn(&str) -> bool,
) -> io::Result<()> {
    let Some(data) = data else {
        return w.field(depth, "Dashboard data", "(no data)");
    };
    let depth = depth + 1;

    w.heading(depth - 1, "Dashboard data:")?;
    w.field(depth, "Time (UTC)", time(data.utc_time))?;

    let mut lines: Vec<(&str, Option<String>)> = Vec::new();
    if has("Temperature") {
        let temp = data.temperature.map(|t| {
            let trend = data.temperature_trend.as_deref().unwrap_or("-");
            format!("{t:.1} °C (trend: {trend})")
        });
        let min = data.min_temperature.map(|t| {
            let at = data.min_temperature_time.map_or_else(|| "-".into(), time);
            format!("{t:.1} °C (at {at})")
        });
        let max = data.max_temperature.map(|t| {
            let at = data.max_temperature_time.map_or_else(|| "-".into(), time);
            format!("{t:.1} °C (at {at})")
        });
        lines.push(("Temperature", temp));
        lines.push(("Minimum temperature", min));
        lines.push(("Maximum temperature", max));
    }
    if has("CO2") {
        lines.push(("CO2", reading(data.co2, "ppm")));
    }
    if has("Humidity") {
        lines.push(("Humidity", reading(data.humidity, "%")));
    }
    if has("Noise") {
        lines.push(("Noise", reading(data.noise, "db")));
    }
    if has("Pressure") {
        let pressure = data.pressure.map(|p| {
            let trend = data.pressure_trend.as_deref().unwrap_or("-");
            format!("{p:.1} mb (trend: {trend})")
        });
        lines.push(("Pressure", pressure));
        lines.push((
            "Absolute pressure",
            data.absolute_pressure.map(|p| format!("{p:.1} mb")),
        ));
    }
    if has("Rain") {
        lines.push(("Rain", data.rain.map(|r| format!("{r:.1} mm"))));
        lines.push(("Rain per hour", data.rain_per_hour.map(|r| format!("{r:.1} mm"))));
        lines.push(("Rain per day", data.rain_per_day.map(|r| format!("{r:.1} mm"))));
    }
    if has("Wind") {
        let wind = |strength: Option<i64>, angle: Option<i64>| {
            strength.map(|s| match angle {
                Some(a) => format!("{s} km/h (angle: {a} °)"),
                None => format!("{s} km/h"),
            })
        };
        lines.push(("Wind", wind(data.wind_strength, data.wind_angle)));
        lines.push(("Gust", wind(data.gust_strength, data.gust_angle)));
    }

    for (label, value) in lines {
        if let Some(value) = value {
            w.field(depth, label, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::StationsDataResponse;
    use crate::test_utils::STATIONS_JSON;

    fn report() -> String {
        let resp: StationsDataResponse = serde_json::from_str(STATIONS_JSON).unwrap();
        let mut out = Vec::new();
        write_stations(&resp.body, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn line_with<'a>(report: &'a str, label: &str) -> &'a str {
        report
            .lines()
            .find(|l| l.trim_start().starts_with(label))
            .unwrap_or_else(|| panic!("no line for {label}"))
    }

    #[test]
    fn test_report_user_block() {
        let report = report();
        assert!(report.starts_with("User information:\n"));
        assert!(line_with(&report, "Mail:").ends_with("someone@example.com"));
        assert!(line_with(&report, "Unit:").ends_with("metric system"));
        assert!(line_with(&report, "Wind unit:").ends_with("kph"));
    }

    #[test]
    fn test_report_device_and_module() {
        let report = report();
        assert!(report.contains("Device 1 of 1:"));
        assert!(report.contains("  Module 1 of 1:"));
        assert!(line_with(&report, "Station name:").ends_with("Home"));
        assert!(line_with(&report, "Location:").ends_with("139.752778, 35.682500"));
        assert!(line_with(&report, "Battery:").ends_with("78 % (vp: 5200)"));
        assert!(line_with(&report, "Setup time:").ends_with("2017-07-14 02:40:00"));
    }

    #[test]
    fn test_report_dashboard_respects_data_types() {
        let report = report();
        assert!(line_with(&report, "Temperature:").ends_with("22.3 °C (trend: stable)"));
        assert!(line_with(&report, "CO2:").ends_with("612 ppm"));
        assert!(line_with(&report, "Pressure:").ends_with("1013.4 mb (trend: up)"));
        // Not advertised by the device
        assert!(!report.contains("Rain:"));
        assert!(!report.contains("Wind:"));
    }

    #[test]
    fn test_report_module_without_dashboard() {
        let report = report();
        let line = report
            .lines()
            .rev()
            .find(|l| l.contains("Dashboard data:"))
            .unwrap();
        assert!(line.ends_with("(no data)"));
        assert!(line.starts_with("    "));
    }
}
