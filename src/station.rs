//! Station, module and account metadata from `getstationsdata`.

use serde::Deserialize;

/// Location of a weather station.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub altitude: i64,
    #[serde(default)]
    pub city: String,
    /// Country code, e.g. `JP`
    #[serde(default)]
    pub country: String,
    /// TZ database name, e.g. `Asia/Tokyo`
    #[serde(default)]
    pub timezone: String,
    /// Coordinates as reported by the API
    #[serde(default)]
    pub location: Vec<f64>,
}

impl Place {
    /// First coordinate, if the location is a pair.
    pub fn latitude(&self) -> Option<f64> {
        match self.location.as_slice() {
            [lat, _] => Some(*lat),
            _ => None,
        }
    }

    /// Second coordinate, if the location is a pair.
    pub fn longitude(&self) -> Option<f64> {
        match self.location.as_slice() {
            [_, lon] => Some(*lon),
            _ => None,
        }
    }
}

/// Latest readings cached by the API for a device or module.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(rename = "time_utc", default)]
    pub utc_time: i64,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
    #[serde(rename = "min_temp")]
    pub min_temperature: Option<f64>,
    #[serde(rename = "max_temp")]
    pub max_temperature: Option<f64>,
    #[serde(rename = "date_min_temp")]
    pub min_temperature_time: Option<i64>,
    #[serde(rename = "date_max_temp")]
    pub max_temperature_time: Option<i64>,
    #[serde(rename = "temp_trend")]
    pub temperature_trend: Option<String>,
    #[serde(rename = "CO2")]
    pub co2: Option<i64>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<i64>,
    #[serde(rename = "Noise")]
    pub noise: Option<i64>,
    #[serde(rename = "Pressure")]
    pub pressure: Option<f64>,
    #[serde(rename = "AbsolutePressure")]
    pub absolute_pressure: Option<f64>,
    #[serde(rename = "pressure_trend")]
    pub pressure_trend: Option<String>,
    #[serde(rename = "Rain")]
    pub rain: Option<f64>,
    #[serde(rename = "sum_rain_1")]
    pub rain_per_hour: Option<f64>,
    #[serde(rename = "sum_rain_24")]
    pub rain_per_day: Option<f64>,
    #[serde(rename = "GustAngle")]
    pub gust_angle: Option<i64>,
    #[serde(rename = "GustStrength")]
    pub gust_strength: Option<i64>,
    #[serde(rename = "WindAngle")]
    pub wind_angle: Option<i64>,
    #[serde(rename = "WindStrength")]
    pub wind_strength: Option<i64>,
    #[serde(rename = "max_wind_str")]
    pub max_wind_strength: Option<i64>,
    #[serde(rename = "date_max_wind_str")]
    pub max_wind_strength_time: Option<i64>,
    #[serde(rename = "health_idx")]
    pub health_index: Option<i64>,
}

/// A module paired with a base station (outdoor, wind gauge, rain gauge, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub module_name: String,
    #[serde(rename = "data_type")]
    pub data_types: Vec<String>,
    #[serde(rename = "last_setup")]
    pub last_setup_time: i64,
    pub reachable: bool,
    pub firmware: i64,
    #[serde(rename = "last_message")]
    pub last_message_time: i64,
    #[serde(rename = "last_seen")]
    pub last_seen_time: i64,
    pub rf_status: i64,
    pub battery_vp: i64,
    pub battery_percent: i64,
    pub dashboard_data: Option<DashboardData>,
}

/// A base station and its modules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(rename = "_id")]
    pub id: String,
    pub cipher_id: String,
    #[serde(rename = "date_setup")]
    pub setup_time: i64,
    #[serde(rename = "last_setup")]
    pub last_setup_time: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "last_status_store")]
    pub last_status_store_time: i64,
    pub module_name: String,
    pub firmware: i64,
    #[serde(rename = "last_upgrade")]
    pub last_upgrade_time: i64,
    pub wifi_status: i64,
    pub reachable: bool,
    pub co2_calibrating: bool,
    pub station_name: String,
    #[serde(rename = "data_type")]
    pub data_types: Vec<String>,
    pub place: Place,
    pub dashboard_data: Option<DashboardData>,
    pub modules: Vec<Module>,
}

impl Device {
    pub fn has_data_type(&self, data_type: &str) -> bool {
        self.data_types.iter().any(|t| t == data_type)
    }
}

impl Module {
    pub fn has_data_type(&self, data_type: &str) -> bool {
        self.data_types.iter().any(|t| t == data_type)
    }
}

/// Account preferences. Codes are described by the `describe_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Administrative {
    /// User locale
    #[serde(rename = "lang")]
    pub language: String,
    /// Regional preference used for displaying dates
    #[serde(rename = "reg_locale")]
    pub display_locale: String,
    pub country: String,
    pub unit: i64,
    #[serde(rename = "windunit")]
    pub wind_unit: i64,
    #[serde(rename = "pressureunit")]
    pub pressure_unit: i64,
    #[serde(rename = "feel_like_algo")]
    pub feel_like_algorithm: i64,
}

impl Administrative {
    pub fn describe_unit(&self) -> String {
        match self.unit {
            0 => "metric system".into(),
            1 => "imperial system".into(),
            n => format!("unknown unit: {n}"),
        }
    }

    pub fn describe_wind_unit(&self) -> String {
        match self.wind_unit {
            0 => "kph".into(),
            1 => "mph".into(),
            2 => "ms".into(),
            3 => "beaufort".into(),
            4 => "knot".into(),
            n => format!("unknown wind unit: {n}"),
        }
    }

    pub fn describe_pressure_unit(&self) -> String {
        match self.pressure_unit {
            0 => "mbar".into(),
            1 => "inHg".into(),
            2 => "mmHg".into(),
            n => format!("unknown pressure unit: {n}"),
        }
    }

    /// Algorithm used to compute the "feels like" temperature.
    pub fn describe_feel_like_algorithm(&self) -> String {
        match self.feel_like_algorithm {
            0 => "humidex".into(),
            1 => "heat-index".into(),
            n => format!("unknown feel like algorithm: {n}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub mail: String,
    pub administrative: Administrative,
}

/// Body of a `getstationsdata` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StationsData {
    pub devices: Vec<Device>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::StationsDataResponse;
    use crate::test_utils::STATIONS_JSON;

    #[test]
    fn test_parse_stations_data() {
        let resp: StationsDataResponse = serde_json::from_str(STATIONS_JSON).unwrap();
        let data = resp.body;

        assert_eq!(data.user.mail, "someone@example.com");
        assert_eq!(data.user.administrative.language, "ja-JP");
        assert_eq!(data.devices.len(), 1);

        let device = &data.devices[0];
        assert_eq!(device.id, "70:ee:50:00:00:01");
        assert_eq!(device.station_name, "Home");
        assert_eq!(device.place.city, "千代田区");
        assert!(device.has_data_type("CO2"));
        assert!(!device.has_data_type("Rain"));

        let dashboard = device.dashboard_data.as_ref().unwrap();
        assert_eq!(dashboard.temperature, Some(22.3));
        assert_eq!(dashboard.co2, Some(612));
        assert_eq!(dashboard.temperature_trend.as_deref(), Some("stable"));

        assert_eq!(device.modules.len(), 1);
        let module = &device.modules[0];
        assert_eq!(module.id, "02:00:00:00:00:02");
        assert_eq!(module.kind, "NAModule1");
        assert_eq!(module.battery_percent, 78);
        assert!(module.has_data_type("Humidity"));
        assert!(!module.has_data_type("CO2"));
        assert!(module.dashboard_data.is_none());
    }

    #[test]
    fn test_place_coordinates_require_pair() {
        let place = Place {
            location: vec![139.752778, 35.6825],
            ..Place::default()
        };
        assert_eq!(place.latitude(), Some(139.752778));
        assert_eq!(place.longitude(), Some(35.6825));

        let place = Place {
            location: vec![139.752778],
            ..Place::default()
        };
        assert_eq!(place.latitude(), None);
        assert_eq!(place.longitude(), None);
    }

    #[test]
    fn test_describe_units() {
        let admin = Administrative {
            unit: 1,
            wind_unit: 3,
            pressure_unit: 2,
            feel_like_algorithm: 0,
            ..Administrative::default()
        };
        assert_eq!(admin.describe_unit(), "imperial system");
        assert_eq!(admin.describe_wind_unit(), "beaufort");
        assert_eq!(admin.describe_pressure_unit(), "mmHg");
        assert_eq!(admin.describe_feel_like_algorithm(), "humidex");
    }

    #[test]
    fn test_describe_unknown_codes() {
        let admin = Administrative {
            unit: 7,
            wind_unit: 9,
            pressure_unit: -1,
            feel_like_algorithm: 5,
            ..Administrative::default()
        };
        assert_eq!(admin.describe_unit(), "unknown unit: 7");
        assert_eq!(admin.describe_wind_unit(), "unknown wind unit: 9");
        assert_eq!(admin.describe_pressure_unit(), "unknown pressure unit: -1");
        assert_eq!(
            admin.describe_feel_like_algorithm(),
            "unknown feel like algorithm: 5"
        );
    }
}
