use crate::measurement::Measurement;

/// Stable identifiers for unit tests.
pub const TEST_DEVICE: &str = "70:ee:50:00:00:01";
pub const TEST_MODULE: &str = "02:00:00:00:00:02";

/// A `getmeasure` payload with two rows, the second exercising the zero sentinel.
pub const MEASURE_JSON: &str = r#"{
    "body": [{
        "beg_time": 1000,
        "step_time": 60,
        "value": [
            [21.5, null, 55, 1013.0, null, null, null, null, null],
            [0.0, 400, 0, 1012.5, 30, null, null, null, null]
        ]
    }],
    "status": "ok",
    "time_exec": 0.02,
    "time_server": 1100
}"#;

/// A `getstationsdata` payload with one station and one outdoor module.
pub const STATIONS_JSON: &str = r#"{
    "body": {
        "devices": [{
            "_id": "70:ee:50:00:00:01",
            "cipher_id": "enc:16:abcdef",
            "date_setup": 1500000000,
            "last_setup": 1500000000,
            "type": "NAMain",
            "last_status_store": 1700000000,
            "module_name": "Living room",
            "firmware": 181,
            "last_upgrade": 1600000000,
            "wifi_status": 42,
            "reachable": true,
            "co2_calibrating": false,
            "station_name": "Home",
            "data_type": ["Temperature", "CO2", "Humidity", "Noise", "Pressure"],
            "place": {
                "altitude": 40,
                "city": "千代田区",
                "country": "JP",
                "timezone": "Asia/Tokyo",
                "location": [139.752778, 35.6825]
            },
            "dashboard_data": {
                "time_utc": 1700000000,
                "Temperature": 22.3,
                "CO2": 612,
                "Humidity": 48,
                "Noise": 37,
                "Pressure": 1013.4,
                "AbsolutePressure": 1008.6,
                "min_temp": 20.1,
                "max_temp": 23.0,
                "date_min_temp": 1699990000,
                "date_max_temp": 1699999000,
                "temp_trend": "stable",
                "pressure_trend": "up"
            },
            "modules": [{
                "_id": "02:00:00:00:00:02",
                "type": "NAModule1",
                "module_name": "Garden",
                "data_type": ["Temperature", "Humidity"],
                "last_setup": 1500000100,
                "reachable": false,
                "firmware": 50,
                "last_message": 1699999000,
                "last_seen": 1699998000,
                "rf_status": 70,
                "battery_vp": 5200,
                "battery_percent": 78
            }]
        }],
        "user": {
            "mail": "someone@example.com",
            "administrative": {
                "lang": "ja-JP",
                "reg_locale": "ja-JP",
                "country": "JP",
                "unit": 0,
                "windunit": 0,
                "pressureunit": 0,
                "feel_like_algo": 0
            }
        }
    },
    "status": "ok",
    "time_exec": 0.05,
    "time_server": 1700000000
}"#;

/// Build a `Measurement` with every metric absent.
///
/// Tests can override just the fields they care about.
pub fn base_measurement(timestamp: i64) -> Measurement {
    Measurement::new(TEST_DEVICE, TEST_MODULE, timestamp)
}
