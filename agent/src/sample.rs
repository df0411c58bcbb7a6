use chrono::Utc;
use common::req::SensorUpload;
use rand::Rng;

pub const DEMO_DEVICE_NAME: &str = "Demo Sensor";
pub const DEMO_FARM_NAME: &str = "My Test Farm";
pub const DEMO_MAC: &str = "AA:BB:CC:DD:EE:FF";

pub fn ms_since_epoch() -> i64 {
    Utc::now().timestamp_millis()
}

/// The minimal reading the firmware sends right after registration.
pub fn demo_upload(device_id: &str) -> SensorUpload {
    SensorUpload {
        device_id: device_id.to_owned(),
        timestamp: ms_since_epoch(),
        temperature: 22.5,
        humidity: 65.2,
        co2: 850.0,
        distance1: 450.0,
        distance2: 380.0,
        distance_avg: 415.0,
        outdoor_temperature: None,
        wifi_rssi: -45,
        device_name: None,
        farm_name: None,
        sensor_mode: None,
        battery_level: None,
        mac_address: None,
        uptime: None,
        is_connected: None,
    }
}

/// A fully-populated reading with every field the firmware can send.
pub fn probe_upload(device_id: &str) -> SensorUpload {
    SensorUpload {
        device_id: device_id.to_owned(),
        timestamp: ms_since_epoch(),
        temperature: 22.5,
        humidity: 65.2,
        co2: 850.0,
        distance1: 450.0,
        distance2: 380.0,
        distance_avg: 415.0,
        outdoor_temperature: None,
        wifi_rssi: -45,
        device_name: Some(DEMO_DEVICE_NAME.to_owned()),
        farm_name: Some(DEMO_FARM_NAME.to_owned()),
        sensor_mode: Some(0),
        battery_level: Some(85.0),
        mac_address: Some(DEMO_MAC.to_owned()),
        uptime: Some(12345),
        is_connected: Some(true),
    }
}

/// A randomized reading in the ranges the live device produces.
pub fn random_upload(device_id: &str, timestamp: i64, uptime: u64) -> SensorUpload {
    let mut rng = rand::rng();
    SensorUpload {
        device_id: device_id.to_owned(),
        timestamp,
        temperature: 22.0 + rng.random_range(0.0..4.0), // 22-26 °C
        humidity: 60.0 + rng.random_range(0.0..20.0),   // 60-80 %
        co2: 400.0 + rng.random_range(0.0..50.0),       // 400-450 ppm
        distance1: 145.0 + rng.random_range(0.0..10.0), // cm
        distance2: 143.0 + rng.random_range(0.0..10.0),
        distance_avg: 144.0 + rng.random_range(0.0..10.0),
        outdoor_temperature: Some(15.0 + rng.random_range(0.0..10.0)),
        wifi_rssi: -40 - rng.random_range(0..20), // -40 to -60 dBm
        device_name: Some(DEMO_DEVICE_NAME.to_owned()),
        farm_name: Some(DEMO_FARM_NAME.to_owned()),
        sensor_mode: Some(1),
        battery_level: Some(80.0 + rng.random_range(0.0..20.0)),
        mac_address: Some(DEMO_MAC.to_owned()),
        uptime: Some(uptime),
        is_connected: Some(true),
    }
}
