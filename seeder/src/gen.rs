use crate::db::NewSensorReading;
use rand::Rng;

pub const READINGS_PER_DEVICE: usize = 10;

const HOUR_MS: i64 = 3_600_000;

/// Baselines for one device's synthetic history.
pub struct DeviceProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub bin_type: &'static str,
    pub humidity_base: f32,
    pub co2_base: f32,
    pub temperature_base: f32,
    pub lidar_base: f32,
}

pub const DEVICE_PROFILES: [DeviceProfile; 2] = [
    DeviceProfile {
        id: "DEV001",
        name: "Greenhouse #1",
        bin_type: "soy",
        humidity_base: 60.0,
        co2_base: 400.0,
        temperature_base: 22.0,
        lidar_base: 150.0,
    },
    DeviceProfile {
        id: "DEV002",
        name: "Greenhouse #2",
        bin_type: "wheat",
        humidity_base: 65.0,
        co2_base: 420.0,
        temperature_base: 23.0,
        lidar_base: 140.0,
    },
];

/// Historical readings for one device, newest first, one hour apart.
pub fn synth_readings(
    profile: &DeviceProfile,
    base_ms: i64,
    count: usize,
) -> Vec<NewSensorReading> {
    let mut rng = rand::rng();

    (0..count)
        .map(|i| NewSensorReading {
            id: format!("{}_reading_{}", profile.id, i),
            device_id: profile.id.to_owned(),
            timestamp: base_ms - i as i64 * HOUR_MS,
            humidity: Some(profile.humidity_base + rng.random_range(-2.0..=2.0)),
            co2_concentration: Some(profile.co2_base + i as f32 * 5.0),
            temperature: Some(profile.temperature_base + rng.random_range(-0.5..=0.5)),
            lidar_distance: Some(profile.lidar_base - i as f32),
        })
        .collect()
}
