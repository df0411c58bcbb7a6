// keep in sync with the cloud function request schemas

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    pub farm_name: String,
    pub device_name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeResponse {
    pub registration_code: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct DeviceCapabilities {
    pub temperature: bool,
    pub humidity: bool,
    pub co2: bool,
    pub distance: bool,
    pub ble: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    pub device_id: String,
    pub registration_code: String,
    pub device_type: String,
    pub capabilities: DeviceCapabilities,
    pub sensor_mode: u8,
    pub mac_address: String,
}

// The ingestion endpoint accepts the field names the device firmware
// sends: identity fields in camelCase, measurements in snake_case.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorUpload {
    pub device_id: String,
    pub timestamp: i64, // ms
    pub temperature: f32,
    pub humidity: f32, // percent
    pub co2: f32,      // ppm
    pub distance1: f32, // cm
    pub distance2: f32, // cm
    #[serde(rename = "distance_avg")]
    pub distance_avg: f32, // cm, grain level
    #[serde(rename = "outdoor_temperature", skip_serializing_if = "Option::is_none")]
    pub outdoor_temperature: Option<f32>,
    #[serde(rename = "wifi_rssi")]
    pub wifi_rssi: i32, // dBm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f32>, // percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>, // s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_connected: Option<bool>,
}
