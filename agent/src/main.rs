use agent::{api, sample};
use anyhow::Result;
use common::req::{DeviceCapabilities, RegisterDeviceRequest};
use log::{error, warn};

const DEMO_DEVICE_ID: &str = "demo-sensor-001";

// Device document that already exists in the backend; used when
// registration fails so the upload step can still be exercised.
const KNOWN_DEVICE_ID: &str = "JK87fJjKxZ6TgtszLcBh";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("Demo device setup");
    println!("=================");

    let client = api::client()?;

    // Step 1: registration code. Nothing else can run without one.
    println!(
        "Step 1: generating registration code for '{}'...",
        sample::DEMO_FARM_NAME
    );
    let code =
        match api::generate_code(&client, sample::DEMO_FARM_NAME, sample::DEMO_DEVICE_NAME).await {
            Ok(code) => {
                println!("registration code: {code}");
                code
            }
            Err(e) => {
                error!("code generation failed: {e:#}");
                println!("Aborting, registration and upload skipped.");
                std::process::exit(1);
            }
        };

    // Step 2: register the demo device with that code.
    println!("Step 2: registering device '{DEMO_DEVICE_ID}'...");
    let registration = RegisterDeviceRequest {
        device_id: DEMO_DEVICE_ID.to_owned(),
        registration_code: code,
        device_type: "ESP32".to_owned(),
        capabilities: DeviceCapabilities {
            temperature: true,
            humidity: true,
            co2: true,
            distance: true,
            ble: true,
        },
        sensor_mode: 0, // BLE receiver mode
        mac_address: sample::DEMO_MAC.to_owned(),
    };

    let upload_target = match api::register_device(&client, &registration).await {
        Ok(()) => {
            println!("device registered: {DEMO_DEVICE_ID} -> {}", sample::DEMO_FARM_NAME);
            DEMO_DEVICE_ID
        }
        Err(e) => {
            warn!("device registration failed: {e:#}");
            println!("Registration failed, uploading against known device {KNOWN_DEVICE_ID} instead.");
            KNOWN_DEVICE_ID
        }
    };

    // Step 3: one test reading.
    println!("Step 3: uploading test reading for '{upload_target}'...");
    match api::upload_reading(&client, &sample::demo_upload(upload_target)).await {
        Ok(()) => println!("Upload ok, demo device setup complete."),
        Err(e) => {
            error!("sensor data upload failed: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}
