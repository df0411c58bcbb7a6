// keep in sync with the deployed cloud functions
use std::time::Duration;

use anyhow::{bail, Context, Result};
use common::req::{GenerateCodeRequest, GenerateCodeResponse, RegisterDeviceRequest, SensorUpload};
use log::info;
use reqwest::header::USER_AGENT;

/// Hardware agent string, lets the endpoint skip bot verification.
pub const AGENT_STRING: &str = "ESP32HTTPClient/1.2";

const DEFAULT_BASE_URL: &str = "https://us-central1-grainwatch-demo.cloudfunctions.net";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn endpoint_url(function: &str) -> String {
    let base =
        std::env::var("FUNCTIONS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    format!("{base}/{function}")
}

pub fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// A successful response without a usable code still fails the flow.
pub fn code_from_response(resp: GenerateCodeResponse) -> Result<String> {
    match resp.registration_code {
        Some(code) if !code.is_empty() => Ok(code),
        _ => bail!("no registration code in response"),
    }
}

pub async fn generate_code(
    client: &reqwest::Client,
    farm_name: &str,
    device_name: &str,
) -> Result<String> {
    if farm_name.is_empty() || device_name.is_empty() {
        bail!("farm and device names must be non-empty");
    }

    let req = GenerateCodeRequest {
        farm_name: farm_name.to_owned(),
        device_name: device_name.to_owned(),
    };

    let resp = client
        .post(endpoint_url("generateRegistrationCode"))
        .header(USER_AGENT, AGENT_STRING)
        .json(&req)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    info!("code generation response: {status}");
    info!("response body: {body}");

    if status != reqwest::StatusCode::OK {
        bail!("code generation failed: {status}");
    }

    let parsed: GenerateCodeResponse =
        serde_json::from_str(&body).context("code generation response is not JSON")?;
    code_from_response(parsed)
}

pub async fn register_device(
    client: &reqwest::Client,
    registration: &RegisterDeviceRequest,
) -> Result<()> {
    let resp = client
        .post(endpoint_url("registerDevice"))
        .header(USER_AGENT, AGENT_STRING)
        .json(registration)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    info!("device registration response: {status}");
    info!("response body: {body}");

    if status != reqwest::StatusCode::OK {
        bail!("device registration failed: {status}");
    }
    Ok(())
}

pub async fn upload_reading(client: &reqwest::Client, upload: &SensorUpload) -> Result<()> {
    let resp = client
        .post(endpoint_url("sensorData"))
        .header(USER_AGENT, AGENT_STRING)
        .json(upload)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    info!("sensor data response: {status}");
    info!("response body: {body}");

    if status != reqwest::StatusCode::OK {
        bail!("sensor data upload failed: {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_required_and_non_empty() {
        let ok = GenerateCodeResponse {
            registration_code: Some("AB12CD".to_owned()),
        };
        assert_eq!(code_from_response(ok).unwrap(), "AB12CD");

        let missing = GenerateCodeResponse {
            registration_code: None,
        };
        assert!(code_from_response(missing).is_err());

        let empty = GenerateCodeResponse {
            registration_code: Some(String::new()),
        };
        assert!(code_from_response(empty).is_err());
    }

    #[tokio::test]
    async fn empty_names_are_rejected_before_any_request() {
        let client = client().unwrap();
        assert!(generate_code(&client, "", "Demo Sensor").await.is_err());
        assert!(generate_code(&client, "My Test Farm", "").await.is_err());
    }

    #[test]
    fn endpoint_url_appends_function_name() {
        let url = endpoint_url("sensorData");
        assert!(url.ends_with("/sensorData"));
    }
}
