use std::time::Duration;

use agent::{api, sample};
use anyhow::Result;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;

const PROBE_DEVICE_ID: &str = "JK87fJjKxZ6TgtszLcBh";

fn explain_status(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::BAD_REQUEST => Some("Bad Request - check data format"),
        StatusCode::UNAUTHORIZED => Some("Unauthorized"),
        StatusCode::FORBIDDEN => Some("Forbidden - check backend rules"),
        StatusCode::INTERNAL_SERVER_ERROR => Some("Internal Server Error"),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let url = api::endpoint_url("sensorData");
    let payload = sample::probe_upload(PROBE_DEVICE_ID);

    println!("Probing ingestion endpoint");
    println!("==========================");
    println!("URL: {url}");
    println!("payload: {}", serde_json::to_string_pretty(&payload)?);

    let client = api::client()?;

    match client
        .post(&url)
        .header(USER_AGENT, api::AGENT_STRING)
        .json(&payload)
        .send()
        .await
    {
        Ok(resp) => {
            let status = resp.status();
            println!("HTTP response code: {}", status.as_u16());
            println!("response headers: {:?}", resp.headers());
            let body = resp.text().await.unwrap_or_default();
            println!("response body: {body}");

            if status == StatusCode::OK {
                println!("SUCCESS: reading accepted");
                match serde_json::from_str::<serde_json::Value>(&body) {
                    Ok(json) => println!("parsed response: {}", serde_json::to_string_pretty(&json)?),
                    Err(_) => println!("warning: response is not JSON"),
                }
            } else if let Some(reason) = explain_status(status) {
                println!("ERROR {}: {reason}", status.as_u16());
            } else {
                println!("unexpected response code: {}", status.as_u16());
            }
        }
        Err(e) if e.is_timeout() => println!("ERROR: request timed out"),
        Err(e) => println!("ERROR: network request failed - {e}"),
    }

    // Bare availability check. The ingestion function only accepts POST,
    // a failure here is expected.
    println!();
    println!("Checking endpoint availability...");
    match client
        .get(&url)
        .timeout(Duration::from_secs(10))
        .send()
        .await
    {
        Ok(resp) => {
            println!("GET response code: {}", resp.status().as_u16());
            println!("GET response: {}", resp.text().await.unwrap_or_default());
        }
        Err(e) => println!("GET check failed (expected for this endpoint): {e}"),
    }

    println!();
    println!("Probe complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_fixed_explanations() {
        assert_eq!(
            explain_status(StatusCode::BAD_REQUEST),
            Some("Bad Request - check data format")
        );
        assert_eq!(explain_status(StatusCode::UNAUTHORIZED), Some("Unauthorized"));
        assert_eq!(
            explain_status(StatusCode::FORBIDDEN),
            Some("Forbidden - check backend rules")
        );
        assert_eq!(
            explain_status(StatusCode::INTERNAL_SERVER_ERROR),
            Some("Internal Server Error")
        );
    }

    #[test]
    fn other_codes_are_unexplained() {
        assert_eq!(explain_status(StatusCode::OK), None);
        assert_eq!(explain_status(StatusCode::NOT_FOUND), None);
        assert_eq!(explain_status(StatusCode::BAD_GATEWAY), None);
    }
}
