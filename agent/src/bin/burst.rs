use std::time::Duration;

use agent::{api, sample};
use anyhow::Result;
use log::error;

const BURST_DEVICE_ID: &str = "JK87fJjKxZ6TgtszLcBh";
const READING_COUNT: usize = 6;
const READING_INTERVAL_MS: i64 = 60_000;
const SEND_DELAY: Duration = Duration::from_millis(500);

fn reading_timestamp(base_ms: i64, index: usize) -> i64 {
    base_ms + index as i64 * READING_INTERVAL_MS
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("Uploading {READING_COUNT} sensor readings");
    println!("==============================");
    println!("device: {BURST_DEVICE_ID}");

    let client = api::client()?;

    // Backdate the series so it reads as history, one reading per minute.
    let base_ms = sample::ms_since_epoch() - 5 * READING_INTERVAL_MS;

    for i in 0..READING_COUNT {
        let upload = sample::random_upload(
            BURST_DEVICE_ID,
            reading_timestamp(base_ms, i),
            3600 + i as u64 * 60,
        );

        match api::upload_reading(&client, &upload).await {
            Ok(()) => println!(
                "reading {}/{READING_COUNT} - temp: {:.1} C, humidity: {:.1} %, distance: {:.1} cm",
                i + 1,
                upload.temperature,
                upload.humidity,
                upload.distance_avg
            ),
            Err(e) => error!("reading {}/{READING_COUNT} failed: {e:#}", i + 1),
        }

        if i + 1 < READING_COUNT {
            tokio::time::sleep(SEND_DELAY).await;
        }
    }

    println!();
    println!("Burst upload complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_advance_in_minute_steps() {
        let base = 1_700_000_000_000;
        for i in 1..READING_COUNT {
            let prev = reading_timestamp(base, i - 1);
            let cur = reading_timestamp(base, i);
            assert_eq!(cur - prev, READING_INTERVAL_MS);
        }
    }
}
