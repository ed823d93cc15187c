//! Poll NWS alerts for a zone list and print each summary until Ctrl+C.
//!
//! Run with: cargo run -p alert-sensor --features signal --example watch_zones
//! Or with custom zones:
//!   cargo run -p alert-sensor --features signal --example watch_zones -- CAZ006,CAZ007
//!
//! Optional environment variables in .env:
//!   NWS_API_URL - API base URL (default: https://api.weather.gov)
//!   NWS_USER_AGENT - User-Agent header value

use alert_core::ZoneList;
use alert_sensor::{AlertSensor, SensorConfig};
use nws_client::NwsClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get zones from command line args or use a default
    let args: Vec<String> = env::args().collect();
    let zone_arg = if args.len() > 1 {
        args[1].clone()
    } else {
        "CAZ006".to_string()
    };

    let zones = ZoneList::parse(&zone_arg)?;
    let client = NwsClient::from_env()?;
    let mut sensor = AlertSensor::new(client, SensorConfig::new(zones));

    println!(
        "Watching {} every {:?} (Ctrl+C to stop)",
        sensor.config().zones,
        sensor.config().poll_interval
    );

    sensor
        .run_until_stopped(|summary| match summary.title() {
            Some(title) => println!("level {}: {}", summary.severity_level, title),
            None => println!("level 0: no active alerts"),
        })
        .await;

    Ok(())
}
