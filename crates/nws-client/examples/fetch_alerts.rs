//! Fetch active alerts for a zone list and print the aggregated summary.
//!
//! Run with: cargo run -p nws-client --example fetch_alerts
//! Or with custom zones: cargo run -p nws-client --example fetch_alerts -- CAZ006,CAZ007
//!
//! Optional environment variables in .env:
//!   NWS_API_URL - API base URL (default: https://api.weather.gov)
//!   NWS_USER_AGENT - User-Agent header value

use alert_core::{Aggregator, StatusFilter, ZoneList};
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
    println!("API URL: {}", client.config().base_url);
    println!("Watching zones: {}", zones);
    println!();

    let count = client.alert_count().await?;
    println!("{} active alerts nationwide", count.total);

    if !zones.any_active(&count.zone_ids()) {
        println!("No active alerts for {}", zones);
        return Ok(());
    }

    let records = client.active_alerts(&zones).await?;
    let summary = Aggregator::new(StatusFilter::all()).aggregate(&records);

    println!("Severity level: {}", summary.severity_level);
    if let Some(title) = summary.title() {
        println!("Title: {}", title);
    }
    if let Some(ref spoken) = summary.spoken_desc {
        println!("Spoken: {}", spoken);
    }
    if let Some(ref display) = summary.display_desc {
        println!("\n{}", display);
    }

    Ok(())
}
