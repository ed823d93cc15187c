use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use alert_core::{AlertSummary, StatusFilter, ZoneList};
use alert_sensor::{AlertSensor, SensorConfig, DEFAULT_NAME};
use nws_client::{NwsClient, NwsConfig};

#[derive(Debug, Parser)]
#[command(name = "alert-watch")]
#[command(about = "Watch NWS weather alerts for a set of forecast zones")]
struct Args {
    /// Comma-separated forecast zone IDs, e.g. CAZ006,CAZ007
    #[arg(long)]
    zone: String,

    /// Sensor display name
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Status types to accept (repeatable). Defaults to all of
    /// actual, exercise, system, test, draft.
    #[arg(long)]
    status: Vec<String>,

    /// Seconds between poll cycles (floor: 60)
    #[arg(long, default_value_t = 60)]
    interval_secs: u64,

    /// Poll once and exit instead of watching
    #[arg(long)]
    once: bool,

    /// Print each summary as a JSON object
    #[arg(long)]
    json: bool,

    /// API base URL. Falls back to NWS_API_URL env, then the default.
    #[arg(long)]
    api_url: Option<String>,

    /// User-Agent header value. Falls back to NWS_USER_AGENT env.
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let zones = ZoneList::parse(&args.zone)?;
    let statuses = if args.status.is_empty() {
        StatusFilter::all()
    } else {
        StatusFilter::from_labels(&args.status)?
    };

    let mut nws_config = NwsConfig::from_env();
    if let Some(url) = args.api_url {
        nws_config.base_url = url;
    }
    if let Some(agent) = args.user_agent {
        nws_config.user_agent = agent;
    }

    let client = NwsClient::new(nws_config)?;
    let config = SensorConfig::new(zones)
        .with_name(args.name)
        .with_statuses(statuses)
        .with_poll_interval(Duration::from_secs(args.interval_secs));
    let mut sensor = AlertSensor::new(client, config);

    if args.once {
        let summary = sensor.update().await;
        print_summary(summary, args.json)?;
        return Ok(());
    }

    info!(
        "watching {} every {:?}, Ctrl+C to stop",
        sensor.config().zones,
        sensor.config().poll_interval
    );

    let json = args.json;
    sensor
        .run_until_stopped(move |summary| {
            if let Err(e) = print_summary(summary, json) {
                warn!("failed to print summary: {}", e);
            }
        })
        .await;

    Ok(())
}

fn print_summary(summary: &AlertSummary, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(summary)?);
        return Ok(());
    }

    println!("severity level: {}", summary.severity_level);
    match summary.title() {
        Some(title) => println!("title: {}", title),
        None => println!("no active alerts"),
    }
    if let Some(ref spoken) = summary.spoken_desc {
        println!("spoken: {}", spoken);
    }
    if let Some(ref display) = summary.display_desc {
        println!("\n{}", display);
    }
    Ok(())
}
