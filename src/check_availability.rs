//! Asks a running API for availability on a date, the way the scheduling
//! page does.
//!
//! `check-availability [YYYY-MM-DD] [--strict]`: without a date, today in
//! `BUSINESS_TIMEZONE` (default UTC) is used. `--strict` reports API failures instead of falling back to an
//! all-open day.

use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use meetbook_client::{BookingClient, config::ClientConfig};
use meetbook_core::calendar::BusinessCalendar;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let strict = args.iter().any(|a| a == "--strict");
    let date = match args.iter().find(|a| !a.starts_with("--")) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .wrap_err_with(|| format!("Invalid date: {}", raw))?,
        None => BusinessCalendar::from_env()
            .wrap_err("Invalid BUSINESS_TIMEZONE value")?
            .today(),
    };

    let config = ClientConfig::from_env()?;
    info!("Using API at {}", config.api_base_url);
    let client = BookingClient::new(config)?;

    let (available, busy, degraded) = if strict {
        let response = client.fetch_availability(date).await?;
        (response.available_slots, response.busy_slots, false)
    } else {
        let view = client.availability_or_open(date).await;
        (view.available, view.busy, view.degraded)
    };

    println!("Availability for {}", date);
    if degraded {
        println!("  (API unreachable, showing every slot)");
    }
    for slot in &available {
        println!("  free  {}", slot);
    }
    for slot in &busy {
        println!("  busy  {}", slot);
    }

    Ok(())
}
