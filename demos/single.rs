//! Pinging a single check identified by its UUID.

use hc_ping::{Check, Notifier};

const UUID: &str = "0178b4ac-254c-45fb-a1f7-df11c1b1efcc";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let check = Check::new(UUID)?;

    check.start().await?;
    // ... run the actual job ...
    check.success().await?;

    // equivalent, built from the full check URL
    let check = Check::from_url(&format!("https://hc-ping.com/{UUID}"))?;
    check.success().await?;

    Ok(())
}
