//! Pinging a self-hosted service instance with custom configuration.

use std::time::Duration;

use hc_ping::{Check, Config, Notifier};

const UUID: &str = "0178b4ac-254c-45fb-a1f7-df11c1b1efcc";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // the instance is mounted behind a reverse-proxy path prefix; the
    // prefix is preserved when ping URLs are composed
    let config = Config::new()
        .base_url("https://hc.internal.example.com/monitoring")?
        .timeout(Duration::from_secs(3));

    let check = Check::with_config(UUID, config)?;
    check.success().await?;

    // a custom transport handle can be shared across notifiers; note that
    // supplying a client clears any earlier timeout adjustment, so set the
    // per-request timeout last
    let client = reqwest::Client::builder()
        .user_agent("my-cron-runner/1.0")
        .build()?;
    let config = Config::new()
        .base_url("https://hc.internal.example.com/monitoring")?
        .http_client(client)
        .timeout(Duration::from_secs(3));

    let check = Check::with_config(UUID, config)?;
    check.success().await?;

    Ok(())
}
