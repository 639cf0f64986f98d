//! Pinging project checks addressed by ping key and slug.

use hc_ping::{Notifier, Project};

const PING_KEY: &str = "mysecretpingkey";
const SLUG: &str = "foo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let project = Project::new(PING_KEY)?;

    // ping directly with an explicit slug
    project.success(SLUG).await?;

    // or bind the slug once and reuse the notifier
    let notifier = project.slug(SLUG);
    notifier.start().await?;
    notifier.log("job output goes here").await?;
    notifier.exit_status(0).await?;

    Ok(())
}
