//! Project-scoped notifiers addressed by ping key and slug.

use crate::check::{Check, Notifier};
use crate::config::Config;
use crate::error::{Error, Result};

/// Organizes multiple checks under a shared ping key.
///
/// Signals are sent either directly with an explicit slug, or through a
/// slug-bound [`Check`] obtained from [`Project::slug`]. The ping key can
/// be created under the project's settings on the service.
#[derive(Debug, Clone)]
pub struct Project {
    ping_key: String,
    config: Config,
}

impl Project {
    /// Creates a project notifier for `ping_key`, using the default
    /// configuration.
    pub fn new(ping_key: &str) -> Result<Self> {
        Self::with_config(ping_key, Config::new())
    }

    /// Like [`Project::new`] with explicit configuration.
    pub fn with_config(ping_key: &str, config: Config) -> Result<Self> {
        if ping_key.is_empty() {
            return Err(Error::EmptyPingKey);
        }
        Ok(Self {
            ping_key: ping_key.to_owned(),
            config,
        })
    }

    /// Binds `slug`, yielding a notifier that needs no further addressing.
    ///
    /// The produced check shares this project's configuration (and thereby
    /// its transport handle).
    pub fn slug(&self, slug: &str) -> Check {
        Check {
            path: format!("{}/{}", self.ping_key, slug),
            config: self.config.clone(),
        }
    }

    /// Signals that the job behind `slug` has started.
    pub async fn start(&self, slug: &str) -> Result<()> {
        self.slug(slug).start().await
    }

    /// Signals that the job behind `slug` finished successfully.
    pub async fn success(&self, slug: &str) -> Result<()> {
        self.slug(slug).success().await
    }

    /// Signals that the job behind `slug` failed.
    pub async fn fail(&self, slug: &str) -> Result<()> {
        self.slug(slug).fail().await
    }

    /// Attaches a log message to the check behind `slug`.
    pub async fn log(&self, slug: &str, msg: &str) -> Result<()> {
        self.slug(slug).log(msg).await
    }

    /// Reports the exit status of the job behind `slug`; the code must be
    /// non-negative.
    pub async fn exit_status(&self, slug: &str, code: i32) -> Result<()> {
        self.slug(slug).exit_status(code).await
    }
}
