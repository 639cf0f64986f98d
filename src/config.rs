//! Request configuration: base URL, timeout and transport handle.
//!
//! # Responsibilities
//! - Hold the settings shared by every signal a notifier sends
//! - Validate adjustments independently, with later adjustments winning
//!   per field

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Canonical ping endpoint of the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://hc-ping.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings a notifier uses for every ping it sends.
///
/// Built once per notifier by chaining adjustments onto [`Config::new`];
/// immutable once the notifier is constructed.
///
/// ```
/// use std::time::Duration;
/// use hc_ping::Config;
///
/// # fn run() -> hc_ping::Result<()> {
/// let config = Config::new()
///     .base_url("https://hc.internal.example.com/monitoring")?
///     .timeout(Duration::from_secs(3));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) base_url: Url,
    /// Per-request ceiling; `None` defers to the client's own timeout.
    pub(crate) timeout: Option<Duration>,
    pub(crate) client: reqwest::Client,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration with the canonical endpoint, a 10 second
    /// timeout and a default transport handle.
    pub fn new() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Some(DEFAULT_TIMEOUT),
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the base URL, default [`DEFAULT_BASE_URL`].
    ///
    /// The format is `http[s]://example.com[/prefix]`; scheme and host are
    /// required, and any path prefix is preserved when ping URLs are
    /// composed (for services mounted behind a reverse-proxy prefix).
    pub fn base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.scheme().is_empty() || !parsed.has_host() {
            return Err(Error::InvalidUrl {
                url: url.to_owned(),
                reason: "scheme and host must not be empty".to_owned(),
            });
        }
        self.base_url = parsed;
        Ok(self)
    }

    /// Sets the per-request timeout, default [`DEFAULT_TIMEOUT`].
    ///
    /// Applied on top of whatever the transport handle is configured with;
    /// the per-request value takes precedence. A timeout set before
    /// [`Config::http_client`] is discarded by it, so whichever adjustment
    /// comes last governs.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the HTTP transport handle, default [`reqwest::Client::new`].
    ///
    /// Clears any earlier timeout adjustment in favour of the client's own
    /// timeout; call [`Config::timeout`] afterwards to reinstate a
    /// per-request ceiling. Reusing one client across notifiers shares its
    /// connection pool and is safe for concurrent pings.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self.timeout = None;
        self
    }
}
