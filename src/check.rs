//! Single-check notifiers and the signal operations they expose.

use async_trait::async_trait;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::{path, request};

/// Signal operations exposed by every notifier.
///
/// Implemented by [`Check`], whether built from a UUID, from a full check
/// URL or bound to a project slug via [`crate::Project::slug`]. Each call
/// sends at most one request and is independent of any other call; sharing
/// a notifier across tasks is safe.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Signals that the job has started.
    async fn start(&self) -> Result<()>;

    /// Signals that the job finished successfully.
    async fn success(&self) -> Result<()>;

    /// Signals that the job failed.
    async fn fail(&self) -> Result<()>;

    /// Attaches a log message to the check without changing its state.
    async fn log(&self, msg: &str) -> Result<()>;

    /// Reports the job's exit status; the service derives success or
    /// failure from the code.
    ///
    /// The code must be non-negative, else the call fails with
    /// [`Error::InvalidExitCode`] without sending anything.
    async fn exit_status(&self, code: i32) -> Result<()>;
}

/// A single monitored check.
///
/// Obtained from [`Check::new`], [`Check::from_url`] or
/// [`crate::Project::slug`].
#[derive(Debug, Clone)]
pub struct Check {
    /// Identifying path below the base URL: a UUID, a `pingkey/slug` pair
    /// or the path extracted from a full check URL.
    pub(crate) path: String,
    pub(crate) config: Config,
}

impl Check {
    /// Creates a notifier for the check identified by `uuid`, using the
    /// default configuration.
    ///
    /// The UUID is in the format `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
    pub fn new(uuid: &str) -> Result<Self> {
        Self::with_config(uuid, Config::new())
    }

    /// Like [`Check::new`] with explicit configuration.
    pub fn with_config(uuid: &str, config: Config) -> Result<Self> {
        if uuid.is_empty() {
            return Err(Error::EmptyUuid);
        }
        Ok(Self {
            path: uuid.to_owned(),
            config,
        })
    }

    /// Builds a notifier from the full URL of a single check, in the
    /// format `http(s)://example.com[/prefix]/uuid`.
    ///
    /// The URL supplies both endpoint and identity: scheme, host and port
    /// become the base URL and the remaining path the identifying segment.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_url_with_config(url, Config::new())
    }

    /// Like [`Check::from_url`] with explicit configuration.
    ///
    /// Any base URL carried by `config` is ignored; the check URL wins.
    pub fn from_url_with_config(url: &str, mut config: Config) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        if !parsed.has_host() {
            return Err(Error::InvalidUrl {
                url: url.to_owned(),
                reason: "host must not be empty".to_owned(),
            });
        }

        let path = parsed.path().to_owned();
        let mut base = parsed;
        base.set_path("");
        base.set_query(None);
        base.set_fragment(None);
        config.base_url = base;

        Ok(Self { path, config })
    }

    async fn signal(&self, suffix: Option<&str>, body: Option<String>) -> Result<()> {
        let mut segments = vec![self.path.as_str()];
        if let Some(suffix) = suffix {
            segments.push(suffix);
        }
        let url = path::compose(&self.config.base_url, &segments)?;
        request::ping(&self.config, url, body).await
    }
}

#[async_trait]
impl Notifier for Check {
    async fn start(&self) -> Result<()> {
        self.signal(Some("start"), None).await
    }

    async fn success(&self) -> Result<()> {
        self.signal(None, None).await
    }

    async fn fail(&self) -> Result<()> {
        self.signal(Some("fail"), None).await
    }

    async fn log(&self, msg: &str) -> Result<()> {
        self.signal(Some("log"), Some(msg.to_owned())).await
    }

    async fn exit_status(&self, code: i32) -> Result<()> {
        if code < 0 {
            return Err(Error::InvalidExitCode(code));
        }
        let code = code.to_string();
        self.signal(Some(&code), None).await
    }
}
