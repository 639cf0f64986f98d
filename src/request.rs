//! Single-shot ping delivery and response classification.
//!
//! # Responsibilities
//! - Build and issue one HTTP request per signal (GET without body, POST
//!   with one)
//! - Read the full response body and classify the outcome

use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Body text the service sends for a fully successful ping.
const BODY_OK: &str = "OK";

/// Substituted when the response body cannot be read.
const NO_INFORMATION: &str = "no information";

/// Issues exactly one HTTP request against `url` and classifies the
/// response. No retries, no backoff.
///
/// The response body is always read in full: the service differentiates
/// its 200 responses ("OK", "OK (not found)", rate limiting notes) through
/// the body, so the status code alone is not enough. An unreadable body on
/// a 200 therefore classifies as [`Error::UnexpectedBody`], since "OK"
/// cannot be confirmed.
pub(crate) async fn ping(config: &Config, url: Url, body: Option<String>) -> Result<()> {
    let builder = match body {
        None => config.client.get(url.clone()),
        Some(msg) => config.client.post(url.clone()).body(msg),
    };
    let builder = match config.timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };

    tracing::debug!(url = %url, "sending ping");

    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport(e)
        }
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| NO_INFORMATION.to_owned());

    if status != StatusCode::OK {
        tracing::warn!(url = %url, status = %status, body = %body, "ping rejected");
        return Err(Error::UnexpectedStatus { status, body });
    }
    if body != BODY_OK {
        tracing::warn!(url = %url, body = %body, "ping delivered but not acknowledged");
        return Err(Error::UnexpectedBody { body });
    }
    Ok(())
}
