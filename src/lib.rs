//! Async ping client for hc-ping.com-style dead man's switch services.
//!
//! Jobs signal their liveness by hitting per-check URLs on the monitoring
//! service. This crate builds those URLs and delivers the pings, addressing
//! checks either individually by UUID (or full check URL) or collectively
//! through a project ping key plus per-check slugs.
//!
//! ```no_run
//! use hc_ping::{Check, Notifier};
//!
//! # async fn run() -> hc_ping::Result<()> {
//! let check = Check::new("0178b4ac-254c-45fb-a1f7-df11c1b1efcc")?;
//! check.start().await?;
//! // ... run the actual job ...
//! check.success().await?;
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod project;

mod path;
mod request;

pub use check::{Check, Notifier};
pub use config::Config;
pub use error::{Error, Result};
pub use project::Project;
