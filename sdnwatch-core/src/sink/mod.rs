//! Provisioning backends
//!
//! The dispatcher only promises to call these with the batch summary and with
//! every passive-mode endpoint it parses. What the backend does with them is
//! up to the backend.

mod http;
mod log;

use async_trait::async_trait;
use sdnwatch_common::{BatchSummary, Endpoint};

pub use self::http::HttpNotificationSink;
pub use self::log::LogNotificationSink;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provisioning endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, summary: &BatchSummary) -> Result<(), SinkError>;

    async fn notify_endpoint(&self, endpoint: &Endpoint) -> Result<(), SinkError>;
}
