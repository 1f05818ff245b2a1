use std::time::Duration;

use async_trait::async_trait;
use sdnwatch_common::{BatchSummary, Endpoint, HttpSinkConfig};
use serde::Serialize;
use tracing::*;
use url::Url;

use super::{NotificationSink, SinkError};

/// Posts summaries to `<url>/batches` and endpoints to `<url>/endpoints` as JSON
#[derive(Debug, Clone)]
pub struct HttpNotificationSink {
    client: reqwest::Client,
    batches_url: Url,
    endpoints_url: Url,
}

impl HttpNotificationSink {
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, SinkError> {
        // join() would replace the last path segment without a trailing slash
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            batches_url: base.join("batches")?,
            endpoints_url: base.join("endpoints")?,
        })
    }

    pub fn from_config(config: &HttpSinkConfig) -> Result<Self, SinkError> {
        Self::new(&config.url, config.timeout)
    }

    pub fn batches_url(&self) -> &Url {
        &self.batches_url
    }

    pub fn endpoints_url(&self) -> &Url {
        &self.endpoints_url
    }

    async fn post<T: Serialize + Sync>(&self, url: &Url, body: &T) -> Result<(), SinkError> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        if !response.status().is_success() {
            return Err(SinkError::Status(response.status()));
        }
        debug!(%url, status = %response.status(), "Provisioning request accepted");
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for HttpNotificationSink {
    async fn notify(&self, summary: &BatchSummary) -> Result<(), SinkError> {
        self.post(&self.batches_url, summary).await
    }

    async fn notify_endpoint(&self, endpoint: &Endpoint) -> Result<(), SinkError> {
        self.post(&self.endpoints_url, endpoint).await
    }
}
