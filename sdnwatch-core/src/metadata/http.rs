use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;

use super::{FileStat, MetadataError, MetadataQuery};

/// Reads the size of http(s) sources from the `Content-Length` of a `HEAD` request
#[derive(Debug, Clone)]
pub struct HttpMetadataQuery {
    client: reqwest::Client,
}

impl HttpMetadataQuery {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl MetadataQuery for HttpMetadataQuery {
    async fn stat(&self, path: &str) -> Result<FileStat, MetadataError> {
        let response = self
            .client
            .head(path)
            .send()
            .await
            .map_err(|source| MetadataError::Http {
                uri: path.to_owned(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(MetadataError::Status {
                uri: path.to_owned(),
                status: response.status(),
            });
        }

        // The body of a HEAD response is empty, so the header is the only
        // place the size can come from
        response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
            .map(|size| FileStat { size })
            .ok_or_else(|| MetadataError::MissingSize(path.to_owned()))
    }
}
