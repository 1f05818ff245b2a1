mod defaults;

use std::time::Duration;

use defaults::*;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::SdnError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(tag = "type")]
pub enum SinkConfig {
    /// Only log what would be provisioned
    #[serde(rename = "log")]
    #[default]
    Log,
    #[serde(rename = "http")]
    Http(HttpSinkConfig),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HttpSinkConfig {
    pub url: Url,
    #[serde(default = "_default_sink_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    /// Allow size lookups of http(s) sources through HEAD requests
    #[serde(default = "_default_true")]
    pub enable_http: bool,
    #[serde(default = "_default_metadata_timeout", with = "humantime_serde")]
    pub http_timeout: Duration,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enable_http: _default_true(),
            http_timeout: _default_metadata_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SdnwatchConfig {
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl SdnwatchConfig {
    pub fn validate(&self) -> Result<(), SdnError> {
        if let SinkConfig::Http(ref http) = self.sink {
            if !matches!(http.url.scheme(), "http" | "https") {
                return Err(SdnError::InvalidConfig(format!(
                    "sink URL must be http or https, got {}",
                    http.url
                )));
            }
            if http.timeout.is_zero() {
                return Err(SdnError::InvalidConfig(
                    "sink timeout must not be zero".into(),
                ));
            }
        }
        if self.metadata.enable_http && self.metadata.http_timeout.is_zero() {
            return Err(SdnError::InvalidConfig(
                "metadata.http_timeout must not be zero".into(),
            ));
        }
        Ok(())
    }
}
