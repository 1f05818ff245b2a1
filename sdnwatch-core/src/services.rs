use std::sync::Arc;

use sdnwatch_common::{SdnError, SdnwatchConfig, SinkConfig};
use tokio::sync::Mutex;
use tracing::*;

use crate::metadata::{HttpMetadataQuery, LocalMetadataQuery, MetadataQuery, SchemeMetadataQuery};
use crate::sink::{HttpNotificationSink, LogNotificationSink, NotificationSink};
use crate::{HostExtractor, State, UrlHostExtractor};

/// Collaborators shared by every session. Sessions only share these, never
/// their pair registries.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<Mutex<SdnwatchConfig>>,
    pub state: Arc<Mutex<State>>,
    pub metadata: Arc<dyn MetadataQuery>,
    pub hosts: Arc<dyn HostExtractor>,
    pub sink: Arc<dyn NotificationSink>,
}

impl Services {
    pub fn new(config: SdnwatchConfig) -> Result<Self, SdnError> {
        config.validate()?;

        let http = if config.metadata.enable_http {
            Some(HttpMetadataQuery::new(config.metadata.http_timeout).map_err(SdnError::other)?)
        } else {
            None
        };
        let metadata = Arc::new(SchemeMetadataQuery::new(LocalMetadataQuery::new(), http));

        let sink: Arc<dyn NotificationSink> = match config.sink {
            SinkConfig::Log => Arc::new(LogNotificationSink),
            SinkConfig::Http(ref http) => {
                info!(url = %http.url, "Provisioning requests go to HTTP backend");
                Arc::new(HttpNotificationSink::from_config(http).map_err(SdnError::other)?)
            }
        };

        Ok(Self::with_collaborators(
            config,
            metadata,
            Arc::new(UrlHostExtractor),
            sink,
        ))
    }

    pub fn with_collaborators(
        config: SdnwatchConfig,
        metadata: Arc<dyn MetadataQuery>,
        hosts: Arc<dyn HostExtractor>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            state: State::new(),
            metadata,
            hosts,
            sink,
        }
    }
}
