use async_trait::async_trait;
use sdnwatch_common::{BatchSummary, Endpoint};
use tracing::*;

use super::{NotificationSink, SinkError};

/// Writes what would be provisioned to the log and nothing else
#[derive(Debug, Default, Clone)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn notify(&self, summary: &BatchSummary) -> Result<(), SinkError> {
        warn!(
            "Between {} and {} {} files with a total size of {} bytes",
            summary.source_host.as_deref().unwrap_or("<unknown>"),
            summary.destination_host.as_deref().unwrap_or("<unknown>"),
            summary.pair_count,
            summary.total_size,
        );
        Ok(())
    }

    async fn notify_endpoint(&self, endpoint: &Endpoint) -> Result<(), SinkError> {
        let ip = endpoint.ip.as_ref().map(|x| x.as_str()).unwrap_or("<unknown>");
        match endpoint.port {
            Some(port) => warn!("Got {}:{} for host {}", ip, port, endpoint.host),
            None => warn!("Got {} for host {}", ip, endpoint.host),
        }
        Ok(())
    }
}
