use std::sync::Arc;

use sdnwatch_common::{BatchSummary, Endpoint, SessionId};
use sdnwatch_events::{EndpointParser, EventStage, PairParser, TransferEvent};
use tracing::*;

use crate::metadata::MetadataQuery;
use crate::sink::NotificationSink;
use crate::{HostExtractor, PairRegistry, SizeAggregator};

/// What a single event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Cleared,
    Appended,
    Notified(BatchSummary),
    Endpoint(Endpoint),
    EndpointRejected,
    Ignored,
}

/// Per-session event handler.
///
/// Events must be delivered one at a time in emission order; `handle_event`
/// takes `&mut self` so the registry never needs a lock.
pub struct NotificationDispatcher {
    session_id: SessionId,
    registry: PairRegistry,
    pair_parser: PairParser,
    endpoint_parser: EndpointParser,
    aggregator: SizeAggregator,
    metadata: Arc<dyn MetadataQuery>,
    hosts: Arc<dyn HostExtractor>,
    sink: Arc<dyn NotificationSink>,
}

impl NotificationDispatcher {
    pub fn new(
        session_id: SessionId,
        metadata: Arc<dyn MetadataQuery>,
        hosts: Arc<dyn HostExtractor>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            session_id,
            registry: PairRegistry::new(),
            pair_parser: PairParser::new(),
            endpoint_parser: EndpointParser::new(),
            aggregator: SizeAggregator::new(),
            metadata,
            hosts,
            sink,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    pub async fn handle_event(&mut self, event: &TransferEvent) -> DispatchOutcome {
        let span = debug_span!("session", session = %self.session_id, stage = %event.stage, side = %event.side);
        self.dispatch(event).instrument(span).await
    }

    async fn dispatch(&mut self, event: &TransferEvent) -> DispatchOutcome {
        match event.stage {
            EventStage::BatchEnter => {
                self.registry.clear();
                DispatchOutcome::Cleared
            }
            EventStage::BatchItem => {
                let pair = self.pair_parser.parse_pair(&event.description);
                if pair.destination.is_none() {
                    debug!(description = %event.description, "Batch item has no destination");
                }
                self.registry.append(pair);
                DispatchOutcome::Appended
            }
            EventStage::BatchExit => DispatchOutcome::Notified(self.notify_remote().await),
            EventStage::PassiveMode => self.passive_mode(&event.description).await,
            EventStage::Other(_) => DispatchOutcome::Ignored,
        }
    }

    async fn notify_remote(&mut self) -> BatchSummary {
        let total_size = self
            .aggregator
            .aggregate(&mut self.registry, self.metadata.as_ref())
            .await;

        let (source_host, destination_host) = match self.registry.first_pair() {
            Some(pair) => (
                self.hosts.parse_host(&pair.source),
                pair.destination
                    .as_deref()
                    .and_then(|destination| self.hosts.parse_host(destination)),
            ),
            None => (None, None),
        };

        let summary = BatchSummary {
            source_host,
            destination_host,
            pair_count: self.registry.len(),
            total_size,
        };

        info!(
            source_host = ?summary.source_host,
            destination_host = ?summary.destination_host,
            pair_count = summary.pair_count,
            total_size = summary.total_size,
            "Batch enumerated"
        );

        if let Err(error) = self.sink.notify(&summary).await {
            error!(%error, "Failed to notify the provisioning backend");
        }
        summary
    }

    async fn passive_mode(&self, description: &str) -> DispatchOutcome {
        let endpoint = match self.endpoint_parser.parse_endpoint(description) {
            Ok(endpoint) => endpoint,
            Err(error) => {
                error!(%error, "Could not parse passive-mode descriptor");
                return DispatchOutcome::EndpointRejected;
            }
        };

        info!(%endpoint, "Passive-mode endpoint");
        if let Err(error) = self.sink.notify_endpoint(&endpoint).await {
            error!(%error, "Failed to notify the provisioning backend");
        }
        DispatchOutcome::Endpoint(endpoint)
    }
}
