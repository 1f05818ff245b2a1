use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use futures::StreamExt;
use sdnwatch_core::{copy_enter_hook, EventListener, Services, TransferParams};
use sdnwatch_events::TransferEvent;
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::*;

use crate::config::load_config;

/// One line of an event log: the event plus the copy it belongs to
#[derive(Debug, Deserialize)]
struct ReplayRecord {
    session: String,
    #[serde(flatten)]
    event: TransferEvent,
}

/// Stands in for the engine's copy parameters
#[derive(Default)]
struct ReplayedCopy {
    listeners: Vec<Box<dyn EventListener>>,
}

impl TransferParams for ReplayedCopy {
    fn add_event_callback(&mut self, listener: Box<dyn EventListener>) -> Result<()> {
        self.listeners.push(listener);
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ReplayReport {
    copies: usize,
    events: usize,
    skipped: usize,
}

pub(crate) async fn command(cli: &crate::Cli, events: &Path) -> Result<()> {
    let config = load_config(&cli.config)?;
    let services = Services::new(config)?;

    let file = tokio::fs::File::open(events)
        .await
        .with_context(|| format!("Could not open {events:?}"))?;
    let report = replay(&services, BufReader::new(file)).await?;

    info!(
        copies = report.copies,
        events = report.events,
        skipped = report.skipped,
        "Replay finished"
    );
    Ok(())
}

/// Fans the records out to one task per copy and waits for all of them
async fn replay<R: AsyncBufRead + Unpin>(
    services: &Services,
    reader: R,
) -> Result<ReplayReport> {
    let mut lines = reader.lines();
    let mut skipped = 0;
    let mut copies: HashMap<String, mpsc::UnboundedSender<TransferEvent>> = HashMap::new();
    let mut copy_futures = futures::stream::FuturesUnordered::new();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }
        let record: ReplayRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(error) => {
                warn!(line = line_number, %error, "Skipping malformed event");
                skipped += 1;
                continue;
            }
        };

        let sender = match copies.entry(record.session) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let (sender, receiver) = mpsc::unbounded_channel();
                copy_futures.push(tokio::spawn(run_copy(
                    services.clone(),
                    entry.key().clone(),
                    receiver,
                )));
                entry.insert(sender)
            }
        };
        // a copy that failed to attach has already dropped its receiver
        let _ = sender.send(record.event);
    }

    let copy_count = copies.len();
    drop(copies);

    let mut delivered = 0;
    while let Some(result) = copy_futures.next().await {
        delivered += result??;
    }

    Ok(ReplayReport {
        copies: copy_count,
        events: delivered,
        skipped,
    })
}

/// Delivers the events of one copy, in order, to the listeners attached to it
async fn run_copy(
    services: Services,
    name: String,
    mut events: mpsc::UnboundedReceiver<TransferEvent>,
) -> Result<usize> {
    let mut copy = ReplayedCopy::default();
    if let Err(error) = copy_enter_hook(&services, &mut copy).await {
        error!(copy = %name, %error, "Could not attach to copy");
        return Ok(0);
    }

    let mut delivered = 0;
    while let Some(event) = events.recv().await {
        for listener in copy.listeners.iter_mut() {
            listener.on_event(&event).await;
        }
        delivered += 1;
    }
    debug!(copy = %name, events = delivered, "Copy finished");
    Ok(delivered)
}
