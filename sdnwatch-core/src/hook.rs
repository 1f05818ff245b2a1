use async_trait::async_trait;
use sdnwatch_common::{SdnError, SessionId};
use sdnwatch_events::TransferEvent;
use tracing::*;

use crate::{DispatchOutcome, NotificationDispatcher, Services, SessionHandle, State};

pub const PLUGIN_NAME: &str = "SDN";

/// Receives every event of one copy, in order
#[async_trait]
pub trait EventListener: Send {
    async fn on_event(&mut self, event: &TransferEvent);
}

/// Engine-side parameters of a copy that listeners get attached to.
///
/// The engine owns the listener once it is added and drops it when the copy
/// is over. A listener that is refused is dropped right away.
pub trait TransferParams {
    fn add_event_callback(&mut self, listener: Box<dyn EventListener>) -> anyhow::Result<()>;
}

/// The listener installed by [copy_enter_hook]. Owns the session.
pub struct SessionListener {
    dispatcher: NotificationDispatcher,
    handle: SessionHandle,
}

impl SessionListener {
    pub fn session_id(&self) -> SessionId {
        self.handle.id()
    }
}

#[async_trait]
impl EventListener for SessionListener {
    async fn on_event(&mut self, event: &TransferEvent) {
        if let DispatchOutcome::Notified(_) = self.dispatcher.handle_event(event).await {
            self.handle.record_batch().await;
        }
    }
}

/// Called by the engine when a copy starts. Opens a session and attaches its
/// listener to the copy.
pub async fn copy_enter_hook(
    services: &Services,
    params: &mut (dyn TransferParams + Send),
) -> Result<SessionId, SdnError> {
    let handle = State::register_session(&services.state).await;
    let id = handle.id();

    let dispatcher = NotificationDispatcher::new(
        id,
        services.metadata.clone(),
        services.hosts.clone(),
        services.sink.clone(),
    );

    params
        .add_event_callback(Box::new(SessionListener { dispatcher, handle }))
        .map_err(|error| SdnError::registration("copy_enter_hook", error))?;

    info!(session = %id, "{PLUGIN_NAME} event listener registered");
    Ok(id)
}
