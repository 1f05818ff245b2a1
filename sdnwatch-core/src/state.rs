use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use sdnwatch_common::SessionId;
use tokio::sync::{broadcast, Mutex};
use tracing::*;

/// Sessions that currently have a listener attached to a copy
pub struct State {
    pub sessions: HashMap<SessionId, Arc<Mutex<SessionState>>>,
    change_sender: broadcast::Sender<()>,
}

impl State {
    pub fn new() -> Arc<Mutex<Self>> {
        let sender = broadcast::channel(16).0;
        Arc::new(Mutex::new(Self {
            sessions: HashMap::new(),
            change_sender: sender,
        }))
    }

    pub async fn register_session(this: &Arc<Mutex<Self>>) -> SessionHandle {
        let mut _self = this.lock().await;
        let id = uuid::Uuid::new_v4();

        let session_state = Arc::new(Mutex::new(SessionState::new(
            _self.change_sender.clone(),
        )));
        _self.sessions.insert(id, session_state.clone());
        debug!(session = %id, "Session registered");

        let _ = _self.change_sender.send(());

        SessionHandle {
            id,
            state: this.clone(),
            session_state,
            closed: false,
        }
    }

    pub fn subscribe(&mut self) -> broadcast::Receiver<()> {
        self.change_sender.subscribe()
    }

    pub fn remove_session(&mut self, id: SessionId) {
        if let Some(session) = self.sessions.remove(&id) {
            match session.try_lock() {
                Ok(session) => debug!(
                    session = %id,
                    duration = ?session.started.elapsed(),
                    batches = session.batches_notified,
                    "Session released"
                ),
                Err(_) => debug!(session = %id, "Session released"),
            }
            let _ = self.change_sender.send(());
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

pub struct SessionState {
    pub started: Instant,
    pub batches_notified: u64,
    change_sender: broadcast::Sender<()>,
}

impl SessionState {
    fn new(change_sender: broadcast::Sender<()>) -> Self {
        SessionState {
            started: Instant::now(),
            batches_notified: 0,
            change_sender,
        }
    }

    pub fn emit_change(&self) {
        let _ = self.change_sender.send(());
    }
}

/// Keeps a session registered for as long as it is alive.
///
/// Dropping the handle releases the session, so every exit path of the owner
/// deregisters it. `close` does the same without relying on drop.
pub struct SessionHandle {
    id: SessionId,
    state: Arc<Mutex<State>>,
    session_state: Arc<Mutex<SessionState>>,
    closed: bool,
}

impl SessionHandle {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn session_state(&self) -> &Arc<Mutex<SessionState>> {
        &self.session_state
    }

    pub async fn record_batch(&self) {
        let mut session_state = self.session_state.lock().await;
        session_state.batches_notified += 1;
        session_state.emit_change();
    }

    pub async fn close(mut self) {
        self.state.lock().await.remove_session(self.id);
        self.closed = true;
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        let id = self.id;
        if let Ok(mut state) = self.state.try_lock() {
            state.remove_session(id);
            return;
        }
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let state = self.state.clone();
                runtime.spawn(async move {
                    state.lock().await.remove_session(id);
                });
            }
            // not on a runtime thread, so waiting for the lock cannot stall one
            Err(_) => self.state.blocking_lock().remove_session(id),
        }
    }
}
