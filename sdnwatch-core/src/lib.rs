mod aggregate;
mod dispatcher;
mod hook;
mod hosts;
pub mod metadata;
mod registry;
pub mod sink;
mod state;
mod services;
#[cfg(test)]
mod test_server;

pub use aggregate::SizeAggregator;
pub use dispatcher::{DispatchOutcome, NotificationDispatcher};
pub use hook::{copy_enter_hook, EventListener, SessionListener, TransferParams, PLUGIN_NAME};
pub use hosts::{HostExtractor, UrlHostExtractor};
pub use registry::PairRegistry;
pub use services::Services;
pub use state::{SessionHandle, SessionState, State};
