mod bounded;
mod endpoint;

use serde::{Deserialize, Serialize};

pub use bounded::BoundedString;
pub use endpoint::*;

pub type SessionId = uuid::Uuid;

/// One source/destination pair announced by the engine while it enumerates a batch.
///
/// Both strings are kept exactly as the engine sent them. The engine XML-escapes
/// them and nothing here undoes that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPair {
    pub source: String,
    pub destination: Option<String>,
}

/// Payload handed to the provisioning backend once a batch has been enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub source_host: Option<String>,
    pub destination_host: Option<String>,
    pub pair_count: usize,
    pub total_size: u64,
}
