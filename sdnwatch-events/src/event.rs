//! Engine event types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const STAGE_LIST_ENTER: &str = "LIST:ENTER";
pub const STAGE_LIST_ITEM: &str = "LIST:ITEM";
pub const STAGE_LIST_EXIT: &str = "LIST:EXIT";
pub const STAGE_PASV: &str = "PASV";

/// Lifecycle stage of an engine event, keyed by the engine's stage name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStage {
    /// A new batch is about to be enumerated
    BatchEnter,
    /// One `source => destination` pair of the batch
    BatchItem,
    /// The batch is fully enumerated
    BatchExit,
    /// Passive-mode data channel descriptor: `host:[ip]:port`
    PassiveMode,
    /// Any stage this observer does not act on
    Other(String),
}

impl From<&str> for EventStage {
    fn from(value: &str) -> Self {
        match value {
            STAGE_LIST_ENTER => Self::BatchEnter,
            STAGE_LIST_ITEM => Self::BatchItem,
            STAGE_LIST_EXIT => Self::BatchExit,
            STAGE_PASV => Self::PassiveMode,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for EventStage {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<EventStage> for String {
    fn from(value: EventStage) -> Self {
        value.to_string()
    }
}

impl Display for EventStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BatchEnter => write!(f, "{STAGE_LIST_ENTER}"),
            Self::BatchItem => write!(f, "{STAGE_LIST_ITEM}"),
            Self::BatchExit => write!(f, "{STAGE_LIST_EXIT}"),
            Self::PassiveMode => write!(f, "{STAGE_PASV}"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Which side of the copy emitted the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSide {
    Source,
    Destination,
    #[default]
    Event,
}

impl Display for EventSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
            Self::Event => write!(f, "event"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub stage: EventStage,
    #[serde(default)]
    pub side: EventSide,
    #[serde(default)]
    pub description: String,
}

impl TransferEvent {
    pub fn new(stage: EventStage, description: impl Into<String>) -> Self {
        Self {
            stage,
            side: EventSide::default(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(EventStage::from("LIST:ENTER"), EventStage::BatchEnter);
        assert_eq!(EventStage::from("LIST:ITEM"), EventStage::BatchItem);
        assert_eq!(EventStage::from("LIST:EXIT"), EventStage::BatchExit);
        assert_eq!(EventStage::from("PASV"), EventStage::PassiveMode);
        assert_eq!(
            EventStage::from("TRANSFER:ENTER"),
            EventStage::Other("TRANSFER:ENTER".into())
        );
    }

    #[test]
    fn test_stage_names_are_case_sensitive() {
        assert_eq!(
            EventStage::from("pasv"),
            EventStage::Other("pasv".into())
        );
    }

    #[test]
    fn test_deserialize_event() {
        let event: TransferEvent =
            serde_json::from_str(r#"{"stage": "LIST:ITEM", "side": "source", "description": "a => b"}"#)
                .unwrap();
        assert_eq!(event.stage, EventStage::BatchItem);
        assert_eq!(event.side, EventSide::Source);
        assert_eq!(event.description, "a => b");

        let event: TransferEvent = serde_json::from_str(r#"{"stage": "LIST:ENTER"}"#).unwrap();
        assert_eq!(event, TransferEvent::new(EventStage::BatchEnter, ""));
    }

    #[test]
    fn test_stage_serializes_to_engine_name() {
        let json = serde_json::to_string(&EventStage::PassiveMode).unwrap();
        assert_eq!(json, "\"PASV\"");
    }
}
