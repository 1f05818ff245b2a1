//! Transfer engine events
//!
//! Event types delivered by the transfer engine and parsers for the two
//! description grammars that ride along with them.

mod event;
mod pair;
mod pasv;

pub use event::{EventSide, EventStage, TransferEvent};
pub use pair::{PairParser, PAIR_SEPARATOR};
pub use pasv::{EndpointParseError, EndpointParser};
