//! `source => destination` descriptions sent with every batch item.

use sdnwatch_common::TransferPair;

pub const PAIR_SEPARATOR: &str = " => ";

#[derive(Default)]
pub struct PairParser;

impl PairParser {
    pub fn new() -> Self {
        Self
    }

    /// Split a batch item description on the first separator.
    ///
    /// Never fails: without a separator the whole description becomes the
    /// source and the destination is absent.
    pub fn parse_pair(&self, description: &str) -> TransferPair {
        match description.split_once(PAIR_SEPARATOR) {
            Some((source, destination)) => TransferPair {
                source: source.to_owned(),
                destination: Some(destination.to_owned()),
            },
            None => TransferPair {
                source: description.to_owned(),
                destination: None,
            },
        }
    }
}
