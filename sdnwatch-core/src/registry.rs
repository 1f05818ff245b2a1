//! Pairs of the batch currently being enumerated.

use std::slice::Iter;

use sdnwatch_common::TransferPair;

/// Ordered pairs of one batch plus the size of their sources.
///
/// Owned by a single session. Pairs are only ever appended or dropped all at
/// once when the next batch starts.
#[derive(Debug, Default)]
pub struct PairRegistry {
    pairs: Vec<TransferPair>,
    total_size: u64,
}

impl PairRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
        self.total_size = 0;
    }

    pub fn append(&mut self, pair: TransferPair) {
        self.pairs.push(pair);
    }

    /// The pair that represents the batch's hosts
    pub fn first_pair(&self) -> Option<&TransferPair> {
        self.pairs.first()
    }

    pub fn for_each<F: FnMut(&TransferPair)>(&self, visitor: F) {
        self.pairs.iter().for_each(visitor);
    }

    pub fn iter(&self) -> Iter<'_, TransferPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Result of the last aggregation pass
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub(crate) fn set_total_size(&mut self, total_size: u64) {
        self.total_size = total_size;
    }
}

impl<'a> IntoIterator for &'a PairRegistry {
    type Item = &'a TransferPair;
    type IntoIter = Iter<'a, TransferPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
