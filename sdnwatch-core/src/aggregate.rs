use tracing::*;

use crate::metadata::MetadataQuery;
use crate::PairRegistry;

/// Sums the source sizes of every pair in a registry.
#[derive(Debug, Default)]
pub struct SizeAggregator;

impl SizeAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Recompute the registry's total from scratch.
    ///
    /// A failed lookup is logged and counts as zero; it never aborts the pass.
    pub async fn aggregate(&self, registry: &mut PairRegistry, query: &dyn MetadataQuery) -> u64 {
        let mut total_size = 0u64;
        for pair in registry.iter() {
            match query.stat(&pair.source).await {
                Ok(stat) => total_size = total_size.saturating_add(stat.size),
                Err(error) => error!(source = %pair.source, %error, "Could not stat source"),
            }
        }
        registry.set_total_size(total_size);
        total_size
    }
}
