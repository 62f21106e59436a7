use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::Rng;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::config::{AllocatorConfig, PartitionStrategy};
use crate::error::{CoderError, Result};
use crate::term::TermId;

/// Mints dynamic ids from per-partition persisted counters.
///
/// Every allocation is one atomic increment on the backend, so ids stay
/// unique across processes and restarts. An id that is allocated but never
/// committed is simply skipped.
pub struct IdAllocator<B> {
    backend: Arc<B>,
    partitions: u32,
    strategy: PartitionStrategy,
    cursor: AtomicU32,
}

impl<B: Backend> IdAllocator<B> {
    pub fn new(backend: Arc<B>, config: &AllocatorConfig) -> Result<IdAllocator<B>> {
        if !(1..=TermId::MAX_PARTITIONS).contains(&config.partitions) {
            return Err(CoderError::configuration(format!(
                "allocator partitions must be within 1..={}, found {}",
                TermId::MAX_PARTITIONS,
                config.partitions
            )));
        }
        // start at a random partition so that processes spread out
        let cursor = rand::rng().random_range(0..config.partitions);
        Ok(IdAllocator {
            backend,
            partitions: config.partitions,
            strategy: config.strategy,
            cursor: AtomicU32::new(cursor),
        })
    }

    pub fn partitions(&self) -> u32 {
        self.partitions
    }

    /// Allocates from the next partition in round-robin order.
    pub async fn allocate(&self) -> Result<TermId> {
        self.allocate_in(self.next_partition()).await
    }

    /// Allocates an id for the entry stored under `key`, choosing the
    /// partition with the configured strategy.
    pub async fn allocate_for(&self, key: &[u8]) -> Result<TermId> {
        let partition = match self.strategy {
            PartitionStrategy::RoundRobin => self.next_partition(),
            PartitionStrategy::Hash => {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                (hasher.finish() % u64::from(self.partitions)) as u16
            }
        };
        self.allocate_in(partition).await
    }

    pub async fn allocate_in(&self, partition: u16) -> Result<TermId> {
        if u32::from(partition) >= self.partitions {
            return Err(CoderError::configuration(format!(
                "partition {partition} is outside the {} configured partitions",
                self.partitions
            )));
        }
        let sequence = self.backend.increment(partition).await?;
        let Some(id) = TermId::dynamic(partition, sequence) else {
            warn!(target: "allocator", partition, sequence, "partition exhausted");
            return Err(CoderError::AllocatorExhausted { partition });
        };
        debug!(target: "allocator", partition, sequence, "allocated {id}");
        Ok(id)
    }

    fn next_partition(&self) -> u16 {
        (self.cursor.fetch_add(1, Ordering::Relaxed) % self.partitions) as u16
    }
}
