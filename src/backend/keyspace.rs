use std::sync::Arc;

use blocking::unblock;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use parking_lot::Mutex;
use tracing::debug;

use super::{Backend, ColumnFamily, InsertOutcome, counter_key, decode_counter};
use crate::config::StorageConfig;
use crate::error::BackendError;

/// Backend on a local fjall keyspace.
///
/// A keyspace is owned by a single process, so the conditional writes only
/// need to be serialized within this process.
#[derive(Clone)]
pub struct FjallBackend {
    keyspace: Keyspace,
    term_to_id: PartitionHandle,
    id_to_term: PartitionHandle,
    counters: PartitionHandle,
    insert_lock: Arc<Mutex<()>>,
    counter_lock: Arc<Mutex<()>>,
    sync_writes: bool,
}

impl FjallBackend {
    pub fn new(keyspace: Keyspace) -> Result<FjallBackend, BackendError> {
        let options = PartitionCreateOptions::default();
        let term_to_id =
            keyspace.open_partition(ColumnFamily::TermToId.name(), options.clone())?;
        let id_to_term =
            keyspace.open_partition(ColumnFamily::IdToTerm.name(), options.clone())?;
        let counters =
            keyspace.open_partition(ColumnFamily::AllocatorCounters.name(), options)?;
        Ok(FjallBackend {
            keyspace,
            term_to_id,
            id_to_term,
            counters,
            insert_lock: Arc::new(Mutex::new(())),
            counter_lock: Arc::new(Mutex::new(())),
            sync_writes: true,
        })
    }

    pub fn open(config: &StorageConfig) -> Result<FjallBackend, BackendError> {
        let keyspace = Config::new(&config.path)
            .temporary(config.temporary)
            .open()?;
        debug!(target: "backend", path = ?config.path, "opened keyspace");
        Ok(FjallBackend::new(keyspace)?.with_sync_writes(config.sync_writes))
    }

    /// Whether dictionary writes are synced to disk before returning.
    /// Counter updates are always synced.
    pub fn with_sync_writes(self, sync_writes: bool) -> FjallBackend {
        FjallBackend {
            sync_writes,
            ..self
        }
    }

    fn partition(&self, cf: ColumnFamily) -> PartitionHandle {
        match cf {
            ColumnFamily::TermToId => self.term_to_id.clone(),
            ColumnFamily::IdToTerm => self.id_to_term.clone(),
            ColumnFamily::AllocatorCounters => self.counters.clone(),
        }
    }
}

impl Backend for FjallBackend {
    async fn get(&self, cf: ColumnFamily, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        let partition = self.partition(cf);
        let key = key.to_vec();
        unblock(move || -> Result<_, BackendError> {
            Ok(partition.get(key)?.map(|value| value.to_vec()))
        })
        .await
    }

    async fn get_many(
        &self,
        cf: ColumnFamily,
        keys: &[Vec<u8>],
    ) -> Result<Vec<Option<Vec<u8>>>, BackendError> {
        let partition = self.partition(cf);
        let keys = keys.to_vec();
        unblock(move || {
            keys.into_iter()
                .map(|key| {
                    partition
                        .get(key)
                        .map(|value| value.map(|value| value.to_vec()))
                        .map_err(BackendError::from)
                })
                .collect()
        })
        .await
    }

    async fn put(&self, cf: ColumnFamily, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        let keyspace = self.keyspace.clone();
        let partition = self.partition(cf);
        let sync_writes = self.sync_writes;
        let (key, value) = (key.to_vec(), value.to_vec());
        unblock(move || -> Result<_, BackendError> {
            partition.insert(key, value)?;
            if sync_writes {
                keyspace.persist(PersistMode::SyncAll)?;
            }
            Ok(())
        })
        .await
    }

    async fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> Result<InsertOutcome, BackendError> {
        let keyspace = self.keyspace.clone();
        let partition = self.partition(cf);
        let lock = self.insert_lock.clone();
        let sync_writes = self.sync_writes;
        let (key, value) = (key.to_vec(), value.to_vec());
        unblock(move || -> Result<_, BackendError> {
            let _guard = lock.lock();
            if let Some(existing) = partition.get(&key)? {
                return Ok(InsertOutcome::Existing(existing.to_vec()));
            }
            partition.insert(key, value)?;
            if sync_writes {
                keyspace.persist(PersistMode::SyncAll)?;
            }
            Ok(InsertOutcome::Inserted)
        })
        .await
    }

    async fn increment(&self, partition: u16) -> Result<u64, BackendError> {
        let keyspace = self.keyspace.clone();
        let counters = self.counters.clone();
        let lock = self.counter_lock.clone();
        unblock(move || -> Result<_, BackendError> {
            let key = counter_key(partition);
            let _guard = lock.lock();
            let current = match counters.get(key.as_slice())? {
                Some(bytes) => decode_counter(partition, &bytes)?,
                None => 0,
            };
            let next = current
                .checked_add(1)
                .ok_or(BackendError::CounterOverflow { partition })?;
            counters.insert(key.as_slice(), next.to_be_bytes().as_slice())?;
            // the value is reserved only once it is on disk
            keyspace.persist(PersistMode::SyncAll)?;
            debug!(target: "backend", partition, next, "counter incremented");
            Ok(next)
        })
        .await
    }
}
