use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Backend, ColumnFamily, InsertOutcome, counter_key, decode_counter};
use crate::error::BackendError;

/// Volatile backend, mostly for tests and short lived tools.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    term_to_id: HashMap<Vec<u8>, Vec<u8>>,
    id_to_term: HashMap<Vec<u8>, Vec<u8>>,
    counters: HashMap<Vec<u8>, Vec<u8>>,
}

impl Tables {
    fn table(&mut self, cf: ColumnFamily) -> &mut HashMap<Vec<u8>, Vec<u8>> {
        match cf {
            ColumnFamily::TermToId => &mut self.term_to_id,
            ColumnFamily::IdToTerm => &mut self.id_to_term,
            ColumnFamily::AllocatorCounters => &mut self.counters,
        }
    }
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    /// Number of rows in `cf`.
    pub fn len(&self, cf: ColumnFamily) -> usize {
        self.inner.lock().table(cf).len()
    }

    pub fn is_empty(&self, cf: ColumnFamily) -> bool {
        self.len(cf) == 0
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&self, partition: u16, value: u64) {
        self.inner
            .lock()
            .counters
            .insert(counter_key(partition).to_vec(), value.to_be_bytes().to_vec());
    }
}

impl Backend for MemoryBackend {
    async fn get(&self, cf: ColumnFamily, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.inner.lock().table(cf).get(key).cloned())
    }

    async fn get_many(
        &self,
        cf: ColumnFamily,
        keys: &[Vec<u8>],
    ) -> Result<Vec<Option<Vec<u8>>>, BackendError> {
        let mut tables = self.inner.lock();
        let table = tables.table(cf);
        Ok(keys.iter().map(|key| table.get(key).cloned()).collect())
    }

    async fn put(&self, cf: ColumnFamily, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        self.inner
            .lock()
            .table(cf)
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> Result<InsertOutcome, BackendError> {
        let mut tables = self.inner.lock();
        let table = tables.table(cf);
        if let Some(existing) = table.get(key) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        table.insert(key.to_vec(), value.to_vec());
        Ok(InsertOutcome::Inserted)
    }

    async fn increment(&self, partition: u16) -> Result<u64, BackendError> {
        let mut tables = self.inner.lock();
        let key = counter_key(partition);
        let current = match tables.counters.get(key.as_slice()) {
            Some(bytes) => decode_counter(partition, bytes)?,
            None => 0,
        };
        let next = current
            .checked_add(1)
            .ok_or(BackendError::CounterOverflow { partition })?;
        tables
            .counters
            .insert(key.to_vec(), next.to_be_bytes().to_vec());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::MemoryBackend;
    use crate::backend::{Backend, ColumnFamily, InsertOutcome};
    use crate::error::BackendError;

    #[tokio::test]
    async fn column_families_are_separate() -> Result<()> {
        let backend = MemoryBackend::new();
        backend.put(ColumnFamily::TermToId, b"k", b"1").await?;
        assert_eq!(None, backend.get(ColumnFamily::IdToTerm, b"k").await?);
        assert_eq!(1, backend.len(ColumnFamily::TermToId));
        assert!(backend.is_empty(ColumnFamily::IdToTerm));
        Ok(())
    }

    #[tokio::test]
    async fn put_if_absent_reports_winner() -> Result<()> {
        let backend = MemoryBackend::new();
        assert_eq!(
            InsertOutcome::Inserted,
            backend.put_if_absent(ColumnFamily::TermToId, b"k", b"a").await?
        );
        assert_eq!(
            InsertOutcome::Existing(b"a".to_vec()),
            backend.put_if_absent(ColumnFamily::TermToId, b"k", b"b").await?
        );
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> Result<()> {
        let backend = MemoryBackend::new();
        let other = backend.clone();
        assert_eq!(1, backend.increment(2).await?);
        assert_eq!(2, other.increment(2).await?);
        Ok(())
    }

    #[tokio::test]
    async fn counter_overflow() -> Result<()> {
        let backend = MemoryBackend::new();
        backend.set_counter(4, u64::MAX);
        assert!(matches!(
            backend.increment(4).await,
            Err(BackendError::CounterOverflow { partition: 4 })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_counter() -> Result<()> {
        let backend = MemoryBackend::new();
        backend
            .put(ColumnFamily::AllocatorCounters, &4u16.to_be_bytes(), b"xyz")
            .await?;
        assert!(matches!(
            backend.increment(4).await,
            Err(BackendError::Corrupt {
                cf: ColumnFamily::AllocatorCounters,
                ..
            })
        ));
        Ok(())
    }
}
