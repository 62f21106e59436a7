//! Backend doubles shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Backend, ColumnFamily, InsertOutcome, MemoryBackend};
use crate::error::BackendError;

/// Counts every call before delegating to an inner [`MemoryBackend`].
#[derive(Debug, Default)]
pub(crate) struct CountingBackend {
    pub(crate) inner: MemoryBackend,
    pub(crate) gets: AtomicUsize,
    pub(crate) get_manys: AtomicUsize,
    pub(crate) puts: AtomicUsize,
    pub(crate) put_if_absents: AtomicUsize,
    pub(crate) increments: AtomicUsize,
}

impl CountingBackend {
    pub(crate) fn total(&self) -> usize {
        [
            &self.gets,
            &self.get_manys,
            &self.puts,
            &self.put_if_absents,
            &self.increments,
        ]
        .iter()
        .map(|counter| counter.load(Ordering::SeqCst))
        .sum()
    }

    pub(crate) fn put_if_absents(&self) -> usize {
        self.put_if_absents.load(Ordering::SeqCst)
    }
}

impl Backend for CountingBackend {
    async fn get(&self, cf: ColumnFamily, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(cf, key).await
    }

    async fn get_many(
        &self,
        cf: ColumnFamily,
        keys: &[Vec<u8>],
    ) -> Result<Vec<Option<Vec<u8>>>, BackendError> {
        self.get_manys.fetch_add(1, Ordering::SeqCst);
        self.inner.get_many(cf, keys).await
    }

    async fn put(&self, cf: ColumnFamily, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(cf, key, value).await
    }

    async fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> Result<InsertOutcome, BackendError> {
        self.put_if_absents.fetch_add(1, Ordering::SeqCst);
        // widen the window between allocation and commit
        tokio::task::yield_now().await;
        self.inner.put_if_absent(cf, key, value).await
    }

    async fn increment(&self, partition: u16) -> Result<u64, BackendError> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.inner.increment(partition).await
    }
}

/// Fails every call as if the store could not be reached.
#[derive(Debug, Default)]
pub(crate) struct UnavailableBackend;

impl UnavailableBackend {
    fn error() -> BackendError {
        BackendError::Unavailable("connection refused".into())
    }
}

impl Backend for UnavailableBackend {
    async fn get(&self, _cf: ColumnFamily, _key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Err(Self::error())
    }

    async fn put(&self, _cf: ColumnFamily, _key: &[u8], _value: &[u8]) -> Result<(), BackendError> {
        Err(Self::error())
    }

    async fn put_if_absent(
        &self,
        _cf: ColumnFamily,
        _key: &[u8],
        _value: &[u8],
    ) -> Result<InsertOutcome, BackendError> {
        Err(Self::error())
    }

    async fn increment(&self, _partition: u16) -> Result<u64, BackendError> {
        Err(Self::error())
    }
}

/// Plays a writer in another process: right before our conditional insert
/// commits, it commits `rival` for the same key.
#[derive(Debug)]
pub(crate) struct RacingBackend {
    pub(crate) inner: MemoryBackend,
    rival: Vec<u8>,
    rival_term: Vec<u8>,
}

impl RacingBackend {
    /// `rival` is the id the other writer stores, `rival_term` the encoded
    /// term it stores under that id.
    pub(crate) fn new(rival: [u8; 8], rival_term: Vec<u8>) -> RacingBackend {
        RacingBackend {
            inner: MemoryBackend::new(),
            rival: rival.to_vec(),
            rival_term,
        }
    }
}

impl Backend for RacingBackend {
    async fn get(&self, cf: ColumnFamily, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        self.inner.get(cf, key).await
    }

    async fn put(&self, cf: ColumnFamily, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        self.inner.put(cf, key, value).await
    }

    async fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> Result<InsertOutcome, BackendError> {
        if cf == ColumnFamily::TermToId && key == self.rival_term.as_slice() {
            self.inner
                .put(ColumnFamily::IdToTerm, &self.rival, &self.rival_term)
                .await?;
            self.inner
                .put_if_absent(ColumnFamily::TermToId, key, &self.rival)
                .await?;
        }
        self.inner.put_if_absent(cf, key, value).await
    }

    async fn increment(&self, partition: u16) -> Result<u64, BackendError> {
        self.inner.increment(partition).await
    }
}
