//! Persistent key-value capability consumed by the coder.
//!
//! Two inverse column families hold the dictionary and a third one holds
//! the allocator counters. Keys and values are opaque bytes; the coder owns
//! their encoding (see [`ColumnFamily`]).

mod keyspace;
mod memory;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use crate::error::BackendError;

pub use self::keyspace::FjallBackend;
pub use self::memory::MemoryBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnFamily {
    /// key: minicbor encoded term, value: 8 byte big-endian id
    TermToId,
    /// key: 8 byte big-endian id, value: minicbor encoded term
    IdToTerm,
    /// key: 2 byte big-endian partition, value: 8 byte big-endian counter
    AllocatorCounters,
}

impl ColumnFamily {
    pub const fn name(self) -> &'static str {
        match self {
            ColumnFamily::TermToId => "term_to_id",
            ColumnFamily::IdToTerm => "id_to_term",
            ColumnFamily::AllocatorCounters => "allocator_counters",
        }
    }
}

impl Display for ColumnFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another writer got there first; carries its value.
    Existing(Vec<u8>),
}

pub trait Backend: Send + Sync + 'static {
    fn get(
        &self,
        cf: ColumnFamily,
        key: &[u8],
    ) -> impl Future<Output = Result<Option<Vec<u8>>, BackendError>> + Send;

    /// Looks up many keys in one round trip. Results follow `keys` order.
    fn get_many(
        &self,
        cf: ColumnFamily,
        keys: &[Vec<u8>],
    ) -> impl Future<Output = Result<Vec<Option<Vec<u8>>>, BackendError>> + Send {
        async move {
            let mut values = Vec::with_capacity(keys.len());
            for key in keys {
                values.push(self.get(cf, key).await?);
            }
            Ok(values)
        }
    }

    fn put(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Writes `value` only if `key` has no value yet. Must be atomic with
    /// respect to every other `put_if_absent` on the same key.
    fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> impl Future<Output = Result<InsertOutcome, BackendError>> + Send;

    /// Atomically increments the counter of `partition` and returns the new
    /// value. Counters start at zero, so the first call returns 1. The new
    /// value must be durable before it is returned.
    fn increment(&self, partition: u16) -> impl Future<Output = Result<u64, BackendError>> + Send;
}

impl<B: Backend> Backend for Arc<B> {
    fn get(
        &self,
        cf: ColumnFamily,
        key: &[u8],
    ) -> impl Future<Output = Result<Option<Vec<u8>>, BackendError>> + Send {
        (**self).get(cf, key)
    }

    fn get_many(
        &self,
        cf: ColumnFamily,
        keys: &[Vec<u8>],
    ) -> impl Future<Output = Result<Vec<Option<Vec<u8>>>, BackendError>> + Send {
        (**self).get_many(cf, keys)
    }

    fn put(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> impl Future<Output = Result<(), BackendError>> + Send {
        (**self).put(cf, key, value)
    }

    fn put_if_absent(
        &self,
        cf: ColumnFamily,
        key: &[u8],
        value: &[u8],
    ) -> impl Future<Output = Result<InsertOutcome, BackendError>> + Send {
        (**self).put_if_absent(cf, key, value)
    }

    fn increment(&self, partition: u16) -> impl Future<Output = Result<u64, BackendError>> + Send {
        (**self).increment(partition)
    }
}

pub(crate) fn counter_key(partition: u16) -> [u8; 2] {
    partition.to_be_bytes()
}

pub(crate) fn decode_counter(partition: u16, bytes: &[u8]) -> Result<u64, BackendError> {
    let bytes: [u8; 8] = bytes.try_into().map_err(|_| BackendError::Corrupt {
        cf: ColumnFamily::AllocatorCounters,
        reason: format!("partition {partition} has a {} byte counter", bytes.len()),
    })?;
    Ok(u64::from_be_bytes(bytes))
}
