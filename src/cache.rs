//! Bounded in-memory cache of dynamic dictionary entries.
//!
//! The cache is advisory: a miss never means the term is unknown. Entries
//! are never invalidated since the dictionary is append-only.

use std::collections::HashMap;
use std::hash::{BuildHasher, RandomState};
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;

use crate::config::CacheConfig;
use crate::term::{Term, TermId};

pub trait TermCache: Send + Sync {
    fn get_id(&self, term: &Term) -> Option<TermId>;

    fn get_term(&self, id: TermId) -> Option<Term>;

    fn put(&self, term: Term, id: TermId);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);
}

/// Builds the cache described by `config`. A capacity of zero disables
/// caching altogether.
pub fn from_config(config: &CacheConfig) -> Box<dyn TermCache> {
    if config.capacity == 0 {
        Box::new(NoCache)
    } else {
        Box::new(LruTermCache::new(config.capacity, config.shards))
    }
}

/// Cache that never holds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl TermCache for NoCache {
    fn get_id(&self, _term: &Term) -> Option<TermId> {
        None
    }

    fn get_term(&self, _id: TermId) -> Option<Term> {
        None
    }

    fn put(&self, _term: Term, _id: TermId) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}
}

/// Sharded LRU holding both directions of every pair.
///
/// A pair is owned by the shard chosen by its term: that shard's LRU decides
/// recency and eviction. The reverse direction is a plain index sharded by
/// id, so resolving an id touches one term shard and one id shard. An index
/// entry only counts while the owning LRU still maps the term back to the
/// same id, so a lookup never sees half of a pair.
///
/// Lookups only take read locks; moving an entry to the front is skipped
/// when the shard is contended, which makes the eviction order approximate.
pub struct LruTermCache {
    term_shards: Box<[RwLock<LruCache<Arc<Term>, TermId>>]>,
    id_shards: Box<[RwLock<HashMap<TermId, Arc<Term>>>]>,
    hasher: RandomState,
    capacity: usize,
}

impl LruTermCache {
    pub fn new(capacity: usize, shards: usize) -> LruTermCache {
        let shards = shards.max(1);
        let per_shard = capacity.div_ceil(shards).max(1);
        let shard_capacity = NonZeroUsize::new(per_shard).unwrap_or(NonZeroUsize::MIN);
        LruTermCache {
            term_shards: (0..shards)
                .map(|_| RwLock::new(LruCache::new(shard_capacity)))
                .collect(),
            id_shards: (0..shards)
                .map(|_| RwLock::new(HashMap::with_capacity(per_shard)))
                .collect(),
            hasher: RandomState::new(),
            capacity: per_shard * shards,
        }
    }

    /// Upper bound on the number of cached pairs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn term_shard(&self, term: &Term) -> &RwLock<LruCache<Arc<Term>, TermId>> {
        let index = self.hasher.hash_one(term) as usize % self.term_shards.len();
        &self.term_shards[index]
    }

    fn id_shard(&self, id: TermId) -> &RwLock<HashMap<TermId, Arc<Term>>> {
        let index = self.hasher.hash_one(id) as usize % self.id_shards.len();
        &self.id_shards[index]
    }
}

impl TermCache for LruTermCache {
    fn get_id(&self, term: &Term) -> Option<TermId> {
        let shard = self.term_shard(term);
        let id = shard.read().peek(term).copied()?;
        if let Some(mut shard) = shard.try_write() {
            shard.promote(term);
        }
        Some(id)
    }

    fn get_term(&self, id: TermId) -> Option<Term> {
        let term = self.id_shard(id).read().get(&id).cloned()?;
        let shard = self.term_shard(&term);
        if shard.read().peek(&term) != Some(&id) {
            return None;
        }
        if let Some(mut shard) = shard.try_write() {
            shard.promote(&term);
        }
        Some(Term::clone(&term))
    }

    // lock order: term shard, then id shard
    fn put(&self, term: Term, id: TermId) {
        let term = Arc::new(term);
        let mut shard = self.term_shard(&term).write();
        if let Some((evicted, evicted_id)) = shard.push(term.clone(), id) {
            if evicted_id != id {
                let mut index = self.id_shard(evicted_id).write();
                if index.get(&evicted_id) == Some(&evicted) {
                    index.remove(&evicted_id);
                }
            }
        }
        self.id_shard(id).write().insert(id, term);
    }

    fn len(&self) -> usize {
        self.term_shards.iter().map(|shard| shard.read().len()).sum()
    }

    fn clear(&self) {
        for shard in self.term_shards.iter() {
            shard.write().clear();
        }
        for index in self.id_shards.iter() {
            index.write().clear();
        }
    }
}
