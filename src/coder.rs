use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, RandomState};
use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::allocator::IdAllocator;
use crate::backend::{Backend, ColumnFamily, FjallBackend, InsertOutcome};
use crate::cache::{self, TermCache};
use crate::config::Config;
use crate::error::{BackendError, CoderError, Result};
use crate::term::{EncodedQuad, Quad, Term, TermId};
use crate::vocabulary::VocabularyRegistry;

/// Translates terms to ids and back.
///
/// Vocabulary terms resolve from the registry without I/O. Every other term
/// gets a dynamic id the first time it is encoded, and keeps it forever.
/// All operations take `&self`; share a coder between tasks with an `Arc`.
pub struct Coder<B> {
    backend: Arc<B>,
    registry: Arc<VocabularyRegistry>,
    allocator: IdAllocator<B>,
    cache: Box<dyn TermCache>,
    encode_locks: Box<[Mutex<()>]>,
    lock_hasher: RandomState,
    batch_concurrency: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoderStats {
    pub vocabulary_terms: usize,
    pub cached_entries: usize,
}

struct PendingTerm<'a> {
    term: &'a Term,
    key: Vec<u8>,
    positions: Vec<usize>,
}

impl Coder<FjallBackend> {
    /// Opens the keyspace and vocabularies described by `config`.
    pub fn open(config: &Config) -> Result<Coder<FjallBackend>> {
        let registry = Arc::new(VocabularyRegistry::new(&config.vocabularies)?);
        let backend = Arc::new(FjallBackend::open(&config.storage)?);
        Coder::new(backend, registry, config)
    }
}

impl<B: Backend> Coder<B> {
    pub fn new(
        backend: Arc<B>,
        registry: Arc<VocabularyRegistry>,
        config: &Config,
    ) -> Result<Coder<B>> {
        if config.coder.encode_lock_stripes == 0 {
            return Err(CoderError::configuration(
                "coder.encode_lock_stripes must be positive",
            ));
        }
        if config.coder.batch_concurrency == 0 {
            return Err(CoderError::configuration(
                "coder.batch_concurrency must be positive",
            ));
        }
        let allocator = IdAllocator::new(backend.clone(), &config.allocator)?;
        info!(
            target: "coder",
            partitions = allocator.partitions(),
            cache_capacity = config.cache.capacity,
            vocabulary_terms = registry.len(),
            "coder ready"
        );
        Ok(Coder {
            backend,
            registry,
            allocator,
            cache: cache::from_config(&config.cache),
            encode_locks: (0..config.coder.encode_lock_stripes)
                .map(|_| Mutex::new(()))
                .collect(),
            lock_hasher: RandomState::new(),
            batch_concurrency: config.coder.batch_concurrency,
        })
    }

    pub fn registry(&self) -> &VocabularyRegistry {
        &self.registry
    }

    pub fn stats(&self) -> CoderStats {
        CoderStats {
            vocabulary_terms: self.registry.len(),
            cached_entries: self.cache.len(),
        }
    }

    /// Returns the id of `term`, assigning a new one if the term has never
    /// been encoded.
    pub async fn encode(&self, term: &Term) -> Result<TermId> {
        term.validate()?;
        if let Some(id) = self.lookup_local(term) {
            return Ok(id);
        }
        self.encode_miss(term, term.to_bytes()?).await
    }

    pub async fn decode(&self, id: TermId) -> Result<Term> {
        if !id.is_dynamic() {
            return self.decode_reserved(id);
        }
        if let Some(term) = self.cache.get_term(id) {
            return Ok(term);
        }
        let row = self
            .backend
            .get(ColumnFamily::IdToTerm, &id.to_be_bytes())
            .await?;
        let term = decode_row(id, row)?;
        let owner = self
            .backend
            .get(ColumnFamily::TermToId, &term.to_bytes()?)
            .await?;
        check_owner(id, &term, owner)?;
        self.cache.put(term.clone(), id);
        Ok(term)
    }

    /// Encodes every term, in order. Lookups that miss the registry and the
    /// cache are batched into one backend round trip; fails as a whole if
    /// any term fails.
    pub async fn encode_all(&self, terms: &[Term]) -> Result<Vec<TermId>> {
        let mut ids = vec![None; terms.len()];
        let mut pending: Vec<PendingTerm<'_>> = vec![];
        let mut index: HashMap<_, usize> = HashMap::new();
        for (position, term) in terms.iter().enumerate() {
            term.validate()?;
            if let Some(id) = self.lookup_local(term) {
                ids[position] = Some(id);
                continue;
            }
            match index.entry(term) {
                Entry::Occupied(entry) => pending[*entry.get()].positions.push(position),
                Entry::Vacant(entry) => {
                    entry.insert(pending.len());
                    pending.push(PendingTerm {
                        term,
                        key: term.to_bytes()?,
                        positions: vec![position],
                    });
                }
            }
        }

        if !pending.is_empty() {
            let keys: Vec<_> = pending.iter().map(|p| p.key.clone()).collect();
            let rows = self.backend.get_many(ColumnFamily::TermToId, &keys).await?;
            check_batch(ColumnFamily::TermToId, keys.len(), rows.len())?;
            let mut missing = vec![];
            for (pending, row) in pending.into_iter().zip(rows) {
                match row {
                    Some(value) => {
                        let id = decode_id(&value)?;
                        self.cache.put(pending.term.clone(), id);
                        for position in pending.positions {
                            ids[position] = Some(id);
                        }
                    }
                    None => missing.push(pending),
                }
            }
            debug!(
                target: "coder",
                batch = terms.len(),
                unknown = missing.len(),
                "encoding batch"
            );
            let assigned: Vec<TermId> = stream::iter(
                missing
                    .iter()
                    .map(|pending| self.encode_miss(pending.term, pending.key.clone())),
            )
            .buffered(self.batch_concurrency)
            .try_collect()
            .await?;
            for (pending, id) in missing.into_iter().zip(assigned) {
                for position in pending.positions {
                    ids[position] = Some(id);
                }
            }
        }

        ids.into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| CoderError::CorruptRow {
                cf: ColumnFamily::TermToId,
                reason: "batch entry left unresolved".into(),
            })
    }

    /// Decodes every id, in order; fails as a whole if any id fails.
    pub async fn decode_all(&self, ids: &[TermId]) -> Result<Vec<Term>> {
        let mut terms = vec![None; ids.len()];
        let mut pending: Vec<(TermId, Vec<usize>)> = vec![];
        let mut index: HashMap<_, usize> = HashMap::new();
        for (position, &id) in ids.iter().enumerate() {
            if !id.is_dynamic() {
                terms[position] = Some(self.decode_reserved(id)?);
                continue;
            }
            if let Some(term) = self.cache.get_term(id) {
                terms[position] = Some(term);
                continue;
            }
            match index.entry(id) {
                Entry::Occupied(entry) => pending[*entry.get()].1.push(position),
                Entry::Vacant(entry) => {
                    entry.insert(pending.len());
                    pending.push((id, vec![position]));
                }
            }
        }

        if !pending.is_empty() {
            let keys: Vec<_> = pending
                .iter()
                .map(|(id, _)| id.to_be_bytes().to_vec())
                .collect();
            let rows = self.backend.get_many(ColumnFamily::IdToTerm, &keys).await?;
            check_batch(ColumnFamily::IdToTerm, keys.len(), rows.len())?;
            let decoded = pending
                .iter()
                .zip(rows)
                .map(|((id, _), row)| decode_row(*id, row))
                .collect::<Result<Vec<_>>>()?;
            let term_keys = decoded
                .iter()
                .map(Term::to_bytes)
                .collect::<Result<Vec<_>>>()?;
            let owners = self
                .backend
                .get_many(ColumnFamily::TermToId, &term_keys)
                .await?;
            check_batch(ColumnFamily::TermToId, term_keys.len(), owners.len())?;
            let resolved = pending.into_iter().zip(decoded).zip(owners);
            for (((id, positions), term), owner) in resolved {
                check_owner(id, &term, owner)?;
                self.cache.put(term.clone(), id);
                for position in positions {
                    terms[position] = Some(term.clone());
                }
            }
        }

        terms
            .into_iter()
            .zip(ids)
            .map(|(term, &id)| {
                term.ok_or_else(|| CoderError::InconsistentDictionary {
                    id,
                    reason: "batch entry left unresolved".into(),
                })
            })
            .collect()
    }

    /// Encodes the four positions of a statement. A quad without context
    /// gets [`TermId::DEFAULT_CONTEXT`].
    pub async fn encode_quad(&self, quad: &Quad) -> Result<EncodedQuad> {
        quad.validate()?;
        let context = async {
            match &quad.context {
                Some(context) => self.encode(context).await,
                None => Ok(TermId::DEFAULT_CONTEXT),
            }
        };
        let (subject, predicate, object, context) = futures::try_join!(
            self.encode(&quad.subject),
            self.encode(&quad.predicate),
            self.encode(&quad.object),
            context
        )?;
        Ok(EncodedQuad {
            subject,
            predicate,
            object,
            context,
        })
    }

    pub async fn decode_quad(&self, encoded: &EncodedQuad) -> Result<Quad> {
        let context = async {
            if encoded.context == TermId::DEFAULT_CONTEXT {
                Ok(None)
            } else {
                self.decode(encoded.context).await.map(Some)
            }
        };
        let (subject, predicate, object, context) = futures::try_join!(
            self.decode(encoded.subject),
            self.decode(encoded.predicate),
            self.decode(encoded.object),
            context
        )?;
        let quad = Quad {
            subject,
            predicate,
            object,
            context,
        };
        quad.validate()?;
        Ok(quad)
    }

    fn lookup_local(&self, term: &Term) -> Option<TermId> {
        self.registry
            .lookup_id(term)
            .or_else(|| self.cache.get_id(term))
    }

    fn encode_lock(&self, key: &[u8]) -> &Mutex<()> {
        let stripe = self.lock_hasher.hash_one(key) as usize % self.encode_locks.len();
        &self.encode_locks[stripe]
    }

    /// Resolves a term that missed the registry and the cache. Encodes of
    /// the same term within this process run one at a time, so only the
    /// first of them reaches the conditional insert.
    async fn encode_miss(&self, term: &Term, key: Vec<u8>) -> Result<TermId> {
        let _guard = self.encode_lock(&key).lock().await;
        if let Some(id) = self.cache.get_id(term) {
            return Ok(id);
        }
        if let Some(value) = self.backend.get(ColumnFamily::TermToId, &key).await? {
            let id = decode_id(&value)?;
            self.cache.put(term.clone(), id);
            return Ok(id);
        }
        self.insert(term, &key).await
    }

    async fn insert(&self, term: &Term, key: &[u8]) -> Result<TermId> {
        let candidate = self.allocator.allocate_for(key).await?;
        let id_key = candidate.to_be_bytes();
        // the reverse row goes first: an id visible in term_to_id must
        // already be decodable
        self.backend.put(ColumnFamily::IdToTerm, &id_key, key).await?;
        let id = match self
            .backend
            .put_if_absent(ColumnFamily::TermToId, key, &id_key)
            .await?
        {
            InsertOutcome::Inserted => {
                debug!(target: "coder", "assigned {candidate} to {term}");
                candidate
            }
            InsertOutcome::Existing(value) => {
                let winner = decode_id(&value)?;
                debug!(
                    target: "coder",
                    "{term} was assigned {winner} concurrently; {candidate} stays unused"
                );
                winner
            }
        };
        self.cache.put(term.clone(), id);
        Ok(id)
    }

    fn decode_reserved(&self, id: TermId) -> Result<Term> {
        if let Some(term) = self.registry.lookup_term(id) {
            return Ok(term);
        }
        if self.registry.range_of(id).is_some() {
            return Err(CoderError::UnassignedReservedId(id));
        }
        error!(target: "coder", %id, "reserved id outside every vocabulary range");
        Err(CoderError::InconsistentDictionary {
            id,
            reason: "reserved id outside every vocabulary range".into(),
        })
    }
}

fn decode_id(value: &[u8]) -> Result<TermId> {
    TermId::from_be_slice(value).ok_or_else(|| CoderError::CorruptRow {
        cf: ColumnFamily::TermToId,
        reason: format!("expected an 8 byte id, found {} bytes", value.len()),
    })
}

fn decode_row(id: TermId, row: Option<Vec<u8>>) -> Result<Term> {
    let Some(bytes) = row else {
        error!(target: "coder", %id, "dynamic id has no dictionary entry");
        return Err(CoderError::InconsistentDictionary {
            id,
            reason: "no id_to_term row".into(),
        });
    };
    Term::from_bytes(&bytes).map_err(|e| CoderError::CorruptRow {
        cf: ColumnFamily::IdToTerm,
        reason: format!("id {id}: {e}"),
    })
}

/// A reverse row only counts once `term_to_id` points back at it. Writers
/// that lose the conditional insert leave reverse rows behind for ids that
/// were never handed out.
fn check_owner(id: TermId, term: &Term, owner: Option<Vec<u8>>) -> Result<()> {
    let reason = match owner {
        Some(value) => {
            let owner = decode_id(&value)?;
            if owner == id {
                return Ok(());
            }
            format!("{term} is assigned to {owner}")
        }
        None => format!("{term} has no term_to_id row"),
    };
    error!(target: "coder", %id, %reason, "id does not own its term");
    Err(CoderError::InconsistentDictionary { id, reason })
}

fn check_batch(cf: ColumnFamily, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    Err(BackendError::Corrupt {
        cf,
        reason: format!("batch lookup returned {found} rows for {expected} keys"),
    }
    .into())
}
