use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub allocator: AllocatorConfig,
    pub coder: CoderConfig,
    pub vocabularies: Vec<VocabularyConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
    /// Delete the keyspace when it is dropped
    pub temporary: bool,
    /// Sync dictionary writes before acknowledging them
    pub sync_writes: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached pairs. 0 disables the cache.
    pub capacity: usize,
    pub shards: usize,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    pub partitions: u32,
    pub strategy: PartitionStrategy,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Rotate over all partitions
    #[default]
    RoundRobin,
    /// Pick the partition from a hash of the encoded term
    Hash,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoderConfig {
    /// Number of locks that serialize encodes of the same term
    pub encode_lock_stripes: usize,
    /// Maximum number of in-flight allocations per batch
    pub batch_concurrency: usize,
}

/// A vocabulary declared at deployment time. A term's offset is its index
/// in `terms`, so the list may only ever be appended to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VocabularyConfig {
    pub name: String,
    pub namespace: String,
    pub base: u64,
    pub span: u64,
    #[serde(default)]
    pub terms: Vec<String>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("unable to parse config file {}", path.display()))?;
        Ok(config)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("coder-data"),
            temporary: false,
            sync_writes: true,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 100_000,
            shards: 16,
        }
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            partitions: 16,
            strategy: PartitionStrategy::RoundRobin,
        }
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            encode_lock_stripes: 256,
            batch_concurrency: 32,
        }
    }
}
