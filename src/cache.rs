//! Memoization of diff results.
//!
//! The engine keeps no state between calls. Hosts that re-diff on every
//! keystroke can put one of these in front of it: results are keyed by a
//! blake3 hash of both input texts and shared as `Arc<DiffResult>`.
//! Refusals are never cached.

use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::engine::{DiffConfig, diff_with_config};
use crate::error::DiffOutcome;
use crate::hash::hash_pair;
use crate::result::DiffResult;

/// Default number of memoized results before the cache resets.
const DEFAULT_MAX_ENTRIES: usize = 64;

// =============================================================================
// Cache Key
// =============================================================================

/// Cache key for an old/new text pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Key for a text pair.
    pub fn new(old_text: &str, new_text: &str) -> Self {
        Self(hash_pair(old_text, new_text))
    }

    /// Raw hash value.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// =============================================================================
// Diff Cache
// =============================================================================

/// Non-thread-safe diff cache.
#[derive(Debug)]
pub struct DiffCache {
    entries: FxHashMap<CacheKey, Arc<DiffResult>>,
    max_entries: usize,
    config: DiffConfig,
}

impl Default for DiffCache {
    fn default() -> Self {
        Self::new(DiffConfig::default())
    }
}

impl DiffCache {
    /// Create an empty cache diffing under `config`.
    pub fn new(config: DiffConfig) -> Self {
        Self {
            entries: FxHashMap::default(),
            max_entries: DEFAULT_MAX_ENTRIES,
            config,
        }
    }

    /// Set how many results are kept before the cache resets.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Return the memoized diff of the pair, computing it on a miss.
    pub fn get_or_diff(&mut self, old_text: &str, new_text: &str) -> DiffOutcome<Arc<DiffResult>> {
        let key = CacheKey::new(old_text, new_text);
        if let Some(hit) = self.entries.get(&key) {
            trace!("diff cache hit {key}");
            return Ok(Arc::clone(hit));
        }

        trace!("diff cache miss {key}");
        let result = Arc::new(diff_with_config(old_text, new_text, &self.config)?);
        if self.entries.len() >= self.max_entries {
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&result));
        Ok(result)
    }

    /// Get a memoized result without computing.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<DiffResult>> {
        self.entries.get(key).cloned()
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Thread-safe shared diff cache.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
/// The diff itself runs outside the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedDiffCache {
    inner: Arc<RwLock<DiffCache>>,
}

impl SharedDiffCache {
    /// Create a new empty cache diffing under `config`.
    pub fn new(config: DiffConfig) -> Self {
        Self::from_cache(DiffCache::new(config))
    }

    /// Share an existing cache.
    pub fn from_cache(cache: DiffCache) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Execute a closure with read access to the cache.
    pub fn with_read<R>(&self, f: impl FnOnce(&DiffCache) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with write access to the cache.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut DiffCache) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Return the memoized diff of the pair, computing it on a miss.
    pub fn get_or_diff(&self, old_text: &str, new_text: &str) -> DiffOutcome<Arc<DiffResult>> {
        let key = CacheKey::new(old_text, new_text);
        if let Some(hit) = self.with_read(|c| c.get(&key)) {
            trace!("shared diff cache hit {key}");
            return Ok(hit);
        }

        let config = self.with_read(|c| c.config);
        let result = Arc::new(diff_with_config(old_text, new_text, &config)?);
        let shared = self.with_write(|c| {
            if c.entries.len() >= c.max_entries {
                c.entries.clear();
            }
            Arc::clone(c.entries.entry(key).or_insert(result))
        });
        Ok(shared)
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.with_read(|c| c.contains(key))
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.with_read(|c| c.len())
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.with_write(|c| c.clear());
    }
}

// =============================================================================
// Tests
// =============================================================================
