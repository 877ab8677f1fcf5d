// Read-through cache for historical chain reads, keyed by operation, subject and
// block number. Entries are never evicted: a cache is scoped to one evaluation
// session and dropped with it.

use super::{Balance, PoolRecord};

use alloy::primitives::{hex, Address, BlockNumber};

use fnv::FnvHashMap;
use std::{
    fmt::{self, Display},
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::sync::OnceCell;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn pool_validity(pool_address: &Address, block_number: BlockNumber) -> Self {
        Self(format!(
            "pool-{}-{}",
            hex::encode_prefixed(pool_address),
            block_number
        ))
    }

    pub fn pool_balance(
        pool_address: &Address,
        token_address: &Address,
        block_number: BlockNumber,
    ) -> Self {
        Self(format!(
            "poolBalance-{}-{}-{}",
            hex::encode_prefixed(pool_address),
            hex::encode_prefixed(token_address),
            block_number
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CacheEntry {
    Pool(PoolRecord),
    Balance(Balance),
}

impl CacheEntry {
    pub fn as_pool(&self) -> Option<&PoolRecord> {
        match self {
            CacheEntry::Pool(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_balance(&self) -> Option<&Balance> {
        match self {
            CacheEntry::Balance(balance) => Some(balance),
            _ => None,
        }
    }
}

pub struct ReadCache<V> {
    inner: Mutex<FnvHashMap<CacheKey, Arc<OnceCell<V>>>>,
}

impl<V: Clone> ReadCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FnvHashMap::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FnvHashMap<CacheKey, Arc<OnceCell<V>>>> {
        // cells are only ever set atomically, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &CacheKey) -> Option<V> {
        self.lock().get(key).and_then(|cell| cell.get().cloned())
    }

    // First writer wins: returns false if the key was already resolved or is
    // being resolved. Values for one key are idempotent so the loser's value
    // is equivalent.
    pub fn put(&self, key: CacheKey, value: V) -> bool {
        let cell = Arc::clone(self.lock().entry(key).or_default());
        cell.set(value).is_ok()
    }

    pub fn len(&self) -> usize {
        self.lock()
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Returns the cached value for `key`, or runs `resolve` and caches its
    // output. Concurrent callers for the same key wait on the first resolution
    // instead of issuing their own. A `None` resolution is not cached, so the
    // next caller resolves again.
    pub async fn get_or_resolve<F, Fut>(&self, key: CacheKey, resolve: F) -> Option<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<V>>,
    {
        let cell = Arc::clone(self.lock().entry(key.clone()).or_default());

        if let Some(value) = cell.get() {
            debug!(key = key.as_str(), "read cache hit");
            return Some(value.clone());
        }

        cell.get_or_try_init(|| async move { resolve().await.ok_or(()) })
            .await
            .ok()
            .cloned()
    }
}

impl<V: Clone> Default for ReadCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
