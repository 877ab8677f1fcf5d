use crate::read_guard::{ReadGuard, SuppressedReads};

use large_swap_primitives::{Balance, CacheEntry, CacheKey, ChainReader, ReadCache};

use alloy::primitives::{Address, BlockNumber};

use std::sync::Arc;

// The reader, cache and guard shared by every component of one evaluation
// session.
pub struct ChainReads<R> {
    reader: Arc<R>,
    cache: Arc<ReadCache<CacheEntry>>,
    guard: Arc<ReadGuard>,
}

impl<R> Clone for ChainReads<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            cache: Arc::clone(&self.cache),
            guard: Arc::clone(&self.guard),
        }
    }
}

impl<R: ChainReader> ChainReads<R> {
    pub fn new(reader: Arc<R>, cache: Arc<ReadCache<CacheEntry>>, guard: Arc<ReadGuard>) -> Self {
        Self {
            reader,
            cache,
            guard,
        }
    }

    pub fn cache(&self) -> &ReadCache<CacheEntry> {
        &self.cache
    }

    pub fn suppressed(&self) -> &SuppressedReads {
        self.guard.suppressed()
    }

    // token0 and token1 are read concurrently; both must succeed
    pub async fn pool_tokens(
        &self,
        pool_address: Address,
        block_number: BlockNumber,
    ) -> Option<(Address, Address)> {
        let (token0, token1) = tokio::join!(
            self.guard.read(
                "token0",
                pool_address,
                self.reader.token0(pool_address, block_number)
            ),
            self.guard.read(
                "token1",
                pool_address,
                self.reader.token1(pool_address, block_number)
            )
        );

        Some((token0?, token1?))
    }

    // Balance of `token_address` held by the pool at `block_number`. Failed
    // reads fall back to zero and are not cached.
    pub async fn pool_balance(
        &self,
        pool_address: Address,
        token_address: Address,
        block_number: BlockNumber,
    ) -> Balance {
        let (reader, guard) = (&self.reader, &self.guard);

        self.cache
            .get_or_resolve(
                CacheKey::pool_balance(&pool_address, &token_address, block_number),
                move || async move {
                    guard
                        .read(
                            "balanceOf",
                            token_address,
                            reader.balance_of(token_address, pool_address, block_number),
                        )
                        .await
                        .map(CacheEntry::Balance)
                },
            )
            .await
            .as_ref()
            .and_then(CacheEntry::as_balance)
            .copied()
            .unwrap_or(Balance::ZERO)
    }
}
