use crate::chain_reads::ChainReads;

use large_swap_primitives::{
    derive_pool_address, CacheEntry, CacheKey, ChainReader, PoolRecord, TokenPair,
};

use alloy::primitives::{Address, BlockNumber, B256};

use tracing::{debug, instrument};

// Confirms a swap-emitting contract is the factory's genuine pool for the
// tokens it reports, so liquidity math is never run against an impostor.
pub struct PoolValidator<R> {
    reads: ChainReads<R>,
}

impl<R: ChainReader> PoolValidator<R> {
    pub fn new(reads: ChainReads<R>) -> Self {
        Self { reads }
    }

    #[instrument(skip(self))]
    pub async fn validate(
        &self,
        pool_address: Address,
        factory_address: Address,
        init_code_hash: B256,
        block_number: BlockNumber,
    ) -> PoolRecord {
        let reads = &self.reads;

        reads
            .cache()
            .get_or_resolve(
                CacheKey::pool_validity(&pool_address, block_number),
                move || async move {
                    let (token0, token1) = reads.pool_tokens(pool_address, block_number).await?;

                    let record = match TokenPair::new(token0, token1) {
                        Ok(tokens) => {
                            let expected_address = derive_pool_address(
                                factory_address,
                                token0,
                                token1,
                                init_code_hash,
                            );
                            PoolRecord::new(pool_address, tokens, expected_address == pool_address)
                        }
                        Err(err) => {
                            debug!(error = ?err, "pool reported a malformed token pair");
                            PoolRecord::invalid(pool_address)
                        }
                    };

                    Some(CacheEntry::Pool(record))
                },
            )
            .await
            .as_ref()
            .and_then(CacheEntry::as_pool)
            .copied()
            .unwrap_or_else(|| PoolRecord::invalid(pool_address))
    }
}
