use crate::{chain_reads::ChainReads, read_guard::ReadGuard};

use large_swap_primitives::{Balance, ChainReader, ReadCache};

use alloy::primitives::{Address, BlockNumber};

use eyre::{bail, eyre, Result};
use fnv::{FnvHashMap, FnvHashSet};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

// In-memory chain with per-call counters, injectable failures and latency.
#[derive(Default)]
pub struct MockChainReader {
    pools: FnvHashMap<Address, (Address, Address)>,
    balances: FnvHashMap<(Address, Address), Balance>,
    failing_contracts: FnvHashSet<Address>,
    latency: Option<Duration>,
    token_reads: AtomicUsize,
    balance_reads: AtomicUsize,
}

impl MockChainReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(mut self, pool_address: Address, token0: Address, token1: Address) -> Self {
        self.pools.insert(pool_address, (token0, token1));
        self
    }

    pub fn with_balance(mut self, token: Address, holder: Address, balance: Balance) -> Self {
        self.balances.insert((token, holder), balance);
        self
    }

    pub fn with_failing_contract(mut self, contract: Address) -> Self {
        self.failing_contracts.insert(contract);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn token_reads(&self) -> usize {
        self.token_reads.load(Ordering::SeqCst)
    }

    pub fn balance_reads(&self) -> usize {
        self.balance_reads.load(Ordering::SeqCst)
    }

    async fn respond<T>(&self, contract: Address, value: Option<T>) -> Result<T> {
        match self.latency {
            Some(latency) => tokio::time::sleep(latency).await,
            None => tokio::task::yield_now().await,
        }

        if self.failing_contracts.contains(&contract) {
            bail!("execution reverted at {}", contract);
        }

        value.ok_or_else(|| eyre!("no contract code at {}", contract))
    }
}

impl ChainReader for MockChainReader {
    async fn token0(&self, pool_address: Address, _block_number: BlockNumber) -> Result<Address> {
        self.token_reads.fetch_add(1, Ordering::SeqCst);
        let token0 = self.pools.get(&pool_address).map(|(token0, _)| *token0);
        self.respond(pool_address, token0).await
    }

    async fn token1(&self, pool_address: Address, _block_number: BlockNumber) -> Result<Address> {
        self.token_reads.fetch_add(1, Ordering::SeqCst);
        let token1 = self.pools.get(&pool_address).map(|(_, token1)| *token1);
        self.respond(pool_address, token1).await
    }

    async fn balance_of(
        &self,
        token_address: Address,
        holder_address: Address,
        _block_number: BlockNumber,
    ) -> Result<Balance> {
        self.balance_reads.fetch_add(1, Ordering::SeqCst);
        let balance = self
            .balances
            .get(&(token_address, holder_address))
            .copied()
            .unwrap_or_default();
        self.respond(token_address, Some(balance)).await
    }
}

pub fn mock_chain_reads(reader: &Arc<MockChainReader>, timeout: Duration) -> ChainReads<MockChainReader> {
    ChainReads::new(
        Arc::clone(reader),
        Arc::new(ReadCache::new()),
        Arc::new(ReadGuard::new(timeout)),
    )
}
