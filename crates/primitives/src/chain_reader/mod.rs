pub use rpc_chain_reader::{new_http_chain_reader, RpcChainReader};

mod rpc_chain_reader;

use super::Balance;

use alloy::primitives::{Address, BlockNumber};

use eyre::Result;

// Historical contract reads. Every read is pinned to `block_number` so later
// blocks never change the answer for a given height.
pub trait ChainReader: Send + Sync {
    async fn token0(&self, pool_address: Address, block_number: BlockNumber) -> Result<Address>;

    async fn token1(&self, pool_address: Address, block_number: BlockNumber) -> Result<Address>;

    async fn balance_of(
        &self,
        token_address: Address,
        holder_address: Address,
        block_number: BlockNumber,
    ) -> Result<Balance>;
}
