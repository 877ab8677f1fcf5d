pub use balance::{balance_to_big_uint, Balance};
pub use chain_reader::{new_http_chain_reader, ChainReader, RpcChainReader};
pub use liquidity_ratio::LiquidityRatio;
pub use network::NetworkConfig;
pub use pool_address::{derive_pool_address, pair_address_for, sort_tokens};
pub use pool_record::PoolRecord;
pub use read_cache::{CacheEntry, CacheKey, ReadCache};
pub use token_pair::TokenPair;

mod balance;
mod chain_reader;
mod liquidity_ratio;
mod pool_address;
mod pool_record;
mod read_cache;
mod token_pair;

pub mod abi;
pub mod network;
