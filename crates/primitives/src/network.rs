use super::LiquidityRatio;

use alloy::primitives::{address, b256, Address, B256};

use eyre::{eyre, Result};

pub const BSC_MAINNET_CHAIN_ID: u64 = 56;
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;

pub const PANCAKE_V2_FACTORY_ADDRESS: Address =
    address!("cA143Ce32Fe78f1f7019d7d551a6402fC5350c73");
pub const PANCAKE_V2_INIT_CODE_HASH: B256 =
    b256!("00fb7f630766e6a796048ea87d01acd3068e8ff67d078148a3fa3f4a84f69bd5");

pub const PANCAKE_V2_TESTNET_FACTORY_ADDRESS: Address =
    address!("6725F303b657a9451d8BA641348b6761A6CC7a17");
pub const PANCAKE_V2_TESTNET_INIT_CODE_HASH: B256 =
    b256!("d0d4c4cd0848c93cb4fd1f498d7013ee6bfb25783ea21593d5834f5d250ece66");

// percentage of a pool side a swap has to exceed to be reported
const DEFAULT_LARGE_SWAP_THRESHOLD: u64 = 10;

// Factory and alerting parameters that apply to one chain.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub factory_address: Address,
    pub init_code_hash: B256,
    pub threshold: LiquidityRatio,
}

impl NetworkConfig {
    pub fn for_chain(chain_id: u64) -> Result<Self> {
        let (factory_address, init_code_hash) = match chain_id {
            BSC_MAINNET_CHAIN_ID => (PANCAKE_V2_FACTORY_ADDRESS, PANCAKE_V2_INIT_CODE_HASH),
            BSC_TESTNET_CHAIN_ID => (
                PANCAKE_V2_TESTNET_FACTORY_ADDRESS,
                PANCAKE_V2_TESTNET_INIT_CODE_HASH,
            ),
            _ => return Err(eyre!("No network config for chain id {}", chain_id)),
        };

        Ok(Self {
            chain_id,
            factory_address,
            init_code_hash,
            threshold: LiquidityRatio::from_percent(DEFAULT_LARGE_SWAP_THRESHOLD),
        })
    }
}
