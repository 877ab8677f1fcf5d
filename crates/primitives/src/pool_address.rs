use alloy::primitives::{keccak256, Address, B256};

// Derives the CREATE2 address a factory deploys the pool for (token0, token1) at.
//
// Token order is taken as given: the pool's own token0()/token1() define it, so
// no sorting happens here. Use `pair_address_for` when the order is unknown.
pub fn derive_pool_address(
    factory: Address,
    token0: Address,
    token1: Address,
    init_code_hash: B256,
) -> Address {
    let salt = keccak256([token0.as_slice(), token1.as_slice()].concat());

    factory.create2(salt, init_code_hash)
}

// returns (token0, token1) in the order the factory stores them
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

pub fn pair_address_for(
    factory: Address,
    token_a: Address,
    token_b: Address,
    init_code_hash: B256,
) -> Address {
    let (token0, token1) = sort_tokens(token_a, token_b);
    derive_pool_address(factory, token0, token1, init_code_hash)
}
