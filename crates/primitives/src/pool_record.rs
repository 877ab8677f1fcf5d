use super::TokenPair;

use alloy::primitives::Address;

// Outcome of checking a claimed pool against its factory. Token identities are
// only present when both token reads succeeded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PoolRecord {
    pool_address: Address,
    tokens: Option<TokenPair>,
    is_valid: bool,
}

impl PoolRecord {
    pub fn new(pool_address: Address, tokens: TokenPair, is_valid: bool) -> Self {
        Self {
            pool_address,
            tokens: Some(tokens),
            is_valid,
        }
    }

    pub fn invalid(pool_address: Address) -> Self {
        Self {
            pool_address,
            tokens: None,
            is_valid: false,
        }
    }

    pub fn pool_address(&self) -> &Address {
        &self.pool_address
    }

    pub fn tokens(&self) -> Option<&TokenPair> {
        self.tokens.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn token0(&self) -> Option<&Address> {
        self.tokens.as_ref().map(TokenPair::token0)
    }

    pub fn token1(&self) -> Option<&Address> {
        self.tokens.as_ref().map(TokenPair::token1)
    }
}
