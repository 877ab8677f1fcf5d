use alloy::primitives::Address;

use eyre::{bail, Result};

// Two distinct tokens in the order the pool itself reports them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TokenPair {
    token0: Address,
    token1: Address,
}

impl TokenPair {
    pub fn new(token0: Address, token1: Address) -> Result<Self> {
        if token0 == token1 {
            bail!("token pair requires distinct tokens, got {} twice", token0);
        }

        Ok(Self { token0, token1 })
    }

    pub fn token0(&self) -> &Address {
        &self.token0
    }

    pub fn token1(&self) -> &Address {
        &self.token1
    }

    pub fn contains(&self, token: &Address) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    // returns the other side of the pair, if `token` belongs to it
    pub fn counterpart(&self, token: &Address) -> Option<&Address> {
        if *token == self.token0 {
            Some(&self.token1)
        } else if *token == self.token1 {
            Some(&self.token0)
        } else {
            None
        }
    }
}
