use large_swap_primitives::{Balance, PoolRecord};

use alloy::primitives::{Address, BlockNumber};

// A decoded pool Swap event with the block it was mined in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapEvent {
    pub pool_address: Address,
    pub amount0_in: Balance,
    pub amount1_in: Balance,
    pub amount0_out: Balance,
    pub amount1_out: Balance,
    pub to: Address,
    pub block_number: BlockNumber,
}

// A swap expressed in terms of the validated pool's tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapObservation {
    pub pool: PoolRecord,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: Balance,
    pub amount_out: Balance,
    pub recipient: Address,
    pub block_number: BlockNumber,
}

impl SwapObservation {
    // Resolves swap direction from which side received input. Returns None
    // when the pool has no token identities or the swap has no input.
    pub fn resolve(pool: PoolRecord, event: &SwapEvent) -> Option<Self> {
        let tokens = pool.tokens()?;

        let (token_in, token_out, amount_in, amount_out) = if !event.amount0_in.is_zero() {
            (
                *tokens.token0(),
                *tokens.token1(),
                event.amount0_in,
                event.amount1_out,
            )
        } else if !event.amount1_in.is_zero() {
            (
                *tokens.token1(),
                *tokens.token0(),
                event.amount1_in,
                event.amount0_out,
            )
        } else {
            return None;
        };

        Some(Self {
            pool,
            token_in,
            token_out,
            amount_in,
            amount_out,
            recipient: event.to,
            block_number: event.block_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SwapEvent, SwapObservation};

    use large_swap_primitives::{PoolRecord, TokenPair};

    use alloy::primitives::{address, Address, U256};
    use eyre::Result;

    const POOL: Address = address!("3333333333333333333333333333333333333333");
    const TOKEN0: Address = address!("1111111111111111111111111111111111111111");
    const TOKEN1: Address = address!("2222222222222222222222222222222222222222");
    const RECIPIENT: Address = address!("4444444444444444444444444444444444444444");

    fn swap_event(amounts: [u64; 4]) -> SwapEvent {
        SwapEvent {
            pool_address: POOL,
            amount0_in: U256::from(amounts[0]),
            amount1_in: U256::from(amounts[1]),
            amount0_out: U256::from(amounts[2]),
            amount1_out: U256::from(amounts[3]),
            to: RECIPIENT,
            block_number: 10,
        }
    }

    fn valid_pool() -> Result<PoolRecord> {
        Ok(PoolRecord::new(POOL, TokenPair::new(TOKEN0, TOKEN1)?, true))
    }

    #[test]
    fn test_resolve_token0_in() -> Result<()> {
        let observation = SwapObservation::resolve(valid_pool()?, &swap_event([100, 0, 0, 95]))
            .ok_or_else(|| eyre::eyre!("expected observation"))?;

        assert_eq!(observation.token_in, TOKEN0);
        assert_eq!(observation.token_out, TOKEN1);
        assert_eq!(observation.amount_in, U256::from(100));
        assert_eq!(observation.amount_out, U256::from(95));
        assert_eq!(observation.recipient, RECIPIENT);
        assert_eq!(observation.block_number, 10);

        Ok(())
    }

    #[test]
    fn test_resolve_token1_in() -> Result<()> {
        let observation = SwapObservation::resolve(valid_pool()?, &swap_event([0, 50, 45, 0]))
            .ok_or_else(|| eyre::eyre!("expected observation"))?;

        assert_eq!(observation.token_in, TOKEN1);
        assert_eq!(observation.token_out, TOKEN0);
        assert_eq!(observation.amount_in, U256::from(50));
        assert_eq!(observation.amount_out, U256::from(45));

        Ok(())
    }

    #[test]
    fn test_resolve_without_input_or_tokens() -> Result<()> {
        assert_eq!(
            SwapObservation::resolve(valid_pool()?, &swap_event([0, 0, 10, 10])),
            None
        );
        assert_eq!(
            SwapObservation::resolve(PoolRecord::invalid(POOL), &swap_event([100, 0, 0, 95])),
            None
        );

        Ok(())
    }
}
