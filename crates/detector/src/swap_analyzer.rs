use crate::chain_reads::ChainReads;

use large_swap_primitives::{Balance, ChainReader, LiquidityRatio, PoolRecord};

use alloy::primitives::{Address, BlockNumber};

use tracing::{debug, instrument};

#[derive(Clone, Debug, PartialEq)]
pub struct SwapDecision {
    pub percent_in: LiquidityRatio,
    pub percent_out: LiquidityRatio,
    pub is_large: bool,
}

// Sizes a swap against the pool balances at the swap's block (post-swap
// state) and flags it when either side exceeds the threshold.
pub struct SwapAnalyzer<R> {
    reads: ChainReads<R>,
    threshold: LiquidityRatio,
}

impl<R: ChainReader> SwapAnalyzer<R> {
    pub fn new(reads: ChainReads<R>, threshold: LiquidityRatio) -> Self {
        Self { reads, threshold }
    }

    pub fn threshold(&self) -> &LiquidityRatio {
        &self.threshold
    }

    #[instrument(skip(self, pool, amount_in, amount_out), fields(pool_address = %pool.pool_address()))]
    pub async fn analyze(
        &self,
        pool: &PoolRecord,
        token_in: Address,
        token_out: Address,
        amount_in: Balance,
        amount_out: Balance,
        block_number: BlockNumber,
    ) -> SwapDecision {
        let pool_address = *pool.pool_address();
        let (balance_in, balance_out) = tokio::join!(
            self.reads
                .pool_balance(pool_address, token_in, block_number),
            self.reads
                .pool_balance(pool_address, token_out, block_number)
        );

        let percent_in = LiquidityRatio::of(&amount_in, &balance_in);
        let percent_out = LiquidityRatio::of(&amount_out, &balance_out);
        let is_large = percent_in.exceeds(&self.threshold) || percent_out.exceeds(&self.threshold);

        debug!(
            %balance_in,
            %balance_out,
            percent_in = %format!("{:.2}", percent_in),
            percent_out = %format!("{:.2}", percent_out),
            is_large,
            "analyzed swap"
        );

        SwapDecision {
            percent_in,
            percent_out,
            is_large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SwapAnalyzer;
    use crate::mock_chain_reader::{mock_chain_reads, MockChainReader};

    use large_swap_primitives::{CacheKey, LiquidityRatio, PoolRecord, TokenPair};

    use alloy::primitives::{address, Address, U256};
    use eyre::Result;
    use std::{sync::Arc, time::Duration};

    const POOL: Address = address!("3333333333333333333333333333333333333333");
    const TOKEN_IN: Address = address!("1111111111111111111111111111111111111111");
    const TOKEN_OUT: Address = address!("2222222222222222222222222222222222222222");
    const BLOCK_NUMBER: u64 = 15_000_000;

    fn pool() -> Result<PoolRecord> {
        Ok(PoolRecord::new(POOL, TokenPair::new(TOKEN_IN, TOKEN_OUT)?, true))
    }

    fn make_analyzer(reader: &Arc<MockChainReader>) -> Result<SwapAnalyzer<MockChainReader>> {
        Ok(SwapAnalyzer::new(
            mock_chain_reads(reader, Duration::from_secs(1)),
            "10".parse()?,
        ))
    }

    #[tokio::test]
    async fn test_analyze_large_swap() -> Result<()> {
        let reader = Arc::new(
            MockChainReader::new()
                .with_balance(TOKEN_IN, POOL, U256::from(5_000_000))
                .with_balance(TOKEN_OUT, POOL, U256::from(1_000_000)),
        );
        let analyzer = make_analyzer(&reader)?;

        let decision = analyzer
            .analyze(
                &pool()?,
                TOKEN_IN,
                TOKEN_OUT,
                U256::from(250_000),
                U256::from(300_000),
                BLOCK_NUMBER,
            )
            .await;

        assert_eq!(decision.percent_in.to_fixed(2), "5.00");
        assert_eq!(decision.percent_out.to_fixed(2), "30.00");
        assert!(decision.is_large);

        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_small_swap() -> Result<()> {
        let reader = Arc::new(
            MockChainReader::new()
                .with_balance(TOKEN_IN, POOL, U256::from(1_000_000))
                .with_balance(TOKEN_OUT, POOL, U256::from(1_000_000)),
        );
        let analyzer = make_analyzer(&reader)?;

        let decision = analyzer
            .analyze(
                &pool()?,
                TOKEN_IN,
                TOKEN_OUT,
                U256::from(100_000),
                U256::from(90_000),
                BLOCK_NUMBER,
            )
            .await;

        // exactly at the threshold does not exceed it
        assert_eq!(decision.percent_in.to_fixed(2), "10.00");
        assert_eq!(decision.percent_out.to_fixed(2), "9.00");
        assert!(!decision.is_large);

        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_zero_balance_saturates() -> Result<()> {
        let reader = Arc::new(
            MockChainReader::new().with_balance(TOKEN_OUT, POOL, U256::from(1_000_000)),
        );
        let analyzer = make_analyzer(&reader)?;

        let decision = analyzer
            .analyze(
                &pool()?,
                TOKEN_IN,
                TOKEN_OUT,
                U256::from(1),
                U256::from(1),
                BLOCK_NUMBER,
            )
            .await;

        assert_eq!(decision.percent_in, LiquidityRatio::saturated());
        assert!(decision.is_large);

        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_balance_failure_falls_back_to_zero() -> Result<()> {
        let reader = Arc::new(
            MockChainReader::new()
                .with_balance(TOKEN_IN, POOL, U256::from(1_000_000))
                .with_failing_contract(TOKEN_OUT),
        );
        let reads = mock_chain_reads(&reader, Duration::from_secs(1));
        let analyzer = SwapAnalyzer::new(reads.clone(), "10".parse()?);

        let decision = analyzer
            .analyze(
                &pool()?,
                TOKEN_IN,
                TOKEN_OUT,
                U256::from(1),
                U256::from(1),
                BLOCK_NUMBER,
            )
            .await;

        assert_eq!(decision.percent_out.to_fixed(2), "100.00");
        assert!(decision.is_large);
        assert_eq!(reads.suppressed().failures(), 1);

        // the zero fallback is not cached, the successful read is
        assert_eq!(
            reads
                .cache()
                .get(&CacheKey::pool_balance(&POOL, &TOKEN_OUT, BLOCK_NUMBER)),
            None
        );
        assert!(reads
            .cache()
            .get(&CacheKey::pool_balance(&POOL, &TOKEN_IN, BLOCK_NUMBER))
            .is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_reads_balances_once() -> Result<()> {
        let reader = Arc::new(
            MockChainReader::new()
                .with_balance(TOKEN_IN, POOL, U256::from(1_000_000))
                .with_balance(TOKEN_OUT, POOL, U256::from(1_000_000)),
        );
        let analyzer = make_analyzer(&reader)?;
        let pool = pool()?;

        let first = analyzer
            .analyze(&pool, TOKEN_IN, TOKEN_OUT, U256::from(1), U256::from(1), BLOCK_NUMBER)
            .await;
        let second = analyzer
            .analyze(&pool, TOKEN_IN, TOKEN_OUT, U256::from(1), U256::from(1), BLOCK_NUMBER)
            .await;

        assert_eq!(first, second);
        assert_eq!(reader.balance_reads(), 2);

        Ok(())
    }
}
