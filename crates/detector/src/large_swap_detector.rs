use crate::{
    chain_reads::ChainReads,
    config::DetectorConfig,
    finding::Finding,
    pool_validator::PoolValidator,
    read_guard::{ReadGuard, SuppressedReads},
    swap_analyzer::SwapAnalyzer,
    swap_event::{SwapEvent, SwapObservation},
};

use large_swap_primitives::{CacheEntry, ChainReader, NetworkConfig, ReadCache};

use std::sync::Arc;
use tracing::{debug, info, instrument};

// Entry point for one evaluation session: validates the emitting pool, sizes
// the swap against pool liquidity and builds a finding for large swaps. All
// components share one read cache.
pub struct LargeSwapDetector<R> {
    network: NetworkConfig,
    reads: ChainReads<R>,
    validator: PoolValidator<R>,
    analyzer: SwapAnalyzer<R>,
}

impl<R: ChainReader> LargeSwapDetector<R> {
    pub fn new(reader: Arc<R>, config: &DetectorConfig) -> Self {
        let reads = ChainReads::new(
            reader,
            Arc::new(ReadCache::new()),
            Arc::new(ReadGuard::new(config.read_timeout)),
        );

        Self {
            network: config.network.clone(),
            validator: PoolValidator::new(reads.clone()),
            analyzer: SwapAnalyzer::new(reads.clone(), config.network.threshold.clone()),
            reads,
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn cache(&self) -> &ReadCache<CacheEntry> {
        self.reads.cache()
    }

    pub fn suppressed_reads(&self) -> &SuppressedReads {
        self.reads.suppressed()
    }

    #[instrument(skip_all, fields(pool_address = %event.pool_address, block_number = event.block_number))]
    pub async fn handle_swap(&self, event: &SwapEvent) -> Option<Finding> {
        let pool = self
            .validator
            .validate(
                event.pool_address,
                self.network.factory_address,
                self.network.init_code_hash,
                event.block_number,
            )
            .await;

        if !pool.is_valid() {
            debug!("ignoring swap from unrecognized pool");
            return None;
        }

        let Some(observation) = SwapObservation::resolve(pool, event) else {
            debug!("ignoring swap without input amount");
            return None;
        };

        let decision = self
            .analyzer
            .analyze(
                &observation.pool,
                observation.token_in,
                observation.token_out,
                observation.amount_in,
                observation.amount_out,
                observation.block_number,
            )
            .await;

        if !decision.is_large {
            return None;
        }

        let finding = Finding::large_swap(&observation, &decision);
        info!(
            token_in = %observation.token_in,
            token_out = %observation.token_out,
            percentage_in = %format!("{:.2}", decision.percent_in),
            percentage_out = %format!("{:.2}", decision.percent_out),
            "large swap detected"
        );

        Some(finding)
    }

    // Swaps of one transaction, evaluated in log order.
    pub async fn handle_swaps(&self, events: &[SwapEvent]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for event in events {
            if let Some(finding) = self.handle_swap(event).await {
                findings.push(finding);
            }
        }

        findings
    }
}
