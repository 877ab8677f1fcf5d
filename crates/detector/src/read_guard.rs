use alloy::primitives::Address;

use eyre::Result;
use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tracing::warn;

// Counts chain reads that failed and were replaced by their fallback value.
#[derive(Debug, Default)]
pub struct SuppressedReads {
    failures: AtomicU64,
    timeouts: AtomicU64,
}

impl SuppressedReads {
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn timeouts(&self) -> u64 {
        self.timeouts.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.failures() + self.timeouts()
    }
}

// Bounds every chain read by a timeout and turns any failure into `None`,
// so a single unreachable contract never aborts an evaluation.
pub struct ReadGuard {
    timeout: Duration,
    suppressed: SuppressedReads,
}

impl ReadGuard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            suppressed: SuppressedReads::default(),
        }
    }

    pub fn suppressed(&self) -> &SuppressedReads {
        &self.suppressed
    }

    pub async fn read<T, F>(&self, operation: &'static str, contract: Address, read: F) -> Option<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, read).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                self.suppressed.failures.fetch_add(1, Ordering::Relaxed);
                warn!(operation, %contract, error = ?err, "chain read failed, using fallback");
                None
            }
            Err(_) => {
                self.suppressed.timeouts.fetch_add(1, Ordering::Relaxed);
                warn!(
                    operation,
                    %contract,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "chain read timed out, using fallback"
                );
                None
            }
        }
    }
}
