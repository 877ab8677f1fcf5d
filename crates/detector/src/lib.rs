pub use chain_reads::ChainReads;
pub use config::DetectorConfig;
pub use finding::{Finding, FindingSeverity, FindingType};
pub use large_swap_detector::LargeSwapDetector;
pub use pool_validator::PoolValidator;
pub use read_guard::{ReadGuard, SuppressedReads};
pub use swap_analyzer::{SwapAnalyzer, SwapDecision};
pub use swap_event::{SwapEvent, SwapObservation};
pub use telemetry::init_tracing;

mod chain_reads;
mod large_swap_detector;
mod pool_validator;
mod read_guard;
mod swap_analyzer;
mod swap_event;
mod telemetry;

#[cfg(test)]
mod mock_chain_reader;

pub mod config;
pub mod finding;
