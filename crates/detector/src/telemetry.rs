use crate::config;

use eyre::{eyre, Result};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

// Installs the global fmt subscriber, filtered by RUST_LOG.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_str(&config::RUST_LOG).unwrap_or_default())
        .with_span_events(config::TRACING_SPAN_EVENTS.clone())
        .try_init()
        .map_err(|err| eyre!("Failed to init tracing: {:?}", err))
}
