use large_swap_primitives::{network::BSC_MAINNET_CHAIN_ID, NetworkConfig};

use eyre::{Result, WrapErr};
use lazy_static::lazy_static;
use std::{env, ffi::OsStr, sync::Once, time::Duration};
use tracing_subscriber::fmt::format::FmtSpan;

pub const DEFAULT_RPC_READ_TIMEOUT: Duration = Duration::from_secs(10);

static DOTENV_INIT: Once = Once::new();

fn get_env_var<K: AsRef<OsStr>>(k: K) -> Result<String, env::VarError> {
    DOTENV_INIT.call_once(|| {
        // a missing .env is fine, the process environment still applies
        let _ = dotenvy::dotenv();
    });

    env::var(k)
}

lazy_static! {
    pub static ref RUST_LOG: String =
        get_env_var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pub static ref TRACING_SPAN_EVENTS: FmtSpan = if get_env_var("TRACING_SPAN_EVENTS")
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .unwrap_or(false)
    {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
}

pub fn rpc_url() -> Result<url::Url> {
    get_env_var("RPC_URL")
        .wrap_err("Failed to read RPC_URL from env")
        .and_then(|u| url::Url::parse(u.as_str()).wrap_err("Failed to parse RPC_URL"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    pub network: NetworkConfig,
    pub read_timeout: Duration,
}

impl DetectorConfig {
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            network,
            read_timeout: DEFAULT_RPC_READ_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| get_env_var(key).ok())
    }

    // Resolves the config from any key/value source: CHAIN_ID selects the
    // network entry, the remaining keys override parts of it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chain_id = lookup("CHAIN_ID")
            .map(|id| id.parse::<u64>().wrap_err("Failed to parse CHAIN_ID"))
            .transpose()?
            .unwrap_or(BSC_MAINNET_CHAIN_ID);

        let mut network = NetworkConfig::for_chain(chain_id)?;

        if let Some(factory_address) = lookup("FACTORY_ADDRESS") {
            network.factory_address = factory_address
                .parse()
                .wrap_err("Failed to parse FACTORY_ADDRESS")?;
        }
        if let Some(init_code_hash) = lookup("INIT_CODE_HASH") {
            network.init_code_hash = init_code_hash
                .parse()
                .wrap_err("Failed to parse INIT_CODE_HASH")?;
        }
        if let Some(threshold) = lookup("LARGE_SWAP_THRESHOLD") {
            network.threshold = threshold
                .parse()
                .wrap_err("Failed to parse LARGE_SWAP_THRESHOLD")?;
        }

        let read_timeout = lookup("RPC_READ_TIMEOUT_MS")
            .map(|ms| {
                ms.parse::<u64>()
                    .map(Duration::from_millis)
                    .wrap_err("Failed to parse RPC_READ_TIMEOUT_MS")
            })
            .transpose()?
            .unwrap_or(DEFAULT_RPC_READ_TIMEOUT);

        Ok(Self {
            network,
            read_timeout,
        })
    }
}
