use crate::{swap_analyzer::SwapDecision, swap_event::SwapObservation};

use alloy::primitives::hex;

use serde::Serialize;
use std::collections::BTreeMap;

pub const LARGE_SWAP_ALERT_ID: &str = "CAKE-2";
pub const LARGE_SWAP_NAME: &str = "Large swap";
pub const LARGE_SWAP_DESCRIPTION: &str =
    "A swap that involved a significant percentage of a pool's liquidity was detected";
pub const PROTOCOL: &str = "PancakeSwap";

const PERCENTAGE_PLACES: u32 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FindingType {
    Unknown,
    Exploit,
    Suspicious,
    Degraded,
    Info,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FindingSeverity {
    Unknown,
    Info,
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub name: String,
    pub description: String,
    pub alert_id: String,
    pub protocol: String,
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    pub severity: FindingSeverity,
    pub metadata: BTreeMap<String, String>,
}

impl Finding {
    pub fn large_swap(observation: &SwapObservation, decision: &SwapDecision) -> Self {
        let metadata = BTreeMap::from([
            (
                "pancakePair".to_string(),
                hex::encode_prefixed(observation.pool.pool_address()),
            ),
            (
                "tokenIn".to_string(),
                hex::encode_prefixed(observation.token_in),
            ),
            (
                "tokenOut".to_string(),
                hex::encode_prefixed(observation.token_out),
            ),
            ("amountIn".to_string(), observation.amount_in.to_string()),
            ("amountOut".to_string(), observation.amount_out.to_string()),
            (
                "percentageIn".to_string(),
                decision.percent_in.to_fixed(PERCENTAGE_PLACES),
            ),
            (
                "percentageOut".to_string(),
                decision.percent_out.to_fixed(PERCENTAGE_PLACES),
            ),
            (
                "swapRecipient".to_string(),
                hex::encode_prefixed(observation.recipient),
            ),
        ]);

        Self {
            name: LARGE_SWAP_NAME.to_string(),
            description: LARGE_SWAP_DESCRIPTION.to_string(),
            alert_id: LARGE_SWAP_ALERT_ID.to_string(),
            protocol: PROTOCOL.to_string(),
            finding_type: FindingType::Info,
            severity: FindingSeverity::Info,
            metadata,
        }
    }
}
