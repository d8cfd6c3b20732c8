// File: src/pool_api/models/payouts.rs
use super::lenient::{null_as_default, number_as_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /miner/{address}/dashboard/payouts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: PayoutData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayoutData {
    #[serde(deserialize_with = "null_as_default")]
    pub rounds: Vec<Round>,
    #[serde(deserialize_with = "null_as_default")]
    pub payouts: Vec<Payout>,
    // Untyped upstream, never read
    pub pending_payout: Value,
    pub mining_start: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub estimates: Estimates,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Round {
    #[serde(deserialize_with = "number_as_i64")]
    pub block: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payout {
    #[serde(deserialize_with = "number_as_i64")]
    pub start: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub end: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_hash: String,
    pub tx_cost: Value,
    /// Unix seconds
    #[serde(deserialize_with = "number_as_i64")]
    pub paid_on: i64,
}

/// Projected earnings at the current average hashrate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Estimates {
    #[serde(deserialize_with = "null_as_default")]
    pub average_hashrate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub coins_per_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub usd_per_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub btc_per_min: f64,
}
