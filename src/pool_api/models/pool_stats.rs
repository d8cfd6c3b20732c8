// File: src/pool_api/models/pool_stats.rs
use super::lenient::{null_as_default, number_as_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /poolStats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolStatsRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: PoolStatsData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolStatsData {
    #[serde(deserialize_with = "null_as_default")]
    pub top_miners: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub mined_blocks: Vec<MinedBlock>,
    #[serde(deserialize_with = "null_as_default")]
    pub pool_stats: PoolStats,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub estimates: PoolEstimates,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinedBlock {
    #[serde(deserialize_with = "number_as_i64")]
    pub number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub miner: String,
    #[serde(deserialize_with = "number_as_i64")]
    pub time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolStats {
    #[serde(deserialize_with = "null_as_default")]
    pub hash_rate: f64,
    #[serde(deserialize_with = "number_as_i64")]
    pub miners: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub workers: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub blocks_per_hour: f64,
}

/// Exchange rates of one coin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub time: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub btc: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub eur: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cny: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rub: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolEstimates {
    pub time: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub block_reward: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub hashrate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub gas_price: f64,
}
