// File: src/pool_api/models/dashboard.rs
use super::lenient::{null_as_default, number_as_i64};
use serde::{Deserialize, Serialize};

/// Response of `GET /miner/{address}/dashboard`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: DashboardData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: Vec<Statistic>,
    #[serde(deserialize_with = "null_as_default")]
    pub workers: Vec<WorkerStatistic>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_statistics: CurrentStatistics,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Settings,
}

/// One periodic sample of the miner's performance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistic {
    /// Unix seconds
    #[serde(deserialize_with = "number_as_i64")]
    pub time: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub last_seen: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reported_hashrate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_hashrate: f64,
    #[serde(deserialize_with = "number_as_i64")]
    pub valid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub invalid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub stale_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub active_workers: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerStatistic {
    #[serde(deserialize_with = "null_as_default")]
    pub worker: String,
    #[serde(deserialize_with = "number_as_i64")]
    pub time: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub last_seen: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reported_hashrate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_hashrate: f64,
    #[serde(deserialize_with = "number_as_i64")]
    pub valid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub invalid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub stale_shares: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentStatistics {
    #[serde(deserialize_with = "number_as_i64")]
    pub time: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub last_seen: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reported_hashrate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_hashrate: f64,
    #[serde(deserialize_with = "number_as_i64")]
    pub valid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub invalid_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub stale_shares: i64,
    #[serde(deserialize_with = "number_as_i64")]
    pub active_workers: i64,
    /// Smallest currency unit
    #[serde(deserialize_with = "null_as_default")]
    pub unpaid: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "number_as_i64")]
    pub monitor: i64,
    /// Smallest currency unit
    #[serde(deserialize_with = "null_as_default")]
    pub min_payout: f64,
    #[serde(deserialize_with = "number_as_i64")]
    pub suspended: i64,
}
