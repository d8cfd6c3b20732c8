// File: src/services/report/calculator.rs
use crate::env_config::models::app_config::Currency;
use crate::pool_api::models::dashboard::{DashboardRecord, Statistic};
use crate::pool_api::models::payouts::{Payout, PayoutRecord};
use crate::pool_api::models::pool_stats::{PoolStatsRecord, Price};
use crate::utils::units::{to_display_amount, to_display_hashrate};
use chrono::{DateTime, Utc};

const MINUTES_PER_DAY: f64 = 60.0 * 24.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Coins and their quoted value over one projection period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub coins: f64,
    pub fiat: f64,
}

/// Every derived number that goes into one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetrics {
    pub active_workers: i64,
    pub worker_count: usize,
    pub unpaid: f64,
    pub unpaid_fiat: f64,
    pub daily: Projection,
    pub weekly: Projection,
    pub monthly: Projection,
    /// `None` when there is no payout history
    pub days_since_last_payout: Option<i64>,
    pub remaining_to_threshold: f64,
    pub current_hashrate: f64,
    /// `None` when there are no samples
    pub average_hashrate: Option<f64>,
    pub reported_hashrate: f64,
}

impl ReportMetrics {
    pub fn compute(
        dashboard: &DashboardRecord,
        payouts: &PayoutRecord,
        pool_stats: &PoolStatsRecord,
        now: DateTime<Utc>,
        currency: Currency,
    ) -> Self {
        let data = &dashboard.data;
        let current = &data.current_statistics;
        let price = quote(&pool_stats.data.price, currency);
        let coins_per_min = payouts.data.estimates.coins_per_min;

        let unpaid = to_display_amount(current.unpaid);

        Self {
            active_workers: current.active_workers,
            worker_count: data.workers.len(),
            unpaid,
            unpaid_fiat: unpaid * price,
            daily: project(coins_per_min, 1.0, price),
            weekly: project(coins_per_min, 7.0, price),
            monthly: project(coins_per_min, 30.0, price),
            days_since_last_payout: last_payout(&payouts.data.payouts)
                .map(|payout| days_since(payout.paid_on, now)),
            remaining_to_threshold: to_display_amount(data.settings.min_payout - current.unpaid),
            current_hashrate: to_display_hashrate(current.current_hashrate),
            average_hashrate: average_hashrate(&data.statistics).map(to_display_hashrate),
            reported_hashrate: to_display_hashrate(current.reported_hashrate),
        }
    }
}

/// Exchange rate of one coin in `currency`.
pub fn quote(price: &Price, currency: Currency) -> f64 {
    match currency {
        Currency::Usd => price.usd,
        Currency::Eur => price.eur,
        Currency::Btc => price.btc,
        Currency::Cny => price.cny,
    }
}

/// Projects earnings over `days` at a constant per-minute rate.
pub fn project(coins_per_min: f64, days: f64, price: f64) -> Projection {
    let coins = coins_per_min * MINUTES_PER_DAY * days;
    Projection {
        coins,
        fiat: coins * price,
    }
}

/// Arithmetic mean of the raw current hashrate, `None` for no samples.
pub fn average_hashrate(samples: &[Statistic]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let total: f64 = samples.iter().map(|s| s.current_hashrate).sum();
    Some(total / samples.len() as f64)
}

/// The payout with the latest `paid_on`, whatever the list order.
pub fn last_payout(payouts: &[Payout]) -> Option<&Payout> {
    payouts.iter().max_by_key(|payout| payout.paid_on)
}

/// Whole days elapsed since `paid_on` (unix seconds), rounded down.
pub fn days_since(paid_on: i64, now: DateTime<Utc>) -> i64 {
    let elapsed = (now.timestamp() - paid_on) as f64;
    (elapsed / SECONDS_PER_DAY).floor() as i64
}
