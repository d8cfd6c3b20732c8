pub mod dashboard;
pub mod lenient;
pub mod payouts;
pub mod pool_stats;
