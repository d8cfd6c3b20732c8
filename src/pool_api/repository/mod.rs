pub mod dashboard_repository;
pub mod payouts_repository;
pub mod pool_stats_repository;
