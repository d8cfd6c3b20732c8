// Shared fixtures and an in-process pool API for tests
use crate::env_config::models::app_config::PoolApiConfig;
use crate::pool_api::models::{
    dashboard::DashboardRecord, payouts::PayoutRecord, pool_stats::PoolStatsRecord,
};
use axum::{
    Router,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

pub const ADDRESS: &str = "0x52bc44d5378309ee2abf1539bf71de1b7d7be3b5";

pub const DASHBOARD_FIXTURE: &str = include_str!("../fixtures/dashboard.json");
pub const PAYOUTS_FIXTURE: &str = include_str!("../fixtures/payouts.json");
pub const POOL_STATS_FIXTURE: &str = include_str!("../fixtures/pool_stats.json");

/// Unix time the golden report is rendered at
pub const FIXTURE_NOW: i64 = 1_700_001_200;

pub fn dashboard_fixture() -> DashboardRecord {
    serde_json::from_str(DASHBOARD_FIXTURE).unwrap()
}

pub fn payouts_fixture() -> PayoutRecord {
    serde_json::from_str(PAYOUTS_FIXTURE).unwrap()
}

pub fn pool_stats_fixture() -> PoolStatsRecord {
    serde_json::from_str(POOL_STATS_FIXTURE).unwrap()
}

pub fn pool_api_config(base_url: &str) -> PoolApiConfig {
    PoolApiConfig {
        base_url: base_url.to_string(),
        ..PoolApiConfig::default()
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Pool API serving the fixtures for `ADDRESS`; other addresses get 404.
pub fn fixture_router() -> Router {
    Router::new()
        .route(
            "/miner/{address}/dashboard",
            get(|Path(address): Path<String>| async move { for_address(&address, DASHBOARD_FIXTURE) }),
        )
        .route(
            "/miner/{address}/dashboard/payouts",
            get(|Path(address): Path<String>| async move { for_address(&address, PAYOUTS_FIXTURE) }),
        )
        .route("/poolStats", get(|| async { json(POOL_STATS_FIXTURE) }))
}

fn for_address(address: &str, body: &'static str) -> Response {
    if address == ADDRESS {
        json(body)
    } else {
        (StatusCode::NOT_FOUND, r#"{"status":"ERROR","error":"Miner not found"}"#).into_response()
    }
}

fn json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
