// File: src/services/report/scheduler.rs
use super::assembler::ReportAssembler;
use super::calculator::ReportMetrics;
use super::chart::render_hashrate_chart;
use crate::app_state::models::AppState;
use crate::error::AppError;
use crate::pool_api::models::dashboard::DashboardRecord;
use crate::utils::units::{to_display_amount, to_display_hashrate};
use crate::webhook::models::WebhookContent;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::time;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

/// Result of one fetch -> render -> submit cycle
#[derive(Debug)]
pub struct CycleReport {
    pub content: WebhookContent,
    /// `None` when the webhook could not be reached
    pub webhook_status: Option<StatusCode>,
}

pub struct ReportScheduler {
    app_state: Arc<AppState>,
}

impl ReportScheduler {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    /// Runs one cycle as of `now`. Fetch and render failures abort the cycle;
    /// a failed submission is only logged.
    pub async fn trigger_update(&self, now: DateTime<Utc>) -> Result<CycleReport, AppError> {
        let settings = &self.app_state.settings;
        let address = settings.run.address.as_str();
        let api = &self.app_state.pool_api_service;

        info!("Fetching pool data for {}", address);

        let dashboard = api.repository_dashboard.get(address).await?;
        let payouts = api.repository_payouts.get(address).await?;
        let pool_stats = api.repository_pool_stats.get().await?;

        log_summary(address, &dashboard, &settings.app_config.report.coin_symbol);

        let chart = render_hashrate_chart(&dashboard.data.statistics, &settings.app_config.chart)?;
        debug!("Chart rendered: {} bytes", chart.as_bytes().len());

        let metrics = ReportMetrics::compute(
            &dashboard,
            &payouts,
            &pool_stats,
            now,
            settings.app_config.report.currency,
        );
        let content = ReportAssembler::new(&settings.app_config).assemble(address, &metrics);

        let webhook_status = match self.app_state.webhook_sender.send(&content, &chart).await {
            Ok(status) => {
                info!("Report submitted, webhook responded {}", status);
                Some(status)
            }
            Err(e) => {
                warn!("Failed to submit report: {}", e);
                None
            }
        };

        Ok(CycleReport {
            content,
            webhook_status,
        })
    }

    /// Runs a single cycle and returns its error, if any.
    pub async fn run_once(&self) -> Result<CycleReport, AppError> {
        self.run_cycle(1).await
    }

    /// Loops cycle -> sleep. The sleep starts after a cycle finishes, so the
    /// period is work time plus the interval. `None` loops forever.
    ///
    /// Failed cycles are logged and the loop continues unless
    /// `scheduler.fail_fast` is set, in which case the error is returned.
    pub async fn run(&self, max_cycles: Option<u64>) -> Result<u64, AppError> {
        let interval = self.app_state.settings.run.interval;
        let fail_fast = self.app_state.settings.app_config.scheduler.fail_fast;

        info!(
            "Starting report scheduler for {} with {:?} interval",
            self.app_state.settings.run.address, interval
        );

        let mut cycles = 0;
        loop {
            cycles += 1;

            match self.run_cycle(cycles).await {
                Ok(_) => info!("Scheduler: cycle {} completed", cycles),
                Err(e) if fail_fast => {
                    error!("Scheduler: cycle {} failed, stopping: {}", cycles, e);
                    return Err(e);
                }
                Err(e) => error!(
                    "Scheduler: cycle {} failed ({}), retrying next cycle: {}",
                    cycles,
                    e.kind(),
                    e
                ),
            }

            if max_cycles.is_some_and(|max| cycles >= max) {
                return Ok(cycles);
            }

            debug!("Scheduler: sleeping for {:?}", interval);
            time::sleep(interval).await;
        }
    }

    async fn run_cycle(&self, cycle: u64) -> Result<CycleReport, AppError> {
        let cycle_id = Uuid::new_v4();
        let span = info_span!("report_cycle", %cycle_id, cycle);
        self.trigger_update(Utc::now()).instrument(span).await
    }
}

fn log_summary(address: &str, dashboard: &DashboardRecord, coin: &str) {
    for line in summary_lines(address, dashboard, coin) {
        info!("{}", line);
    }
}

fn summary_lines(address: &str, dashboard: &DashboardRecord, coin: &str) -> Vec<String> {
    let current = &dashboard.data.current_statistics;
    vec![
        address.to_string(),
        format!(
            "{} / {} workers running",
            current.active_workers,
            dashboard.data.workers.len()
        ),
        format!("{:.6} {} unpaid", to_display_amount(current.unpaid), coin),
        format!("{:.6} MH/S", to_display_hashrate(current.current_hashrate)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_config::models::{
        app_config::AppConfig,
        app_env::{AppEnv, Env},
        app_setting::{AppSettings, RunSettings},
    };
    use crate::pool_api::models::{payouts::PayoutRecord, pool_stats::PoolStatsRecord};
    use crate::pool_api::pool_api_service::PoolApiService;
    use crate::pool_api::repository::{
        dashboard_repository::TraitDashboardRepository, payouts_repository::TraitPayoutsRepository,
        pool_stats_repository::TraitPoolStatsRepository,
    };
    use crate::services::report::chart::RenderedChart;
    use crate::test_utils::{
        ADDRESS, FIXTURE_NOW, dashboard_fixture, fixture_router, payouts_fixture, pool_api_config,
        pool_stats_fixture, spawn_server,
    };
    use crate::webhook::sender::TraitWebhookSender;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_secs(60);

    /// Dashboard that fails for the call numbers listed in `fail_on` (1-based)
    struct FakeDashboard {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
    }

    #[async_trait]
    impl TraitDashboardRepository for FakeDashboard {
        async fn get(&self, _address: &str) -> Result<DashboardRecord, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                return Err(AppError::UnexpectedStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    url: "fake://dashboard".to_string(),
                });
            }
            Ok(dashboard_fixture())
        }
    }

    struct FakePayouts;

    #[async_trait]
    impl TraitPayoutsRepository for FakePayouts {
        async fn get(&self, _address: &str) -> Result<PayoutRecord, AppError> {
            Ok(payouts_fixture())
        }
    }

    struct FakePoolStats;

    #[async_trait]
    impl TraitPoolStatsRepository for FakePoolStats {
        async fn get(&self) -> Result<PoolStatsRecord, AppError> {
            Ok(pool_stats_fixture())
        }
    }

    #[derive(Default)]
    struct FakeSender {
        sent: Mutex<Vec<(WebhookContent, usize)>>,
        unreachable: bool,
    }

    #[async_trait]
    impl TraitWebhookSender for FakeSender {
        async fn send(
            &self,
            content: &WebhookContent,
            chart: &RenderedChart,
        ) -> Result<StatusCode, AppError> {
            if self.unreachable {
                return Err(AppError::Submission("connection refused".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((content.clone(), chart.as_bytes().len()));
            Ok(StatusCode::NO_CONTENT)
        }
    }

    fn settings(app_config: AppConfig) -> Arc<AppSettings> {
        Arc::new(AppSettings {
            app_config,
            app_env: AppEnv {
                env: Env::Local,
                webhook_url: None,
            },
            run: RunSettings {
                address: ADDRESS.to_string(),
                webhook_url: "http://unused".to_string(),
                interval: INTERVAL,
            },
        })
    }

    fn fake_state(
        fail_fast: bool,
        fail_on: Vec<usize>,
        sender: Arc<FakeSender>,
    ) -> Arc<AppState> {
        let mut app_config = AppConfig::default();
        app_config.scheduler.fail_fast = fail_fast;
        let settings = settings(app_config);
        let service = PoolApiService {
            repository_dashboard: Arc::new(FakeDashboard {
                calls: AtomicUsize::new(0),
                fail_on,
            }),
            repository_payouts: Arc::new(FakePayouts),
            repository_pool_stats: Arc::new(FakePoolStats),
        };
        Arc::new(AppState::new(settings, Arc::new(service), sender))
    }

    fn at(ts: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(ts, 0).unwrap()
    }

    #[tokio::test]
    async fn test_golden_report_from_fixture_server() {
        let base_url = spawn_server(fixture_router()).await;
        let mut app_config = AppConfig::default();
        app_config.pool_api = pool_api_config(&base_url);
        let settings = settings(app_config);
        let service = PoolApiService::new(&settings).unwrap();
        let sender = Arc::new(FakeSender::default());
        let state = Arc::new(AppState::new(settings, Arc::new(service), sender.clone()));

        let report = ReportScheduler::new(state)
            .trigger_update(at(FIXTURE_NOW))
            .await
            .unwrap();

        assert_eq!(report.webhook_status, Some(StatusCode::NO_CONTENT));
        let embed = &report.content.embeds[0];
        assert_eq!(embed.author.name, ADDRESS);
        assert_eq!(
            embed.author.url,
            format!("https://ethermine.org/miners/{ADDRESS}/dashboard")
        );

        let fields: Vec<(&str, &str)> = embed
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(fields[0], ("Workers active", "`2 / 2`"));
        assert_eq!(fields[1], ("Unpaid Balance", "`1.250000 ETH` | `$2500.00 USD`"));
        assert_eq!(
            fields[2],
            (
                "Estimated Earnings",
                "`0.144000 ETH` (`$288.00 USD`) / day\n`1.008000 ETH` (`$2016.00 USD`) / week\n`4.320000 ETH` (`$8640.00 USD`) / month"
            )
        );
        assert_eq!(
            fields[3].1,
            "**Payouts**\n\nLast Payout: `1 days ago`\nDaily Earnings `≈ 0.144000 ETH`\nRemaining to Threshold: `3.750000 ETH`"
        );
        assert_eq!(fields[4].1, "**Hashrate**");
        assert_eq!(fields[5], ("Current", "`118.4 MH/s`"));
        assert_eq!(fields[6], ("Average", "`110.0 MH/s`"));
        assert_eq!(fields[7], ("Reported", "`106.0 MH/s`"));

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, report.content);
        assert!(sent[0].1 > 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_cycle_before_submit() {
        let sender = Arc::new(FakeSender::default());
        let scheduler = ReportScheduler::new(fake_state(false, vec![1], sender.clone()));

        let err = scheduler.trigger_update(at(FIXTURE_NOW)).await.unwrap_err();

        assert!(matches!(err, AppError::UnexpectedStatus { .. }));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submission_failure_is_not_fatal() {
        let sender = Arc::new(FakeSender {
            unreachable: true,
            ..Default::default()
        });
        let scheduler = ReportScheduler::new(fake_state(false, vec![], sender));

        let report = scheduler.trigger_update(at(FIXTURE_NOW)).await.unwrap();
        assert_eq!(report.webhook_status, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_sleeps_between_cycles() {
        let sender = Arc::new(FakeSender::default());
        let scheduler = ReportScheduler::new(fake_state(false, vec![], sender.clone()));
        let started = time::Instant::now();

        let cycles = scheduler.run(Some(3)).await.unwrap();

        assert_eq!(cycles, 3);
        assert_eq!(sender.sent.lock().unwrap().len(), 3);
        // Two sleeps between three cycles, none after the last
        let elapsed = started.elapsed();
        assert!(elapsed >= INTERVAL * 2);
        assert!(elapsed < INTERVAL * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_continues_after_failed_cycle() {
        let sender = Arc::new(FakeSender::default());
        let scheduler = ReportScheduler::new(fake_state(false, vec![2], sender.clone()));

        let cycles = scheduler.run(Some(3)).await.unwrap();

        assert_eq!(cycles, 3);
        assert_eq!(sender.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_fail_fast_stops_loop() {
        let sender = Arc::new(FakeSender::default());
        let scheduler = ReportScheduler::new(fake_state(true, vec![2], sender.clone()));

        let err = scheduler.run(Some(5)).await.unwrap_err();

        assert!(matches!(err, AppError::UnexpectedStatus { .. }));
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_once_propagates_error() {
        let sender = Arc::new(FakeSender::default());
        let scheduler = ReportScheduler::new(fake_state(false, vec![1], sender));

        assert!(scheduler.run_once().await.is_err());
    }

    #[test]
    fn test_summary_lines_name_the_coin() {
        let lines = summary_lines(ADDRESS, &dashboard_fixture(), "ETH");

        assert_eq!(
            lines,
            vec![
                ADDRESS.to_string(),
                "2 / 2 workers running".to_string(),
                "1.250000 ETH unpaid".to_string(),
                "118.400000 MH/S".to_string(),
            ]
        );
    }
}
