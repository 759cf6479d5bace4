//! Pipeline-overview polling for the operational dashboard.
//!
//! Each tick replaces the whole displayed document; there is no diffing and
//! no backoff. A failed tick logs a warning and leaves the previous
//! successful document on screen until the next tick.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nowcast_api::{ApiClient, ApiError, LogResponse, OverviewStatus};
use std::cell::RefCell;
use std::rc::Rc;

/// Fixed poll cadence.
pub const POLL_INTERVAL_MS: u32 = 10_000;
/// Bounded log tail length for the on-demand log view.
pub const LOG_TAIL_LINES: u32 = 100;

/// What the dashboard renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Last successfully fetched overview document, if any.
    pub overview: Option<OverviewStatus>,
    /// When `overview` was last replaced.
    pub last_update: Option<DateTime<Utc>>,
    /// True until the first tick completes, success or failure.
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            overview: None,
            last_update: None,
            loading: true,
        }
    }
}

type Listener = Box<dyn Fn(&DashboardState)>;

/// Cheaply-cloneable shared handle to the dashboard state.
#[derive(Clone, Default)]
pub struct DashboardStore {
    state: Rc<RefCell<DashboardState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&DashboardState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    fn apply_overview(&self, overview: OverviewStatus, now: DateTime<Utc>) {
        {
            let mut state = self.state.borrow_mut();
            state.overview = Some(overview);
            state.last_update = Some(now);
            state.loading = false;
        }
        self.notify();
    }

    fn mark_tick(&self) {
        self.state.borrow_mut().loading = false;
        self.notify();
    }
}

/// The slice of the backend the dashboard needs. Implemented by
/// [`ApiClient`]; tests substitute fakes.
#[async_trait(?Send)]
pub trait MonitorApi {
    async fn overview(&self) -> Result<OverviewStatus, ApiError>;
    async fn logs(&self, kind: &str, lines: u32) -> Result<LogResponse, ApiError>;
}

#[async_trait(?Send)]
impl MonitorApi for ApiClient {
    async fn overview(&self) -> Result<OverviewStatus, ApiError> {
        ApiClient::overview(self).await
    }

    async fn logs(&self, kind: &str, lines: u32) -> Result<LogResponse, ApiError> {
        ApiClient::logs(self, kind, lines).await
    }
}

/// One poll tick: fetch the overview and replace the displayed state
/// wholesale, or keep the previous document on failure.
pub async fn poll_overview_once(api: &dyn MonitorApi, store: &DashboardStore, now: DateTime<Utc>) {
    match api.overview().await {
        Ok(overview) => store.apply_overview(overview, now),
        Err(err) => {
            log::warn!("Overview poll failed: {err}");
            store.mark_tick();
        }
    }
}

/// One-shot log tail for the modal. Always yields something renderable:
/// the tail itself, the backend's placeholder message, or a local failure
/// line. Never retried, never surfaced outside the modal.
pub async fn fetch_log_tail(api: &dyn MonitorApi, kind: &str) -> Vec<String> {
    match api.logs(kind, LOG_TAIL_LINES).await {
        Ok(response) if !response.lines.is_empty() => response.lines,
        Ok(response) => vec![response
            .message
            .unwrap_or_else(|| "No log content yet".to_string())],
        Err(err) => {
            log::warn!("Log fetch for '{kind}' failed: {err}");
            vec![format!("Failed to fetch logs: {err}")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nowcast_api::{
        DownloadStatus, PipelineStage, RunState, SyncHealth, SyncStatus, TrainingStatus,
    };
    use std::collections::VecDeque;

    fn overview(stage: PipelineStage) -> OverviewStatus {
        OverviewStatus {
            current_stage: stage,
            download: DownloadStatus {
                current_date: None,
                completed_days: 0,
                total_days: 0,
                files_downloaded: 0,
                parallel_processes: 0,
                status: RunState::Idle,
                last_update: None,
                date_progress: Vec::new(),
            },
            training: TrainingStatus {
                current_date: None,
                completed_batches: 0,
                total_epochs: 0,
                current_phase: String::new(),
                phases: Vec::new(),
                disk_usage: None,
                status: RunState::Idle,
                last_update: None,
                history: Vec::new(),
            },
            sync: SyncStatus {
                model_synced: false,
                sensor_data_synced: false,
                last_sync_time: None,
                status: SyncHealth::Unknown,
            },
        }
    }

    #[derive(Default)]
    struct FakeMonitor {
        overviews: RefCell<VecDeque<Result<OverviewStatus, ApiError>>>,
        logs: RefCell<VecDeque<Result<LogResponse, ApiError>>>,
    }

    #[async_trait(?Send)]
    impl MonitorApi for FakeMonitor {
        async fn overview(&self) -> Result<OverviewStatus, ApiError> {
            self.overviews.borrow_mut().pop_front().expect("no overview queued")
        }

        async fn logs(&self, _kind: &str, _lines: u32) -> Result<LogResponse, ApiError> {
            self.logs.borrow_mut().pop_front().expect("no log queued")
        }
    }

    fn log_response(lines: Vec<&str>, message: Option<&str>) -> LogResponse {
        LogResponse {
            kind: "training".to_string(),
            source: None,
            path: None,
            message: message.map(str::to_string),
            lines: lines.into_iter().map(str::to_string).collect(),
            timestamp: "2026-08-04T01:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_tick_replaces_the_document_wholesale() {
        let api = FakeMonitor::default();
        api.overviews
            .borrow_mut()
            .push_back(Ok(overview(PipelineStage::Download)));
        api.overviews
            .borrow_mut()
            .push_back(Ok(overview(PipelineStage::Training)));
        let store = DashboardStore::new();

        let t0 = Utc::now();
        poll_overview_once(&api, &store, t0).await;
        let t1 = t0 + chrono::Duration::seconds(10);
        poll_overview_once(&api, &store, t1).await;

        let state = store.snapshot();
        assert_eq!(state.overview.unwrap().current_stage, PipelineStage::Training);
        assert_eq!(state.last_update, Some(t1));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn failed_tick_keeps_the_previous_document() {
        let api = FakeMonitor::default();
        api.overviews
            .borrow_mut()
            .push_back(Ok(overview(PipelineStage::Sync)));
        api.overviews.borrow_mut().push_back(Err(ApiError::Status {
            status: 500,
            detail: None,
        }));
        let store = DashboardStore::new();

        let t0 = Utc::now();
        poll_overview_once(&api, &store, t0).await;
        poll_overview_once(&api, &store, t0 + chrono::Duration::seconds(10)).await;

        let state = store.snapshot();
        assert_eq!(state.overview.unwrap().current_stage, PipelineStage::Sync);
        assert_eq!(state.last_update, Some(t0));
    }

    #[tokio::test]
    async fn first_failed_tick_only_clears_the_loading_flag() {
        let api = FakeMonitor::default();
        api.overviews.borrow_mut().push_back(Err(ApiError::Status {
            status: 502,
            detail: None,
        }));
        let store = DashboardStore::new();
        assert!(store.snapshot().loading);

        poll_overview_once(&api, &store, Utc::now()).await;

        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.overview, None);
    }

    #[tokio::test]
    async fn log_tail_prefers_lines_then_message_then_failure_line() {
        let api = FakeMonitor::default();
        api.logs
            .borrow_mut()
            .push_back(Ok(log_response(vec!["INFO a", "INFO b"], None)));
        api.logs
            .borrow_mut()
            .push_back(Ok(log_response(vec![], Some("log file not created yet"))));
        api.logs
            .borrow_mut()
            .push_back(Ok(log_response(vec![], None)));
        api.logs.borrow_mut().push_back(Err(ApiError::Status {
            status: 404,
            detail: None,
        }));

        assert_eq!(fetch_log_tail(&api, "training").await, vec!["INFO a", "INFO b"]);
        assert_eq!(
            fetch_log_tail(&api, "training").await,
            vec!["log file not created yet"]
        );
        assert_eq!(fetch_log_tail(&api, "training").await, vec!["No log content yet"]);
        assert!(fetch_log_tail(&api, "training").await[0].starts_with("Failed to fetch logs"));
    }
}
