//! Application state managed via Dioxus context.
//!
//! Each app bundles its reactive signals into a single `Copy` struct
//! provided via `use_context_provider`; child components retrieve it with
//! `use_context`. The core stores stay the source of truth - `bind_*`
//! subscribes a signal to a store so every committed mutation re-renders.

use dioxus::prelude::*;
use nowcast_api::{PopularSearch, Station};
use nowcast_core::config::{Config, ConfigStore};
use nowcast_core::dashboard::{DashboardState, DashboardStore};
use nowcast_core::orchestrator::ForecastQuery;
use nowcast_core::view_state::{ViewState, ViewStateStore};

/// Shared state for the consumer map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Mirror of the view-state store (forecast, loading, error, fly-to)
    pub view: Signal<ViewState>,
    /// Mirror of the config store
    pub config: Signal<Config>,
    /// Station list, fetched once on mount (empty until then)
    pub stations: Signal<Vec<Station>>,
    /// Popular searches, best-effort
    pub popular: Signal<Vec<PopularSearch>>,
    /// Current search box contents
    pub search_query: Signal<String>,
    /// Query waiting to be picked up by the orchestration effect
    pub pending_query: Signal<Option<ForecastQuery>>,
    /// Whether the settings overlay is open
    pub show_settings: Signal<bool>,
    /// Whether the popular-places overlay is open
    pub show_stats: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewState::default()),
            config: Signal::new(Config::default()),
            stations: Signal::new(Vec::new()),
            popular: Signal::new(Vec::new()),
            search_query: Signal::new(String::new()),
            pending_query: Signal::new(None),
            show_settings: Signal::new(false),
            show_stats: Signal::new(false),
        }
    }
}

/// Shared state for the monitor dashboard app.
#[derive(Clone, Copy)]
pub struct MonitorState {
    /// Mirror of the dashboard store
    pub dashboard: Signal<DashboardState>,
    /// Which tab is shown
    pub active_tab: Signal<MonitorTab>,
    /// Log kind whose modal is open, if any
    pub active_log: Signal<Option<String>>,
    /// Modal contents
    pub log_lines: Signal<Vec<String>>,
    /// Log kind waiting to be fetched by the log effect
    pub pending_log: Signal<Option<String>>,
}

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorTab {
    Download,
    Training,
    Sync,
}

impl MonitorState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(DashboardState::default()),
            active_tab: Signal::new(MonitorTab::Download),
            active_log: Signal::new(None),
            log_lines: Signal::new(Vec::new()),
            pending_log: Signal::new(None),
        }
    }
}

/// Re-render on every committed view-state mutation.
pub fn bind_view_store(store: &ViewStateStore, mut signal: Signal<ViewState>) {
    signal.set(store.snapshot());
    store.subscribe(move |state| {
        let mut signal = signal;
        signal.set(state.clone());
    });
}

/// Re-render on every committed config mutation.
pub fn bind_config_store(store: &ConfigStore, mut signal: Signal<Config>) {
    signal.set(store.snapshot());
    store.subscribe(move |config| {
        let mut signal = signal;
        signal.set(config.clone());
    });
}

/// Re-render on every dashboard poll tick.
pub fn bind_dashboard_store(store: &DashboardStore, mut signal: Signal<DashboardState>) {
    signal.set(store.snapshot());
    store.subscribe(move |state| {
        let mut signal = signal;
        signal.set(state.clone());
    });
}
