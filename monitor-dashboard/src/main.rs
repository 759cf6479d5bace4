//! Nowcast Pipeline Monitor
//!
//! Operational dashboard over the backend pipeline (download → preprocess →
//! train → sync). Every 10 s the whole overview document is re-fetched and
//! replaces the displayed state; a failed tick keeps the previous document
//! on screen. Log views are separate one-shot fetches.

use chrono::Utc;
use dioxus::prelude::*;
use nowcast_api::ApiClient;
use nowcast_core::dashboard::{
    fetch_log_tail, poll_overview_once, DashboardStore, POLL_INTERVAL_MS,
};
use nowcast_ui::components::{DownloadTab, LoadingSpinner, LogModal, SyncTab, TabNav, TrainingTab};
use nowcast_ui::state::{bind_dashboard_store, MonitorState, MonitorTab};
use nowcast_ui::{net, time};
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("monitor-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(MonitorState::new);
    let api = use_hook(|| {
        Rc::new(ApiClient::new(&net::api_base_url()).expect("invalid API base url"))
    });
    let store = use_hook(DashboardStore::new);

    {
        let store = store.clone();
        use_effect(move || bind_dashboard_store(&store, state.dashboard));
    }

    // Poll loop. No backoff: a failed tick logs and waits for the next one.
    {
        let api = api.clone();
        let store = store.clone();
        use_future(move || {
            let api = api.clone();
            let store = store.clone();
            async move {
                loop {
                    poll_overview_once(api.as_ref(), &store, Utc::now()).await;
                    time::sleep_ms(POLL_INTERVAL_MS as i32).await;
                }
            }
        });
    }

    // One-shot log fetches, independent of the poll loop.
    {
        let api = api.clone();
        use_effect(move || {
            let Some(kind) = state.pending_log.read().clone() else {
                return;
            };
            state.pending_log.set(None);
            state.active_log.set(Some(kind.clone()));
            state.log_lines.set(vec!["Loading...".to_string()]);

            let api = api.clone();
            spawn(async move {
                let lines = fetch_log_tail(api.as_ref(), &kind).await;
                state.log_lines.set(lines);
            });
        });
    }

    let snapshot = state.dashboard.read().clone();
    let active_tab = (state.active_tab)();
    let last_update = snapshot
        .last_update
        .map(|time| time.format("%H:%M:%S").to_string());

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h1 { style: "margin: 0; font-size: 1.5rem;", "🌤️ Nowcast Pipeline Monitor" }
                if let Some(time) = last_update {
                    span { style: "font-size: 0.85rem; color: #888;", "Last update: {time}" }
                }
            }

            if snapshot.loading {
                LoadingSpinner {}
            } else if snapshot.overview.is_none() {
                div {
                    style: "padding: 40px; text-align: center; color: #888;",
                    "Unable to load pipeline status"
                }
            } else {
                TabNav {}
                div {
                    style: "background: white; border: 1px solid #eee; border-radius: 10px; padding: 16px;",
                    match active_tab {
                        MonitorTab::Download => rsx! { DownloadTab {} },
                        MonitorTab::Training => rsx! { TrainingTab {} },
                        MonitorTab::Sync => rsx! { SyncTab {} },
                    }
                }
            }

            LogModal {}
        }
    }
}
