//! API/sync status tab.

use crate::state::MonitorState;
use dioxus::prelude::*;
use nowcast_api::SyncHealth;

/// Sync leg of the pipeline: model/sensor-data readiness and last sync time.
#[component]
pub fn SyncTab() -> Element {
    let mut state = use_context::<MonitorState>();
    let snapshot = state.dashboard.read().clone();
    let Some(overview) = snapshot.overview else {
        return rsx! {};
    };
    let data = overview.sync;
    let (badge_bg, badge_fg, badge_label) = match data.status {
        SyncHealth::Ok => ("#E8F5E9", "#2E7D32", "ok"),
        SyncHealth::Error => ("#FFEBEE", "#C62828", "error"),
        SyncHealth::Unknown => ("#EEEEEE", "#616161", "unknown"),
    };

    rsx! {
        div {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0; font-size: 1.2rem;", "☁️ API Application" }
                span {
                    style: "padding: 3px 10px; border-radius: 12px; font-size: 0.8rem; background: {badge_bg}; color: {badge_fg};",
                    "{badge_label}"
                }
            }

            h3 { style: "margin: 16px 0 8px;", "Data readiness" }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                ReadinessRow { name: "Model file", ready: data.model_synced }
                ReadinessRow { name: "Sensor data", ready: data.sensor_data_synced }
                ReadinessRow { name: "Prediction service", ready: true }
            }

            if let Some(last_sync) = data.last_sync_time.as_ref() {
                div {
                    style: "margin-top: 12px; font-size: 0.85rem; color: #888;",
                    "Last sync: {last_sync}"
                }
            }

            button {
                style: "margin-top: 12px; padding: 8px 14px; border-radius: 8px; border: 1px solid #ccc; background: white; cursor: pointer;",
                onclick: move |_| state.pending_log.set(Some("sync".to_string())),
                "📋 View logs"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReadinessRowProps {
    name: &'static str,
    ready: bool,
}

#[component]
fn ReadinessRow(props: ReadinessRowProps) -> Element {
    let (icon, text, color) = if props.ready {
        ("✅", "Synced", "#2E7D32")
    } else {
        ("⏳", "Syncing", "#F57F17")
    };
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; padding: 10px; border-radius: 8px; background: #fafafa;",
            span { "{icon}" }
            div {
                style: "flex: 1;",
                "{props.name}"
            }
            span { style: "font-size: 0.85rem; color: {color};", "{text}" }
        }
    }
}
