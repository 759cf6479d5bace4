//! Display-configuration overlay.

use crate::state::AppState;
use dioxus::prelude::*;
use nowcast_core::config::{ConfigStore, Metric};

const METRIC_ROWS: [(Metric, &str, &str); 4] = [
    (Metric::Rain, "Rainfall Prediction", "🌧️"),
    (Metric::Temp, "Temperature", "🌡️"),
    (Metric::Hum, "Humidity", "💧"),
    (Metric::Pm25, "PM2.5", "😷"),
];

/// Settings overlay: per-metric visibility plus the station-layer and
/// contributing-stations-triangle toggles. Every toggle goes through the
/// config store, which persists the full config immediately.
#[component]
pub fn SettingsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let store = use_context::<ConfigStore>();
    let config = state.config.read().clone();

    rsx! {
        div {
            style: "position: absolute; top: 0; right: 0; bottom: 0; z-index: 2000; width: 300px; background: rgba(20,20,20,0.92); color: white; padding: 20px; overflow-y: auto;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0;", "Configuration" }
                button {
                    style: "background: none; border: none; color: white; font-size: 1.1rem; cursor: pointer;",
                    onclick: move |_| state.show_settings.set(false),
                    "✕"
                }
            }

            p {
                style: "color: #aaa; font-size: 0.85rem;",
                "Select which weather metrics to display on the forecast panel."
            }

            for (metric, label, icon) in METRIC_ROWS.iter() {
                {
                    let active = config.metrics.contains(metric);
                    let store = store.clone();
                    let metric = *metric;
                    rsx! {
                        ToggleRow {
                            key: "{label}",
                            icon: *icon,
                            label: *label,
                            active,
                            on_toggle: move |_| store.toggle_metric(metric),
                        }
                    }
                }
            }

            div { style: "height: 1px; background: rgba(255,255,255,0.15); margin: 12px 0;" }

            {
                let store = store.clone();
                rsx! {
                    ToggleRow {
                        icon: "📍",
                        label: "Station Markers",
                        active: config.show_stations,
                        on_toggle: move |_| store.toggle_show_stations(),
                    }
                }
            }
            {
                let store = store.clone();
                rsx! {
                    ToggleRow {
                        icon: "📐",
                        label: "Contributing Stations Triangle",
                        active: config.show_triangle,
                        on_toggle: move |_| store.toggle_show_triangle(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToggleRowProps {
    icon: &'static str,
    label: &'static str,
    active: bool,
    on_toggle: EventHandler<()>,
}

#[component]
fn ToggleRow(props: ToggleRowProps) -> Element {
    let (value, color, opacity) = if props.active {
        ("Visible", "#00e5ff", "1")
    } else {
        ("Hidden", "gray", "0.6")
    };
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; padding: 10px; margin: 6px 0; border-radius: 10px; background: rgba(255,255,255,0.05); cursor: pointer; opacity: {opacity};",
            onclick: move |_| props.on_toggle.call(()),
            span { style: "font-size: 1.3rem;", "{props.icon}" }
            div {
                style: "flex: 1;",
                div { "{props.label}" }
                div { style: "font-size: 0.8rem; color: {color};", "{value}" }
            }
            span { style: "font-size: 1.2rem;", if props.active { "☑" } else { "☐" } }
        }
    }
}
