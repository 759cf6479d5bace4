//! Preset location shortcuts.

use crate::state::AppState;
use dioxus::prelude::*;
use nowcast_core::orchestrator::ForecastQuery;

/// Preset shortcuts; each issues a text query for its label.
const LOCATIONS: [(&str, &str); 6] = [
    ("Sentosa", "🎡"),
    ("Gardens by the Bay", "🌳"),
    ("East Coast Park", "🚴"),
    ("MacRitchie Reservoir", "🐒"),
    ("Botanic Gardens", "🌿"),
    ("Pulau Ubin", "🏝️"),
];

/// Row of quick-link chips under the search bar.
#[component]
pub fn QuickLinks() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "position: absolute; top: 68px; left: 50%; transform: translateX(-50%); z-index: 1000; display: flex; flex-wrap: wrap; gap: 6px; justify-content: center; max-width: 520px;",
            for (name, icon) in LOCATIONS.iter() {
                button {
                    key: "{name}",
                    style: "padding: 6px 12px; border-radius: 16px; border: 1px solid rgba(0,0,0,0.15); background: rgba(255,255,255,0.9); font-size: 12px; cursor: pointer;",
                    onclick: move |_| {
                        state.search_query.set(name.to_string());
                        state.pending_query.set(Some(ForecastQuery::ByText(name.to_string())));
                    },
                    span { style: "margin-right: 4px;", "{icon}" }
                    "{name}"
                }
            }
        }
    }
}
