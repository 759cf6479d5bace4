//! Popular-places overlay.

use crate::state::AppState;
use dioxus::prelude::*;
use nowcast_core::orchestrator::ForecastQuery;

/// Ranked list of the most-searched locations. Entries are best-effort
/// data fetched once on mount; clicking one issues a text query for it.
#[component]
pub fn StatsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let popular = state.popular.read().clone();

    rsx! {
        div {
            style: "position: absolute; top: 0; left: 0; bottom: 0; z-index: 2000; width: 320px; background: rgba(20,20,20,0.92); color: white; padding: 20px; overflow-y: auto;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h3 { style: "margin: 0;", "Popular Places 📊" }
                button {
                    style: "background: none; border: none; color: white; font-size: 1.1rem; cursor: pointer;",
                    onclick: move |_| state.show_stats.set(false),
                    "✕"
                }
            }

            if popular.is_empty() {
                div {
                    style: "text-align: center; padding: 20px; color: #888;",
                    "No search history yet."
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    for (index, entry) in popular.iter().enumerate() {
                        {
                            let name = entry.name.clone();
                            let rank = index + 1;
                            let rank_bg = if index < 3 { "#00e5ff" } else { "#444" };
                            let rank_fg = if index < 3 { "#000" } else { "#fff" };
                            rsx! {
                                button {
                                    key: "{entry.name}",
                                    style: "display: flex; align-items: center; gap: 10px; padding: 10px; border-radius: 10px; background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1); color: white; cursor: pointer; text-align: left;",
                                    onclick: move |_| {
                                        state.show_stats.set(false);
                                        state.search_query.set(name.clone());
                                        state.pending_query.set(Some(ForecastQuery::ByText(name.clone())));
                                    },
                                    span {
                                        style: "width: 22px; height: 22px; border-radius: 50%; background: {rank_bg}; color: {rank_fg}; display: flex; align-items: center; justify-content: center; font-size: 0.8rem; font-weight: bold;",
                                        "{rank}"
                                    }
                                    div {
                                        style: "flex: 1;",
                                        div { style: "font-weight: bold;", "{entry.name}" }
                                        div { style: "font-size: 0.8rem; color: #aaa;", "{entry.count} searches" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "margin-top: 16px; font-size: 0.8rem; color: #666; text-align: center;",
                "Top 6 most searched locations"
            }
        }
    }
}
