//! Dashboard tab navigation.

use crate::state::{MonitorState, MonitorTab};
use dioxus::prelude::*;

const TABS: [(MonitorTab, &str, &str); 3] = [
    (MonitorTab::Download, "File Download", "📥"),
    (MonitorTab::Training, "Training Process", "🧠"),
    (MonitorTab::Sync, "API Application", "☁️"),
];

/// Tab selector row.
#[component]
pub fn TabNav() -> Element {
    let mut state = use_context::<MonitorState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; gap: 8px; margin: 12px 0;",
            for (tab, label, icon) in TABS.iter() {
                {
                    let tab = *tab;
                    let (bg, fg) = if tab == active {
                        ("#1565c0", "white")
                    } else {
                        ("#f0f0f0", "#333")
                    };
                    rsx! {
                        button {
                            key: "{label}",
                            style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg}; color: {fg};",
                            onclick: move |_| state.active_tab.set(tab),
                            span { style: "margin-right: 6px;", "{icon}" }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
