//! Free-text location search box.

use crate::state::AppState;
use dioxus::prelude::*;
use nowcast_core::orchestrator::ForecastQuery;

/// Search input. Enter or the button submits the current text as a text
/// query; blank input is ignored.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.search_query)();

    let mut submit = move || {
        let text = state.search_query.read().clone();
        if let Some(query) = ForecastQuery::from_parts(None, Some(text)) {
            state.pending_query.set(Some(query));
        }
    };

    rsx! {
        div {
            style: "position: absolute; top: 16px; left: 50%; transform: translateX(-50%); z-index: 1000; display: flex; gap: 8px; width: 90%; max-width: 420px;",
            input {
                r#type: "text",
                placeholder: "Enter location (e.g. Sentosa)...",
                value: "{query}",
                style: "flex: 1; padding: 10px 16px; border-radius: 24px; border: 1px solid #ccc; font-size: 14px;",
                oninput: move |evt| state.search_query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                style: "padding: 10px 18px; border-radius: 24px; border: none; background: #1565c0; color: white; cursor: pointer;",
                onclick: move |_| submit(),
                "Search"
            }
        }
    }
}
