//! On-demand log viewer modal.

use crate::state::MonitorState;
use dioxus::prelude::*;

/// Modal showing a one-shot log tail. Opened per log kind; fetching is the
/// app's job (it drains `pending_log`), this only renders `log_lines`.
#[component]
pub fn LogModal() -> Element {
    let mut state = use_context::<MonitorState>();
    let Some(kind) = (state.active_log)() else {
        return rsx! {};
    };
    let lines = state.log_lines.read().clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 3000; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center;",
            div {
                style: "width: 90%; max-width: 720px; max-height: 70vh; background: #1e1e1e; color: #ddd; border-radius: 10px; padding: 16px; display: flex; flex-direction: column;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h3 { style: "margin: 0;", "📋 {kind} log" }
                    button {
                        style: "background: none; border: none; color: #ddd; font-size: 1.1rem; cursor: pointer;",
                        onclick: move |_| state.active_log.set(None),
                        "✕"
                    }
                }
                div {
                    style: "overflow-y: auto; font-family: monospace; font-size: 0.8rem; line-height: 1.5;",
                    for (index, line) in lines.iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "color: {line_color(line)};",
                            "{line}"
                        }
                    }
                }
            }
        }
    }
}

/// Crude per-line severity coloring based on marker substrings.
fn line_color(line: &str) -> &'static str {
    if line.contains("ERROR") || line.contains("❌") {
        "#ff6b6b"
    } else if line.contains("WARNING") || line.contains("⚠️") {
        "#ffd166"
    } else if line.contains("SUCCESS") || line.contains("✅") {
        "#6bff95"
    } else if line.contains("INFO") {
        "#74c0fc"
    } else {
        "#ddd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_markers_pick_their_color() {
        assert_eq!(line_color("2026-08-04 ERROR boom"), "#ff6b6b");
        assert_eq!(line_color("WARNING disk almost full"), "#ffd166");
        assert_eq!(line_color("SUCCESS uploaded model"), "#6bff95");
        assert_eq!(line_color("INFO tick"), "#74c0fc");
        assert_eq!(line_color("plain text"), "#ddd");
    }
}
