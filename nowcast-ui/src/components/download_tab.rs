//! File-download progress tab.

use crate::components::StatusBadge;
use crate::state::MonitorState;
use dioxus::prelude::*;
use nowcast_api::RunState;

/// Download leg of the pipeline: overall progress bar, counters, and the
/// per-date status table.
#[component]
pub fn DownloadTab() -> Element {
    let mut state = use_context::<MonitorState>();
    let snapshot = state.dashboard.read().clone();
    let Some(overview) = snapshot.overview else {
        return rsx! {};
    };
    let data = overview.download;
    let percent = data.percent_complete();

    rsx! {
        div {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0; font-size: 1.2rem;", "📥 File Download Progress" }
                StatusBadge { status: data.status }
            }

            div {
                style: "margin: 12px 0; background: #e0e0e0; border-radius: 6px; height: 10px; overflow: hidden;",
                div {
                    style: "height: 100%; background: #1565c0; width: {percent}%;",
                }
            }
            div {
                style: "display: flex; gap: 24px; font-size: 0.9rem; color: #444;",
                span { "Progress: {data.completed_days} / {data.total_days} days ({percent}%)" }
                span { "Files downloaded: {data.files_downloaded}" }
                span { "Parallel processes: {data.parallel_processes}" }
            }

            h3 { style: "margin: 16px 0 8px;", "Per-date download status" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 0.85rem;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 6px;", "Date" }
                        th { style: "text-align: left; padding: 6px;", "Satellite files" }
                        th { style: "text-align: left; padding: 6px;", "NEA data" }
                        th { style: "text-align: left; padding: 6px;", "Status" }
                    }
                }
                tbody {
                    for row in data.date_progress.iter() {
                        tr {
                            key: "{row.date}",
                            style: "border-top: 1px solid #eee;",
                            td { style: "padding: 6px;", "{row.date}" }
                            td { style: "padding: 6px;", "{row.satellite_files} / {row.satellite_total}" }
                            td { style: "padding: 6px;", "{row.nea_files} / {row.nea_total}" }
                            td {
                                style: "padding: 6px;",
                                match row.status {
                                    RunState::Completed => "✅",
                                    RunState::Running => "🔄",
                                    RunState::Error => "❌",
                                    _ => "⏸️",
                                }
                            }
                        }
                    }
                }
            }

            button {
                style: "margin-top: 12px; padding: 8px 14px; border-radius: 8px; border: 1px solid #ccc; background: white; cursor: pointer;",
                onclick: move |_| state.pending_log.set(Some("download".to_string())),
                "📋 View logs"
            }
        }
    }
}
