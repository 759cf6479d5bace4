//! Training pipeline tab.

use crate::components::StatusBadge;
use crate::state::MonitorState;
use dioxus::prelude::*;
use nowcast_api::RunState;

/// Training leg of the pipeline: batch counters, run history, and the
/// four-stage phase list.
#[component]
pub fn TrainingTab() -> Element {
    let mut state = use_context::<MonitorState>();
    let snapshot = state.dashboard.read().clone();
    let Some(overview) = snapshot.overview else {
        return rsx! {};
    };
    let data = overview.training;

    rsx! {
        div {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0; font-size: 1.2rem;", "🧠 Training Pipeline" }
                StatusBadge { status: data.status }
            }

            div {
                style: "display: flex; gap: 12px; margin: 12px 0; flex-wrap: wrap;",
                InfoCard { label: "Current date", value: data.current_date.clone().unwrap_or_else(|| "-".to_string()) }
                InfoCard { label: "Completed batches", value: data.completed_batches.to_string() }
                InfoCard { label: "Total epochs", value: data.total_epochs.to_string() }
                if let Some(disk) = data.disk_usage.clone() {
                    InfoCard { label: "Disk usage", value: disk }
                }
            }

            h3 { style: "margin: 16px 0 8px;", "Training history" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 0.85rem;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 6px;", "Data range" }
                        th { style: "text-align: left; padding: 6px;", "MAE (mm)" }
                        th { style: "text-align: left; padding: 6px;", "RMSE (mm)" }
                        th { style: "text-align: left; padding: 6px;", "Epochs" }
                        th { style: "text-align: left; padding: 6px;", "Status" }
                    }
                }
                tbody {
                    if data.history.is_empty() {
                        tr {
                            td {
                                colspan: "5",
                                style: "padding: 10px; text-align: center; color: #888;",
                                "No training runs recorded yet"
                            }
                        }
                    } else {
                        // Newest first
                        for run in data.history.iter().rev() {
                            tr {
                                key: "{run.id}",
                                style: "border-top: 1px solid #eee;",
                                td { style: "padding: 6px;", "{run.date_range}" }
                                td { style: "padding: 6px;", {format!("{:.4}", run.mae)} }
                                td { style: "padding: 6px;", {format!("{:.4}", run.rmse)} }
                                td { style: "padding: 6px;", "{run.epochs}" }
                                td { style: "padding: 6px;", if run.success { "✅" } else { "❌" } }
                            }
                        }
                    }
                }
            }

            h3 { style: "margin: 16px 0 8px;", "Pipeline phases" }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                for (index, phase) in data.phases.iter().enumerate() {
                    {
                        let progress = phase.progress.unwrap_or(0.0);
                        let step = index + 1;
                        rsx! {
                            div {
                                key: "{phase.name}",
                                style: "display: flex; align-items: center; gap: 12px; padding: 8px; border-radius: 8px; background: #fafafa;",
                                span {
                                    style: "width: 24px; height: 24px; border-radius: 50%; background: #1565c0; color: white; display: flex; align-items: center; justify-content: center; font-size: 0.8rem;",
                                    "{step}"
                                }
                                div {
                                    style: "flex: 1;",
                                    div { "{phase.name}" }
                                    div {
                                        style: "background: #e0e0e0; border-radius: 4px; height: 6px; margin-top: 4px; overflow: hidden;",
                                        div { style: "height: 100%; background: #2e7d32; width: {progress}%;" }
                                    }
                                    if let Some(message) = phase.message.as_ref() {
                                        div { style: "font-size: 0.75rem; color: #888; margin-top: 2px;", "{message}" }
                                    }
                                }
                                span {
                                    match phase.status {
                                        RunState::Completed => rsx! { "✅" },
                                        RunState::Running => rsx! { {format!("{progress:.0}%")} },
                                        RunState::Error => rsx! { "❌" },
                                        _ => rsx! { "⏸️" },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            button {
                style: "margin-top: 12px; padding: 8px 14px; border-radius: 8px; border: 1px solid #ccc; background: white; cursor: pointer;",
                onclick: move |_| state.pending_log.set(Some("training".to_string())),
                "📋 View logs"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct InfoCardProps {
    label: &'static str,
    value: String,
}

#[component]
fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; border-radius: 8px; background: #f5f5f5; min-width: 120px;",
            div { style: "font-size: 0.75rem; color: #888;", "{props.label}" }
            div { style: "font-weight: 600;", "{props.value}" }
        }
    }
}
