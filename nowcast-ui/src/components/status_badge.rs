//! Status badge for pipeline lifecycle states.

use dioxus::prelude::*;
use nowcast_api::RunState;

#[derive(Props, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub status: RunState,
}

/// Small colored pill showing a [`RunState`].
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let (bg, fg) = match props.status {
        RunState::Running => ("#E3F2FD", "#1565C0"),
        RunState::Completed => ("#E8F5E9", "#2E7D32"),
        RunState::Error => ("#FFEBEE", "#C62828"),
        RunState::Waiting | RunState::Pending => ("#FFF8E1", "#F57F17"),
        RunState::Idle | RunState::Unknown => ("#EEEEEE", "#616161"),
    };
    let label = props.status.label();
    rsx! {
        span {
            style: "padding: 3px 10px; border-radius: 12px; font-size: 0.8rem; background: {bg}; color: {fg};",
            "{label}"
        }
    }
}
