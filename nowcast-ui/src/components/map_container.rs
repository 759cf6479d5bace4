//! Map container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// DOM id Leaflet attaches to.
    pub id: String,
}

/// Full-viewport container div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "position: absolute; inset: 0; z-index: 0;",
        }
    }
}
