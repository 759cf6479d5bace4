//! Rainfall Nowcast Map
//!
//! Map-centric consumer app: pick a location (device fix, map click, text
//! search, or quick link) and see the short-term rainfall forecast for it
//! overlaid on a Leaflet map.
//!
//! Data flow:
//! 1. On mount: bind the core stores to signals, fetch the station list and
//!    popular searches (best-effort), resolve the initial location once,
//!    and run the startup forecast.
//! 2. User actions push a `ForecastQuery` into `pending_query`; an effect
//!    drains it into the orchestrator (and fire-and-forget logs text
//!    searches).
//! 3. Map effects mirror state onto the Leaflet bridge: fly-to, station
//!    markers, route polyline, contributing-stations triangle.

use dioxus::prelude::*;
use nowcast_api::{ApiClient, Coordinate};
use nowcast_core::config::ConfigStore;
use nowcast_core::location::{resolve_initial_location, Geolocator, FALLBACK_LOCATION};
use nowcast_core::orchestrator::{run_forecast_query, run_startup_forecast, ForecastQuery};
use nowcast_core::view_state::ViewStateStore;
use nowcast_ui::components::{
    ForecastPanel, MapContainer, QuickLinks, SearchBar, SettingsPanel, StatsPanel,
};
use nowcast_ui::geo::WebGeolocator;
use nowcast_ui::state::{bind_config_store, bind_view_store, AppState};
use nowcast_ui::storage::LocalStorage;
use nowcast_ui::{js_bridge, net};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;

/// DOM id for the Leaflet container div.
const MAP_CONTAINER_ID: &str = "forecast-map";
/// Initial city-wide view.
const DEFAULT_ZOOM: u32 = 11;
/// Zoom used when flying to a resolved location.
const FLY_ZOOM: u32 = 14;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let api = use_hook(|| {
        Rc::new(ApiClient::new(&net::api_base_url()).expect("invalid API base url"))
    });
    let view_store = use_hook(ViewStateStore::new);
    let config_store = use_hook(|| ConfigStore::load(Rc::new(LocalStorage)));
    {
        let provided = config_store.clone();
        use_context_provider(move || provided);
    }

    // JS→Rust click path; the closure must stay alive as long as the map.
    use_hook(|| {
        let mut pending = state.pending_query;
        let closure = Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lon: f64| {
            pending.set(Some(ForecastQuery::ByCoordinate(Coordinate { lat, lon })));
        });
        js_bridge::install_click_handler(&closure);
        Rc::new(closure)
    });

    // ─── Effect 1: mount-once startup sequence ───
    {
        let api = api.clone();
        let view_store = view_store.clone();
        let config_store = config_store.clone();
        use_effect(move || {
            bind_view_store(&view_store, state.view);
            bind_config_store(&config_store, state.config);
            js_bridge::init_map(
                MAP_CONTAINER_ID,
                FALLBACK_LOCATION.lat,
                FALLBACK_LOCATION.lon,
                DEFAULT_ZOOM,
            );

            let stations_api = api.clone();
            spawn(async move {
                match stations_api.stations().await {
                    Ok(stations) => state.stations.set(stations),
                    Err(err) => log::warn!("Failed to fetch stations: {err}"),
                }
            });

            let popular_api = api.clone();
            spawn(async move {
                match popular_api.popular_searches().await {
                    Ok(popular) => state.popular.set(popular),
                    Err(err) => log::warn!("Failed to fetch popular searches: {err}"),
                }
            });

            let startup_api = api.clone();
            let startup_store = view_store.clone();
            spawn(async move {
                let geolocator = WebGeolocator::new();
                let initial =
                    resolve_initial_location(geolocator.as_ref().map(|g| g as &dyn Geolocator))
                        .await;
                run_startup_forecast(startup_api.as_ref(), &startup_store, initial).await;
            });
        });
    }

    // ─── Effect 2: drain pending queries into the orchestrator ───
    {
        let api = api.clone();
        let view_store = view_store.clone();
        use_effect(move || {
            let Some(query) = state.pending_query.read().clone() else {
                return;
            };
            state.pending_query.set(None);

            if let ForecastQuery::ByText(text) = &query {
                let log_api = api.clone();
                let text = text.clone();
                spawn(async move {
                    // Search statistics are fire-and-forget.
                    if let Err(err) = log_api.log_search(&text).await {
                        log::debug!("Failed to log search: {err}");
                    }
                });
            }

            let run_api = api.clone();
            let run_store = view_store.clone();
            spawn(async move {
                run_forecast_query(run_api.as_ref(), &run_store, query).await;
            });
        });
    }

    // ─── Effect 3: fly-to requests ───
    let mut last_fly: Signal<Option<Coordinate>> = use_signal(|| None);
    use_effect(move || {
        let target = state.view.read().fly_to;
        if target.is_some() && target != *last_fly.peek() {
            last_fly.set(target);
            if let Some(Coordinate { lat, lon }) = target {
                js_bridge::fly_to(lat, lon, FLY_ZOOM);
            }
        }
    });

    // ─── Effect 4: station marker layer ───
    use_effect(move || {
        let stations = state.stations.read().clone();
        let show_stations = state.config.read().show_stations;
        let highlighted = state
            .view
            .read()
            .forecast
            .as_ref()
            .map(|forecast| forecast.nearest_station.id.clone())
            .unwrap_or_default();

        if !show_stations || stations.is_empty() {
            js_bridge::clear_stations();
            return;
        }
        let data_json = serde_json::to_string(&stations).unwrap_or_default();
        js_bridge::set_stations(&data_json, &highlighted);
    });

    // ─── Effect 5: route polyline ───
    use_effect(move || {
        let view = state.view.read();
        match view.path_forecast.as_ref() {
            Some(overlay) => {
                let path_json = serde_json::to_string(&overlay.path).unwrap_or_default();
                js_bridge::set_path(&path_json);
            }
            None => js_bridge::clear_path(),
        }
    });

    // ─── Effect 6: contributing-stations triangle ───
    use_effect(move || {
        let show_triangle = state.config.read().show_triangle;
        let stations = state.stations.read().clone();
        let view = state.view.read();
        let contributing = view
            .forecast
            .as_ref()
            .and_then(|forecast| forecast.contributing_stations.as_ref());

        let points: Vec<[f64; 2]> = match (show_triangle, contributing) {
            (true, Some(ids)) => ids
                .iter()
                .filter_map(|id| stations.iter().find(|station| &station.id == id))
                .map(|station| [station.location.lat, station.location.lon])
                .collect(),
            _ => Vec::new(),
        };

        if points.len() >= 2 {
            js_bridge::set_triangle(&serde_json::to_string(&points).unwrap_or_default());
        } else {
            js_bridge::clear_triangle();
        }
    });

    // ─── Render ───
    let show_settings = (state.show_settings)();
    let show_stats = (state.show_stats)();

    rsx! {
        div {
            style: "position: relative; width: 100vw; height: 100vh; overflow: hidden; font-family: system-ui, -apple-system, sans-serif;",

            MapContainer { id: MAP_CONTAINER_ID.to_string() }
            SearchBar {}
            QuickLinks {}
            ForecastPanel {}

            div {
                style: "position: absolute; top: 16px; right: 16px; z-index: 1500; display: flex; flex-direction: column; gap: 8px;",
                button {
                    style: "width: 40px; height: 40px; border-radius: 50%; border: none; background: rgba(20,20,20,0.8); color: white; cursor: pointer;",
                    onclick: move |_| state.show_settings.set(!show_settings),
                    "⚙️"
                }
                button {
                    style: "width: 40px; height: 40px; border-radius: 50%; border: none; background: rgba(20,20,20,0.8); color: white; cursor: pointer;",
                    onclick: move |_| state.show_stats.set(!show_stats),
                    "📊"
                }
            }

            if show_settings {
                SettingsPanel {}
            }
            if show_stats {
                StatsPanel {}
            }
        }
    }
}
