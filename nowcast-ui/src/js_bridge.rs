//! Typed wrappers around the Leaflet map via `js_sys::eval()`.
//!
//! The map functions live in `assets/js/map.js`, embedded at compile time
//! and evaluated as globals once Leaflet itself (loaded from the host page)
//! is available. Rust→JS calls go through `window.*`; the one JS→Rust path
//! (map clicks) goes through a closure installed on
//! `window.__nowcastOnMapClick`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

static MAP_JS: &str = include_str!("../assets/js/map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Nowcast JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map bridge with a wait-for-Leaflet polling loop.
///
/// The bridge JS is stored on `window` and evaluated at global scope (via
/// indirect eval) once `window.L` exists and the container element is in
/// the DOM; each function declaration is then promoted to `window.*` and
/// `nowcastInitMap` is invoked. Call once at app startup.
pub fn init_map(container_id: &str, lat: f64, lon: f64, zoom: u32) {
    let store_js = format!(
        "window.__nowcastMapScripts = {};",
        serde_json::to_string(MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__nowcastMapScripts);
                    delete window.__nowcastMapScripts;
                    window.nowcastInitMap = nowcastInitMap;
                    window.nowcastFlyTo = nowcastFlyTo;
                    window.nowcastSetStations = nowcastSetStations;
                    window.nowcastClearStations = nowcastClearStations;
                    window.nowcastSetPath = nowcastSetPath;
                    window.nowcastClearPath = nowcastClearPath;
                    window.nowcastSetTriangle = nowcastSetTriangle;
                    window.nowcastClearTriangle = nowcastClearTriangle;
                    window.nowcastInitMap('{container_id}', {lat}, {lon}, {zoom});
                    window.__nowcastMapReady = true;
                    console.log('Nowcast map initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Run a bridge call once the map is ready, polling until then.
fn when_ready(code: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__nowcastMapReady) {{
                    clearInterval(poll);
                    try {{ {code} }} catch(e) {{ console.error('[Nowcast] map call error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Recenter the map on a coordinate.
pub fn fly_to(lat: f64, lon: f64, zoom: u32) {
    when_ready(&format!("window.nowcastFlyTo({lat}, {lon}, {zoom});"));
}

/// Replace the station marker layer. `data_json` is the serialized station
/// list; `highlighted_id` marks the resolved nearest station.
pub fn set_stations(data_json: &str, highlighted_id: &str) {
    let escaped = escape(data_json);
    let highlighted = escape(highlighted_id);
    when_ready(&format!(
        "window.nowcastSetStations('{escaped}', '{highlighted}');"
    ));
}

pub fn clear_stations() {
    when_ready("window.nowcastClearStations();");
}

/// Draw the route polyline. `path_json` is a serialized `[[lat, lon], ..]`.
pub fn set_path(path_json: &str) {
    let escaped = escape(path_json);
    when_ready(&format!("window.nowcastSetPath('{escaped}');"));
}

pub fn clear_path() {
    when_ready("window.nowcastClearPath();");
}

/// Draw the contributing-stations polygon. `points_json` is a serialized
/// `[[lat, lon], ..]` with at least two entries.
pub fn set_triangle(points_json: &str) {
    let escaped = escape(points_json);
    when_ready(&format!("window.nowcastSetTriangle('{escaped}');"));
}

pub fn clear_triangle() {
    when_ready("window.nowcastClearTriangle();");
}

/// Install the JS→Rust click callback. The caller owns the closure and must
/// keep it alive for the map's lifetime.
pub fn install_click_handler(handler: &Closure<dyn FnMut(f64, f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__nowcastOnMapClick"),
            handler.as_ref(),
        );
    }
}

fn escape(payload: &str) -> String {
    payload.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}
