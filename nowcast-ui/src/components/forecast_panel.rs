//! Forecast overlay panel.

use crate::state::AppState;
use dioxus::prelude::*;
use nowcast_api::PointForecast;
use nowcast_core::config::Metric;

/// Bottom-center card showing the current forecast, gated per-metric on the
/// config. Loading and error states replace the card body; with no data yet
/// it prompts for a location.
#[component]
pub fn ForecastPanel() -> Element {
    let state = use_context::<AppState>();
    let view = state.view.read().clone();
    let config = state.config.read().clone();

    let card_style = "position: absolute; bottom: 24px; left: 50%; transform: translateX(-50%); z-index: 1000; width: 90%; max-width: 400px; background: rgba(20, 20, 20, 0.85); border-radius: 16px; border: 1px solid rgba(255,255,255,0.1); padding: 16px; color: white; box-shadow: 0 8px 32px rgba(0,0,0,0.4);";

    if view.loading {
        return rsx! {
            div { style: "{card_style} text-align: center;", "Loading..." }
        };
    }

    if let Some(error) = &view.error {
        return rsx! {
            div {
                style: "{card_style}",
                span { style: "color: #ff5757;", "Error: {error}" }
            }
        };
    }

    let Some(forecast) = &view.forecast else {
        return rsx! {
            div {
                style: "{card_style} text-align: center; padding: 10px 20px;",
                span { style: "font-size: 0.9rem; color: #ddd;", "Select a location on the map" }
            }
        };
    };

    let is_rain = forecast.forecast.description.contains("Rain")
        || forecast.forecast.description.contains("Storm");
    let condition_color = if is_rain { "#ff5757" } else { "#4bff78" };
    let timestamp = format_timestamp(&forecast.timestamp);
    let weather = forecast.current_weather.clone().unwrap_or_default();
    let name = display_name(forecast).to_string();

    rsx! {
        div {
            style: "{card_style} display: flex; flex-direction: column; gap: 12px;",

            // Header: location and forecast time
            div {
                h2 {
                    style: "margin: 0; font-size: 1.3rem; font-weight: 700;",
                    "{name}"
                }
                if !timestamp.is_empty() {
                    span {
                        style: "font-size: 0.8rem; color: rgba(255,255,255,0.7);",
                        "{timestamp}"
                    }
                }
            }

            if config.metrics.contains(&Metric::Rain) {
                div {
                    style: "display: flex; align-items: center; gap: 12px; padding: 10px; border-radius: 12px; background: rgba(255,255,255,0.06);",
                    span { style: "font-size: 1.6rem;", if is_rain { "🌧️" } else { "☁️" } }
                    div {
                        div { style: "font-size: 0.75rem; color: rgba(255,255,255,0.6); text-transform: uppercase;", "Condition" }
                        div { style: "font-weight: 600; color: {condition_color};", "{forecast.forecast.description}" }
                    }
                    if forecast.forecast.rainfall_mm_next_10min > 0.0 {
                        span {
                            style: "margin-left: auto; font-weight: 600; color: #00e5ff;",
                            "{forecast.forecast.rainfall_mm_next_10min} mm"
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 10px;",
                if config.metrics.contains(&Metric::Temp) {
                    MetricTile { icon: "🌡️", label: "Temp", value: format_reading(weather.temperature, "°C") }
                }
                if config.metrics.contains(&Metric::Hum) {
                    MetricTile { icon: "💧", label: "Humidity", value: format_reading(weather.humidity, "%") }
                }
                if config.metrics.contains(&Metric::Pm25) {
                    MetricTile { icon: "😷", label: "PM2.5", value: format_reading(weather.pm25, " µg") }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetricTileProps {
    icon: &'static str,
    label: &'static str,
    value: String,
}

#[component]
fn MetricTile(props: MetricTileProps) -> Element {
    rsx! {
        div {
            style: "background: rgba(255,255,255,0.05); padding: 10px; border-radius: 12px;",
            div {
                style: "font-size: 0.75rem; color: rgba(255,255,255,0.6);",
                "{props.icon} {props.label}"
            }
            div { style: "font-size: 1.1rem; font-weight: 600;", "{props.value}" }
        }
    }
}

/// Station name when one was resolved, the query text otherwise (route
/// summaries carry no station).
fn display_name(forecast: &PointForecast) -> &str {
    if forecast.nearest_station.name.is_empty() {
        &forecast.location_query
    } else {
        &forecast.nearest_station.name
    }
}

fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value}{unit}"),
        None => "--".to_string(),
    }
}

/// Render a backend timestamp as e.g. "Tue 4 Aug, 09:10". Unparseable
/// input passes through untouched; route summaries carry none.
fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%a %-d %b, %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%a %-d %b, %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_timestamps_are_humanized() {
        assert_eq!(format_timestamp("2026-08-04T09:10:00"), "Tue 4 Aug, 09:10");
        assert_eq!(
            format_timestamp("2026-08-04T09:10:00+08:00"),
            "Tue 4 Aug, 09:10"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("latest"), "latest");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn missing_readings_render_as_dashes() {
        assert_eq!(format_reading(None, "°C"), "--");
        assert_eq!(format_reading(Some(29.1), "°C"), "29.1°C");
    }
}
