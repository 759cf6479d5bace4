//! Forecast response types for `/predict` and `/predict/path`.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
///
/// Most endpoints use the short `lat`/`lon` spelling; the station endpoint
/// uses `latitude`/`longitude`, so both are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,
}

/// The sensor station whose readings anchored a point forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestStation {
    pub id: String,
    pub name: String,
}

/// The predicted rainfall headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub rainfall_mm_next_10min: f64,
    pub description: String,
}

/// Latest sensor readings at the nearest station. Any reading can be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
}

/// A single-location forecast as served by `GET /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointForecast {
    pub timestamp: String,
    pub location_query: String,
    pub nearest_station: NearestStation,
    /// Stations whose readings were interpolated into this forecast.
    /// Feeds the triangle overlay; older backends omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributing_stations: Option<Vec<String>>,
    pub forecast: ForecastSummary,
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

/// Per-point forecast detail along a recognized route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPointForecast {
    pub rainfall: f64,
    pub description: String,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// One sampled coordinate along a route forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub lat: f64,
    pub lon: f64,
    pub forecast: PathPointForecast,
}

/// Response of `GET /predict/path`.
///
/// An empty or absent `points` list means the query text did not resolve to
/// a route; callers fall back to a point forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    #[serde(default)]
    pub points: Vec<PathPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_forecast_parses_backend_payload() {
        let json = r#"{
            "timestamp": "2026-08-04T09:10:00",
            "location_query": "Sentosa",
            "nearest_station": {"id": "S60", "name": "Sentosa"},
            "forecast": {"rainfall_mm_next_10min": 0.42, "description": "Light Rain"},
            "current_weather": {"temperature": 29.1, "humidity": 84.0, "pm25": null}
        }"#;
        let forecast: PointForecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.nearest_station.id, "S60");
        assert_eq!(forecast.forecast.rainfall_mm_next_10min, 0.42);
        assert_eq!(forecast.contributing_stations, None);
        let weather = forecast.current_weather.unwrap();
        assert_eq!(weather.temperature, Some(29.1));
        assert_eq!(weather.pm25, None);
    }

    #[test]
    fn current_weather_without_pm25_field_still_parses() {
        let json = r#"{"temperature": null, "humidity": null}"#;
        let weather: CurrentWeather = serde_json::from_str(json).unwrap();
        assert_eq!(weather, CurrentWeather::default());
    }

    #[test]
    fn coordinate_accepts_long_form_field_names() {
        let short: Coordinate = serde_json::from_str(r#"{"lat": 1.25, "lon": 103.82}"#).unwrap();
        let long: Coordinate =
            serde_json::from_str(r#"{"latitude": 1.25, "longitude": 103.82}"#).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn path_response_defaults_to_no_points() {
        let empty: PathResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.points.is_empty());

        let json = r#"{"points": [
            {"lat": 1.30, "lon": 103.80, "forecast": {"rainfall": 1.2, "description": "Light Rain"}}
        ]}"#;
        let resp: PathResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.points.len(), 1);
        assert_eq!(resp.points[0].forecast.temperature, None);
    }
}
