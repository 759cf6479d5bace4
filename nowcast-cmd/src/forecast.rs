//! Forecast and station commands.

use anyhow::bail;
use log::info;
use nowcast_api::{ApiClient, Coordinate, PointForecast};
use nowcast_core::orchestrator::ForecastQuery;

pub async fn run_predict(
    client: &ApiClient,
    lat: Option<f64>,
    lon: Option<f64>,
    location: Option<String>,
) -> anyhow::Result<()> {
    let coordinate = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinate { lat, lon }),
        (None, None) => None,
        _ => bail!("--lat and --lon must be given together"),
    };
    let Some(query) = ForecastQuery::from_parts(coordinate, location) else {
        bail!("provide either --lat/--lon or --location");
    };

    let forecast = match &query {
        ForecastQuery::ByCoordinate(coordinate) => {
            info!("Requesting forecast for {}, {}", coordinate.lat, coordinate.lon);
            client.predict_at(*coordinate).await?
        }
        ForecastQuery::ByText(text) => {
            info!("Requesting forecast for '{text}'");
            client.predict_named(text).await?
        }
    };
    print_forecast(&forecast);
    Ok(())
}

pub async fn run_path(client: &ApiClient, query: &str) -> anyhow::Result<()> {
    let response = client.path_forecast(query).await?;
    if response.points.is_empty() {
        println!("'{query}' was not recognized as a route.");
        return Ok(());
    }

    println!("{} points along '{query}':", response.points.len());
    for point in &response.points {
        println!(
            "  {:>8.4}, {:>9.4}   {:>5.2} mm   {}",
            point.lat, point.lon, point.forecast.rainfall, point.forecast.description
        );
    }
    Ok(())
}

pub async fn run_stations(client: &ApiClient) -> anyhow::Result<()> {
    let stations = client.stations().await?;
    info!("Fetched {} stations", stations.len());
    for station in &stations {
        println!(
            "{:<8} {:<36} {:>8.4}, {:>9.4}",
            station.id, station.name, station.location.lat, station.location.lon
        );
    }
    Ok(())
}

pub async fn run_popular(client: &ApiClient) -> anyhow::Result<()> {
    let popular = client.popular_searches().await?;
    if popular.is_empty() {
        println!("No search history yet.");
        return Ok(());
    }
    for (index, entry) in popular.iter().enumerate() {
        println!("{:>2}. {:<36} {} searches", index + 1, entry.name, entry.count);
    }
    Ok(())
}

fn print_forecast(forecast: &PointForecast) {
    println!(
        "Station:   {} ({})",
        forecast.nearest_station.name, forecast.nearest_station.id
    );
    println!("Time:      {}", forecast.timestamp);
    println!(
        "Rainfall (next 10 min): {:.2} mm - {}",
        forecast.forecast.rainfall_mm_next_10min, forecast.forecast.description
    );
    if let Some(weather) = &forecast.current_weather {
        println!("Temperature: {}", reading(weather.temperature, "°C"));
        println!("Humidity:    {}", reading(weather.humidity, "%"));
        println!("PM2.5:       {}", reading(weather.pm25, " µg/m³"));
    }
}

fn reading(value: Option<f64>, unit: &str) -> String {
    value
        .map(|value| format!("{value}{unit}"))
        .unwrap_or_else(|| "--".to_string())
}
