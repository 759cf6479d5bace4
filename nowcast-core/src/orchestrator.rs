//! The forecast acquisition sequence.
//!
//! One entry point per trigger: [`run_forecast_query`] for user-initiated
//! queries (search, map click, quick link) and [`run_startup_forecast`] for
//! the single query issued by the location resolver at mount.

use crate::location::InitialLocation;
use crate::view_state::{PathOverlay, ViewStateStore};
use async_trait::async_trait;
use nowcast_api::{
    ApiClient, ApiError, Coordinate, CurrentWeather, ForecastSummary, NearestStation,
    PathPoint, PathResponse, PointForecast, Station,
};

/// Shown when a point-forecast call fails without a server-supplied detail.
pub const GENERIC_FORECAST_ERROR: &str = "Failed to fetch forecast";
/// Headline description of a synthesized route summary.
pub const PATH_SUMMARY_DESCRIPTION: &str = "Path Forecast";

/// What the user asked for. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastQuery {
    ByCoordinate(Coordinate),
    ByText(String),
}

impl ForecastQuery {
    /// Build a query from loosely-coupled UI inputs. A coordinate, when
    /// present, always wins over text - clicking the map yields a point
    /// query even if the search box still holds a string. Blank text with
    /// no coordinate is not a query at all.
    pub fn from_parts(coordinate: Option<Coordinate>, text: Option<String>) -> Option<Self> {
        if let Some(coordinate) = coordinate {
            return Some(Self::ByCoordinate(coordinate));
        }
        let text = text?.trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(Self::ByText(text))
        }
    }
}

/// The slice of the backend the orchestrator needs. Implemented by
/// [`ApiClient`]; tests substitute in-memory fakes.
#[async_trait(?Send)]
pub trait ForecastApi {
    async fn predict_at(&self, coordinate: Coordinate) -> Result<PointForecast, ApiError>;
    async fn predict_named(&self, location: &str) -> Result<PointForecast, ApiError>;
    async fn path_forecast(&self, query: &str) -> Result<PathResponse, ApiError>;
    async fn stations(&self) -> Result<Vec<Station>, ApiError>;
}

#[async_trait(?Send)]
impl ForecastApi for ApiClient {
    async fn predict_at(&self, coordinate: Coordinate) -> Result<PointForecast, ApiError> {
        ApiClient::predict_at(self, coordinate).await
    }

    async fn predict_named(&self, location: &str) -> Result<PointForecast, ApiError> {
        ApiClient::predict_named(self, location).await
    }

    async fn path_forecast(&self, query: &str) -> Result<PathResponse, ApiError> {
        ApiClient::path_forecast(self, query).await
    }

    async fn stations(&self) -> Result<Vec<Station>, ApiError> {
        ApiClient::stations(self).await
    }
}

/// Run one user-initiated forecast query to completion.
///
/// Text queries are first offered to the path endpoint; a recognized route
/// short-circuits the rest. Path resolution is never attempted for
/// coordinate queries. The loading flag is dropped on every exit path.
pub async fn run_forecast_query(api: &dyn ForecastApi, store: &ViewStateStore, query: ForecastQuery) {
    run(api, store, query, true).await
}

/// Run the startup query issued by the location resolver.
///
/// The resolver controls the initial map view itself - a device fix flies
/// to the device, the fallback leaves the map at its default view - so the
/// result-driven fly-to of [`run_forecast_query`] is disabled here.
pub async fn run_startup_forecast(
    api: &dyn ForecastApi,
    store: &ViewStateStore,
    initial: InitialLocation,
) {
    if let Some(target) = initial.fly_to {
        store.set_fly_to(target);
    }
    run(api, store, ForecastQuery::ByCoordinate(initial.coordinate), false).await
}

async fn run(api: &dyn ForecastApi, store: &ViewStateStore, query: ForecastQuery, resolve_fly: bool) {
    let token = store.begin_run();

    if let ForecastQuery::ByText(text) = &query {
        if let Some((overlay, summary, fly_to)) = try_path_forecast(api, text).await {
            store.apply_path(token, overlay, summary, fly_to);
            store.finish(token);
            return;
        }
    }

    match point_forecast(api, &query, resolve_fly).await {
        Ok((forecast, fly_to)) => store.apply_point(token, forecast, fly_to),
        Err(err) => store.apply_error(token, user_message(&err)),
    }
    store.finish(token);
}

/// Offer a text query to the path endpoint. Both failure and an empty point
/// list mean "not a path" - the two cases are indistinguishable on purpose
/// and neither is surfaced to the user.
async fn try_path_forecast(
    api: &dyn ForecastApi,
    text: &str,
) -> Option<(PathOverlay, PointForecast, Coordinate)> {
    let points = match api.path_forecast(text).await {
        Ok(response) if !response.points.is_empty() => response.points,
        Ok(_) => {
            log::debug!("'{text}' did not resolve to a path");
            return None;
        }
        Err(err) => {
            log::debug!("Path lookup for '{text}' failed: {err}");
            return None;
        }
    };

    let first = &points[0];
    let fly_to = Coordinate {
        lat: first.lat,
        lon: first.lon,
    };
    let summary = path_summary(text, first);
    let overlay = PathOverlay {
        path: points.iter().map(|p| [p.lat, p.lon]).collect(),
        points,
    };
    Some((overlay, summary, fly_to))
}

/// Headline stand-in for a route result: the first point's rainfall and
/// temperature under a fixed description, carrying the query text as the
/// display name (routes have no nearest station).
fn path_summary(query: &str, first: &PathPoint) -> PointForecast {
    PointForecast {
        timestamp: String::new(),
        location_query: query.to_string(),
        nearest_station: NearestStation {
            id: String::new(),
            name: query.to_string(),
        },
        contributing_stations: None,
        forecast: ForecastSummary {
            rainfall_mm_next_10min: first.forecast.rainfall,
            description: PATH_SUMMARY_DESCRIPTION.to_string(),
        },
        current_weather: Some(CurrentWeather {
            temperature: first.forecast.temperature,
            humidity: None,
            pm25: None,
        }),
    }
}

async fn point_forecast(
    api: &dyn ForecastApi,
    query: &ForecastQuery,
    resolve_fly: bool,
) -> Result<(PointForecast, Option<Coordinate>), ApiError> {
    match query {
        ForecastQuery::ByCoordinate(coordinate) => {
            let forecast = api.predict_at(*coordinate).await?;
            Ok((forecast, resolve_fly.then_some(*coordinate)))
        }
        ForecastQuery::ByText(text) => {
            let forecast = api.predict_named(text).await?;
            let fly_to = if resolve_fly {
                resolve_station_fly_to(api, &forecast.nearest_station.id).await
            } else {
                None
            };
            Ok((forecast, fly_to))
        }
    }
}

/// Fly to the resolved nearest station, if the station list can be fetched
/// and contains it. Best-effort: a miss leaves the map where it is.
async fn resolve_station_fly_to(api: &dyn ForecastApi, station_id: &str) -> Option<Coordinate> {
    match api.stations().await {
        Ok(stations) => stations
            .into_iter()
            .find(|station| station.id == station_id)
            .map(|station| station.location),
        Err(err) => {
            log::warn!("Station lookup failed: {err}");
            None
        }
    }
}

fn user_message(err: &ApiError) -> String {
    err.server_detail()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FORECAST_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    fn point(query: &str) -> PointForecast {
        PointForecast {
            timestamp: "2026-08-04T09:10:00".to_string(),
            location_query: query.to_string(),
            nearest_station: NearestStation {
                id: "S60".to_string(),
                name: "Sentosa".to_string(),
            },
            contributing_stations: None,
            forecast: ForecastSummary {
                rainfall_mm_next_10min: 0.42,
                description: "Light Rain".to_string(),
            },
            current_weather: None,
        }
    }

    fn path_point(lat: f64, lon: f64, rainfall: f64) -> PathPoint {
        PathPoint {
            lat,
            lon,
            forecast: nowcast_api::PathPointForecast {
                rainfall,
                description: "Light Rain".to_string(),
                temperature: Some(28.5),
            },
        }
    }

    /// Scripted backend: queued responses per endpoint, call log for
    /// asserting which endpoints a run touched.
    #[derive(Default)]
    struct FakeApi {
        point_results: RefCell<VecDeque<Result<PointForecast, ApiError>>>,
        path_results: RefCell<VecDeque<Result<PathResponse, ApiError>>>,
        station_results: RefCell<VecDeque<Result<Vec<Station>, ApiError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn queue_point(&self, result: Result<PointForecast, ApiError>) {
            self.point_results.borrow_mut().push_back(result);
        }

        fn queue_path(&self, result: Result<PathResponse, ApiError>) {
            self.path_results.borrow_mut().push_back(result);
        }

        fn queue_stations(&self, result: Result<Vec<Station>, ApiError>) {
            self.station_results.borrow_mut().push_back(result);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ForecastApi for FakeApi {
        async fn predict_at(&self, coordinate: Coordinate) -> Result<PointForecast, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("predict_at({}, {})", coordinate.lat, coordinate.lon));
            self.point_results.borrow_mut().pop_front().expect("no point queued")
        }

        async fn predict_named(&self, location: &str) -> Result<PointForecast, ApiError> {
            self.calls.borrow_mut().push(format!("predict_named({location})"));
            self.point_results.borrow_mut().pop_front().expect("no point queued")
        }

        async fn path_forecast(&self, query: &str) -> Result<PathResponse, ApiError> {
            self.calls.borrow_mut().push(format!("path({query})"));
            self.path_results.borrow_mut().pop_front().expect("no path queued")
        }

        async fn stations(&self) -> Result<Vec<Station>, ApiError> {
            self.calls.borrow_mut().push("stations".to_string());
            self.station_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn status_error(status: u16, detail: Option<&str>) -> ApiError {
        ApiError::Status {
            status,
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn coordinate_wins_over_text_when_both_supplied() {
        let here = coord(1.3, 103.8);
        let query = ForecastQuery::from_parts(Some(here), Some("Sentosa".to_string()));
        assert_eq!(query, Some(ForecastQuery::ByCoordinate(here)));
    }

    #[test]
    fn blank_text_is_not_a_query() {
        assert_eq!(ForecastQuery::from_parts(None, Some("   ".to_string())), None);
        assert_eq!(ForecastQuery::from_parts(None, None), None);
        assert_eq!(
            ForecastQuery::from_parts(None, Some("  Pulau Ubin ".to_string())),
            Some(ForecastQuery::ByText("Pulau Ubin".to_string()))
        );
    }

    #[tokio::test]
    async fn recognized_path_short_circuits_the_point_request() {
        let api = FakeApi::default();
        api.queue_path(Ok(PathResponse {
            points: vec![
                path_point(1.40, 103.78, 1.2),
                path_point(1.38, 103.79, 0.8),
                path_point(1.36, 103.80, 0.0),
            ],
        }));
        let store = ViewStateStore::new();

        run_forecast_query(
            &api,
            &store,
            ForecastQuery::ByText("North-South Corridor".to_string()),
        )
        .await;

        let state = store.snapshot();
        let overlay = state.path_forecast.expect("path overlay");
        assert_eq!(overlay.path.len(), 3);
        assert_eq!(state.fly_to, Some(coord(1.40, 103.78)));

        let summary = state.forecast.expect("summary forecast");
        assert_eq!(summary.forecast.description, PATH_SUMMARY_DESCRIPTION);
        assert_eq!(summary.forecast.rainfall_mm_next_10min, 1.2);
        assert_eq!(summary.location_query, "North-South Corridor");

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(api.calls(), vec!["path(North-South Corridor)".to_string()]);
    }

    #[tokio::test]
    async fn empty_path_and_failed_path_fall_back_identically() {
        // Empty point list ("genuinely not a path")
        let empty_api = FakeApi::default();
        empty_api.queue_path(Ok(PathResponse::default()));
        empty_api.queue_point(Ok(point("Sentosa")));
        let empty_store = ViewStateStore::new();
        run_forecast_query(
            &empty_api,
            &empty_store,
            ForecastQuery::ByText("Sentosa".to_string()),
        )
        .await;

        // Path service down - deliberately indistinguishable from the above
        let failing_api = FakeApi::default();
        failing_api.queue_path(Err(status_error(503, None)));
        failing_api.queue_point(Ok(point("Sentosa")));
        let failing_store = ViewStateStore::new();
        run_forecast_query(
            &failing_api,
            &failing_store,
            ForecastQuery::ByText("Sentosa".to_string()),
        )
        .await;

        assert_eq!(empty_store.snapshot(), failing_store.snapshot());

        let state = empty_store.snapshot();
        assert_eq!(state.forecast.unwrap().location_query, "Sentosa");
        assert_eq!(state.path_forecast, None);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn coordinate_queries_never_touch_the_path_endpoint() {
        let api = FakeApi::default();
        api.queue_point(Ok(point("1.3,103.8")));
        let store = ViewStateStore::new();

        run_forecast_query(&api, &store, ForecastQuery::ByCoordinate(coord(1.3, 103.8))).await;

        assert_eq!(api.calls(), vec!["predict_at(1.3, 103.8)".to_string()]);
        assert_eq!(store.snapshot().fly_to, Some(coord(1.3, 103.8)));
    }

    #[tokio::test]
    async fn text_query_flies_to_the_resolved_station() {
        let api = FakeApi::default();
        api.queue_path(Ok(PathResponse::default()));
        api.queue_point(Ok(point("Sentosa")));
        api.queue_stations(Ok(vec![Station {
            id: "S60".to_string(),
            name: "Sentosa".to_string(),
            location: coord(1.25, 103.8279),
        }]));
        let store = ViewStateStore::new();

        run_forecast_query(&api, &store, ForecastQuery::ByText("Sentosa".to_string())).await;

        assert_eq!(store.snapshot().fly_to, Some(coord(1.25, 103.8279)));
    }

    #[tokio::test]
    async fn unresolved_station_leaves_fly_to_unchanged() {
        let previous = coord(1.29, 103.85);

        for station_result in [Ok(Vec::new()), Err(status_error(500, None))] {
            let api = FakeApi::default();
            api.queue_path(Ok(PathResponse::default()));
            api.queue_point(Ok(point("Sentosa")));
            api.queue_stations(station_result);
            let store = ViewStateStore::new();
            store.set_fly_to(previous);

            run_forecast_query(&api, &store, ForecastQuery::ByText("Sentosa".to_string())).await;

            assert_eq!(store.snapshot().fly_to, Some(previous));
        }
    }

    #[tokio::test]
    async fn point_failure_shows_server_detail_and_keeps_old_forecast() {
        let api = FakeApi::default();
        api.queue_point(Ok(point("Sentosa")));
        api.queue_path(Ok(PathResponse::default()));
        api.queue_point(Err(status_error(404, Some("Location 'Atlantis' not found"))));
        let store = ViewStateStore::new();

        run_forecast_query(&api, &store, ForecastQuery::ByCoordinate(coord(1.3, 103.8))).await;
        run_forecast_query(&api, &store, ForecastQuery::ByText("Atlantis".to_string())).await;

        let state = store.snapshot();
        assert_eq!(state.error.as_deref(), Some("Location 'Atlantis' not found"));
        assert_eq!(state.forecast.unwrap().location_query, "Sentosa");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn bodyless_failure_shows_the_generic_message() {
        let api = FakeApi::default();
        api.queue_point(Err(status_error(502, None)));
        let store = ViewStateStore::new();

        run_forecast_query(&api, &store, ForecastQuery::ByCoordinate(coord(1.3, 103.8))).await;

        assert_eq!(store.snapshot().error.as_deref(), Some(GENERIC_FORECAST_ERROR));
    }

    #[tokio::test]
    async fn startup_with_fallback_forecasts_once_without_flying() {
        let api = FakeApi::default();
        api.queue_point(Ok(point("1.3521,103.8198")));
        let store = ViewStateStore::new();
        let initial = crate::location::InitialLocation {
            coordinate: crate::location::FALLBACK_LOCATION,
            fly_to: None,
        };

        run_startup_forecast(&api, &store, initial).await;

        assert_eq!(api.calls(), vec!["predict_at(1.3521, 103.8198)".to_string()]);
        assert_eq!(store.snapshot().fly_to, None);
    }

    #[tokio::test]
    async fn startup_with_device_fix_flies_to_the_device() {
        let here = coord(1.29, 103.85);
        let api = FakeApi::default();
        api.queue_point(Ok(point("1.29,103.85")));
        let store = ViewStateStore::new();
        let initial = crate::location::InitialLocation {
            coordinate: here,
            fly_to: Some(here),
        };

        run_startup_forecast(&api, &store, initial).await;

        assert_eq!(store.snapshot().fly_to, Some(here));
    }

    /// Backend whose point responses complete only when the test releases
    /// them, for exercising overlapping runs deterministically.
    struct GatedApi {
        gates: RefCell<VecDeque<oneshot::Receiver<PointForecast>>>,
    }

    #[async_trait(?Send)]
    impl ForecastApi for GatedApi {
        async fn predict_at(&self, _coordinate: Coordinate) -> Result<PointForecast, ApiError> {
            let gate = self.gates.borrow_mut().pop_front().expect("no gate queued");
            Ok(gate.await.expect("gate dropped"))
        }

        async fn predict_named(&self, _location: &str) -> Result<PointForecast, ApiError> {
            unreachable!("not used in this test")
        }

        async fn path_forecast(&self, _query: &str) -> Result<PathResponse, ApiError> {
            unreachable!("coordinate queries never call the path endpoint")
        }

        async fn stations(&self) -> Result<Vec<Station>, ApiError> {
            Ok(Vec::new())
        }
    }

    /// Deliberate improvement over the original last-response-wins design:
    /// the generation guard makes the latest *issued* query win even when
    /// its response arrives before the superseded query's does.
    #[tokio::test]
    async fn later_query_wins_even_if_earlier_response_arrives_last() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let api = GatedApi {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let store = ViewStateStore::new();

        let first = run_forecast_query(&api, &store, ForecastQuery::ByCoordinate(coord(1.0, 103.0)));
        let second = run_forecast_query(&api, &store, ForecastQuery::ByCoordinate(coord(2.0, 104.0)));
        let release = async {
            // The second (latest) query's response is released first; the
            // superseded first query's response lands afterwards.
            second_tx.send(point("second")).unwrap();
            first_tx.send(point("first")).unwrap();
        };

        futures::join!(first, second, release);

        let state = store.snapshot();
        assert_eq!(state.forecast.unwrap().location_query, "second");
        assert!(!state.loading);
    }
}
