//! HTTP client for the nowcast backend.

use crate::error::ApiError;
use crate::forecast::{Coordinate, PathResponse, PointForecast};
use crate::monitor::{LogResponse, OverviewStatus};
use crate::station::{PopularSearch, Station};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

/// Error payload of a non-2xx response.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for every backend endpoint.
///
/// Cheap to clone; holds a shared `reqwest::Client` and the API base URL.
/// No client-side timeout is applied; calls rely on the transport's own
/// defaults.
#[derive(Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the given base URL (scheme + host, optionally a
    /// path prefix such as `/api`). A trailing slash is tolerated.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let trimmed = base.trim_end_matches('/');
        if reqwest::Url::parse(trimmed).is_err() {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self {
            inner: reqwest::Client::new(),
            base: trimmed.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.inner.get(self.url(path)).query(query).send().await?;
        expect_json(response).await
    }

    /// `GET /predict?lat=..&lon=..` - point forecast for a coordinate.
    pub async fn predict_at(&self, coordinate: Coordinate) -> Result<PointForecast, ApiError> {
        self.get_json(
            "/predict",
            &[
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lon.to_string()),
            ],
        )
        .await
    }

    /// `GET /predict?location=..` - point forecast for a named place.
    pub async fn predict_named(&self, location: &str) -> Result<PointForecast, ApiError> {
        self.get_json("/predict", &[("location", location.to_string())])
            .await
    }

    /// `GET /predict/path?query=..` - route forecast attempt. An empty
    /// point list means the text was not recognized as a route.
    pub async fn path_forecast(&self, query: &str) -> Result<PathResponse, ApiError> {
        self.get_json("/predict/path", &[("query", query.to_string())])
            .await
    }

    /// `GET /stations` - full sensor station list.
    pub async fn stations(&self) -> Result<Vec<Station>, ApiError> {
        self.get_json("/stations", &[]).await
    }

    /// `GET /popular-searches` - top search queries by frequency.
    pub async fn popular_searches(&self) -> Result<Vec<PopularSearch>, ApiError> {
        self.get_json("/popular-searches", &[]).await
    }

    /// `POST /log-search` - record a user search. Fire-and-forget at the
    /// call sites; the response body is ignored.
    pub async fn log_search(&self, query: &str) -> Result<(), ApiError> {
        let response = self
            .inner
            .post(self.url("/log-search"))
            .json(&json!({ "query": query }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(())
    }

    /// `GET /monitor/overview` - whole-pipeline status document.
    pub async fn overview(&self) -> Result<OverviewStatus, ApiError> {
        self.get_json("/monitor/overview", &[]).await
    }

    /// `GET /monitor/logs/{kind}?lines=N` - bounded log tail.
    pub async fn logs(&self, kind: &str, lines: u32) -> Result<LogResponse, ApiError> {
        self.get_json(
            &format!("/monitor/logs/{kind}"),
            &[("lines", lines.to_string())],
        )
        .await
    }
}

async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.url("/predict"), "http://localhost:8000/predict");

        let prefixed = ApiClient::new("http://10.0.0.5:8000/api").unwrap();
        assert_eq!(
            prefixed.url("/monitor/overview"),
            "http://10.0.0.5:8000/api/monitor/overview"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
