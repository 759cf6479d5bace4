//! Wire types and HTTP client for the rainfall nowcast API.
//!
//! Every JSON document the backend serves has a typed counterpart here, and
//! [`ApiClient`] wraps the endpoints themselves. The same client is used by
//! the WASM front-end apps (reqwest's fetch backend) and the native CLI.

pub mod client;
pub mod error;
pub mod forecast;
pub mod monitor;
pub mod station;

pub use client::ApiClient;
pub use error::ApiError;
pub use forecast::{
    Coordinate, CurrentWeather, ForecastSummary, NearestStation, PathPoint, PathPointForecast,
    PathResponse, PointForecast,
};
pub use monitor::{
    DateProgress, DownloadStatus, LogResponse, OverviewStatus, PipelineStage, RunState,
    SyncHealth, SyncStatus, TrainingPhase, TrainingRun, TrainingStatus,
};
pub use station::{PopularSearch, Station};
