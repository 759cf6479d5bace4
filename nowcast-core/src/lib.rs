//! Forecast orchestration and state for the nowcast front-ends.
//!
//! Everything here is plain single-threaded Rust with no WASM dependency:
//! the browser apps bind these stores to reactive signals, the test suite
//! drives them with in-memory fakes. Shared handles follow the
//! `Rc<RefCell<_>>` idiom, which is all the synchronization a WASM event
//! loop needs.
//!
//! - [`location`]: one-shot initial coordinate resolution with a fixed
//!   fallback.
//! - [`orchestrator`]: the query → path-attempt → point-forecast → fly-to
//!   sequence.
//! - [`view_state`]: the single-writer view model with a generation guard
//!   against overlapping runs.
//! - [`config`]: persisted display preferences.
//! - [`dashboard`]: pipeline-overview polling reconciliation.

pub mod config;
pub mod dashboard;
pub mod location;
pub mod orchestrator;
pub mod view_state;

pub use config::{Config, ConfigStore, MemoryStorage, Metric, SettingsStorage};
pub use dashboard::{DashboardState, DashboardStore, MonitorApi};
pub use location::{Geolocator, GeolocationError, InitialLocation};
pub use orchestrator::{ForecastApi, ForecastQuery};
pub use view_state::{PathOverlay, ViewState, ViewStateStore};
