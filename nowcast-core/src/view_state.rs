//! The consumer app's view model and its single-writer store.

use nowcast_api::{Coordinate, PathPoint, PointForecast};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Route overlay data: the polyline drawn on the map plus per-point detail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOverlay {
    pub path: Vec<[f64; 2]>,
    pub points: Vec<PathPoint>,
}

/// Everything the forecast view renders from.
///
/// Invariant: `loading == true` implies `error == None` - starting a run
/// always clears the previous error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub forecast: Option<PointForecast>,
    pub path_forecast: Option<PathOverlay>,
    pub loading: bool,
    pub error: Option<String>,
    pub fly_to: Option<Coordinate>,
}

/// Token identifying one orchestration run. Writes carrying a superseded
/// token are discarded, so of two overlapping runs the later-issued one
/// wins regardless of response arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

type Listener = Box<dyn Fn(&ViewState)>;

/// Cheaply-cloneable shared handle to the view state.
///
/// Single-writer: only the orchestrator and the location resolver mutate
/// it. Presentation code subscribes and receives a snapshot after every
/// committed mutation.
#[derive(Clone, Default)]
pub struct ViewStateStore {
    state: Rc<RefCell<ViewState>>,
    latest_run: Rc<Cell<u64>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Register a listener invoked after every committed mutation.
    pub fn subscribe(&self, listener: impl Fn(&ViewState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    /// Start a new orchestration run: set loading, clear the previous error
    /// and any path overlay, and issue a fresh token that supersedes all
    /// earlier ones.
    pub fn begin_run(&self) -> RunToken {
        let generation = self.latest_run.get() + 1;
        self.latest_run.set(generation);
        {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.error = None;
            state.path_forecast = None;
        }
        self.notify();
        RunToken(generation)
    }

    fn is_current(&self, token: RunToken) -> bool {
        self.latest_run.get() == token.0
    }

    /// Commit a point-forecast result. `fly_to` is applied only when the
    /// orchestrator resolved a target.
    pub fn apply_point(
        &self,
        token: RunToken,
        forecast: PointForecast,
        fly_to: Option<Coordinate>,
    ) {
        if !self.is_current(token) {
            log::debug!("Discarding stale point forecast for {}", forecast.location_query);
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.forecast = Some(forecast);
            if let Some(target) = fly_to {
                state.fly_to = Some(target);
            }
        }
        self.notify();
    }

    /// Commit a path-forecast result: the overlay, the synthesized headline
    /// summary, and a fly-to to the route's first point.
    pub fn apply_path(
        &self,
        token: RunToken,
        overlay: PathOverlay,
        summary: PointForecast,
        fly_to: Coordinate,
    ) {
        if !self.is_current(token) {
            log::debug!("Discarding stale path forecast for {}", summary.location_query);
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.path_forecast = Some(overlay);
            state.forecast = Some(summary);
            state.fly_to = Some(fly_to);
            state.error = None;
        }
        self.notify();
    }

    /// Commit a user-visible failure. The previous forecast is deliberately
    /// left in place so the panel does not flash blank on transient errors.
    /// Drops the loading flag in the same commit: no observer may see an
    /// error while loading is still set.
    pub fn apply_error(&self, token: RunToken, message: String) {
        if !self.is_current(token) {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.error = Some(message);
            state.loading = false;
        }
        self.notify();
    }

    /// Scoped cleanup at the end of a run: drop the loading flag, but only
    /// if no newer run has taken ownership of it in the meantime.
    pub fn finish(&self, token: RunToken) {
        if !self.is_current(token) {
            return;
        }
        self.state.borrow_mut().loading = false;
        self.notify();
    }

    /// Recenter request outside any run (used by the location resolver when
    /// a device fix succeeds).
    pub fn set_fly_to(&self, target: Coordinate) {
        self.state.borrow_mut().fly_to = Some(target);
        self.notify();
    }
}
