//! User display preferences, persisted across sessions.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

pub const METRICS_KEY: &str = "forecast_metrics";
pub const SHOW_TRIANGLE_KEY: &str = "show_triangle";
pub const SHOW_STATIONS_KEY: &str = "show_stations";

/// A weather metric the forecast panel can show or hide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Rain,
    Temp,
    Hum,
    Pm25,
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub metrics: BTreeSet<Metric>,
    pub show_triangle: bool,
    pub show_stations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metrics: [Metric::Rain, Metric::Temp, Metric::Hum, Metric::Pm25]
                .into_iter()
                .collect(),
            show_triangle: false,
            show_stations: true,
        }
    }
}

/// String key-value persistence for [`ConfigStore`]. Backed by
/// localStorage in the browser and by [`MemoryStorage`] in tests.
pub trait SettingsStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`SettingsStorage`].
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SettingsStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

type Listener = Box<dyn Fn(&Config)>;

/// Explicit handle to the current [`Config`] with subscribe/notify.
///
/// Persisted state is read once at store creation; every toggle re-persists
/// the whole config (last writer wins, no merging). Malformed persisted
/// data is logged and replaced by defaults, never propagated.
#[derive(Clone)]
pub struct ConfigStore {
    storage: Rc<dyn SettingsStorage>,
    state: Rc<RefCell<Config>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl ConfigStore {
    pub fn load(storage: Rc<dyn SettingsStorage>) -> Self {
        let config = read_config(storage.as_ref());
        Self {
            storage,
            state: Rc::new(RefCell::new(config)),
            listeners: Rc::default(),
        }
    }

    pub fn snapshot(&self) -> Config {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&Config) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Flip one metric in or out of the visible set.
    pub fn toggle_metric(&self, metric: Metric) {
        let mut config = self.snapshot();
        if !config.metrics.remove(&metric) {
            config.metrics.insert(metric);
        }
        self.commit(config);
    }

    pub fn toggle_show_triangle(&self) {
        let mut config = self.snapshot();
        config.show_triangle = !config.show_triangle;
        self.commit(config);
    }

    pub fn toggle_show_stations(&self) {
        let mut config = self.snapshot();
        config.show_stations = !config.show_stations;
        self.commit(config);
    }

    fn commit(&self, config: Config) {
        persist(self.storage.as_ref(), &config);
        *self.state.borrow_mut() = config;
        let snapshot = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

fn read_config(storage: &dyn SettingsStorage) -> Config {
    let mut config = Config::default();

    if let Some(raw) = storage.get(METRICS_KEY) {
        match serde_json::from_str::<Vec<Metric>>(&raw) {
            Ok(tags) => config.metrics = tags.into_iter().collect(),
            Err(err) => log::error!("Failed to parse stored metrics: {err}"),
        }
    }
    if let Some(raw) = storage.get(SHOW_TRIANGLE_KEY) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(value) => config.show_triangle = value,
            Err(err) => log::error!("Failed to parse stored triangle flag: {err}"),
        }
    }
    if let Some(raw) = storage.get(SHOW_STATIONS_KEY) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(value) => config.show_stations = value,
            Err(err) => log::error!("Failed to parse stored stations flag: {err}"),
        }
    }

    config
}

fn persist(storage: &dyn SettingsStorage, config: &Config) {
    let tags: Vec<Metric> = config.metrics.iter().copied().collect();
    storage.set(
        METRICS_KEY,
        &serde_json::to_string(&tags).unwrap_or_default(),
    );
    storage.set(
        SHOW_TRIANGLE_KEY,
        &serde_json::to_string(&config.show_triangle).unwrap_or_default(),
    );
    storage.set(
        SHOW_STATIONS_KEY,
        &serde_json::to_string(&config.show_stations).unwrap_or_default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_storage_yields_defaults() {
        let store = ConfigStore::load(Rc::new(MemoryStorage::default()));
        assert_eq!(store.snapshot(), Config::default());
    }

    #[test]
    fn toggling_a_metric_twice_restores_the_set_and_persists_both_times() {
        let storage = MemoryStorage::default();
        let store = ConfigStore::load(Rc::new(storage.clone()));
        let original = store.snapshot().metrics;

        store.toggle_metric(Metric::Hum);
        assert!(!store.snapshot().metrics.contains(&Metric::Hum));
        let without_hum = storage.get(METRICS_KEY).unwrap();
        assert_eq!(without_hum, r#"["rain","temp","pm25"]"#);

        store.toggle_metric(Metric::Hum);
        assert_eq!(store.snapshot().metrics, original);
        assert_eq!(
            storage.get(METRICS_KEY).unwrap(),
            r#"["rain","temp","hum","pm25"]"#
        );
    }

    #[test]
    fn every_toggle_repersists_the_full_config() {
        let storage = MemoryStorage::default();
        let store = ConfigStore::load(Rc::new(storage.clone()));

        store.toggle_show_triangle();
        assert_eq!(storage.get(SHOW_TRIANGLE_KEY).as_deref(), Some("true"));
        assert_eq!(storage.get(SHOW_STATIONS_KEY).as_deref(), Some("true"));
        assert!(storage.get(METRICS_KEY).is_some());
    }

    #[test]
    fn config_round_trips_through_a_reloaded_store() {
        let storage = MemoryStorage::default();
        let store = ConfigStore::load(Rc::new(storage.clone()));
        store.toggle_metric(Metric::Pm25);
        store.toggle_show_triangle();
        store.toggle_show_stations();
        let expected = store.snapshot();

        let reloaded = ConfigStore::load(Rc::new(storage));
        assert_eq!(reloaded.snapshot(), expected);
        assert!(!reloaded.snapshot().show_stations);
        assert!(reloaded.snapshot().show_triangle);
    }

    #[test]
    fn malformed_persisted_data_falls_back_to_defaults() {
        let storage = MemoryStorage::default();
        storage.set(METRICS_KEY, "not json at all");
        storage.set(SHOW_TRIANGLE_KEY, "{broken");
        let store = ConfigStore::load(Rc::new(storage));
        assert_eq!(store.snapshot(), Config::default());
    }

    #[test]
    fn an_explicitly_empty_metric_set_is_preserved() {
        let storage = MemoryStorage::default();
        storage.set(METRICS_KEY, "[]");
        let store = ConfigStore::load(Rc::new(storage));
        assert!(store.snapshot().metrics.is_empty());
    }

    #[test]
    fn subscribers_see_each_committed_config() {
        let store = ConfigStore::load(Rc::new(MemoryStorage::default()));
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = seen.clone();
        store.subscribe(move |config| sink.borrow_mut().push(config.show_triangle));

        store.toggle_show_triangle();
        store.toggle_show_triangle();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
