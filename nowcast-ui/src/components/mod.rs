//! Reusable Dioxus RSX components for the nowcast apps.

mod download_tab;
mod error_display;
mod forecast_panel;
mod loading_spinner;
mod log_modal;
mod map_container;
mod quick_links;
mod search_bar;
mod settings_panel;
mod stats_panel;
mod status_badge;
mod sync_tab;
mod tab_nav;
mod training_tab;

pub use download_tab::DownloadTab;
pub use error_display::ErrorDisplay;
pub use forecast_panel::ForecastPanel;
pub use loading_spinner::LoadingSpinner;
pub use log_modal::LogModal;
pub use map_container::MapContainer;
pub use quick_links::QuickLinks;
pub use search_bar::SearchBar;
pub use settings_panel::SettingsPanel;
pub use stats_panel::StatsPanel;
pub use status_badge::StatusBadge;
pub use sync_tab::SyncTab;
pub use tab_nav::TabNav;
pub use training_tab::TrainingTab;
