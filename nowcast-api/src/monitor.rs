//! Pipeline monitoring types for the `/monitor/*` endpoints.
//!
//! The overview document is camelCase on the wire. Status discriminants are
//! string enums with an `Unknown` catch-all so a backend that grows a new
//! state never breaks the poll loop.

use serde::{Deserialize, Serialize};

/// Which pipeline stage the backend currently reports as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Download,
    Training,
    Sync,
    Idle,
    #[serde(other)]
    Unknown,
}

/// Lifecycle state shared by the download/training documents and their
/// per-phase and per-date sub-entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Pending,
    Running,
    Completed,
    Idle,
    Waiting,
    Error,
    #[serde(other)]
    Unknown,
}

impl RunState {
    /// Badge label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Pending => "pending",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Idle => "idle",
            RunState::Waiting => "waiting for data",
            RunState::Error => "error",
            RunState::Unknown => "unknown",
        }
    }
}

/// Health of the model/sensor-data sync leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncHealth {
    Ok,
    Error,
    #[serde(other)]
    Unknown,
}

/// Per-day download progress row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateProgress {
    pub date: String,
    pub satellite_files: u64,
    pub satellite_total: u64,
    pub nea_files: u64,
    pub nea_total: u64,
    pub status: RunState,
}

/// The download leg of the overview document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadStatus {
    pub current_date: Option<String>,
    pub completed_days: u64,
    pub total_days: u64,
    pub files_downloaded: u64,
    pub parallel_processes: u32,
    pub status: RunState,
    pub last_update: Option<String>,
    #[serde(default)]
    pub date_progress: Vec<DateProgress>,
}

impl DownloadStatus {
    /// Overall completion percentage, rounded. Zero total days reads as 0%.
    pub fn percent_complete(&self) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        ((self.completed_days as f64 / self.total_days as f64) * 100.0).round() as u32
    }
}

/// One stage of the download → preprocess → train → sync sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPhase {
    pub name: String,
    pub status: RunState,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One completed (or failed) training run in the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRun {
    pub id: i64,
    pub date_range: String,
    pub mae: f64,
    pub rmse: f64,
    pub epochs: u32,
    pub success: bool,
}

/// The training leg of the overview document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub current_date: Option<String>,
    pub completed_batches: u64,
    pub total_epochs: u64,
    pub current_phase: String,
    pub phases: Vec<TrainingPhase>,
    pub disk_usage: Option<String>,
    pub status: RunState,
    pub last_update: Option<String>,
    #[serde(default)]
    pub history: Vec<TrainingRun>,
}

/// The sync leg of the overview document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub model_synced: bool,
    pub sensor_data_synced: bool,
    pub last_sync_time: Option<String>,
    pub status: SyncHealth,
}

/// The whole-pipeline document served by `GET /monitor/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStatus {
    pub current_stage: PipelineStage,
    pub download: DownloadStatus,
    pub training: TrainingStatus,
    pub sync: SyncStatus,
}

/// Response of `GET /monitor/logs/{type}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
    pub timestamp: String,
}
