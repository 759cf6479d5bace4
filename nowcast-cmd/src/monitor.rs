//! Pipeline monitoring commands.

use nowcast_api::ApiClient;

pub async fn run_overview(client: &ApiClient) -> anyhow::Result<()> {
    let overview = client.overview().await?;

    println!("Current stage: {:?}", overview.current_stage);
    println!();

    let download = &overview.download;
    println!(
        "Download: {} - {}% ({}/{} days, {} files, {} processes)",
        download.status.label(),
        download.percent_complete(),
        download.completed_days,
        download.total_days,
        download.files_downloaded,
        download.parallel_processes
    );

    let training = &overview.training;
    println!(
        "Training: {} - phase '{}', {} batches, {} epochs",
        training.status.label(),
        training.current_phase,
        training.completed_batches,
        training.total_epochs
    );
    for phase in &training.phases {
        let progress = phase
            .progress
            .map(|p| format!(" ({p:.0}%)"))
            .unwrap_or_default();
        println!("  - {:<28} {}{}", phase.name, phase.status.label(), progress);
    }
    if let Some(disk) = &training.disk_usage {
        println!("  disk: {disk}");
    }

    let sync = &overview.sync;
    println!(
        "Sync: model {} / sensor data {} (last: {})",
        if sync.model_synced { "synced" } else { "pending" },
        if sync.sensor_data_synced { "synced" } else { "pending" },
        sync.last_sync_time.as_deref().unwrap_or("-")
    );

    Ok(())
}

pub async fn run_logs(client: &ApiClient, kind: &str, lines: u32) -> anyhow::Result<()> {
    let response = client.logs(kind, lines).await?;
    if response.lines.is_empty() {
        println!(
            "{}",
            response
                .message
                .unwrap_or_else(|| "No log content yet".to_string())
        );
        return Ok(());
    }
    for line in &response.lines {
        println!("{line}");
    }
    Ok(())
}
