use anyhow::Result;
use dockprism::docker_repo::{ContainerRuntime, DockerRepo};
use dockprism::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = config::AppConfig::load()?;

    // stdout belongs to the dashboard, so logs go to a file.
    let log_path = app_config.logging.file_path();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| anyhow::anyhow!("opening log file {}: {}", log_path.display(), e))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();
    tracing::info!(version = version::VERSION, log = %log_path.display(), "starting");

    let runtime: Arc<dyn ContainerRuntime> = Arc::new(DockerRepo::connect()?);

    terminal::install_panic_hook();
    let mut tui = terminal::enter()?;

    let result = tokio::select! {
        result = runner::run(&mut tui, runtime, &app_config) => result,
        _ = terminate_signal() => {
            tracing::info!("Received shutdown signal");
            Ok(())
        }
    };

    terminal::leave(tui.backend_mut());
    if let Err(e) = &result {
        tracing::error!(error = %e, "dashboard exited with error");
    }
    result
}

/// SIGTERM; Ctrl+C arrives as a key event while the terminal is in raw mode.
async fn terminate_signal() {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        std::future::pending::<()>().await
    }
}
