//! Main entry point for the Scraped Data Gateway

use scraped_data_gateway::{
    api::envelope::ENDPOINTS,
    config::{settings::LoggingConfig, Settings},
    AppState,
};
use std::path::Path;
use std::sync::Arc;
use tokio::{fs, signal};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    init_tracing(&settings.logging);

    info!("Starting Scraped Data Gateway");
    log_startup_diagnostics(&settings).await;

    let addr = settings.bind_address();
    let state = Arc::new(AppState::from_settings(settings));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    scraped_data_gateway::serve(listener, state, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "pretty" {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}

/// Report where the gateway will look for data and what it finds there
async fn log_startup_diagnostics(settings: &Settings) {
    let data_path = Path::new(&settings.data.file_path);
    let cwd = std::env::current_dir().unwrap_or_default();
    let absolute = if data_path.is_absolute() {
        data_path.to_path_buf()
    } else {
        cwd.join(data_path)
    };

    let mut files = Vec::new();
    match fs::read_dir(&cwd).await {
        Ok(mut entries) => {
            while let Ok(Some(entry)) = entries.next_entry().await {
                files.push(entry.file_name().to_string_lossy().to_string());
            }
            files.sort();
        }
        Err(e) => warn!(error = %e, "Could not list working directory"),
    }

    info!(
        data_file = %absolute.display(),
        working_dir = %cwd.display(),
        files = %files.join(", "),
        "Data file configuration"
    );

    match fs::metadata(&absolute).await {
        Ok(metadata) => info!(exists = true, size_bytes = metadata.len(), "Data file found"),
        Err(_) => warn!(exists = false, "Data file not found; data endpoints will fail until it is written"),
    }

    for (path, description) in ENDPOINTS {
        info!(endpoint = %format!("GET {path}"), "{}", description);
    }
}

/// Waits for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}
