//! # simiod — simio daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, `simiod.toml`)
//! - Initialise `tracing`
//! - Load the points document from its file and watch it for edits
//! - Construct application services and the pulse sweeper
//! - Build the axum router, injecting application services and the web UI
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use simio_adapter_config_file::{FileConfigStore, watch_config_file};
use simio_adapter_http_axum::state::AppState;
use simio_app::event_log::TracingEventLog;
use simio_app::ports::{EventLog, SystemClock};
use simio_app::pulse_sweeper::PulseSweeper;
use simio_app::services::config_service::ConfigService;
use simio_app::services::point_service::PointService;
use simio_domain::event::Event;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Services
    let host = config.host_name();
    let points = Arc::new(PointService::new(host.as_str(), SystemClock, TracingEventLog));
    let config_service = Arc::new(ConfigService::new(
        FileConfigStore::new(&config.points.path),
        Arc::clone(&points),
    ));

    // The endpoint comes up even without a usable document.
    match config_service.load_initial().await {
        Ok(count) => tracing::info!(points = count, "points configuration loaded"),
        Err(err) => tracing::error!(
            %err,
            path = %config.points.path.display(),
            "unable to load points configuration, starting empty"
        ),
    }
    points.log().record(Event::started(&host));

    // Background tasks
    let sweeper = PulseSweeper::start(Arc::clone(&points), config.sweep_interval());
    let watcher = if config.points.watch {
        match watch_config_file(config.points.path.clone(), Arc::clone(&config_service)) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%err, "points configuration will not be reloaded on edit");
                None
            }
        }
    } else {
        None
    };

    // HTTP
    let public_dir = &config.server.public_dir;
    if !public_dir.is_dir() {
        tracing::warn!(path = %public_dir.display(), "web UI directory not found");
    }
    let app = simio_adapter_http_axum::router::build(
        AppState::new(config_service),
        Some(public_dir.as_path()),
    );
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("simiod listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    sweeper.abort();
    if let Some(watcher) = watcher {
        watcher.abort();
    }
    tracing::info!("simiod stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
