mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use marquee_catalog::CatalogService;
use marquee_gateway::{App, AppState};
use marquee_storage::{InMemoryRepository, MySqlRepository, Repository};
use marquee_telemetry::TelemetryConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let telemetry = TelemetryConfig::builder()
        .service_name("marquee-gateway")
        .log_format(config.log_format.into())
        .otlp_endpoint(config.otlp_endpoint.clone())
        .build();
    let _telemetry = marquee_telemetry::init(&telemetry)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    match config.storage {
        StorageBackendArg::InMemory => {
            serve(listener, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository =
                MySqlRepository::connect(&mysql_dsn, config.mysql_max_connections).await?;
            if config.migrate {
                repository.migrate().await?;
                info!("applied schema migrations");
            }
            serve(listener, repository).await?;
        }
    }

    info!("gateway server stopped");
    Ok(())
}

async fn serve<R: Repository>(listener: TcpListener, repository: R) -> std::io::Result<()> {
    let state = AppState::new(Arc::new(CatalogService::new(repository)));

    info!(listen_addr = %listener.local_addr()?, "listening");
    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
