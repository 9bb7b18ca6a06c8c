//! Final Space gallery web server
//!
//! Serves the translated character catalog and the gallery view model over
//! HTTP. Usage:
//!
//! ```bash
//! final-space-web [config.toml]
//! ```

mod config;
mod error;
mod logging;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use final_space_catalog::FinalSpaceSource;
use final_space_core::CharacterService;

use config::{AppConfig, DEFAULT_CONFIG_PATH};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, found) = AppConfig::load(&config_path)?;

    let _log_guard = logging::init(&config.log)?;

    if found {
        tracing::info!("Loaded configuration from {}", config_path.display());
    } else {
        tracing::info!(
            "No configuration at {}, using defaults",
            config_path.display()
        );
    }

    let source = FinalSpaceSource::new(config.upstream.clone())
        .context("failed to build upstream client")?;
    tracing::info!("Upstream catalog: {}", source.base_url());

    let service = web::Data::from(Arc::new(CharacterService::new(Arc::new(source))));

    let (host, port) = config.bind_address();
    tracing::info!(
        "Starting Final Space gallery on {host}:{port} with {} workers",
        config.server.workers
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .workers(config.server.workers.max(1))
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await
    .context("server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}
