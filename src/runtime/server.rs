//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It creates the shared mapping store and starts the HTTP server with all routes.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::configure_routes;
use crate::config::get_config;
use crate::services::LinkService;
use crate::storage::MappingStore;

/// 单台机器上最多使用的 worker 数
const MAX_WORKERS: usize = 32;

/// Shared state created once at startup and injected into every worker.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MappingStore>,
    pub link_service: web::Data<LinkService>,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(MappingStore::new());
        let link_service = web::Data::new(LinkService::new(store.clone()));
        Self {
            store,
            link_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the HTTP server until it receives a shutdown signal.
///
/// Reads the global configuration (see `config::set_config`).
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let config = get_config();
    let state = AppState::new();

    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    if config.server.cpu_count > MAX_WORKERS {
        warn!(
            "cpu_count {} exceeds the limit, using {} workers",
            config.server.cpu_count, MAX_WORKERS
        );
    }

    let bind_address = config.bind_address();
    info!("Starting server at http://{} with {} workers", bind_address, workers);

    let link_service = state.link_service.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(link_service.clone())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(bind_address.as_str())
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

    info!(
        "Server stopped, {} short links discarded",
        state.store.len()
    );
    Ok(())
}
