use crate::config::Config;
use crate::controller::BrowserController;
use crate::router::{handle, AppState};
use crate::storage::{init_store, MemoryStorage, SqliteStorage, Storage};
use anyhow::{Context, Result};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod debounce;
mod domain;
mod errors;
mod responses;
mod router;
mod source;
mod storage;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // 1️⃣ Preference store (favorites, theme)
    let store: Box<dyn Storage> = match &config.storage_path {
        Some(path) => {
            let store = SqliteStorage::new(path);
            init_store(&store, &config.schema_path).context("Store initialization failed")?;
            Box::new(store)
        }
        None => {
            warn!("STORAGE_PATH is empty, preferences will not survive a restart");
            Box::new(MemoryStorage::new())
        }
    };

    // 2️⃣ Dataset source and the initial load
    let source = source::source_from_location(&config.listings_source)
        .context("Failed to set up listings source")?;

    let mut controller = BrowserController::new(store, config.controller_settings());
    controller.load(source.as_ref());

    let app = AppState::new(controller, source).with_static_dir(config.static_dir.clone());

    // 3️⃣ Start the server
    info!(addr = %config.bind_addr, "Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            error!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "Server ended with error");
    }

    info!("Server shut down cleanly.");
    Ok(())
}
