use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use service::{contacts::SharedContactStore, file::FileContactStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    let addr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    Ok(addr)
}

/// Resolve the contacts data file from configs or env, defaulting to
/// `data/contacts.json`.
fn load_data_file() -> String {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.storage.normalize_from_env();
            cfg.storage.data_file
        }
        Err(_) => env::var("CONTACTS_DATA_FILE")
            .unwrap_or_else(|_| "data/contacts.json".to_string()),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // One store instance for the process lifetime
    let data_file = load_data_file();
    common::env::ensure_data_dir(&data_file).await?;
    let store: SharedContactStore = FileContactStore::new(data_file.as_str()).await?;
    info!(%data_file, "contact store ready");

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(store, cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting contacts server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
