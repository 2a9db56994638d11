//! Service HTTP de recherche des lois
//!
//! Routes:
//! - `GET /`: test de vie, texte "Connected"
//! - `GET /privacylaws` et `GET /api/privacylaws`: contenu brut du fichier des lois
//! - `GET /api/map-settings`: réglages de la carte (JSON)

pub mod error;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use lawmap::{LawTable, MapSettings};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;

pub use error::ServerError;

/// État partagé, en lecture seule
#[derive(Debug)]
pub struct AppState {
    pub laws_file: PathBuf,
    pub settings: MapSettings,
}

/// Construit le routeur du service
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        laws_file: config.laws_file.clone(),
        settings: MapSettings::default(),
    });

    let app = Router::new()
        .route("/", get(routes::connected))
        .route("/privacylaws", get(routes::privacy_laws))
        .route("/api/privacylaws", get(routes::privacy_laws))
        .route("/api/map-settings", get(routes::map_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Sert `app` sur un listener déjà lié, jusqu'à Ctrl-C
pub async fn run(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

/// Démarre le service avec la configuration donnée
pub async fn serve(config: &ServerConfig) -> Result<()> {
    check_laws_file(config).await;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .context(format!("Failed to bind {}", config.listen_address()))?;

    info!(
        addr = %listener.local_addr()?,
        laws_file = %config.laws_file.display(),
        cors = config.cors,
        "Server is running"
    );

    run(listener, router(config)).await
}

/// Vérifie le fichier des lois au démarrage, sans bloquer le service.
///
/// Le fichier est relu à chaque requête: un fichier absent ici peut
/// apparaître plus tard.
async fn check_laws_file(config: &ServerConfig) {
    let text = match tokio::fs::read_to_string(&config.laws_file).await {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %config.laws_file.display(), error = %e, "Law file unreadable");
            return;
        }
    };

    match LawTable::from_json(&text) {
        Ok(table) => info!(
            countries = table.len(),
            skipped = table.errors.len(),
            "Law file loaded"
        ),
        Err(e) => warn!(
            path = %config.laws_file.display(),
            error = %e,
            "Law file is not a valid law table"
        ),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}
