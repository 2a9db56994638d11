//! Handlers HTTP

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use lawmap::MapSettings;
use tracing::debug;

use super::error::ServerError;
use super::AppState;

/// Handler: GET /
pub async fn connected() -> &'static str {
    "Connected"
}

/// Handler: GET /privacylaws, GET /api/privacylaws
///
/// Relit le fichier à chaque requête et renvoie ses octets sans transformation.
pub async fn privacy_laws(State(state): State<Arc<AppState>>) -> Result<Response, ServerError> {
    let content = tokio::fs::read(&state.laws_file)
        .await
        .map_err(|source| ServerError::LawFile {
            path: state.laws_file.clone(),
            source,
        })?;

    debug!(bytes = content.len(), "Serving law table");

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        Bytes::from(content),
    )
        .into_response())
}

/// Handler: GET /api/map-settings
pub async fn map_settings(State(state): State<Arc<AppState>>) -> Json<MapSettings> {
    Json(state.settings.clone())
}
