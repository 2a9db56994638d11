//! Erreurs HTTP du service

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Erreurs de traitement d'une requête
#[derive(Debug, Error)]
pub enum ServerError {
    /// Fichier des lois absent ou illisible
    #[error("Failed to read law file {}: {source}", path.display())]
    LawFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Pas de corps structuré: erreur serveur générique
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
