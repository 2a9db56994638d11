//! Client HTTP de la table des lois (côté vue carte)

use anyhow::{Context, Result};
use lawmap::{LawTable, LawmapError};
use tracing::debug;

/// Chemin de la table des lois sur le service
pub const LAWS_PATH: &str = "/api/privacylaws";

/// Récupère la table des lois auprès du service
#[derive(Debug, Clone)]
pub struct LawClient {
    http: reqwest::Client,
    url: String,
}

impl LawClient {
    /// Client pour un service de base `base_url` (ex: `http://localhost:5001`)
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("lawmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), LAWS_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Un seul appel, sans retry ni timeout.
    ///
    /// Toute erreur (réseau, statut HTTP, document invalide) est rendue sous
    /// forme de `LawmapError` dont le message est destiné à la popup.
    pub async fn fetch(&self) -> Result<LawTable, LawmapError> {
        debug!(url = %self.url, "Fetching law table");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LawmapError::Fetch(format!("Network Error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LawmapError::Fetch(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| LawmapError::Fetch(format!("Network Error: {}", e)))?;

        LawTable::from_json(&text)
    }
}
