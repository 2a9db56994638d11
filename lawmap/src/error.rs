//! Types d'erreurs pour le crate lawmap

use thiserror::Error;

/// Erreurs pouvant survenir lors du chargement des données de la carte
#[derive(Debug, Clone, Error)]
pub enum LawmapError {
    /// Document GeoJSON illisible ou d'un type inattendu
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    /// Feature ignorée lors du chargement (non fatal)
    #[error("Skipped feature #{index}: {reason}")]
    SkippedFeature { index: usize, reason: String },

    /// Table des lois mal formée
    #[error("Invalid law table: {0}")]
    InvalidLawTable(String),

    /// Entrée de la table des lois ignorée (non fatal)
    #[error("Skipped law entry #{index}: {reason}")]
    SkippedLawEntry { index: usize, reason: String },

    /// Échec de récupération de la table des lois
    #[error("{0}")]
    Fetch(String),
}

impl LawmapError {
    /// Crée une erreur GeoJSON avec contexte
    pub fn invalid_geojson(reason: impl Into<String>) -> Self {
        Self::InvalidGeoJson(reason.into())
    }

    /// Crée une erreur de table des lois avec contexte
    pub fn invalid_law_table(reason: impl Into<String>) -> Self {
        Self::InvalidLawTable(reason.into())
    }

    /// Crée une erreur d'entrée de loi ignorée
    pub fn skipped_law_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::SkippedLawEntry {
            index,
            reason: reason.into(),
        }
    }

    /// Crée une erreur de feature ignorée
    pub fn skipped_feature(index: usize, reason: impl Into<String>) -> Self {
        Self::SkippedFeature {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LawmapError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidLawTable(err.to_string())
    }
}
