//! État de la carte interactive: chargement des lois, sélection, popup
//!
//! Deux états de sélection: aucune sélection (initial) et un pays sélectionné.
//! Un clic remplace la sélection; `close_popup` revient à l'état initial.
//! Le point d'ancrage n'est jamais stocké, il est recalculé à chaque lecture.

use tracing::debug;

use crate::feature::CountryFeature;
use crate::geometry::{CentroidStrategy, LatLng};
use crate::law::{LawRecord, LawTable};
use crate::popup::{Popup, PopupBody};
use crate::style::{Style, StyleRule};
use crate::LawmapError;

/// État du chargement unique de la table des lois
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Ready(LawTable),
    Failed(String),
}

/// Vue carte
#[derive(Debug, Clone, Default)]
pub struct MapView {
    strategy: CentroidStrategy,
    styles: StyleRule,
    laws: FetchState,
    selection: Option<CountryFeature>,
}

impl MapView {
    /// Vue sans sélection, table des lois en attente
    pub fn new(strategy: CentroidStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn strategy(&self) -> CentroidStrategy {
        self.strategy
    }

    /// Enregistre le résultat du chargement de la table des lois.
    ///
    /// Une erreur est conservée sous forme de message, elle n'interrompt pas
    /// l'interaction avec la carte.
    pub fn on_laws_loaded(&mut self, result: Result<LawTable, LawmapError>) {
        self.laws = match result {
            Ok(table) => {
                debug!(entries = table.len(), "Law table loaded");
                FetchState::Ready(table)
            }
            Err(e) => {
                debug!(error = %e, "Law table fetch failed");
                FetchState::Failed(e.to_string())
            }
        };
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.laws
    }

    /// Clic sur un polygone: le pays devient la sélection courante
    pub fn click(&mut self, feature: &CountryFeature) {
        debug!(country = %feature.name, kind = feature.kind(), "Country clicked");
        self.selection = Some(feature.clone());
    }

    /// Ferme la popup et efface la sélection
    pub fn close_popup(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&CountryFeature> {
        self.selection.as_ref()
    }

    /// Point d'ancrage de la sélection; `None` sans sélection ou pour une
    /// géométrie non surfacique
    pub fn marker_position(&self) -> Option<LatLng> {
        self.selection
            .as_ref()?
            .representative_point(self.strategy)
    }

    /// Style d'un pays compte tenu de la sélection courante
    pub fn country_style(&self, feature: &CountryFeature) -> &Style {
        self.styles.resolve(feature, self.selection.as_ref())
    }

    /// Loi d'un pays si la table est chargée
    pub fn find_law_for_country(&self, country: &str) -> Option<&LawRecord> {
        match &self.laws {
            FetchState::Ready(table) => table.find_law_for_country(country),
            _ => None,
        }
    }

    /// Popup à afficher, `None` sans sélection ou sans point d'ancrage
    pub fn popup(&self) -> Option<Popup> {
        let selected = self.selection.as_ref()?;
        let position = self.marker_position()?;

        let body = match &self.laws {
            FetchState::Pending => PopupBody::Loading,
            FetchState::Failed(message) => PopupBody::Error {
                message: message.clone(),
            },
            FetchState::Ready(table) => match table.find_law_for_country(&selected.name) {
                Some(record) => PopupBody::Law {
                    country: selected.name.clone(),
                    record: record.clone(),
                },
                None => PopupBody::NoData {
                    country: selected.name.clone(),
                },
            },
        };

        Some(Popup { position, body })
    }
}
