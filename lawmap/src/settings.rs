//! Réglages fixes de la carte (centre, zoom, limites, tuiles)

use serde::{Deserialize, Serialize};

use crate::geometry::LatLng;

/// Modèle d'URL des tuiles OpenStreetMap
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution affichée avec les tuiles OpenStreetMap
pub const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/">OpenStreetMap</a> contributors"#;

/// Configuration de la vue carte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// Centre initial
    pub center: LatLng,

    /// Zoom initial
    pub zoom: u8,

    pub min_zoom: u8,

    pub max_zoom: u8,

    /// Coins des limites de navigation (sud-ouest, nord-est)
    pub max_bounds: [LatLng; 2],

    /// Modèle d'URL des tuiles, placeholders `{s}`, `{z}`, `{x}`, `{y}`
    pub tile_url: String,

    pub attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LatLng::new(46.2276, 2.2137),
            zoom: 2,
            min_zoom: 2,
            max_zoom: 2,
            max_bounds: [
                LatLng::new(66.451887, -175.423452),
                LatLng::new(5.255068, 180.218384),
            ],
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

impl MapSettings {
    /// URL d'une tuile pour un sous-domaine et des coordonnées de tuile
    pub fn tile_url(&self, subdomain: &str, z: u8, x: u32, y: u32) -> String {
        self.tile_url
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }

    /// Ramène un zoom demandé dans `[min_zoom, max_zoom]`
    ///
    /// Si `min_zoom > max_zoom`, `max_zoom` l'emporte.
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
