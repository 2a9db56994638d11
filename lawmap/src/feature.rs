//! Features pays chargées depuis une FeatureCollection GeoJSON

use std::str::FromStr;

use geojson::{feature::Id, GeoJson, Value};
use serde::Serialize;
use tracing::warn;

use crate::geometry::{self, CentroidStrategy, LatLng};
use crate::LawmapError;

/// Propriété GeoJSON portant le nom d'affichage du pays
pub const NAME_PROPERTY: &str = "name";

/// Un pays: nom d'affichage et géométrie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryFeature {
    /// Identifiant GeoJSON de la feature s'il existe, chaîne ou nombre conservé tel quel
    pub id: Option<Id>,

    /// Nom d'affichage, clé de recherche dans la table des lois
    pub name: String,

    /// Géométrie brute (Polygon ou MultiPolygon en pratique)
    pub geometry: Value,
}

impl CountryFeature {
    pub fn new(name: impl Into<String>, geometry: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            geometry,
        }
    }

    /// Texte de l'infobulle au survol
    pub fn tooltip(&self) -> &str {
        &self.name
    }

    /// Type GeoJSON de la géométrie
    pub fn kind(&self) -> &'static str {
        geometry::geometry_kind(&self.geometry)
    }

    /// Point d'ancrage de la popup pour ce pays
    pub fn representative_point(&self, strategy: CentroidStrategy) -> Option<LatLng> {
        geometry::representative_point(&self.geometry, strategy)
    }
}

/// Résultat du chargement d'une FeatureCollection
#[derive(Debug, Default)]
pub struct CountryCollection {
    /// Pays dans l'ordre du document
    pub features: Vec<CountryFeature>,

    /// Features ignorées (sans nom ou sans géométrie), non fatal
    pub errors: Vec<LawmapError>,
}

impl CountryCollection {
    /// Charge une FeatureCollection depuis du texte GeoJSON.
    ///
    /// # Errors
    ///
    /// Retourne `LawmapError::InvalidGeoJson` si le texte n'est pas du GeoJSON
    /// ou si ce n'est pas une FeatureCollection.
    pub fn from_geojson(text: &str) -> Result<Self, LawmapError> {
        let geojson =
            GeoJson::from_str(text).map_err(|e| LawmapError::invalid_geojson(e.to_string()))?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(LawmapError::invalid_geojson("expected a FeatureCollection"));
        };

        let mut result = Self::default();

        for (index, feature) in collection.features.into_iter().enumerate() {
            let name = feature
                .property(NAME_PROPERTY)
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let Some(name) = name else {
                warn!(index, "Feature without a name, skipped");
                result
                    .errors
                    .push(LawmapError::skipped_feature(index, "missing name property"));
                continue;
            };

            let Some(geometry) = feature.geometry else {
                warn!(index, name = %name, "Feature without geometry, skipped");
                result
                    .errors
                    .push(LawmapError::skipped_feature(index, "missing geometry"));
                continue;
            };

            result.features.push(CountryFeature {
                id: feature.id,
                name,
                geometry: geometry.value,
            });
        }

        Ok(result)
    }

    /// Recherche un pays par son nom d'affichage (comparaison exacte)
    pub fn find(&self, name: &str) -> Option<&CountryFeature> {
        self.features.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
